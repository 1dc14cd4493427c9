use std::collections::VecDeque;

/// Samples retained per channel.
pub const MAX_LENGTH: usize = 100;

/// Fixed-capacity, oldest-first sample history.
///
/// Appending to a full buffer evicts the head first, so the buffer always holds
/// the `capacity` most recent samples in arrival order.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> HistoryBuffer<T> {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LENGTH)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // A zero-capacity history would silently drop every sample.
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, value: T) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Most recent sample, if any.
    pub fn last(&self) -> Option<T> {
        self.buffer.back().copied()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buffer.iter()
    }

    /// Oldest-first copy of the retained samples.
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.iter().copied().collect()
    }
}

impl<T: Copy> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
