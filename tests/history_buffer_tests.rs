use ground_control::kernel::history::{HistoryBuffer, MAX_LENGTH};

#[test]
fn test_append_until_capacity() {
    let mut buffer = HistoryBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.last(), None, "Empty buffer has no tail");

    for i in 0..MAX_LENGTH {
        buffer.append(i as f64);
        assert_eq!(buffer.len(), i + 1);
    }

    assert_eq!(buffer.len(), MAX_LENGTH);
    assert_eq!(buffer.last(), Some((MAX_LENGTH - 1) as f64));
}

#[test]
fn test_full_buffer_evicts_oldest() {
    let mut buffer = HistoryBuffer::with_capacity(5);
    for i in 0..5 {
        buffer.append(i);
    }

    // Full: next append drops the head
    buffer.append(5);
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.to_vec(), vec![1, 2, 3, 4, 5], "Keeps N-1 most recent plus new sample");

    for i in 6..50 {
        buffer.append(i);
        assert!(buffer.len() <= buffer.capacity(), "Never exceeds capacity");
    }
    assert_eq!(buffer.to_vec(), vec![45, 46, 47, 48, 49]);
}

#[test]
fn test_iteration_is_oldest_first() {
    let mut buffer = HistoryBuffer::with_capacity(3);
    buffer.append(10.0);
    buffer.append(20.0);
    buffer.append(30.0);
    buffer.append(40.0);

    let seen: Vec<f64> = buffer.iter().copied().collect();
    assert_eq!(seen, vec![20.0, 30.0, 40.0]);
    assert_eq!(seen, buffer.to_vec());
}

#[test]
fn test_clear_empties_buffer() {
    let mut buffer = HistoryBuffer::with_capacity(4);
    buffer.append(1.5);
    buffer.append(2.5);

    buffer.clear();
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.last(), None);
    assert_eq!(buffer.last().unwrap_or(0.0), 0.0, "Callers default to zero");

    buffer.append(3.5);
    assert_eq!(buffer.to_vec(), vec![3.5]);
}

#[test]
fn test_zero_capacity_still_holds_latest() {
    let mut buffer = HistoryBuffer::with_capacity(0);
    buffer.append(1);
    buffer.append(2);
    assert_eq!(buffer.capacity(), 1);
    assert_eq!(buffer.to_vec(), vec![2]);
}
