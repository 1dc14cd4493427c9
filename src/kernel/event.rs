use serde::{Deserialize, Serialize};

/// Operator triggers delivered to the reactor between ticks.
///
/// Each event is consumed by exactly one round. Both variants run the reset
/// protocol; they are kept apart so logs show which control fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// "Set Launch Site": re-zero every channel at the current position.
    SetLaunchSite,
    /// "ABORT - Reset".
    Abort,
}

impl ControlEvent {
    /// Parses an operator console command.
    pub fn from_command(command: &str) -> Option<Self> {
        match command.trim().to_ascii_lowercase().as_str() {
            "launch" | "set" | "setlaunch" => Some(ControlEvent::SetLaunchSite),
            "abort" | "reset" => Some(ControlEvent::Abort),
            _ => None,
        }
    }
}
