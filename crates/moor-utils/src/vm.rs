//! Small VM-facing helpers: state predicates and instance identifiers.

use uuid::Uuid;

/// Lifecycle state of a managed instance as reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    /// Instance is off
    Off,
    /// Instance is stopped
    Stopped,
    /// Instance is booting
    Starting,
    /// Instance is rebooting
    Restarting,
    /// Instance is running
    Running,
    /// Instance is running with a shutdown scheduled
    DelayedShutdown,
    /// Instance is being suspended
    Suspending,
    /// Instance is suspended
    Suspended,
    /// Backend could not determine the state
    Unknown,
}

impl std::fmt::Display for VmState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VmState::Off => write!(f, "off"),
            VmState::Stopped => write!(f, "stopped"),
            VmState::Starting => write!(f, "starting"),
            VmState::Restarting => write!(f, "restarting"),
            VmState::Running => write!(f, "running"),
            VmState::DelayedShutdown => write!(f, "delayed shutdown"),
            VmState::Suspending => write!(f, "suspending"),
            VmState::Suspended => write!(f, "suspended"),
            VmState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Check whether an instance in `state` is up and reachable.
pub fn is_running(state: VmState) -> bool {
    matches!(state, VmState::Running | VmState::DelayedShutdown)
}

/// Generate a random instance identifier in hyphenated form, without braces.
pub fn make_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
