//! Action status data structures.

use chrono::{DateTime, Utc};
use std::fmt;

/// Operational status of the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitStatus {
    /// Never started since the screen opened.
    #[default]
    Idle,
    /// Unit is running.
    Running,
    /// Unit has been stopped.
    Stopped,
}

impl UnitStatus {
    /// Status reached when `action` completes, if the transition is allowed.
    ///
    /// Start leads to `Running` from `Idle` or `Stopped`; stop leads to
    /// `Stopped` from `Running`. Nothing leads back to `Idle`.
    pub fn after(&self, action: ActionKind) -> Option<UnitStatus> {
        match (self, action) {
            (Self::Idle | Self::Stopped, ActionKind::Start) => Some(Self::Running),
            (Self::Running, ActionKind::Stop) => Some(Self::Stopped),
            _ => None,
        }
    }

    /// Get a human-readable name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two unit actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Start the unit.
    Start,
    /// Stop the unit.
    Stop,
}

impl ActionKind {
    /// The opposing action.
    pub fn other(&self) -> ActionKind {
        match self {
            Self::Start => Self::Stop,
            Self::Stop => Self::Start,
        }
    }

    /// Capitalised verb used in prompts and buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Stop => f.write_str("stop"),
        }
    }
}

/// Pending flags and unit status for the start/stop actions.
///
/// `start_pending` and `stop_pending` are never both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionStatus {
    /// A confirmed start is waiting for completion.
    pub start_pending: bool,
    /// A confirmed stop is waiting for completion.
    pub stop_pending: bool,
    /// Current unit status.
    pub unit_status: UnitStatus,
}

impl ActionStatus {
    /// Pending flag for `action`.
    pub fn is_pending(&self, action: ActionKind) -> bool {
        match action {
            ActionKind::Start => self.start_pending,
            ActionKind::Stop => self.stop_pending,
        }
    }

    /// Check if either action is in flight.
    pub fn any_pending(&self) -> bool {
        self.start_pending || self.stop_pending
    }

    /// Why `action` cannot be requested right now, if it cannot.
    pub fn check(&self, action: ActionKind) -> Option<RejectReason> {
        if self.is_pending(action) {
            return Some(RejectReason::AlreadyPending);
        }
        if self.is_pending(action.other()) {
            return Some(RejectReason::OtherPending(action.other()));
        }
        if self.unit_status.after(action).is_none() {
            return Some(RejectReason::InvalidStatus(self.unit_status));
        }
        None
    }

    /// Check if a start request would take effect.
    pub fn can_start(&self) -> bool {
        self.check(ActionKind::Start).is_none()
    }

    /// Check if a stop request would take effect.
    pub fn can_stop(&self) -> bool {
        self.check(ActionKind::Stop).is_none()
    }

    pub(crate) fn set_pending(&mut self, action: ActionKind, pending: bool) {
        match action {
            ActionKind::Start => self.start_pending = pending,
            ActionKind::Stop => self.stop_pending = pending,
        }
    }
}

/// Why a request was refused without prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The same action is already in flight.
    AlreadyPending,
    /// The opposing action is in flight.
    OtherPending(ActionKind),
    /// The unit is already in the state the action leads to.
    InvalidStatus(UnitStatus),
}

/// Result of a start or stop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Preconditions failed; nothing changed.
    Rejected(RejectReason),
    /// The user cancelled or dismissed the prompt; nothing changed.
    Cancelled,
    /// The action is pending and its completion has been scheduled.
    Scheduled,
}

impl RequestOutcome {
    /// Check if the request led to a scheduled action.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled)
    }
}

/// How a scheduled action finished.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    /// The backend completed the action.
    Completed(ActionKind),
    /// The backend rejected the action.
    Failed {
        /// The failed action.
        action: ActionKind,
        /// Failure description.
        reason: String,
    },
}

/// Event published after every status change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusUpdate {
    /// Status after the change.
    pub status: ActionStatus,
    /// Set when the change is a completion.
    pub outcome: Option<ActionOutcome>,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
}

impl StatusUpdate {
    pub(crate) fn now(status: ActionStatus, outcome: Option<ActionOutcome>) -> Self {
        Self {
            status,
            outcome,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_status_transitions() {
        assert_eq!(
            UnitStatus::Idle.after(ActionKind::Start),
            Some(UnitStatus::Running)
        );
        assert_eq!(
            UnitStatus::Running.after(ActionKind::Stop),
            Some(UnitStatus::Stopped)
        );
        assert_eq!(
            UnitStatus::Stopped.after(ActionKind::Start),
            Some(UnitStatus::Running)
        );
        assert_eq!(UnitStatus::Idle.after(ActionKind::Stop), None);
        assert_eq!(UnitStatus::Running.after(ActionKind::Start), None);
        assert_eq!(UnitStatus::Stopped.after(ActionKind::Stop), None);
    }

    #[test]
    fn test_initial_status() {
        let status = ActionStatus::default();
        assert_eq!(status.unit_status, UnitStatus::Idle);
        assert!(!status.any_pending());
        assert!(status.can_start());
        assert!(!status.can_stop());
    }

    #[test]
    fn test_check_pending() {
        let status = ActionStatus {
            start_pending: true,
            stop_pending: false,
            unit_status: UnitStatus::Idle,
        };
        assert_eq!(
            status.check(ActionKind::Start),
            Some(RejectReason::AlreadyPending)
        );

        let status = ActionStatus {
            start_pending: true,
            stop_pending: false,
            unit_status: UnitStatus::Running,
        };
        assert_eq!(
            status.check(ActionKind::Stop),
            Some(RejectReason::OtherPending(ActionKind::Start))
        );
    }

    #[test]
    fn test_check_status() {
        let running = ActionStatus {
            unit_status: UnitStatus::Running,
            ..Default::default()
        };
        assert_eq!(
            running.check(ActionKind::Start),
            Some(RejectReason::InvalidStatus(UnitStatus::Running))
        );
        assert!(running.can_stop());
    }

    #[test]
    fn test_action_kind_display() {
        assert_eq!(ActionKind::Start.to_string(), "start");
        assert_eq!(ActionKind::Stop.label(), "Stop");
        assert_eq!(ActionKind::Start.other(), ActionKind::Stop);
    }
}
