//! Start and stop actions.
//!
//! This module contains the action status model, the backend seam that
//! performs the actions and the controller that ties confirmation, pending
//! state and completion together.

pub mod backend;
pub mod controller;
pub mod status;

pub use backend::{SimulatedUnit, UnitBackend};
pub use controller::{completion_notification, confirmation_prompt, ActionStatusController};
pub use status::{
    ActionKind, ActionOutcome, ActionStatus, RejectReason, RequestOutcome, StatusUpdate,
    UnitStatus,
};
