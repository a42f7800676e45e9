//! Error types for the unit-detail-core crate.

use thiserror::Error;

use crate::actions::ActionKind;

/// The main error type for this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The controller was shut down together with its screen.
    #[error("Controller has been disposed")]
    Disposed,

    /// The unit backend reported a failure while completing an action.
    #[error("Failed to {action} system: {reason}")]
    ActionFailed {
        /// The action that failed.
        action: ActionKind,
        /// Description of why the action failed.
        reason: String,
    },

    /// A section key did not match any known section.
    #[error("Unknown section: {key}")]
    UnknownSection {
        /// The key that was parsed.
        key: String,
    },

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// The name of the parameter.
        name: String,
        /// The invalid value that was provided.
        value: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
