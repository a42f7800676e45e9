//! Collaborators provided by the host UI.
//!
//! The core never draws anything itself. It asks the host to confirm
//! actions, show notifications and pop the navigation stack through the
//! traits in this module.

pub mod dialog;
pub mod navigation;
pub mod notification;

pub use dialog::{ConfirmationDialog, ConfirmationPrompt, DialogAction, DialogOption, OptionStyle};
pub use navigation::Navigator;
pub use notification::{Notification, NotificationKind, Notifier};
