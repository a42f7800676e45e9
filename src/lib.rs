//! # unit-detail-core
//!
//! State core for a unit detail screen: a single-selection accordion over
//! the screen's information sections, and confirmed start/stop actions
//! that drive button and status-badge state.
//!
//! The crate draws nothing. The host UI supplies a [`ConfirmationDialog`],
//! a [`Notifier`] and a [`Navigator`], and renders the [`UnitDetailView`]
//! returned by [`UnitDetailScreen::view`].
//!
//! ## Features
//!
//! - **Accordion**: at most one section expanded; selecting it again collapses it
//! - **Start/Stop Actions**: confirmation, pending flags and delayed completion
//! - **Mutual Exclusion**: start and stop can never be in flight together
//! - **Lifetime-bound Completions**: leaving the screen cancels pending work
//! - **Status Events**: broadcast channel and callbacks for every status change
//! - **Backend Seam**: swap the simulated unit for a real one via [`UnitBackend`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use unit_detail_core::{
//!     ConfirmationDialog, ConfirmationPrompt, DialogAction, Navigator, Notification, Notifier,
//!     Result, SectionId, UnitDetailConfig, UnitDetailScreen,
//! };
//!
//! struct AlwaysYes;
//!
//! #[async_trait]
//! impl ConfirmationDialog for AlwaysYes {
//!     async fn confirm(&self, _prompt: ConfirmationPrompt) -> Option<DialogAction> {
//!         Some(DialogAction::Confirm)
//!     }
//! }
//!
//! struct Console;
//!
//! impl Notifier for Console {
//!     fn notify(&self, notification: Notification) {
//!         println!("{}: {}", notification.title, notification.message);
//!     }
//! }
//!
//! impl Navigator for Console {
//!     fn go_back(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let screen = UnitDetailScreen::new(
//!         UnitDetailConfig::default(),
//!         Arc::new(AlwaysYes),
//!         Arc::new(Console),
//!         Arc::new(Console),
//!     )?;
//!
//!     screen.toggle_section(SectionId::General);
//!     screen.request_start().await?;
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!     println!("Unit is {}", screen.view().badge.label);
//!
//!     screen.go_back().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod accordion;
pub mod actions;
pub mod callback;
pub mod config;
pub mod error;
pub mod interaction;
pub mod screen;
pub mod view;

// Re-exports for convenience
pub use accordion::{Accordion, Chevron, Section, SectionId};
pub use actions::{
    ActionKind, ActionOutcome, ActionStatus, ActionStatusController, RejectReason,
    RequestOutcome, SimulatedUnit, StatusUpdate, UnitBackend, UnitStatus,
};
pub use callback::CallbackHandle;
pub use config::UnitDetailConfig;
pub use error::{Error, Result};
pub use interaction::{
    ConfirmationDialog, ConfirmationPrompt, DialogAction, DialogOption, Navigator, Notification,
    NotificationKind, Notifier, OptionStyle,
};
pub use screen::UnitDetailScreen;
pub use view::{render, BadgeTone, ButtonView, PanelView, SectionRow, StatusBadge, UnitDetailView};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that key types are exported
        let _ = std::any::TypeId::of::<UnitDetailScreen>();
        let _ = std::any::TypeId::of::<Accordion>();
        let _ = std::any::TypeId::of::<ActionStatusController>();
        let _ = std::any::TypeId::of::<Error>();
        let _ = std::any::TypeId::of::<UnitDetailView>();
        let _ = std::any::TypeId::of::<StatusUpdate>();
    }
}
