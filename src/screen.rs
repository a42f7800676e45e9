//! Unit detail screen.
//!
//! Composes the accordion and the action controller. The two share nothing
//! but the screen's lifetime.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use crate::accordion::{Accordion, SectionId};
use crate::actions::{ActionStatus, ActionStatusController, RequestOutcome, UnitBackend};
use crate::config::UnitDetailConfig;
use crate::error::Result;
use crate::interaction::{ConfirmationDialog, Navigator, Notifier};
use crate::view::{render, UnitDetailView};

/// State owner for one unit detail screen instance.
pub struct UnitDetailScreen {
    /// Expanded section.
    accordion: RwLock<Accordion>,
    /// Start/stop actions.
    actions: Arc<ActionStatusController>,
    /// Host navigation stack.
    navigator: Arc<dyn Navigator>,
}

impl UnitDetailScreen {
    /// Create a screen whose actions run against a [`SimulatedUnit`](crate::SimulatedUnit).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: UnitDetailConfig,
        dialog: Arc<dyn ConfirmationDialog>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let backend = Arc::new(config.simulated_unit());
        Self::with_backend(config, backend, dialog, notifier, navigator)
    }

    /// Create a screen with a custom unit backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_backend(
        config: UnitDetailConfig,
        backend: Arc<dyn UnitBackend>,
        dialog: Arc<dyn ConfirmationDialog>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        config.validate()?;

        let accordion = Accordion::new(config.sections)?;
        let actions =
            ActionStatusController::with_capacity(backend, dialog, notifier, config.event_capacity);

        Ok(Self {
            accordion: RwLock::new(accordion),
            actions: Arc::new(actions),
            navigator,
        })
    }

    /// Expand or collapse a section.
    pub fn toggle_section(&self, id: SectionId) {
        self.accordion.write().toggle(id);
    }

    /// Currently expanded section.
    pub fn expanded_section(&self) -> Option<SectionId> {
        self.accordion.read().expanded_id()
    }

    /// Request a unit start. See [`ActionStatusController::request_start`].
    pub async fn request_start(&self) -> Result<RequestOutcome> {
        self.actions.request_start().await
    }

    /// Request a unit stop. See [`ActionStatusController::request_stop`].
    pub async fn request_stop(&self) -> Result<RequestOutcome> {
        self.actions.request_stop().await
    }

    /// Snapshot of the action status.
    pub fn action_status(&self) -> ActionStatus {
        self.actions.status()
    }

    /// The action controller, for subscribing to status updates.
    pub fn actions(&self) -> &Arc<ActionStatusController> {
        &self.actions
    }

    /// Render the current state.
    pub fn view(&self) -> UnitDetailView {
        let accordion = self.accordion.read();
        render(&accordion, &self.actions.status())
    }

    /// Handle the back button: tear down pending work and leave the screen.
    pub async fn go_back(&self) {
        info!("Leaving unit detail screen");

        self.accordion.write().collapse();
        self.actions.shutdown().await;
        self.navigator.go_back();
    }
}
