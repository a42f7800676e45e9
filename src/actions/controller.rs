//! Start/stop action controller.
//!
//! Drives the confirm, pending and completion flow for the unit's start and
//! stop actions and owns the resulting [`ActionStatus`].

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::backend::UnitBackend;
use super::status::{ActionKind, ActionOutcome, ActionStatus, RequestOutcome, StatusUpdate};
use crate::callback::CallbackHandle;
use crate::config::UnitDetailConfig;
use crate::error::{Error, Result};
use crate::interaction::{
    ConfirmationDialog, ConfirmationPrompt, DialogAction, DialogOption, Notification, Notifier,
    OptionStyle,
};

/// Build the confirmation prompt shown before `action`.
pub fn confirmation_prompt(action: ActionKind) -> ConfirmationPrompt {
    let confirm_style = match action {
        ActionKind::Start => OptionStyle::Default,
        ActionKind::Stop => OptionStyle::Destructive,
    };

    ConfirmationPrompt {
        title: format!("{} System", action.label()),
        message: format!("Are you sure you want to {} the system?", action),
        options: vec![
            DialogOption::cancel("Cancel"),
            DialogOption::confirm(action.label(), confirm_style),
        ],
    }
}

/// Notification shown when `outcome` is reached.
pub fn completion_notification(outcome: &ActionOutcome) -> Notification {
    match outcome {
        ActionOutcome::Completed(ActionKind::Start) => {
            Notification::success("System started successfully")
        }
        ActionOutcome::Completed(ActionKind::Stop) => {
            Notification::success("System stopped successfully")
        }
        ActionOutcome::Failed { action, reason } => Notification::error(
            Error::ActionFailed {
                action: *action,
                reason: reason.clone(),
            }
            .to_string(),
        ),
    }
}

/// Feed every update from `rx` to `callback` until the channel closes.
///
/// A lagging receiver skips the overwritten updates and keeps going.
async fn forward_updates<T, F>(mut rx: broadcast::Receiver<T>, callback: F)
where
    T: Clone,
    F: Fn(&T),
{
    loop {
        match rx.recv().await {
            Ok(update) => callback(&update),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("Status callback lagged, skipped {} update(s)", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Controller for the unit's start and stop actions.
///
/// Completion tasks are tied to the controller: [`shutdown`](Self::shutdown)
/// or dropping the controller aborts them before they touch the status.
pub struct ActionStatusController {
    /// Pending flags and unit status.
    status: Arc<RwLock<ActionStatus>>,
    /// Device seam.
    backend: Arc<dyn UnitBackend>,
    /// Confirmation prompts.
    dialog: Arc<dyn ConfirmationDialog>,
    /// Completion notifications.
    notifier: Arc<dyn Notifier>,
    /// Status update channel.
    status_tx: broadcast::Sender<StatusUpdate>,
    /// In-flight completion tasks.
    completions: Mutex<HashMap<ActionKind, JoinHandle<()>>>,
    /// Set once the owning screen is torn down.
    disposed: AtomicBool,
    /// Callback ID counter.
    callback_counter: AtomicU64,
}

impl ActionStatusController {
    /// Create a controller in the initial state (idle, nothing pending).
    pub fn new(
        backend: Arc<dyn UnitBackend>,
        dialog: Arc<dyn ConfirmationDialog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_capacity(
            backend,
            dialog,
            notifier,
            UnitDetailConfig::DEFAULT_EVENT_CAPACITY,
        )
    }

    /// Create a controller whose status channel holds `capacity` updates.
    pub fn with_capacity(
        backend: Arc<dyn UnitBackend>,
        dialog: Arc<dyn ConfirmationDialog>,
        notifier: Arc<dyn Notifier>,
        capacity: usize,
    ) -> Self {
        let (status_tx, _) = broadcast::channel(capacity.max(1));

        Self {
            status: Arc::new(RwLock::new(ActionStatus::default())),
            backend,
            dialog,
            notifier,
            status_tx,
            completions: Mutex::new(HashMap::new()),
            disposed: AtomicBool::new(false),
            callback_counter: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> ActionStatus {
        *self.status.read()
    }

    /// Check if a start request would take effect.
    pub fn can_start(&self) -> bool {
        !self.is_disposed() && self.status.read().can_start()
    }

    /// Check if a stop request would take effect.
    pub fn can_stop(&self) -> bool {
        !self.is_disposed() && self.status.read().can_stop()
    }

    /// Check if the controller has been shut down.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Ask the user to confirm starting the unit, then start it.
    ///
    /// Returns once the prompt is answered. Completion happens in the
    /// background and is reported through status updates and a notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disposed`] if the controller was shut down before or
    /// while the prompt was shown.
    pub async fn request_start(&self) -> Result<RequestOutcome> {
        self.request(ActionKind::Start).await
    }

    /// Ask the user to confirm stopping the unit, then stop it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disposed`] if the controller was shut down before or
    /// while the prompt was shown.
    pub async fn request_stop(&self) -> Result<RequestOutcome> {
        self.request(ActionKind::Stop).await
    }

    async fn request(&self, action: ActionKind) -> Result<RequestOutcome> {
        if self.is_disposed() {
            return Err(Error::Disposed);
        }

        if let Some(reason) = self.status.read().check(action) {
            debug!("Ignoring {} request: {:?}", action, reason);
            return Ok(RequestOutcome::Rejected(reason));
        }

        match self.dialog.confirm(confirmation_prompt(action)).await {
            Some(DialogAction::Confirm) => {}
            choice => {
                debug!("{} request not confirmed: {:?}", action, choice);
                return Ok(RequestOutcome::Cancelled);
            }
        }

        let mut completions = self.completions.lock();
        if self.is_disposed() {
            return Err(Error::Disposed);
        }

        // The status may have moved while the prompt was open.
        let status = {
            let mut status = self.status.write();
            if let Some(reason) = status.check(action) {
                debug!("Dropping confirmed {} request: {:?}", action, reason);
                return Ok(RequestOutcome::Rejected(reason));
            }
            status.set_pending(action, true);
            *status
        };

        info!("{} confirmed, waiting for unit", action);
        let _ = self.status_tx.send(StatusUpdate::now(status, None));

        let handle = tokio::spawn(Self::complete(
            action,
            self.backend.clone(),
            self.status.clone(),
            self.status_tx.clone(),
            self.notifier.clone(),
        ));
        completions.retain(|_, handle| !handle.is_finished());
        completions.insert(action, handle);

        Ok(RequestOutcome::Scheduled)
    }

    /// Wait for the backend and apply the outcome of `action`.
    async fn complete(
        action: ActionKind,
        backend: Arc<dyn UnitBackend>,
        status: Arc<RwLock<ActionStatus>>,
        status_tx: broadcast::Sender<StatusUpdate>,
        notifier: Arc<dyn Notifier>,
    ) {
        let result = match action {
            ActionKind::Start => backend.start().await,
            ActionKind::Stop => backend.stop().await,
        };

        let (snapshot, outcome) = {
            let mut status = status.write();
            status.set_pending(action, false);

            let outcome = match result {
                Ok(()) => {
                    if let Some(next) = status.unit_status.after(action) {
                        debug!("Unit status {} -> {}", status.unit_status, next);
                        status.unit_status = next;
                    }
                    ActionOutcome::Completed(action)
                }
                Err(Error::ActionFailed { reason, .. }) => ActionOutcome::Failed { action, reason },
                Err(e) => ActionOutcome::Failed {
                    action,
                    reason: e.to_string(),
                },
            };

            (*status, outcome)
        };

        match &outcome {
            ActionOutcome::Completed(_) => info!("{} completed: unit {}", action, snapshot.unit_status),
            ActionOutcome::Failed { reason, .. } => warn!("{} failed: {}", action, reason),
        }

        notifier.notify(completion_notification(&outcome));
        let _ = status_tx.send(StatusUpdate::now(snapshot, Some(outcome)));
    }

    /// Subscribe to status updates.
    pub fn subscribe(&self) -> broadcast::Receiver<StatusUpdate> {
        self.status_tx.subscribe()
    }

    /// Register a callback for status updates.
    pub fn on_status_changed<F>(&self, callback: F) -> CallbackHandle
    where
        F: Fn(&StatusUpdate) + Send + Sync + 'static,
    {
        let callback_id = self.callback_counter.fetch_add(1, Ordering::SeqCst);
        let rx = self.status_tx.subscribe();
        let handle = tokio::spawn(forward_updates(rx, callback));

        CallbackHandle::new(callback_id, move || {
            handle.abort();
        })
    }

    /// Tear the controller down with its screen.
    ///
    /// Aborts in-flight completions and waits for them to finish. Later
    /// requests fail with [`Error::Disposed`].
    pub async fn shutdown(&self) {
        let handles: Vec<_> = {
            let mut completions = self.completions.lock();
            if self.disposed.swap(true, Ordering::SeqCst) {
                return;
            }
            completions.drain().map(|(_, handle)| handle).collect()
        };

        info!(
            "Shutting down action controller ({} completion(s) in flight)",
            handles.iter().filter(|h| !h.is_finished()).count()
        );

        for handle in &handles {
            handle.abort();
        }
        futures::future::join_all(handles).await;
    }
}

impl Drop for ActionStatusController {
    fn drop(&mut self) {
        self.disposed.store(true, Ordering::SeqCst);
        for (_, handle) in self.completions.get_mut().drain() {
            handle.abort();
        }
    }
}
