//! Unit backend.
//!
//! The seam between the action controller and whatever actually starts or
//! stops the unit.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::status::ActionKind;
use crate::error::Result;

/// Performs start and stop on the unit.
///
/// Returning an error leaves the unit status unchanged and surfaces an error
/// notification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitBackend: Send + Sync {
    /// Start the unit.
    async fn start(&self) -> Result<()>;

    /// Stop the unit.
    async fn stop(&self) -> Result<()>;
}

/// Backend that waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedUnit {
    start_delay: Duration,
    stop_delay: Duration,
}

impl SimulatedUnit {
    /// Default delay for both actions (2 seconds).
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Create a simulated unit with the given delays.
    pub fn new(start_delay: Duration, stop_delay: Duration) -> Self {
        Self {
            start_delay,
            stop_delay,
        }
    }

    /// Delay applied to `action`.
    pub fn delay(&self, action: ActionKind) -> Duration {
        match action {
            ActionKind::Start => self.start_delay,
            ActionKind::Stop => self.stop_delay,
        }
    }

    async fn simulate(&self, action: ActionKind) -> Result<()> {
        let delay = self.delay(action);
        debug!("Simulating {} for {:?}", action, delay);
        tokio::time::sleep(delay).await;
        Ok(())
    }
}

impl Default for SimulatedUnit {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY, Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl UnitBackend for SimulatedUnit {
    async fn start(&self) -> Result<()> {
        self.simulate(ActionKind::Start).await
    }

    async fn stop(&self) -> Result<()> {
        self.simulate(ActionKind::Stop).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;
    use tokio_test::assert_ok;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_start_waits_delay() {
        let unit = SimulatedUnit::new(Duration::from_millis(1500), Duration::from_millis(500));
        let began = Instant::now();

        assert_ok!(unit.start().await);
        assert!(began.elapsed() >= Duration::from_millis(1500));

        let began = Instant::now();
        assert_ok!(unit.stop().await);
        let elapsed = began.elapsed();
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[test]
    fn test_default_delay() {
        let unit = SimulatedUnit::default();
        assert_eq!(unit.delay(ActionKind::Start), Duration::from_secs(2));
        assert_eq!(unit.delay(ActionKind::Stop), Duration::from_secs(2));
    }
}
