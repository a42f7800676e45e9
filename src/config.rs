//! Screen configuration.

use std::time::Duration;

use crate::accordion::{check_sections, default_sections, Section};
use crate::actions::SimulatedUnit;
use crate::error::{Error, Result};

/// Configuration for a unit detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDetailConfig {
    /// Simulated start duration.
    pub start_delay: Duration,
    /// Simulated stop duration.
    pub stop_delay: Duration,
    /// Capacity of the status update channel.
    pub event_capacity: usize,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl UnitDetailConfig {
    /// Default status channel capacity.
    pub const DEFAULT_EVENT_CAPACITY: usize = 16;

    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated start duration.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Set the simulated stop duration.
    pub fn with_stop_delay(mut self, delay: Duration) -> Self {
        self.stop_delay = delay;
        self
    }

    /// Set the status channel capacity.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Replace the section list.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Check the configuration for values the screen cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == 0 {
            return Err(Error::InvalidParameter {
                name: "event_capacity".to_string(),
                value: self.event_capacity.to_string(),
            });
        }

        check_sections(&self.sections)
    }

    /// Build the simulated backend described by this configuration.
    pub fn simulated_unit(&self) -> SimulatedUnit {
        SimulatedUnit::new(self.start_delay, self.stop_delay)
    }
}

impl Default for UnitDetailConfig {
    fn default() -> Self {
        Self {
            start_delay: SimulatedUnit::DEFAULT_DELAY,
            stop_delay: SimulatedUnit::DEFAULT_DELAY,
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
            sections: default_sections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::SectionId;
    use crate::actions::ActionKind;

    #[test]
    fn test_default_config_is_valid() {
        let config = UnitDetailConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_delay, Duration::from_secs(2));
        assert_eq!(config.sections.len(), 6);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = UnitDetailConfig::new().with_event_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { ref name, .. }) if name == "event_capacity"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_sections() {
        let config = UnitDetailConfig::new().with_sections(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_sections() {
        let config = UnitDetailConfig::new().with_sections(vec![
            Section::new(SectionId::Battery, true),
            Section::new(SectionId::Battery, false),
        ]);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { ref value, .. }) if value == "duplicate id battery"
        ));
    }

    #[test]
    fn test_simulated_unit_uses_delays() {
        let unit = UnitDetailConfig::new()
            .with_start_delay(Duration::from_millis(10))
            .with_stop_delay(Duration::from_millis(20))
            .simulated_unit();
        assert_eq!(unit.delay(ActionKind::Start), Duration::from_millis(10));
        assert_eq!(unit.delay(ActionKind::Stop), Duration::from_millis(20));
    }
}
