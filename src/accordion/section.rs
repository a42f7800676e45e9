//! Section data structures.
//!
//! Contains the fixed set of expandable sections shown on the unit detail
//! screen.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of an expandable section.
///
/// Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SectionId {
    /// General unit information.
    General,
    /// Details of the most recent call.
    LastCall,
    /// Installation site and coordinates.
    Location,
    /// Battery and power supply.
    Battery,
    /// Network and signal information.
    Connectivity,
    /// Service history.
    Maintenance,
}

impl SectionId {
    /// All section identifiers in display order.
    pub const ALL: [SectionId; 6] = [
        Self::General,
        Self::LastCall,
        Self::Location,
        Self::Battery,
        Self::Connectivity,
        Self::Maintenance,
    ];

    /// The camelCase key of this section.
    pub fn key(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::LastCall => "lastCall",
            Self::Location => "location",
            Self::Battery => "battery",
            Self::Connectivity => "connectivity",
            Self::Maintenance => "maintenance",
        }
    }

    /// Default display title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::General => "General Information",
            Self::LastCall => "Last Call",
            Self::Location => "Location",
            Self::Battery => "Battery",
            Self::Connectivity => "Connectivity",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Default icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::General => "information-circle",
            Self::LastCall => "call",
            Self::Location => "location",
            Self::Battery => "battery-half",
            Self::Connectivity => "wifi",
            Self::Maintenance => "construct",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| Error::UnknownSection { key: s.to_string() })
    }
}

/// One expandable panel on the unit detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Section identifier.
    pub id: SectionId,
    /// Title shown in the section header row.
    pub title: String,
    /// Icon name; rendering is left to the UI layer.
    pub icon: String,
    /// Whether the section has real backing data.
    pub has_data: bool,
}

impl Section {
    /// Create a section with the default title and icon for `id`.
    pub fn new(id: SectionId, has_data: bool) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            icon: id.icon().to_string(),
            has_data,
        }
    }

    /// Override the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// The default section list: every section, with data behind `General`
/// and `LastCall` only.
pub fn default_sections() -> Vec<Section> {
    SectionId::ALL
        .into_iter()
        .map(|id| Section::new(id, matches!(id, SectionId::General | SectionId::LastCall)))
        .collect()
}

/// Orientation of the chevron drawn in a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Chevron {
    /// Section is collapsed.
    #[default]
    Down,
    /// Section is expanded.
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_parse() {
        assert_eq!("general".parse::<SectionId>().unwrap(), SectionId::General);
        assert_eq!("lastCall".parse::<SectionId>().unwrap(), SectionId::LastCall);
        assert!(matches!(
            "last_call".parse::<SectionId>(),
            Err(Error::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_section_id_display_matches_key() {
        for id in SectionId::ALL {
            assert_eq!(id.to_string(), id.key());
            assert_eq!(id.key().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn test_default_sections() {
        let sections = default_sections();
        assert_eq!(sections.len(), SectionId::ALL.len());
        assert!(sections[0].has_data);
        assert!(sections[1].has_data);
        assert!(sections[2..].iter().all(|s| !s.has_data));
    }

    #[test]
    fn test_section_overrides() {
        let section = Section::new(SectionId::Battery, true)
            .with_title("Power")
            .with_icon("flash");
        assert_eq!(section.title, "Power");
        assert_eq!(section.icon, "flash");
        assert!(section.has_data);
    }
}
