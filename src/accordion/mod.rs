//! Single-selection accordion.
//!
//! Tracks which of the screen's sections is expanded. At most one section
//! is open at any time; selecting the open section again closes it.

pub mod section;

pub use section::{default_sections, Chevron, Section, SectionId};

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Check that `sections` is non-empty and has no repeated id.
pub fn check_sections(sections: &[Section]) -> Result<()> {
    if sections.is_empty() {
        return Err(Error::InvalidParameter {
            name: "sections".to_string(),
            value: "[]".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(section.id) {
            return Err(Error::InvalidParameter {
                name: "sections".to_string(),
                value: format!("duplicate id {}", section.id),
            });
        }
    }

    Ok(())
}

/// Accordion controller over a fixed, ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    /// Sections in display order.
    sections: Vec<Section>,
    /// Currently expanded section.
    expanded: Option<SectionId>,
}

impl Accordion {
    /// Create an accordion with every section collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `sections` is empty or contains
    /// the same id twice.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        check_sections(&sections)?;

        Ok(Self {
            sections,
            expanded: None,
        })
    }

    /// Expand `id`, or collapse it if it is already expanded.
    ///
    /// Any other expanded section is collapsed. Ids not present on this
    /// screen are ignored.
    pub fn toggle(&mut self, id: SectionId) {
        if self.section(id).is_none() {
            warn!("Ignoring toggle of section not on this screen: {}", id);
            return;
        }

        let previous = self.expanded;
        self.expanded = if previous == Some(id) { None } else { Some(id) };

        debug!(
            "Accordion toggled {}: {:?} -> {:?}",
            id, previous, self.expanded
        );
    }

    /// Collapse whatever is expanded.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// The currently expanded section id.
    pub fn expanded_id(&self) -> Option<SectionId> {
        self.expanded
    }

    /// The currently expanded section.
    pub fn expanded_section(&self) -> Option<&Section> {
        self.expanded.and_then(|id| self.section(id))
    }

    /// Check if `id` is expanded.
    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded == Some(id)
    }

    /// Chevron orientation for the header row of `id`.
    pub fn chevron(&self, id: SectionId) -> Chevron {
        if self.is_expanded(id) {
            Chevron::Up
        } else {
            Chevron::Down
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            expanded: None,
        }
    }
}
