//! View model for the unit detail screen.
//!
//! [`render`] is a pure function of the accordion and action status. The
//! host UI draws whatever it returns.

use crate::accordion::{Accordion, Chevron, SectionId};
use crate::actions::{ActionKind, ActionStatus, UnitStatus};

/// Placeholder text for panels without backing data.
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// Header row of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRow {
    /// Section identifier.
    pub id: SectionId,
    /// Row title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Chevron orientation.
    pub chevron: Chevron,
    /// Whether this row's panel is the visible one.
    pub expanded: bool,
}

/// The single visible content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelView {
    /// Section the panel belongs to.
    pub id: SectionId,
    /// Panel title.
    pub title: String,
    /// Whether the section has real data to show.
    pub has_data: bool,
}

impl PanelView {
    /// Text to show in place of content, if the section has none.
    pub fn placeholder(&self) -> Option<&'static str> {
        (!self.has_data).then_some(NO_DATA_PLACEHOLDER)
    }
}

/// An action button.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonView {
    /// Button label.
    pub label: String,
    /// Whether the button accepts presses.
    pub enabled: bool,
    /// Whether the button's action is in flight.
    pub busy: bool,
}

/// Colour family of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BadgeTone {
    /// Idle.
    Neutral,
    /// Running.
    Positive,
    /// Stopped.
    Negative,
}

/// Unit status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusBadge {
    /// Badge text.
    pub label: String,
    /// Badge colour family.
    pub tone: BadgeTone,
}

impl From<UnitStatus> for StatusBadge {
    fn from(status: UnitStatus) -> Self {
        let tone = match status {
            UnitStatus::Idle => BadgeTone::Neutral,
            UnitStatus::Running => BadgeTone::Positive,
            UnitStatus::Stopped => BadgeTone::Negative,
        };

        Self {
            label: status.name().to_string(),
            tone,
        }
    }
}

/// Everything the unit detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDetailView {
    /// Section header rows in display order.
    pub rows: Vec<SectionRow>,
    /// The visible panel, if any.
    pub panel: Option<PanelView>,
    /// Start button.
    pub start_button: ButtonView,
    /// Stop button.
    pub stop_button: ButtonView,
    /// Unit status badge.
    pub badge: StatusBadge,
}

/// Render the screen from its state.
pub fn render(accordion: &Accordion, status: &ActionStatus) -> UnitDetailView {
    let rows = accordion
        .sections()
        .iter()
        .map(|section| SectionRow {
            id: section.id,
            title: section.title.clone(),
            icon: section.icon.clone(),
            chevron: accordion.chevron(section.id),
            expanded: accordion.is_expanded(section.id),
        })
        .collect();

    let panel = accordion.expanded_section().map(|section| PanelView {
        id: section.id,
        title: section.title.clone(),
        has_data: section.has_data,
    });

    UnitDetailView {
        rows,
        panel,
        start_button: button(status, ActionKind::Start),
        stop_button: button(status, ActionKind::Stop),
        badge: status.unit_status.into(),
    }
}

fn button(status: &ActionStatus, action: ActionKind) -> ButtonView {
    let busy = status.is_pending(action);
    let label = match (action, busy) {
        (ActionKind::Start, true) => "Starting...",
        (ActionKind::Stop, true) => "Stopping...",
        (ActionKind::Start, false) => "Start System",
        (ActionKind::Stop, false) => "Stop System",
    };

    ButtonView {
        label: label.to_string(),
        enabled: status.check(action).is_none(),
        busy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::Section;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_view() {
        let accordion = Accordion::default();
        let view = render(&accordion, &ActionStatus::default());

        assert_eq!(view.rows.len(), SectionId::ALL.len());
        assert!(view.rows.iter().all(|r| r.chevron == Chevron::Down && !r.expanded));
        assert_eq!(view.panel, None);
        assert_eq!(
            view.start_button,
            ButtonView {
                label: "Start System".to_string(),
                enabled: true,
                busy: false,
            }
        );
        assert!(!view.stop_button.enabled);
        assert_eq!(
            view.badge,
            StatusBadge {
                label: "Idle".to_string(),
                tone: BadgeTone::Neutral,
            }
        );
    }

    #[test]
    fn test_single_visible_panel() {
        let mut accordion = Accordion::default();
        accordion.toggle(SectionId::General);
        accordion.toggle(SectionId::LastCall);
        let view = render(&accordion, &ActionStatus::default());

        assert_eq!(
            view.panel,
            Some(PanelView {
                id: SectionId::LastCall,
                title: "Last Call".to_string(),
                has_data: true,
            })
        );
        let expanded: Vec<_> = view.rows.iter().filter(|r| r.expanded).map(|r| r.id).collect();
        assert_eq!(expanded, vec![SectionId::LastCall]);
        assert_eq!(view.rows[1].chevron, Chevron::Up);
    }

    #[test]
    fn test_placeholder_for_section_without_data() {
        let mut accordion = Accordion::new(vec![
            Section::new(SectionId::General, true),
            Section::new(SectionId::Battery, false),
        ])
        .unwrap();
        accordion.toggle(SectionId::Battery);

        let panel = render(&accordion, &ActionStatus::default()).panel.unwrap();
        assert_eq!(panel.placeholder(), Some(NO_DATA_PLACEHOLDER));
    }

    #[test]
    fn test_pending_start_buttons() {
        let status = ActionStatus {
            start_pending: true,
            stop_pending: false,
            unit_status: UnitStatus::Stopped,
        };
        let view = render(&Accordion::default(), &status);

        assert_eq!(view.start_button.label, "Starting...");
        assert!(view.start_button.busy);
        assert!(!view.start_button.enabled);
        assert!(!view.stop_button.enabled);
        assert_eq!(view.badge.tone, BadgeTone::Negative);
    }

    #[test]
    fn test_running_buttons() {
        let status = ActionStatus {
            unit_status: UnitStatus::Running,
            ..Default::default()
        };
        let view = render(&Accordion::default(), &status);

        assert!(!view.start_button.enabled);
        assert!(view.stop_button.enabled);
        assert_eq!(view.stop_button.label, "Stop System");
        assert_eq!(view.badge.label, "Running");
        assert_eq!(view.badge.tone, BadgeTone::Positive);
    }
}
