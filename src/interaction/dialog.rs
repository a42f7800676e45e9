//! Confirmation dialog collaborator.

use async_trait::async_trait;

/// Visual style of a dialog option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionStyle {
    /// Regular button.
    #[default]
    Default,
    /// Cancel button.
    Cancel,
    /// Button for an action with visible consequences.
    Destructive,
}

/// What selecting an option means to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogAction {
    /// Abandon the request.
    Cancel,
    /// Go ahead with the request.
    Confirm,
}

/// A single selectable option in a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogOption {
    /// Button label.
    pub label: String,
    /// Button style.
    pub style: OptionStyle,
    /// Action reported when the option is selected.
    pub action: DialogAction,
}

impl DialogOption {
    /// A cancel-styled option reporting [`DialogAction::Cancel`].
    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: OptionStyle::Cancel,
            action: DialogAction::Cancel,
        }
    }

    /// An option reporting [`DialogAction::Confirm`] with the given style.
    pub fn confirm(label: impl Into<String>, style: OptionStyle) -> Self {
        Self {
            label: label.into(),
            style,
            action: DialogAction::Confirm,
        }
    }
}

/// A confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfirmationPrompt {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Options in display order.
    pub options: Vec<DialogOption>,
}

impl ConfirmationPrompt {
    /// Find the option for `action`.
    pub fn option(&self, action: DialogAction) -> Option<&DialogOption> {
        self.options.iter().find(|o| o.action == action)
    }
}

/// Presents confirmation prompts to the user.
///
/// Implementations resolve with the action of the selected option, or
/// `None` if the prompt was dismissed without a selection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    /// Present `prompt` and wait for the user's choice.
    async fn confirm(&self, prompt: ConfirmationPrompt) -> Option<DialogAction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_option_lookup() {
        let prompt = ConfirmationPrompt {
            title: "Stop System".to_string(),
            message: "Sure?".to_string(),
            options: vec![
                DialogOption::cancel("Cancel"),
                DialogOption::confirm("Stop", OptionStyle::Destructive),
            ],
        };

        let confirm = prompt.option(DialogAction::Confirm).unwrap();
        assert_eq!(confirm.label, "Stop");
        assert_eq!(confirm.style, OptionStyle::Destructive);
        assert_eq!(
            prompt.option(DialogAction::Cancel).unwrap().style,
            OptionStyle::Cancel
        );
    }
}
