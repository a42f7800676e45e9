//! Navigation collaborator.

/// Handle on the host navigation stack.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Return to the previous screen.
    fn go_back(&self);
}
