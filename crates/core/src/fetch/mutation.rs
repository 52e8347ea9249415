//! One-shot mutation state.

/// Status of a one-shot write operation (cart edit, rating submission, order
/// creation, settings update).
///
/// Mutations never update an already-rendered snapshot; any refresh is the
/// caller's explicit re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl MutationState {
    /// Move to the pending state.
    pub fn begin(&mut self) {
        *self = Self::Pending;
    }

    /// Record a successful write.
    pub fn succeed(&mut self) {
        *self = Self::Succeeded;
    }

    /// Record a failed write with its user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    /// Apply a `Result` outcome in one step.
    pub fn apply<T>(&mut self, outcome: &Result<T, String>) {
        match outcome {
            Ok(_) => self.succeed(),
            Err(message) => *self = Self::Failed(message.clone()),
        }
    }

    /// Whether the write is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        *self == Self::Pending
    }

    /// Whether the write succeeded.
    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        *self == Self::Succeeded
    }

    /// The inline error message, if the write failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state = MutationState::default();
        assert_eq!(state, MutationState::Idle);

        state.begin();
        assert!(state.is_pending());

        state.succeed();
        assert!(state.is_succeeded());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_carries_message() {
        let mut state = MutationState::default();
        state.begin();
        state.fail("Could not add item to cart");
        assert_eq!(state.error(), Some("Could not add item to cart"));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_apply_result() {
        let mut state = MutationState::default();
        state.apply(&Ok::<_, String>(()));
        assert!(state.is_succeeded());

        state.apply::<()>(&Err("rejected".to_string()));
        assert_eq!(state.error(), Some("rejected"));
    }
}
