//! Single-resource controller.

use super::Ticket;

/// Error message used when the key parameter is absent.
pub const MISSING_KEY_MESSAGE: &str = "not found";

/// View state for a single fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ResourceState<T> {
    /// The entity, if the fetch succeeded.
    #[must_use]
    pub const fn entity(&self) -> Option<&T> {
        match self {
            Self::Ready(entity) => Some(entity),
            _ => None,
        }
    }

    /// The error message, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetches exactly one entity keyed by a route parameter.
///
/// An absent or empty key transitions directly to the failed state without
/// issuing a request. Changing the key bumps the generation so an in-flight
/// response for the old key is discarded when it lands.
#[derive(Debug, Clone)]
pub struct SingleController<T> {
    key: Option<String>,
    state: ResourceState<T>,
    generation: u64,
}

impl<T> Default for SingleController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SingleController<T> {
    /// Create an idle controller with no key.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            state: ResourceState::Idle,
            generation: 0,
        }
    }

    /// The current key, if one is set.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The current view state.
    #[must_use]
    pub const fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    /// Set (or change) the key and arm a fetch.
    ///
    /// Returns a ticket when a request should be issued; `None` means the key
    /// was absent/empty and the controller moved straight to the failed state
    /// with [`MISSING_KEY_MESSAGE`] - callers must not issue a request.
    pub fn set_key(&mut self, key: Option<&str>) -> Option<Ticket> {
        self.generation += 1;
        match key {
            Some(key) if !key.trim().is_empty() => {
                self.key = Some(key.to_string());
                self.state = ResourceState::Loading;
                Some(Ticket(self.generation))
            }
            _ => {
                self.key = None;
                self.state = ResourceState::Failed(MISSING_KEY_MESSAGE.to_string());
                None
            }
        }
    }

    /// Apply the outcome of the fetch armed by `set_key`.
    ///
    /// Success stores the entity and clears any error; failure stores the
    /// user-facing message and clears the entity. Returns `false` (and
    /// changes nothing) for a stale ticket.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(entity) => ResourceState::Ready(entity),
            Err(message) => ResourceState::Failed(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_without_request() {
        let mut controller = SingleController::<String>::new();
        assert!(controller.set_key(None).is_none());
        assert_eq!(controller.state().error(), Some(MISSING_KEY_MESSAGE));

        assert!(controller.set_key(Some("")).is_none());
        assert_eq!(controller.state().error(), Some(MISSING_KEY_MESSAGE));

        assert!(controller.set_key(Some("   ")).is_none());
        assert_eq!(controller.state().error(), Some(MISSING_KEY_MESSAGE));
    }

    #[test]
    fn test_success_stores_entity() {
        let mut controller = SingleController::new();
        let ticket = controller.set_key(Some("acme-store")).unwrap();
        assert_eq!(controller.state(), &ResourceState::Loading);

        assert!(controller.resolve(ticket, Ok("Acme".to_string())));
        assert_eq!(controller.state().entity(), Some(&"Acme".to_string()));
        assert_eq!(controller.state().error(), None);
    }

    #[test]
    fn test_failure_stores_message_and_clears_entity() {
        let mut controller = SingleController::new();
        let ticket = controller.set_key(Some("ord_1")).unwrap();
        controller.resolve(ticket, Ok("order".to_string()));

        let ticket = controller.set_key(Some("ord_2")).unwrap();
        assert!(controller.resolve(ticket, Err("Order not found".to_string())));
        assert_eq!(controller.state().entity(), None);
        assert_eq!(controller.state().error(), Some("Order not found"));
    }

    #[test]
    fn test_key_change_discards_in_flight_response() {
        let mut controller = SingleController::new();
        let stale = controller.set_key(Some("ord_1")).unwrap();
        let fresh = controller.set_key(Some("ord_2")).unwrap();

        // The first fetch resolves late; it must not clobber the newer key
        assert!(!controller.resolve(stale, Ok("old order".to_string())));
        assert_eq!(controller.state(), &ResourceState::Loading);

        assert!(controller.resolve(fresh, Ok("new order".to_string())));
        assert_eq!(controller.state().entity(), Some(&"new order".to_string()));
    }

    #[test]
    fn test_refetch_same_key_is_idempotent() {
        let mut controller = SingleController::new();
        let ticket = controller.set_key(Some("acme-store")).unwrap();
        controller.resolve(ticket, Ok("Acme".to_string()));

        let ticket = controller.set_key(Some("acme-store")).unwrap();
        controller.resolve(ticket, Ok("Acme".to_string()));
        assert_eq!(controller.state().entity(), Some(&"Acme".to_string()));
    }
}
