//! Fetch lifecycle controllers.
//!
//! Every page in the web binaries follows the same shape: read a route or
//! query parameter, issue one request to the marketplace API, and render one
//! of three view states. These controllers own that lifecycle as pure state
//! machines so the behavior is testable without a network:
//!
//! - [`ListController`] - paginated lists with incremental load-more
//! - [`SingleController`] - one entity keyed by a route parameter
//! - [`MutationState`] - one-shot write operations with inline feedback
//!
//! # Stale responses
//!
//! Overlapping fetches are not cancelled at the transport level. Instead each
//! controller stamps every fetch with a generation [`Ticket`]; a response
//! whose ticket no longer matches the controller's current generation is
//! discarded on arrival, so the last *issued* fetch wins rather than the last
//! one to resolve.

mod list;
mod mutation;
mod single;

pub use list::{ListController, ListPhase, ListQuery, LoadKind, Page, SortOrder};
pub use mutation::MutationState;
pub use single::{ResourceState, SingleController, MISSING_KEY_MESSAGE};

/// Generation stamp issued when a fetch begins.
///
/// Opaque to callers; hand it back to the controller's `resolve` together
/// with the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(pub(crate) u64);
