// Domain contract implemented by every aggregate.
//
// Boundaries
// - Pure functions only. No input or output, no shared mutable state.
// - A domain may be shared across any number of concurrent callers.

use crate::shared::core::errors::DomainError;

/// Outcome of a decision: the events to append, in order, or a rejection.
pub type Decision<Event> = Result<Vec<Event>, DomainError>;

pub trait Domain: Send + Sync {
    type Command: std::fmt::Debug + Send + Sync;
    type Event: Clone + Send + Sync + 'static;
    type State: std::fmt::Debug + Clone + Send;

    /// State of an aggregate with no events.
    fn initial(&self) -> Self::State;

    /// Combine a prior state with one event. Total: events the domain does
    /// not recognise leave the state unchanged.
    fn apply(&self, state: Self::State, event: &Self::Event) -> Self::State;

    /// Validate a command against the current state. A rejection means no
    /// events are appended.
    fn decide(&self, command: &Self::Command, state: &Self::State) -> Decision<Self::Event>;
}
