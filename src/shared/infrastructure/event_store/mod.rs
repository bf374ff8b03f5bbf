// Event store port.
//
// Responsibilities
// - Persist streams of events per aggregate id with optimistic concurrency.
// - A stream is created by its first successful append. An unknown id loads
//   as an empty stream at NO_STREAM.
//
// Contract for implementations
// - `append` checks the expected version and appends the whole batch as one
//   atomic step per stream. On mismatch nothing is written.
// - `load` returns events in append order from a consistent snapshot.

use crate::shared::core::primitives::{Version, version_of};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: Version, actual: Version },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: Version,
}

impl<E> LoadedStream<E> {
    pub fn new(events: Vec<E>) -> Self {
        let version = version_of(events.len());
        Self { events, version }
    }
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: Version,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;
