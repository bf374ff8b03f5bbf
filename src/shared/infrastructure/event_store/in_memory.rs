// In memory implementation of the EventStore port.
//
// Purpose
// - Support command handler tests and local development without a database.
//
// Responsibilities
// - Store events and the current version per stream in memory.
// - Enforce optimistic concurrency by checking the expected version.
//
// Locking
// - The table lock is only held to find or create a stream. Each stream has
//   its own mutex, held across check-then-append, so writers to one stream
//   are serialised while other streams proceed independently.

use crate::shared::core::primitives::{NO_STREAM, Version};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

struct Stream<Event> {
    events: Vec<Event>,
    version: Version,
}

impl<Event> Default for Stream<Event> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            version: NO_STREAM,
        }
    }
}

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    streams: RwLock<HashMap<String, Arc<Mutex<Stream<Event>>>>>,
    offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    /// Simulate an unreachable backend: every call fails while offline.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Sleep before every append. Widens the window between a caller's read
    /// and its append so concurrent writers can be raced in tests.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }

    async fn find(&self, stream_id: &str) -> Option<Arc<Mutex<Stream<Event>>>> {
        self.streams.read().await.get(stream_id).cloned()
    }

    async fn find_or_create(&self, stream_id: &str) -> Arc<Mutex<Stream<Event>>> {
        if let Some(stream) = self.find(stream_id).await {
            return stream;
        }
        self.streams
            .write()
            .await
            .entry(stream_id.to_string())
            .or_default()
            .clone()
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let Some(stream) = self.find(stream_id).await else {
            return Ok(LoadedStream::new(Vec::new()));
        };
        let guard = stream.lock().await;
        Ok(LoadedStream {
            events: guard.events.clone(),
            version: guard.version,
        })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: Version,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        // Only a write that can succeed creates the stream.
        let stream = if expected_version == NO_STREAM && !new_events.is_empty() {
            self.find_or_create(stream_id).await
        } else {
            match self.find(stream_id).await {
                Some(stream) => stream,
                None if expected_version == NO_STREAM => return Ok(()),
                None => {
                    debug!(stream_id, expected_version, "append rejected on unknown stream");
                    return Err(EventStoreError::VersionMismatch {
                        expected: expected_version,
                        actual: NO_STREAM,
                    });
                }
            }
        };

        let mut guard = stream.lock().await;
        if guard.version != expected_version {
            debug!(
                stream_id,
                expected_version,
                actual_version = guard.version,
                "append rejected on version mismatch"
            );
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual: guard.version,
            });
        }
        guard.events.extend_from_slice(new_events);
        guard.version += new_events.len() as Version;
        debug!(
            stream_id,
            appended = new_events.len(),
            version = guard.version,
            "events appended"
        );
        Ok(())
    }
}
