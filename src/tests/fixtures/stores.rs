use crate::shared::core::primitives::Version;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps the in memory store, counts append attempts and can be told to fail
/// loads while appends keep working.
pub struct SpyEventStore<Event: Clone + Send + Sync + 'static> {
    pub inner: InMemoryEventStore<Event>,
    pub fail_loads: bool,
    append_calls: AtomicUsize,
}

impl<Event: Clone + Send + Sync + 'static> SpyEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: InMemoryEventStore::new(),
            fail_loads: false,
            append_calls: AtomicUsize::new(0),
        }
    }

    pub fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for SpyEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        if self.fail_loads {
            return Err(EventStoreError::Backend("load failed".into()));
        }
        self.inner.load(stream_id).await
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: Version,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .append(stream_id, expected_version, new_events)
            .await
    }
}
