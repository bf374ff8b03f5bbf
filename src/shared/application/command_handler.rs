// Command handler orchestrates the read-decide-append cycle.
//
// Responsibilities
// - Load past events from the event store and replay them into state.
// - Call the domain's decider with the command and current state.
// - Append new events with optimistic concurrency at the version observed
//   during the load.
//
// Concurrency
// - Nothing is locked between load and append. A concurrent writer to the
//   same stream makes the append fail with a version mismatch, which is
//   returned as is. `handle_command_with_retry` is the opt-in alternative.

use crate::shared::application::errors::ApplicationError;
use crate::shared::application::replay::{Replayed, replay};
use crate::shared::core::domain::Domain;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// How many times a command cycle is re-run after losing a write race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }
}

pub struct CommandHandler<D, S>
where
    D: Domain,
    S: EventStore<D::Event>,
{
    domain: Arc<D>,
    event_store: Arc<S>,
}

impl<D, S> CommandHandler<D, S>
where
    D: Domain,
    S: EventStore<D::Event>,
{
    pub fn new(domain: Arc<D>, event_store: Arc<S>) -> Self {
        Self {
            domain,
            event_store,
        }
    }

    /// Current state and version of a stream. An unknown stream yields the
    /// domain's initial state at NO_STREAM.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn query(&self, stream_id: &str) -> Result<Replayed<D::State>, ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        Ok(replay(&*self.domain, self.domain.initial(), &stream.events))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_command(
        &self,
        stream_id: &str,
        command: &D::Command,
    ) -> Result<(), ApplicationError> {
        let current = self.query(stream_id).await?;
        let events = self.domain.decide(command, &current.state)?;
        self.event_store
            .append(stream_id, current.version, &events)
            .await?;
        debug!(
            expected_version = current.version,
            appended = events.len(),
            "command handled"
        );
        Ok(())
    }

    /// Like `handle_command`, but re-runs the whole cycle when the append
    /// loses a race, at most `policy.max_retries` times.
    pub async fn handle_command_with_retry(
        &self,
        stream_id: &str,
        command: &D::Command,
        policy: RetryPolicy,
    ) -> Result<(), ApplicationError> {
        let mut retries = 0;
        loop {
            match self.handle_command(stream_id, command).await {
                Err(error) if error.is_version_conflict() && retries < policy.max_retries => {
                    retries += 1;
                    warn!(stream_id, retries, %error, "retrying command after conflict");
                }
                result => return result,
            }
        }
    }
}
