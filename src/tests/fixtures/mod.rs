// Shared test fixtures. Compiled only for tests.

pub mod events {
    pub mod account_events;
    pub mod domain_event;
}

pub mod stores;
