use crate::modules::accounts::core::domain::AccountDomain;
use crate::modules::accounts::core::events::AccountEvent;
use crate::shared::application::command_handler::{CommandHandler, RetryPolicy};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type AccountCommandHandler = CommandHandler<AccountDomain, InMemoryEventStore<AccountEvent>>;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountCommandHandler>,
    pub retry_policy: RetryPolicy,
}

impl AppState {
    pub fn in_memory(retry_policy: RetryPolicy) -> Self {
        let event_store = Arc::new(InMemoryEventStore::<AccountEvent>::new());
        Self {
            accounts: Arc::new(CommandHandler::new(Arc::new(AccountDomain), event_store)),
            retry_policy,
        }
    }
}
