use crate::modules::accounts::core::commands::AccountCommand;
use crate::modules::accounts::core::decide::decide;
use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::evolve::evolve;
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::domain::{Decision, Domain};

/// Online account aggregate: an account name and a running balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDomain;

impl Domain for AccountDomain {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type State = AccountState;

    fn initial(&self) -> AccountState {
        AccountState::default()
    }

    fn apply(&self, state: AccountState, event: &AccountEvent) -> AccountState {
        evolve(state, event)
    }

    fn decide(&self, command: &AccountCommand, state: &AccountState) -> Decision<AccountEvent> {
        decide(command, state)
    }
}
