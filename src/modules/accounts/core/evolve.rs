// Evolve function: combine a prior state with a new event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - Total: a stored deposit past the balance limit clamps instead of panicking.

use crate::modules::accounts::core::events::{AccountEvent, DepositMade, OnlineAccountCreated};
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::dispatch::on_event;

pub fn evolve(state: AccountState, event: &AccountEvent) -> AccountState {
    on_event(state, event)
        .when(|_: &AccountState, e: &OnlineAccountCreated| AccountState {
            account_name: e.account_name.clone(),
            balance: 0,
        })
        .when(|s: &AccountState, e: &DepositMade| AccountState {
            account_name: s.account_name.clone(),
            balance: s.balance.saturating_add(e.amount),
        })
        .state()
}
