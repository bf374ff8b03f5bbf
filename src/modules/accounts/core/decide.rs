// Pure decision function for the account aggregate.
//
// Responsibilities
// - Validate a command against the current state and produce events on success.
// - Reject negative deposits and deposits the balance cannot hold.
// - Commands without a handler are rejected rather than ignored.

use crate::modules::accounts::core::commands::{AccountCommand, CreateOnlineAccount, MakeDeposit};
use crate::modules::accounts::core::events::{AccountEvent, DepositMade, OnlineAccountCreated};
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::dispatch::{error_message, on_command};
use crate::shared::core::domain::Decision;

pub const NEGATIVE_DEPOSIT: &str = "deposit amount must be positive";
pub const BALANCE_OVERFLOW: &str = "deposit would overflow the balance";

pub fn decide(command: &AccountCommand, state: &AccountState) -> Decision<AccountEvent> {
    on_command(command, state)
        .when(on_create_online_account)
        .when(on_make_deposit)
        .unrecognized_command()
        .result()
}

fn on_create_online_account(
    command: &CreateOnlineAccount,
    _state: &AccountState,
) -> Decision<AccountEvent> {
    Ok(vec![AccountEvent::OnlineAccountCreated(OnlineAccountCreated {
        account_name: command.account_name.clone(),
    })])
}

fn on_make_deposit(command: &MakeDeposit, state: &AccountState) -> Decision<AccountEvent> {
    if command.amount < 0 {
        return error_message(NEGATIVE_DEPOSIT);
    }
    if state.balance.checked_add(command.amount).is_none() {
        return error_message(BALANCE_OVERFLOW);
    }
    Ok(vec![AccountEvent::DepositMade(DepositMade {
        amount: command.amount,
    })])
}

#[cfg(test)]
mod account_decide_tests {
    use super::*;
    use crate::modules::accounts::core::evolve::evolve;
    use crate::shared::core::errors::DomainError;
    use crate::tests::fixtures::events::account_events::{account_created, deposit_made};
    use rstest::{fixture, rstest};

    #[fixture]
    fn opened() -> AccountState {
        evolve(AccountState::default(), &account_created("Matt"))
    }

    #[rstest]
    fn it_should_decide_to_create_the_account() {
        let decision = decide(
            &AccountCommand::create_online_account("Matt"),
            &AccountState::default(),
        );
        assert_eq!(decision, Ok(vec![account_created("Matt")]));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(100)]
    fn it_should_decide_to_make_the_deposit(opened: AccountState, #[case] amount: i64) {
        let decision = decide(&AccountCommand::make_deposit(amount), &opened);
        assert_eq!(decision, Ok(vec![deposit_made(amount)]));
    }

    #[rstest]
    #[case(AccountState::default())]
    #[case(AccountState { account_name: "Matt".into(), balance: 40 })]
    fn it_should_reject_a_negative_deposit_against_any_state(#[case] state: AccountState) {
        let decision = decide(&AccountCommand::make_deposit(-5), &state);
        assert_eq!(decision, Err(DomainError::new(NEGATIVE_DEPOSIT)));
    }

    #[rstest]
    #[case(0, i64::MAX)]
    #[case(1, i64::MAX - 1)]
    fn it_should_accept_a_deposit_up_to_the_largest_balance(
        #[case] balance: i64,
        #[case] amount: i64,
    ) {
        let state = AccountState { account_name: "Matt".into(), balance };
        let decision = decide(&AccountCommand::make_deposit(amount), &state);
        assert_eq!(decision, Ok(vec![deposit_made(amount)]));
    }

    #[rstest]
    #[case(i64::MAX, 1)]
    #[case(1, i64::MAX)]
    fn it_should_reject_a_deposit_that_overflows_the_balance(
        #[case] balance: i64,
        #[case] amount: i64,
    ) {
        let state = AccountState { account_name: "Matt".into(), balance };
        let decision = decide(&AccountCommand::make_deposit(amount), &state);
        assert_eq!(decision, Err(DomainError::new(BALANCE_OVERFLOW)));
    }
}
