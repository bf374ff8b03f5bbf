use crate::modules::accounts::core::events::{AccountEvent, DepositMade, OnlineAccountCreated};

pub fn account_created(account_name: &str) -> AccountEvent {
    AccountEvent::OnlineAccountCreated(OnlineAccountCreated {
        account_name: account_name.to_string(),
    })
}

pub fn deposit_made(amount: i64) -> AccountEvent {
    AccountEvent::DepositMade(DepositMade { amount })
}
