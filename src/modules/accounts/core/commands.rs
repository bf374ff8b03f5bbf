// Commands accepted by the account aggregate.
//
// Commands express intent and are never persisted. Each variant wraps its own
// payload type so the decider can dispatch on it.

use crate::variants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOnlineAccount {
    pub account_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MakeDeposit {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AccountCommand {
    CreateOnlineAccount(CreateOnlineAccount),
    MakeDeposit(MakeDeposit),
}

variants!(AccountCommand {
    CreateOnlineAccount(CreateOnlineAccount),
    MakeDeposit(MakeDeposit),
});

impl AccountCommand {
    pub fn create_online_account(account_name: impl Into<String>) -> Self {
        Self::CreateOnlineAccount(CreateOnlineAccount {
            account_name: account_name.into(),
        })
    }

    pub fn make_deposit(amount: i64) -> Self {
        Self::MakeDeposit(MakeDeposit { amount })
    }
}
