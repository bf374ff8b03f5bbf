// Root event enumeration for the account aggregate.
//
// Versioning and evolution
// - Prefer additive changes. Do not change the meaning of historical events.

use crate::variants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnlineAccountCreated {
    pub account_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositMade {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AccountEvent {
    OnlineAccountCreated(OnlineAccountCreated),
    DepositMade(DepositMade),
}

variants!(AccountEvent {
    OnlineAccountCreated(OnlineAccountCreated),
    DepositMade(DepositMade),
});
