// Account state after folding events. Never persisted; rebuilt on every query.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    pub account_name: String,
    pub balance: i64,
}
