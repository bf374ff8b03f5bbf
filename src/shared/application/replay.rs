// Rebuild state by folding a domain's apply function over a stream.

use crate::shared::core::domain::Domain;
use crate::shared::core::primitives::{NO_STREAM, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replayed<State> {
    pub state: State,
    pub version: Version,
}

/// Fold `events` onto `initial`. The version starts at NO_STREAM and moves by
/// one per event folded.
pub fn replay<D: Domain + ?Sized>(
    domain: &D,
    initial: D::State,
    events: &[D::Event],
) -> Replayed<D::State> {
    events.iter().fold(
        Replayed {
            state: initial,
            version: NO_STREAM,
        },
        |current, event| Replayed {
            state: domain.apply(current.state, event),
            version: current.version + 1,
        },
    )
}

#[cfg(test)]
mod replay_tests {
    use super::*;
    use crate::modules::accounts::core::domain::AccountDomain;
    use crate::modules::accounts::core::state::AccountState;
    use crate::tests::fixtures::events::account_events::{account_created, deposit_made};
    use rstest::rstest;

    #[rstest]
    fn it_should_return_the_initial_state_for_no_events() {
        let replayed = replay(&AccountDomain, AccountDomain.initial(), &[]);
        assert_eq!(replayed.state, AccountState::default());
        assert_eq!(replayed.version, NO_STREAM);
    }

    #[rstest]
    fn it_should_count_one_version_per_event() {
        let events = [account_created("Matt"), deposit_made(100), deposit_made(-20)];
        let replayed = replay(&AccountDomain, AccountDomain.initial(), &events);
        assert_eq!(replayed.version, 2);
        assert_eq!(replayed.state.balance, 80);
    }

    #[rstest]
    fn it_should_be_deterministic() {
        let events = [account_created("Matt"), deposit_made(7), deposit_made(35)];
        let first = replay(&AccountDomain, AccountDomain.initial(), &events);
        let second = replay(&AccountDomain, AccountDomain.initial(), &events);
        assert_eq!(first, second);
    }

    #[rstest]
    fn it_should_be_sensitive_to_event_order() {
        let created_last = [deposit_made(100), account_created("Matt")];
        let created_first = [account_created("Matt"), deposit_made(100)];
        let a = replay(&AccountDomain, AccountDomain.initial(), &created_last);
        let b = replay(&AccountDomain, AccountDomain.initial(), &created_first);
        assert_eq!(a.version, b.version);
        assert_ne!(a.state, b.state);
    }

    #[rstest]
    fn it_should_continue_from_a_given_state() {
        let prefix = replay(&AccountDomain, AccountDomain.initial(), &[account_created("Matt")]);
        let replayed = replay(&AccountDomain, prefix.state, &[deposit_made(10)]);
        assert_eq!(replayed.state.balance, 10);
        assert_eq!(replayed.version, 0);
    }
}
