// Dispatch combinators for building apply and decide functions.
//
// Purpose
// - Express a domain as an ordered list of handlers, each bound to one
//   (state variant, event variant) or (command variant, state variant) pair.
//
// Semantics
// - Handlers are tried in registration order. The first match wins and the
//   remaining handlers are skipped.
// - An event nothing matches leaves the state unchanged.
// - A command nothing matches yields indecision (no error, no events) unless
//   the chain ends with `unrecognized_command`, which turns it into an error.

use crate::shared::core::domain::Decision;
use crate::shared::core::errors::DomainError;

/// Projection of a tagged union onto one of its payload types.
///
/// Every type is a variant of itself, so a domain whose state is a single
/// struct can dispatch on it directly. Use [`variants!`](crate::variants) to
/// implement the projections of an enum.
pub trait Variant<T> {
    fn variant(&self) -> Option<&T>;
}

impl<T> Variant<T> for T {
    fn variant(&self) -> Option<&T> {
        Some(self)
    }
}

/// Implement [`Variant`] for each single-field tuple variant of an enum.
///
/// ```ignore
/// variants!(AccountEvent {
///     OnlineAccountCreated(OnlineAccountCreated),
///     DepositMade(DepositMade),
/// });
/// ```
#[macro_export]
macro_rules! variants {
    ($union:ty { $($variant:ident($payload:ty)),+ $(,)? }) => {
        $(
            impl $crate::shared::core::dispatch::Variant<$payload> for $union {
                fn variant(&self) -> Option<&$payload> {
                    match self {
                        Self::$variant(inner) => Some(inner),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}

/// No error and no events.
pub fn indecision<E>() -> Decision<E> {
    Ok(Vec::new())
}

/// Reject with a message and no events.
pub fn error_message<E>(message: impl Into<String>) -> Decision<E> {
    Err(DomainError::new(message))
}

pub fn on_event<S, E>(state: S, event: &E) -> OnEvent<'_, S, E> {
    OnEvent {
        state,
        event,
        resolved: false,
    }
}

pub struct OnEvent<'e, S, E> {
    state: S,
    event: &'e E,
    resolved: bool,
}

impl<'e, S, E> OnEvent<'e, S, E> {
    pub fn when<TS, TE>(self, handler: impl FnOnce(&TS, &TE) -> S) -> Self
    where
        S: Variant<TS>,
        E: Variant<TE>,
    {
        if self.resolved {
            return self;
        }
        let next = match (
            <S as Variant<TS>>::variant(&self.state),
            <E as Variant<TE>>::variant(self.event),
        ) {
            (Some(state), Some(event)) => Some(handler(state, event)),
            _ => None,
        };
        match next {
            Some(state) => Self {
                state,
                event: self.event,
                resolved: true,
            },
            None => self,
        }
    }

    pub fn state(self) -> S {
        self.state
    }
}

pub fn on_command<'a, C, S, E>(command: &'a C, state: &'a S) -> OnCommand<'a, C, S, E> {
    OnCommand {
        command,
        state,
        result: None,
    }
}

pub struct OnCommand<'a, C, S, E> {
    command: &'a C,
    state: &'a S,
    result: Option<Decision<E>>,
}

impl<'a, C, S, E> OnCommand<'a, C, S, E> {
    pub fn when<TC, TS>(mut self, handler: impl FnOnce(&TC, &TS) -> Decision<E>) -> Self
    where
        C: Variant<TC>,
        S: Variant<TS>,
    {
        if self.result.is_some() {
            return self;
        }
        if let (Some(command), Some(state)) = (
            <C as Variant<TC>>::variant(self.command),
            <S as Variant<TS>>::variant(self.state),
        ) {
            self.result = Some(handler(command, state));
        }
        self
    }

    /// Turn a still unmatched command into an explicit error.
    pub fn unrecognized_command(mut self) -> Self
    where
        C: std::fmt::Debug,
        S: std::fmt::Debug,
    {
        if self.result.is_none() {
            self.result = Some(error_message(format!(
                "{:?} not handled for {:?}",
                self.command, self.state
            )));
        }
        self
    }

    pub fn result(self) -> Decision<E> {
        self.result.unwrap_or_else(indecision)
    }
}
