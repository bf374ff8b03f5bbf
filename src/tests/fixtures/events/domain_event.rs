use serde::Serialize;

/// Minimal event for exercising stores independently of any domain.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DomainEvent {
    pub name: &'static str,
}
