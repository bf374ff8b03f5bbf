// Composition root for the accounts service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the command handler and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
