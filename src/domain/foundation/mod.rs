//! Foundation module - Shared domain primitives.
//!
//! Contains the timestamp value object, the state machine trait and the
//! validation error type used across the Global Pulse domain.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
