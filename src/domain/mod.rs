//! Domain layer - story types, text extraction and the search state machine.
//!
//! Nothing in here performs I/O.

pub mod foundation;
pub mod news;
pub mod search;
