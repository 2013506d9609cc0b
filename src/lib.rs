//! Global Pulse - the top news story for any country.
//!
//! Finds the most significant story of the last 24 hours with a
//! search-grounded Gemini call, illustrates it with Imagen, and presents the
//! result as a terminal card driven by a small state machine.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
