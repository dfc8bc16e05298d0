//! Core types and constants for the route tracking engine

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
