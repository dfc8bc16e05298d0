//! Boundary validation of raw transport payloads

pub mod fix;
