//! Public tracking API: session facade, push adapter and output formatting

pub mod callback;
pub mod formatting;
pub mod session;
pub mod types;
