//! Exercise Tracker Shared Library
//!
//! This crate contains the wire types, date handling and input validation
//! shared by the backend and its clients.

pub mod dates;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use dates::*;
pub use types::*;
