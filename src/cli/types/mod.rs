//! Type-safe wrappers for identifiers, addresses and calendar days.

pub mod endpoint;
pub mod ids;
pub mod time;
