//! Data transfer objects exchanged with API clients.

pub mod api;
pub mod student;
