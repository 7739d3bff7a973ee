//! HTTP request handlers.
//!
//! Controllers extract the request's database session and payload, convert DTOs into
//! service parameters and convert the returned domain models back into DTOs.

pub mod student;
