//! Student registry HTTP service.
//!
//! A small CRUD API over a single `Student` table. Each request receives its own database
//! session from middleware, and every handler performs exactly one transaction against it.

pub mod model;
pub mod server;
