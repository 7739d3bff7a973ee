//! Service layer.
//!
//! Services own the transaction boundary: each operation begins one transaction on the
//! request's session, runs repository calls inside it and commits on success. Errors are
//! classified into domain errors here, before the controller maps them to responses.

pub mod student;
