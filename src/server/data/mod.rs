//! Database repository layer.
//!
//! Repositories handle the SQL-level operations for each domain. They use SeaORM entity
//! models internally and return domain models, keeping the data layer separate from the
//! business logic layer. Repositories are generic over the connection so services can run
//! them inside a transaction.

pub mod student;
