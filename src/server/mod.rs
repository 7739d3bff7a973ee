//! Server-side API backend and business logic.
//!
//! This module contains the backend implementation: API endpoints, business logic, data
//! access, and the infrastructure wiring them together. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Transaction boundaries and error classification
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Per-request database session lifecycle
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Database** (`database`) - Session factory and per-request session handles
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Pool creation, schema bootstrap, logging and shutdown
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request
//! 2. **Middleware** opens a database session and attaches it to the request
//! 3. **Controller** extracts the session, converts DTOs to params, calls the service
//! 4. **Service** opens a transaction on the session and calls the repository
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Service** commits and returns the domain model
//! 7. **Controller** converts the domain model to a DTO
//! 8. **Middleware** closes the session once the response is produced

pub mod config;
pub mod controller;
pub mod data;
pub mod database;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
