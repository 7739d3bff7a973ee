//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//!
//! let custom = factory::student::StudentFactory::new(&db)
//!     .name("Alice")
//!     .gender("F")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::create_student;
