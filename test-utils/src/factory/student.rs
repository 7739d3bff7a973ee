//! Student factory for creating test student rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Alice")
///     .gender("F")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    name: String,
    gender: String,
}

impl<'a, C: ConnectionTrait> StudentFactory<'a, C> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - gender: `"F"`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            gender: "F".to_string(),
        }
    }

    /// Sets the student name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the student gender.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Builds and inserts the student row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
