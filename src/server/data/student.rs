//! Student data repository for database operations
//!
//! Provides the `StudentRepository` for reading and writing rows of the `Student` table and
//! converting them into domain models.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::student::{CreateStudentParam, Student, UpdateStudentParam};

/// Repository providing database operations for students.
///
/// Holds a reference to any SeaORM connection, typically the transaction opened by the
/// service for the current request.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run statements on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every student, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    /// Finds a student by ID
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The student if found
    /// - `Ok(None)` - No student has this ID
    /// - `Err(DbErr)` - Database error during select
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(student.map(Student::from_entity))
    }

    /// Inserts a new student and returns it with its assigned ID
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            gender: ActiveValue::Set(param.gender),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Replaces a student's name and gender
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.gender = ActiveValue::Set(param.gender);

        let student = active_model.update(self.db).await?;

        Ok(Student::from_entity(student))
    }

    /// Deletes a student and returns the row as it was before deletion
    ///
    /// # Returns
    /// - `Ok(Student)` - The deleted student
    /// - `Err(DbErr::RecordNotFound)` - No student has this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Student, DbErr> {
        let student = self.find_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Student with id {} not found",
            id
        )))?;

        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                id
            )));
        }

        Ok(student)
    }
}
