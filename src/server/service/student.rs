use crate::server::{
    data::student::StudentRepository,
    database::DbSession,
    error::student::StudentError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

pub struct StudentService<'a> {
    session: &'a DbSession,
}

impl<'a> StudentService<'a> {
    pub fn new(session: &'a DbSession) -> Self {
        Self { session }
    }

    /// Gets every student
    pub async fn list(&self) -> Result<Vec<Student>, StudentError> {
        let txn = self.session.begin().await.map_err(StudentError::ListFailed)?;

        let students = StudentRepository::new(&txn)
            .get_all()
            .await
            .map_err(StudentError::ListFailed)?;

        txn.commit().await.map_err(StudentError::ListFailed)?;

        Ok(students)
    }

    /// Creates a new student
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, StudentError> {
        let txn = self
            .session
            .begin()
            .await
            .map_err(StudentError::CreateFailed)?;

        let student = StudentRepository::new(&txn)
            .create(param)
            .await
            .map_err(StudentError::CreateFailed)?;

        txn.commit().await.map_err(StudentError::CreateFailed)?;

        Ok(student)
    }

    /// Replaces the name and gender of an existing student
    ///
    /// Returns `StudentError::NotFound` if no student has the given ID.
    pub async fn update(&self, param: UpdateStudentParam) -> Result<Student, StudentError> {
        let id = param.id;

        let txn = self.session.begin().await.map_err(StudentError::Storage)?;

        let student = StudentRepository::new(&txn)
            .update(param)
            .await
            .map_err(|e| StudentError::from_write(id, e))?;

        txn.commit().await.map_err(StudentError::Storage)?;

        Ok(student)
    }

    /// Deletes a student, returning the removed record
    ///
    /// Returns `StudentError::NotFound` if no student has the given ID.
    pub async fn delete(&self, id: i32) -> Result<Student, StudentError> {
        let txn = self.session.begin().await.map_err(StudentError::Storage)?;

        let student = StudentRepository::new(&txn)
            .delete(id)
            .await
            .map_err(|e| StudentError::from_write(id, e))?;

        txn.commit().await.map_err(StudentError::Storage)?;

        Ok(student)
    }
}
