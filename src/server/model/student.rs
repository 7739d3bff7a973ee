//! Domain and parameter models for student operations.

use crate::model::student::{CreateStudentDto, StudentDto, UpdateStudentDto};

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Storage-assigned identifier, never changed after creation.
    pub id: i32,
    pub name: String,
    pub gender: String,
}

impl Student {
    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            gender: self.gender,
        }
    }

    /// Converts an entity model to a domain model.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gender: entity.gender,
        }
    }
}

/// Parameters for creating a new student.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub name: String,
    pub gender: String,
}

impl From<CreateStudentDto> for CreateStudentParam {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            gender: dto.gender,
        }
    }
}

/// Parameters for replacing a student's name and gender.
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    /// ID of the student to update.
    pub id: i32,
    pub name: String,
    pub gender: String,
}

impl UpdateStudentParam {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            name: dto.name,
            gender: dto.gender,
        }
    }
}
