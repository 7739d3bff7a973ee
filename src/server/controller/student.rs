use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        database::DbSession,
        error::AppError,
        model::student::{CreateStudentParam, Student, UpdateStudentParam},
        service::student::StudentService,
    },
};

pub static STUDENT_TAG: &str = "student";

#[utoipa::path(
    get,
    path = "/student",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 400, description = "Students could not be read from storage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(session: DbSession) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&session).list().await?;

    let dto: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/student/add",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Student could not be stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    session: DbSession,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&session)
        .create(CreateStudentParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    put,
    path = "/student/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Storage error", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    session: DbSession,
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&session)
        .update(UpdateStudentParam::from_dto(student_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/student/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = StudentDto),
        (status = 400, description = "Storage error", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    session: DbSession,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&session).delete(student_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}
