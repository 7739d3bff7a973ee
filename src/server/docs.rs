use axum::Json;
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::controller::student,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Registry", description = "CRUD API for student records"),
    paths(
        student::get_students,
        student::create_student,
        student::update_student,
        student::delete_student,
    ),
    components(schemas(StudentDto, CreateStudentDto, UpdateStudentDto, ErrorDto)),
    tags((name = "student", description = "Student record management"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
