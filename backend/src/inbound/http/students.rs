//! Student API handlers.
//!
//! ```text
//! POST   /api/students      {"name":"Alice","email":"alice@example.com","age":21}
//! GET    /api/students
//! GET    /api/students/{id}
//! PUT    /api/students/{id}
//! DELETE /api/students/{id}
//! ```
//!
//! Handlers decode and validate, call the storage contract, and encode the
//! outcome. They never retry and never see the concrete engine.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, NewStudent, Student};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or updating a student.
///
/// Fields are optional at the decode layer so that a well-formed body with
/// missing fields reports validation violations rather than a decode error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StudentPayload {
    /// Student name; must be non-empty.
    pub name: Option<String>,
    /// Email address in `local@domain.tld` shape.
    pub email: Option<String>,
    /// Age in years, within the plausible human range.
    pub age: Option<i64>,
}

/// Response payload returned by a successful create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Storage-assigned id of the new record.
    pub id: i64,
}

fn decode_payload(body: &[u8]) -> Result<StudentPayload, Error> {
    if body.is_empty() {
        return Err(Error::invalid_request("request body must not be empty")
            .with_details(json!({ "code": "empty_body" })));
    }
    serde_json::from_slice(body).map_err(|err| {
        Error::invalid_request(format!("request body is not valid JSON: {err}"))
            .with_details(json!({ "code": "malformed_body" }))
    })
}

fn validate_payload(payload: StudentPayload) -> Result<NewStudent, Error> {
    NewStudent::try_from_parts(payload.name, payload.email, payload.age).map_err(Error::from)
}

fn parse_id(value: &str) -> Result<i64, Error> {
    value.parse::<i64>().map_err(|_| {
        Error::invalid_request("student id must be an integer").with_details(json!({
            "field": "id",
            "value": value,
            "code": "invalid_id",
        }))
    })
}

/// Create a student record.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created", body = CreatedResponse),
        (status = 400, description = "Malformed or invalid payload", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let student = validate_payload(decode_payload(&body)?)?;
    let id = state.students.create(&student).await?;
    info!(id, name = student.name(), "student created");
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// List all student records. An empty table yields an empty array.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students, unspecified order", body = [Student]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Student>>> {
    let students = state.students.list().await?;
    Ok(web::Json(students))
}

/// Fetch one student record by id.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Storage-assigned student id")),
    responses(
        (status = 200, description = "Student record", body = Student),
        (status = 400, description = "Non-integer id", body = Error),
        (status = 404, description = "No student with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "getStudentById"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Student>> {
    let id = parse_id(&path.into_inner())?;
    let student = state.students.find_by_id(id).await?;
    Ok(web::Json(student))
}

/// Replace the mutable fields of an existing student record.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Storage-assigned student id")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Updated record", body = Student),
        (status = 400, description = "Malformed or invalid payload", body = Error),
        (status = 404, description = "No student with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<Student>> {
    let id = parse_id(&path.into_inner())?;
    let student = validate_payload(decode_payload(&body)?)?;
    state.students.update(id, &student).await?;
    info!(id, "student updated");
    Ok(web::Json(Student::from_new(id, &student)))
}

/// Delete a student record by id.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Storage-assigned student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Non-integer id", body = Error),
        (status = 404, description = "No student with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    state.students.delete(id).await?;
    info!(id, "student deleted");
    Ok(HttpResponse::NoContent().finish())
}
