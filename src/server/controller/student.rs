use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{CreateStudentResponseDto, StudentPayloadDto, StudentRecordDto},
    },
    server::{
        error::AppError, model::student::StudentParams, service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize)]
pub struct MongoIdQuery {
    pub mongo_id: String,
}

#[derive(Deserialize)]
pub struct StudentIdQuery {
    pub stu_id: String,
}

/// Get all student records.
///
/// Returns every student record in the collection. Reads bypass validation
/// and identifier allocation entirely.
///
/// # Arguments
/// - `state` - Application state containing the database handle
///
/// # Returns
/// - `200 OK` - Array of all student records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get-all",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved all students", body = Vec<StudentRecordDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            students
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a student record by its storage-native id.
///
/// Looks up a single record by the hex ObjectId MongoDB assigned at insert,
/// as opposed to the allocated `bcNNNNN` identifier.
///
/// # Arguments
/// - `state` - Application state containing the database handle
/// - `query` - Query carrying the hex ObjectId to look up
///
/// # Returns
/// - `200 OK` - The matching student record
/// - `400 Bad Request` - Malformed ObjectId
/// - `404 Not Found` - No record with this ObjectId
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get-by-id",
    tag = STUDENT_TAG,
    params(
        ("mongo_id" = String, Query, description = "Storage-native id (24-char hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentRecordDto),
        (status = 400, description = "Malformed ObjectId", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_mongo_id(
    State(state): State<AppState>,
    Query(query): Query<MongoIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.get_by_object_id(&query.mongo_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Get a student record by its allocated student identifier.
///
/// # Arguments
/// - `state` - Application state containing the database handle
/// - `query` - Query carrying the `bcNNNNN` identifier to look up
///
/// # Returns
/// - `200 OK` - The matching student record
/// - `404 Not Found` - No record with this student identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get-stu-id",
    tag = STUDENT_TAG,
    params(
        ("stu_id" = String, Query, description = "Allocated student identifier (bc + 5 digits)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentRecordDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_student_id(
    State(state): State<AppState>,
    Query(query): Query<StudentIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.get_by_student_id(&query.stu_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student record.
///
/// Validates every field shape, checks the program/department pair against
/// the fixed mapping, allocates the next sequential student identifier, and
/// persists the record with server-side timestamps.
///
/// # Arguments
/// - `state` - Application state containing the database handle
/// - `payload` - Student data fields (identifiers and timestamps are server-assigned)
///
/// # Returns
/// - `200 OK` - Storage-native id and allocated identifier of the new record
/// - `400 Bad Request` - Program and department do not match
/// - `422 Unprocessable Entity` - A field violates its shape constraint
/// - `500 Internal Server Error` - Database error or corrupted stored identifier
#[utoipa::path(
    post,
    path = "/create",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully created student", body = CreateStudentResponseDto),
        (status = 400, description = "Program and department do not match", body = ErrorDto),
        (status = 422, description = "Field validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = StudentParams::from_dto(payload)?;

    let service = StudentService::new(&state.db);

    let created = service.create(params).await?;

    Ok((
        StatusCode::OK,
        Json(CreateStudentResponseDto {
            id: created.id.to_hex(),
            student_id: created.student_id,
        }),
    ))
}

/// Replace the data fields of a student record.
///
/// Replaces every data field of the record addressed by its allocated
/// identifier. The identifier itself and the creation timestamp are
/// immutable; the update timestamp is refreshed server-side.
///
/// # Arguments
/// - `state` - Application state containing the database handle
/// - `query` - Query carrying the `bcNNNNN` identifier to update
/// - `payload` - Replacement student data fields
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Program and department do not match
/// - `404 Not Found` - No record with this student identifier
/// - `422 Unprocessable Entity` - A field violates its shape constraint
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/update-stu-id",
    tag = STUDENT_TAG,
    params(
        ("stu_id" = String, Query, description = "Allocated student identifier (bc + 5 digits)")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = MessageDto),
        (status = 400, description = "Program and department do not match", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 422, description = "Field validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Query(query): Query<StudentIdQuery>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = StudentParams::from_dto(payload)?;

    let service = StudentService::new(&state.db);

    service.update_by_student_id(&query.stu_id, params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student updated successfully.".to_string(),
        }),
    ))
}

/// Delete a student record.
///
/// Removes the record addressed by its allocated identifier. There is no
/// soft-delete; a subsequent lookup by the same identifier yields 404.
///
/// # Arguments
/// - `state` - Application state containing the database handle
/// - `query` - Query carrying the `bcNNNNN` identifier to delete
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No record with this student identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/delete-stu-id",
    tag = STUDENT_TAG,
    params(
        ("stu_id" = String, Query, description = "Allocated student identifier (bc + 5 digits)")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Query(query): Query<StudentIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    service.delete_by_student_id(&query.stu_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student deleted successfully.".to_string(),
        }),
    ))
}
