use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::student::{
        create_student, delete_student, get_all_students, get_student_by_mongo_id,
        get_student_by_student_id, update_student, STUDENT_TAG,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::student::get_all_students,
        crate::server::controller::student::get_student_by_mongo_id,
        crate::server::controller::student::get_student_by_student_id,
        crate::server::controller::student::create_student,
        crate::server::controller::student::update_student,
        crate::server::controller::student::delete_student,
    ),
    tags(
        (name = STUDENT_TAG, description = "Student enrollment record management")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get-all", get(get_all_students))
        .route("/get-by-id", get(get_student_by_mongo_id))
        .route("/get-stu-id", get(get_student_by_student_id))
        .route("/create", post(create_student))
        .route("/update-stu-id", put(update_student))
        .route("/delete-stu-id", delete(delete_student))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
