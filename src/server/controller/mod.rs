//! HTTP request handlers for the API surface.
//!
//! Controllers convert between wire DTOs and operation parameters, delegate
//! to the service layer, and map results to HTTP responses. Each handler
//! carries its OpenAPI documentation via `#[utoipa::path]`.

pub mod student;
