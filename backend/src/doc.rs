//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API from the
//! handler annotations in the inbound layer. The document is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student API",
        description = "CRUD HTTP interface for student records, plus health probes."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::Student,
        crate::inbound::http::students::StudentPayload,
        crate::inbound::http::students::CreatedResponse,
    )),
    tags(
        (name = "students", description = "Student record CRUD"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn document_covers_the_student_endpoints() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/api/students"));
        assert!(openapi.paths.paths.contains_key("/api/students/{id}"));
        assert!(openapi.paths.paths.contains_key("/health/ready"));
    }
}
