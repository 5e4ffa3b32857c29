//! Server construction and wiring.
//!
//! The binary-side composition root: builds the pool, picks the concrete
//! repository, and hands the HTTP layer nothing but ports.

mod config;

pub use config::AppSettings;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use student_api::inbound::http::health::{HealthState, live, ready};
use student_api::inbound::http::state::HttpState;
use student_api::inbound::http::students::{
    create_student, delete_student, get_student, list_students, update_student,
};
use student_api::outbound::persistence::{PoolConfig, SqliteStudentRepository, connect};

/// Seconds to wait for in-flight requests during graceful shutdown.
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Assemble the application with all routes and shared state.
fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(create_student)
        .service(list_students)
        .service(get_student)
        .service(update_student)
        .service(delete_student);

    App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live)
}

/// Initialise storage, bind the listener, and run until shutdown.
///
/// Requests still in flight when a termination signal arrives get up to
/// [`SHUTDOWN_TIMEOUT_SECS`] to finish; the pool is released when the
/// server future resolves.
///
/// # Errors
/// Returns [`std::io::Error`] when storage initialisation fails or the
/// listen address cannot be bound.
pub async fn run(settings: &AppSettings) -> std::io::Result<()> {
    let pool_config = PoolConfig::new(settings.storage_path());
    let pool = connect(&pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(path = %pool_config.storage_path().display(), "storage initialised");

    let state = HttpState::new(Arc::new(SqliteStudentRepository::new(pool)));
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let listen_addr = settings.listen_addr();
    let server = HttpServer::new(move || build_app(state.clone(), server_health_state.clone()))
        .bind(listen_addr.as_str())?
        .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
        .run();

    info!(addr = %listen_addr, "server started");
    health_state.mark_ready();
    server.await
}
