//! Server construction and adapter wiring.

mod config;

pub use config::ServerSettings;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use bank_accounts::ApiDoc;
use bank_accounts::domain::AccountRegistrationService;
use bank_accounts::inbound::http::accounts::{find_account, register_account};
use bank_accounts::inbound::http::state::HttpState;
use bank_accounts::middleware::RequestLog;
use bank_accounts::outbound::memory::{InMemoryAccountStore, InMemoryOwnerRegistry};

/// Wire the in-memory adapters into the registration service.
fn build_http_state() -> web::Data<HttpState> {
    let service = Arc::new(AccountRegistrationService::new(
        Arc::new(InMemoryAccountStore::new()),
        Arc::new(InMemoryOwnerRegistry::new()),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(register_account)
        .service(find_account);

    let app = App::new()
        .app_data(http_state)
        .wrap(RequestLog)
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound to `bind_addr`.
///
/// All workers share one set of adapters so registrations are visible
/// across connections.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(bind_addr: SocketAddr) -> std::io::Result<Server> {
    let http_state = build_http_state();
    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
