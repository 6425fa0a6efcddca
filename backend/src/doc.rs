//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the account endpoints and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document is served by Swagger UI in
//! debug builds and exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::accounts::{AccountRequest, AccountResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bank accounts API",
        description = "Registration and lookup of customer bank accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::register_account,
        crate::inbound::http::accounts::find_account,
    ),
    components(schemas(AccountRequest, AccountResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "accounts", description = "Account registration and lookup")
    )
)]
pub struct ApiDoc;
