//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user and health endpoints together with the
//! schema wrappers from the inbound layer, so domain types stay free of
//! utoipa. The document backs Swagger UI in debug builds and is exported by
//! the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::{UserInputSchema, UserSchema};
use crate::inbound::http::users::SuccessResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD interface over user records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserInputSchema, ErrorResponse, SuccessResponse)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
