//! OpenAPI document and Swagger UI.
//!
//! The document is served at `/api-docs/openapi.json` and the UI at
//! `/swagger-ui/index.html`. The bare `/swagger-ui` path redirects to
//! `/swagger-ui/`, which path normalization trims back, so link the
//! `index.html` page directly.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::games::{GameInfoResponse, GameResponse};
use crate::api::dto::health::HealthResponse;
use crate::api::dto::news::{NewsItemResponse, NewsResponse};
use crate::api::handlers;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game News API",
        description = "Game list, store details and news proxied from the Steam Web API"
    ),
    paths(
        handlers::games::games_handler,
        handlers::games::games_info_handler,
        handlers::news::news_handler,
        handlers::health::health_handler,
    ),
    components(schemas(
        GameResponse,
        GameInfoResponse,
        NewsResponse,
        NewsItemResponse,
        HealthResponse
    )),
    tags(
        (name = "steam", description = "Steam catalogue, store details and news"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document and the Swagger UI.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
