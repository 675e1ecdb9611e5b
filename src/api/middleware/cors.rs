//! Cross-origin policy for the browser client.

use axum::http::{HeaderValue, header::InvalidHeaderValue};
use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer allowing exactly one origin, any method and any header.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/steamgames", get(games_handler))
///     .layer(cors::layer("http://localhost:5293")?);
/// ```
pub fn layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin.trim_end_matches('/'))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
