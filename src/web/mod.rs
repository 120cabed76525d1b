// src/web/mod.rs
// Web server layer for Aura

pub mod api;
pub mod error;
pub mod extract;
pub mod state;
pub mod types;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{AuraError, Result};
use crate::web::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(config.cors_origin.as_deref())?;

    Ok(Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        // Chat & images
        .route("/chat", post(api::chat))
        .route("/generate-avatar", post(api::generate_avatar))
        .route("/create-image", post(api::create_image))
        // Persona management
        .route(
            "/persona",
            get(api::get_persona)
                .post(api::create_persona)
                .put(api::update_persona),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let allow_origin = match origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin)
                .map_err(|e| AuraError::Config(format!("invalid CORS origin {origin:?}: {e}")))?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_any() {
        assert!(cors_layer(None).is_ok());
    }

    #[test]
    fn test_cors_exact_origin() {
        assert!(cors_layer(Some("http://localhost:3000")).is_ok());
    }

    #[test]
    fn test_cors_invalid_origin() {
        let err = cors_layer(Some("bad\norigin")).unwrap_err();
        assert!(matches!(err, AuraError::Config(_)));
    }
}
