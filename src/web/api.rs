// src/web/api.rs
// REST API handlers

use axum::{Json, extract::State, response::IntoResponse};
use tracing::{debug, info};

use crate::persona::Persona;
use crate::web::error::ApiResult;
use crate::web::extract::ApiJson;
use crate::web::state::AppState;
use crate::web::types::{ChatRequest, ChatResponse, ImageRequest, ImageResponse};

// ═══════════════════════════════════════
// HEALTH & HOME
// ═══════════════════════════════════════

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "Hello": "World" }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ═══════════════════════════════════════
// CHAT & IMAGES
// ═══════════════════════════════════════

pub async fn chat(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let response = state.chat.reply(&req.message).await?;
    debug!(responder = state.chat.name(), "Chat reply produced");
    Ok(Json(ChatResponse { response }))
}

pub async fn generate_avatar(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ImageRequest>,
) -> ApiResult<Json<ImageResponse>> {
    let url = state.images.avatar(&req.style).await?;
    info!(generator = state.images.name(), style = %req.style, "Avatar generated");
    Ok(Json(ImageResponse { url }))
}

pub async fn create_image(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ImageRequest>,
) -> ApiResult<Json<ImageResponse>> {
    let url = state.images.image(&req.style).await?;
    info!(generator = state.images.name(), style = %req.style, "Image created");
    Ok(Json(ImageResponse { url }))
}

// ═══════════════════════════════════════
// PERSONA API
// ═══════════════════════════════════════

pub async fn get_persona(State(state): State<AppState>) -> Json<Persona> {
    Json(state.personas.get().await)
}

pub async fn create_persona(
    State(state): State<AppState>,
    ApiJson(persona): ApiJson<Persona>,
) -> Json<Persona> {
    Json(state.personas.put(persona).await)
}

/// Same effect as `create_persona`: the slot is replaced wholesale
pub async fn update_persona(
    State(state): State<AppState>,
    ApiJson(persona): ApiJson<Persona>,
) -> Json<Persona> {
    Json(state.personas.put(persona).await)
}
