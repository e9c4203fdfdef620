use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use crate::{config::AppConfig, state::AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub admin_username: String,
    pub admin_ready: bool, // present, ADMIN role and enabled
}

pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    let username = state.config.admin.username.clone();
    let admin = state.users.find_by_username(&username).await.map_err(|e| {
        error!(error = %e, "health: user store unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "user store unavailable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok",
        admin_ready: admin.is_some_and(|u| u.is_admin() && u.enabled),
        admin_username: username,
    }))
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", Router::new().route("/health", get(health)))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
