//! HTTP diagnostics handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{ConnectionsDto, HealthDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Currently registered connections, oldest first
pub async fn list_connections(State(state): State<Arc<AppState>>) -> Json<ConnectionsDto> {
    let connections = state.list_connections_usecase.execute().await;
    Json(ConnectionsDto::from(connections))
}
