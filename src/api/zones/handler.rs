//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{DiningTable, Zone};
use crate::db::repository::{dining_table, zone};
use crate::utils::{AppError, AppResult};

/// GET /api/zones - 获取所有区域
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Zone>>> {
    let zones = zone::find_all(&state.pool).await?;
    Ok(Json(zones))
}

/// GET /api/zones/:id - 获取单个区域
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Zone>> {
    let zone = zone::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {} not found", id)))?;
    Ok(Json(zone))
}

/// GET /api/zones/:id/tables - 获取区域内的所有桌台
pub async fn list_tables(
    State(state): State<ServerState>,
    Path(zone_id): Path<i64>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_by_zone(&state.pool, zone_id).await?;
    Ok(Json(tables))
}
