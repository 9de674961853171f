//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::db::repository::{dining_table, zone};
use crate::utils::validation::{MAX_NAME_LEN, validate_capacity, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct AvailableQuery {
    pub zone: Option<String>,
}

/// GET /tables - 获取所有桌台 (含已占用，供前端楼层图渲染)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(&state.pool).await?;
    Ok(Json(tables))
}

/// GET /api/tables/available?zone=xxx - 获取未占用桌台
///
/// 可选按区域名过滤；区域不存在时返回空列表而非错误。
pub async fn list_available(
    State(state): State<ServerState>,
    Query(query): Query<AvailableQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let zone_name = query.zone.as_deref().map(str::trim).filter(|z| !z.is_empty());

    let tables = match zone_name {
        None => dining_table::find_unoccupied(&state.pool).await?,
        Some(name) => match zone::find_by_name(&state.pool, name).await? {
            Some(zone) => dining_table::find_unoccupied_in_zone(&state.pool, zone.id).await?,
            None => Vec::new(),
        },
    };

    Ok(Json(tables))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台 (管理端)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_capacity(payload.capacity)?;

    zone::find_by_id(&state.pool, payload.zone_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {} not found", payload.zone_id)))?;

    let table = dining_table::create(&state.pool, payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/:id - 更新桌台 (占用标记 / 特性编辑)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::update(&state.pool, id, payload).await?;
    Ok(Json(table))
}
