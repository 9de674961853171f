//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::booking::reservation::{cancel_reservation, create_reservation};
use crate::core::ServerState;
use crate::db::models::{Preference, Reservation};
use crate::db::repository::reservation;
use crate::utils::validation::validate_guest_count;
use crate::utils::{AppResult, time};

/// POST /api/reservations request body
///
/// `table` 接受完整桌台对象，只取 id 字段。`endTime` 接受但被
/// 忽略：预订时长是固定策略 (见 Config)。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub table: TableRef,
    pub date: String,
    pub start_time: String,
    #[allow(dead_code)]
    pub end_time: Option<String>,
    pub guest_count: i32,
    /// 偏好 token 列表，未知 token 静默丢弃
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// 桌台引用：前端提交整个桌台对象，多余字段忽略
#[derive(Debug, Deserialize)]
pub struct TableRef {
    pub id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/reservations - 创建预订
///
/// 软失败：验证/冲突错误返回 HTTP 200 + `{success: false, error}`。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateReservationRequest>,
) -> Json<ReservationResponse> {
    match try_create(&state, payload).await {
        Ok(reservation) => Json(ReservationResponse {
            success: true,
            reservation: Some(reservation),
            message: Some("Reservation created successfully".to_string()),
            error: None,
        }),
        Err(e) => Json(ReservationResponse {
            success: false,
            reservation: None,
            message: None,
            error: Some(e.to_string()),
        }),
    }
}

async fn try_create(
    state: &ServerState,
    payload: CreateReservationRequest,
) -> AppResult<Reservation> {
    validate_guest_count(payload.guest_count)?;
    let start = time::parse_datetime_millis(&payload.date, &payload.start_time)?;

    // Same token rules as search: unknown entries dropped, duplicates collapse
    let preferences = Preference::parse_csv(&payload.preferences.join(","));

    create_reservation(
        &state.pool,
        payload.table.id,
        start,
        payload.guest_count,
        preferences,
        state.config.reservation_duration_hours,
    )
    .await
}

/// GET /api/reservations/table/:id - 获取桌台的所有预订
pub async fn list_by_table(
    State(state): State<ServerState>,
    Path(table_id): Path<i64>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = reservation::find_by_table(&state.pool, table_id).await?;
    Ok(Json(reservations))
}

/// DELETE /api/reservations/:id - 取消预订
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    cancel_reservation(&state.pool, id).await?;
    Ok(Json(true))
}
