//! Table Search API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::booking::search::{self, SearchCriteria};
use crate::core::ServerState;
use crate::db::models::{DiningTable, Preference};
use crate::utils::validation::validate_guest_count;
use crate::utils::{AppError, AppResult, time};

/// GET /api/search query parameters
///
/// 所有字段按字符串接收，handler 内部解析：参数错误走软失败
/// 路径 (HTTP 200 + error 字段)，与前端的错误展示约定一致。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub date: Option<String>,
    pub start_time: Option<String>,
    /// 接受但忽略：预订时长是固定策略，结束时间由服务端推算
    #[allow(dead_code)]
    pub end_time: Option<String>,
    pub guest_count: Option<String>,
    pub zone: Option<String>,
    /// 逗号分隔的偏好列表，未知 token 静默丢弃
    pub preferences: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub available_tables: Vec<DiningTable>,
    /// 时段内不可用的桌台 id (升序，响应确定性)
    pub occupied_table_ids: Vec<i64>,
    pub recommended_table_id: Option<i64>,
    pub total_available: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchErrorResponse {
    pub error: String,
}

/// GET /api/search - 搜索可用桌台并给出推荐
pub async fn search_tables(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    match run_search(&state, query).await {
        Ok(response) => Json(response).into_response(),
        // 软失败：保持 HTTP 200，错误放在 error 字段
        Err(e) => Json(SearchErrorResponse {
            error: format!("Invalid search parameters: {}", e),
        })
        .into_response(),
    }
}

async fn run_search(state: &ServerState, query: SearchQuery) -> AppResult<SearchResponse> {
    let date = query
        .date
        .as_deref()
        .ok_or_else(|| AppError::validation("missing date"))?;
    let start_time = query
        .start_time
        .as_deref()
        .ok_or_else(|| AppError::validation("missing startTime"))?;
    let guest_count: i32 = query
        .guest_count
        .as_deref()
        .ok_or_else(|| AppError::validation("missing guestCount"))?
        .parse()
        .map_err(|_| AppError::validation("guestCount must be an integer"))?;
    validate_guest_count(guest_count)?;

    let window_start = time::parse_datetime_millis(date, start_time)?;
    // 结束时间统一为开始时间 + 固定时长，忽略客户端提交值
    let window_end = window_start
        + state.config.reservation_duration_hours * crate::booking::reservation::MILLIS_PER_HOUR;

    let preferences = query
        .preferences
        .as_deref()
        .map(Preference::parse_csv)
        .unwrap_or_default();

    let criteria = SearchCriteria {
        window_start,
        window_end,
        guest_count,
        zone_name: query.zone.clone(),
        preferences,
    };

    let outcome = search::search(&state.pool, &criteria, state.demo_occupancy()).await?;

    let mut occupied_table_ids: Vec<i64> = outcome.occupied_ids.into_iter().collect();
    occupied_table_ids.sort_unstable();

    Ok(SearchResponse {
        total_available: outcome.available.len(),
        available_tables: outcome.available,
        occupied_table_ids,
        recommended_table_id: outcome.recommended_id,
    })
}
