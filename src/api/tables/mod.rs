//! Dining Table API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // 公开列表端点，不带 /api 前缀 (前端楼层图直接拉取)
        .route("/tables", get(handler::list))
        .nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/available", get(handler::list_available))
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
}
