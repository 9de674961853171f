//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`zones`] - 区域查询接口
//! - [`tables`] - 桌台查询和管理接口
//! - [`search`] - 可用桌台搜索 + 推荐接口
//! - [`reservations`] - 预订创建/查询/取消接口

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod health;
pub mod reservations;
pub mod search;
pub mod tables;
pub mod zones;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(zones::router())
        .merge(tables::router())
        .merge(search::router())
        .merge(reservations::router())
}

/// Build a fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - Handle cross-origin requests (frontend dev server)
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
