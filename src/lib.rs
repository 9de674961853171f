//! Crab Booking - 餐厅桌台预订服务
//!
//! # 架构概述
//!
//! 提供以下核心功能：
//!
//! - **桌台搜索** (`booking::search`): 按人数/区域/时段过滤可用桌台
//! - **智能推荐** (`booking::recommend`): 按匹配度打分选出最佳桌台
//! - **预订管理** (`booking::reservation`): 固定时长预订，原子冲突检测
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── booking/       # 可用性、搜索、推荐、预订
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models, repository, seed)
//! └── utils/         # 错误、日志、时间、验证工具
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
