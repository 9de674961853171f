//! Server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::booking::DemoOccupancy;
use crate::core::Config;
use crate::db::{DbService, seed};
use crate::utils::AppError;

/// 服务器状态 - 持有所有共享资源的引用
///
/// 使用 `Arc`/pool 实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | pool | SQLite 连接池 |
/// | demo_occupancy | 演示占用采样器（按配置开关） |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 演示占用采样器；`None` 表示返回真实（可能为空的）占用集合
    demo_occupancy: Option<Arc<DemoOccupancy>>,
}

impl ServerState {
    /// Initialize all services: database, seeding, demo sampler
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        if config.seed_demo_data {
            seed::seed_if_empty(&db.pool).await?;
        }

        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// Build state around an existing pool (tests use this with an
    /// in-memory database)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let demo_occupancy = config
            .demo_occupancy
            .then(|| Arc::new(DemoOccupancy::new(config.demo_occupancy_seed)));

        if demo_occupancy.is_some() && config.is_production() {
            tracing::warn!("DEMO_OCCUPANCY is enabled in production: search results will fabricate busy tables");
        }

        Self {
            config,
            pool,
            demo_occupancy,
        }
    }

    /// The demo occupancy sampler, if enabled
    pub fn demo_occupancy(&self) -> Option<&DemoOccupancy> {
        self.demo_occupancy.as_deref()
    }
}
