/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | crab-booking.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | RESERVATION_DURATION_HOURS | 2 | 固定预订时长（小时） |
/// | DEMO_OCCUPANCY | false | 空库时伪造占用（仅演示） |
/// | DEMO_OCCUPANCY_SEED | - | 伪造占用的随机种子（测试用） |
/// | SEED_DEMO_DATA | dev: true / prod: false | 启动时播种示例数据 |
/// | LOG_DIR | - | 日志文件目录（不设则仅输出到控制台） |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/booking.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 固定预订时长（小时）：客户端提交的结束时间会被覆盖
    pub reservation_duration_hours: i64,
    /// 空库时是否伪造 1-2 个占用桌台（演示用，生产必须关闭）
    pub demo_occupancy: bool,
    /// 伪造占用的随机种子（测试可固定序列）
    pub demo_occupancy_seed: Option<u64>,
    /// 启动时数据库为空则播种示例楼层
    pub seed_demo_data: bool,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Seeding defaults on in development, off everywhere else
        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(environment == "development");

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "crab-booking.db".into()),
            reservation_duration_hours: std::env::var("RESERVATION_DURATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            demo_occupancy: std::env::var("DEMO_OCCUPANCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            demo_occupancy_seed: std::env::var("DEMO_OCCUPANCY_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
            seed_demo_data,
            log_dir: std::env::var("LOG_DIR").ok(),
            environment,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
