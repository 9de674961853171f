use crab_booking::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (不存在则忽略)
    let _ = dotenvy::dotenv();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    crab_booking::init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("🦀 Crab Booking starting (env: {})", config.environment);

    // 3. 初始化服务器状态 (数据库 + 播种)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
