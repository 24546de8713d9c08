//! Elysian - 圣经阅读与朗读服务
//!
//! - Domain: canon/, journal/ (Bounded Contexts)
//! - Application: session, narration, ports
//! - Infrastructure: http, adapters, persistence, memory, events

use std::sync::Arc;

use elysian::application::{Narrator, SessionController};
use elysian::config::{load_config, print_config};
use elysian::domain::canon::pick_verse_of_day;
use elysian::infrastructure::adapters::{
    GeminiClient, GeminiClientConfig, PlaceholderProvider, PlaceholderProviderConfig, RodioSpeaker,
};
// use elysian::infrastructure::adapters::SilentSpeaker;
use elysian::infrastructure::events::EventPublisher;
use elysian::infrastructure::http::{AppState, HttpServer, ServerConfig};
use elysian::infrastructure::persistence::sled::{SledJournalStore, SledJournalStoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},elysian={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Elysian - 圣经阅读与朗读服务");
    print_config(&config);

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.storage.data_dir).await?;

    // 创建日志槽位存储
    let store_config = SledJournalStoreConfig {
        db_path: config.storage.journal_db_path().to_string_lossy().to_string(),
    };
    let journal_store = Arc::new(SledJournalStore::new(&store_config)?);

    // 创建占位经文提供器
    let scripture = Arc::new(PlaceholderProvider::new(PlaceholderProviderConfig {
        fetch_latency_ms: config.content.fetch_latency_ms,
    }));

    // 创建 Gemini 网关客户端
    let oracle = Arc::new(GeminiClient::new(GeminiClientConfig::from(&config.gemini))?);

    // 创建扬声器
    let speaker = Arc::new(RodioSpeaker::new());

    // // 无声扬声器（无声卡环境 / 测试用）
    // let speaker = Arc::new(SilentSpeaker::new());

    // 每会话开机抽取一条每日金句
    let verse_of_day = pick_verse_of_day(&mut rand::thread_rng());
    tracing::info!(reference = %verse_of_day.reference, "Verse of the day selected");

    // 创建会话控制器并引导启动
    let controller = Arc::new(SessionController::new(
        scripture,
        journal_store,
        oracle.clone(),
        verse_of_day,
    ));
    controller.bootstrap().await?;

    // 创建朗读服务
    let narrator = Arc::new(Narrator::new(oracle.clone(), speaker));

    // 创建事件发布器
    let event_publisher = Arc::new(EventPublisher::new());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_static_files(config.server.static_files.clone());
    let state = AppState::new(controller, narrator, oracle, event_publisher);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
