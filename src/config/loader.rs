//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `ELYSIAN_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// Gemini 凭证额外回退到 `GEMINI_API_KEY` 环境变量。
///
/// # 环境变量示例
/// - `ELYSIAN_SERVER__HOST=127.0.0.1`
/// - `ELYSIAN_SERVER__PORT=8080`
/// - `ELYSIAN_GEMINI__API_KEY=...`
/// - `ELYSIAN_STORAGE__DATA_DIR=/var/lib/elysian`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5173)?
        .set_default("gemini.api_key", "")?
        .set_default(
            "gemini.base_url",
            "https://generativelanguage.googleapis.com",
        )?
        .set_default("gemini.timeout_secs", 120)?
        .set_default("gemini.text_model", "gemini-3-flash-preview")?
        .set_default("gemini.tts_model", "gemini-2.5-flash-preview-tts")?
        .set_default("gemini.grounded_model", "gemini-2.5-flash")?
        .set_default("gemini.voice", "Charon")?
        .set_default("content.fetch_latency_ms", 400)?
        .set_default("storage.data_dir", "data")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: ELYSIAN_
    // 层级分隔符: __ (双下划线)
    // 例如: ELYSIAN_GEMINI__API_KEY=...
    builder = builder.add_source(
        Environment::with_prefix("ELYSIAN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 凭证回退：原应用只认一个 API_KEY 环境变量
    if app_config.gemini.api_key.is_empty() {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            app_config.gemini.api_key = key;
        }
    }

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证 Gemini URL
    if config.gemini.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Gemini base URL cannot be empty".to_string(),
        ));
    }

    if config.gemini.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Gemini timeout cannot be 0".to_string(),
        ));
    }

    // 验证存储目录
    if config.storage.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage data dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Gemini Base URL: {}", config.gemini.base_url);
    tracing::info!("Gemini Timeout: {}s", config.gemini.timeout_secs);
    tracing::info!("Gemini Text Model: {}", config.gemini.text_model);
    tracing::info!("Gemini TTS Model: {}", config.gemini.tts_model);
    tracing::info!("Gemini Voice: {}", config.gemini.voice);
    tracing::info!(
        "Gemini API Key: {}",
        if config.gemini.api_key.is_empty() {
            "(not set)"
        } else {
            "(set)"
        }
    );
    tracing::info!("Fetch Latency: {}ms", config.content.fetch_latency_ms);
    tracing::info!("Data Directory: {:?}", config.storage.data_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
