//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini 网关配置
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// 占位经文配置
    #[serde(default)]
    pub content: ContentConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
            content: ContentConfig::default(),
            storage: StorageConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5173
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（如 "/" 表示根路径托管）
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_static_path() -> String {
    "/".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

/// Gemini 网关配置
///
/// api_key 为空时应用仍可启动，AI 功能在调用时报错降级
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API 凭证（亦可通过 GEMINI_API_KEY 环境变量注入）
    #[serde(default)]
    pub api_key: String,

    /// 服务基础 URL
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,

    /// 文本生成模型
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// 语音合成模型
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// 地理接地模型
    #[serde(default = "default_grounded_model")]
    pub grounded_model: String,

    /// 预置朗读音色
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_timeout() -> u64 {
    120
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_tts_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_grounded_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_voice() -> String {
    "Charon".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout(),
            text_model: default_text_model(),
            tts_model: default_tts_model(),
            grounded_model: default_grounded_model(),
            voice: default_voice(),
        }
    }
}

/// 占位经文配置
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// 模拟取章延迟（毫秒）
    #[serde(default = "default_fetch_latency")]
    pub fetch_latency_ms: u64,
}

fn default_fetch_latency() -> u64 {
    400
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: default_fetch_latency(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 日志槽位数据库目录
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// 获取 sled 数据库路径
    pub fn journal_db_path(&self) -> PathBuf {
        self.data_dir.join("journal.sled")
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5173);
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.gemini.voice, "Charon");
        assert_eq!(config.content.fetch_latency_ms, 400);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5173");
    }

    #[test]
    fn test_journal_db_path() {
        let config = StorageConfig::default();
        assert_eq!(config.journal_db_path(), PathBuf::from("data/journal.sled"));
    }
}
