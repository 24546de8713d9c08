//! Elysian - 圣经阅读与朗读服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Canon Context: 书卷目录与经文模型
//! - Journal Context: 书签 / 祷告 / 笔记
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ScriptureProvider, JournalStore, Oracle, Speaker）
//! - Session: 会话状态机（标签页 / 选中书卷章节 / 世代计数）
//! - Narration: 单飞朗读服务
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket
//! - Adapters: 占位经文提供器、Gemini 客户端、PCM 解码、扬声器
//! - Persistence: Sled 日志槽位存储
//! - Memory: JournalStore 内存实现
//! - Events: WebSocket 事件发布

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
