//! Journal Store Port - 日志槽位存储抽象
//!
//! 三个互相独立的命名槽位（书签 / 祷告 / 笔记），每个槽位存放一个
//! JSON 序列化的列表。每次变更整表重写，不做局部更新、加锁或版本迁移。
//!
//! 读取契约:
//! - 槽位缺失 → 空列表
//! - 槽位损坏 → 告警后回退空列表（不允许让启动崩溃）
//!
//! 往返律: load(save(L)) == L

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::journal::{Bookmark, Note, Prayer};

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Journal Store Port
#[async_trait]
pub trait JournalStorePort: Send + Sync {
    async fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError>;
    async fn save_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError>;

    async fn load_prayers(&self) -> Result<Vec<Prayer>, StoreError>;
    async fn save_prayers(&self, prayers: &[Prayer]) -> Result<(), StoreError>;

    async fn load_notes(&self) -> Result<Vec<Note>, StoreError>;
    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError>;
}
