//! Scripture Provider Port - 经文提供器抽象
//!
//! 定义按 (书卷, 章) 取经文的抽象接口，具体实现在 infrastructure/adapters 层。
//! 当前唯一实现是占位文本合成器；错误分类为真正的文本库实现预留，
//! 失败必须呈现为阅读视图的内联错误态而非崩溃。

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::canon::{Book, Verse};

/// 经文提供器错误
#[derive(Debug, Error)]
pub enum ScriptureError {
    #[error("Chapter not found: {book} chapter {chapter}")]
    ChapterNotFound { book: String, chapter: u32 },

    #[error("I/O error: {0}")]
    Io(String),
}

/// Scripture Provider Port
///
/// 不校验章号是否超出书卷章数；越界请求由实现自行决定语义
#[async_trait]
pub trait ScriptureProviderPort: Send + Sync {
    /// 取一章经文
    async fn fetch_chapter(&self, book: &Book, chapter: u32) -> Result<Vec<Verse>, ScriptureError>;
}
