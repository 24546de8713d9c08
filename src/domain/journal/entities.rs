//! Journal Context - Entities
//!
//! 三类记录共用同一套标识方案：客户端生成的随机 UUID 字符串。
//! 唯一性只靠碰撞概率保证，没有结构性约束（已知弱点，沿用原契约）。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::canon::Verse;

fn random_id() -> String {
    Uuid::new_v4().to_string()
}

/// 书签
///
/// 不变量:
/// - 创建后不可变（无更新/删除操作）
/// - 始终追加到列表末尾
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    id: String,
    book: String,
    chapter: u32,
    verse: u32,
    text: String,
    created_at: DateTime<Utc>,
}

impl Bookmark {
    /// 从一节经文创建书签
    pub fn from_verse(verse: &Verse) -> Self {
        Self {
            id: random_id(),
            book: verse.book.clone(),
            chapter: verse.chapter,
            verse: verse.verse,
            text: verse.text.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 祷告请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prayer {
    id: String,
    title: String,
    content: String,
    answered: bool,
    date: DateTime<Utc>,
}

impl Prayer {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into();
        if title.is_empty() {
            return Err("祷告标题不能为空");
        }
        Ok(Self {
            id: random_id(),
            title,
            content: content.into(),
            answered: false,
            date: Utc::now(),
        })
    }

    /// 标记为已应允
    pub fn mark_answered(&mut self) {
        self.answered = true;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// 经文笔记
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: String,
    verse_ref: String,
    content: String,
    updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(
        verse_ref: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, &'static str> {
        let verse_ref = verse_ref.into();
        if verse_ref.is_empty() {
            return Err("经文引用不能为空");
        }
        Ok(Self {
            id: random_id(),
            verse_ref,
            content: content.into(),
            updated_at: Utc::now(),
        })
    }

    /// 编辑笔记内容，刷新更新时间
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn verse_ref(&self) -> &str {
        &self.verse_ref
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_verse() -> Verse {
        Verse {
            book: "Genesis".to_string(),
            chapter: 1,
            verse: 3,
            text: "And God said, Let there be light.".to_string(),
        }
    }

    #[test]
    fn test_bookmark_copies_verse_fields() {
        let verse = sample_verse();
        let bookmark = Bookmark::from_verse(&verse);

        assert!(!bookmark.id().is_empty());
        assert_eq!(bookmark.book(), "Genesis");
        assert_eq!(bookmark.chapter(), 1);
        assert_eq!(bookmark.verse(), 3);
        assert_eq!(bookmark.text(), verse.text);
    }

    #[test]
    fn test_bookmark_ids_distinct() {
        let verse = sample_verse();
        let a = Bookmark::from_verse(&verse);
        let b = Bookmark::from_verse(&verse);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_prayer_lifecycle() {
        assert!(Prayer::new("", "...").is_err());

        let mut prayer = Prayer::new("For the city", "Peace over the city").unwrap();
        assert!(!prayer.answered());
        prayer.mark_answered();
        assert!(prayer.answered());
    }

    #[test]
    fn test_note_edit_refreshes_timestamp() {
        assert!(Note::new("", "...").is_err());

        let mut note = Note::new("Genesis 1:3", "light").unwrap();
        let before = note.updated_at();
        note.edit("light, expanded");
        assert_eq!(note.content(), "light, expanded");
        assert!(note.updated_at() >= before);
    }
}
