//! Data Transfer Objects
//!
//! 统一响应结构与各视图 DTO

use serde::Serialize;

use crate::application::session::{SessionState, Tab};
use crate::domain::canon::{Book, Verse, VerseOfDay};
use crate::domain::journal::{Bookmark, Note, Prayer};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Canon DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: String,
    pub name: String,
    pub section: String,
    pub chapters: u32,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            name: book.name().to_string(),
            section: book.section().to_string(),
            chapters: book.chapters(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerseResponse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl From<&Verse> for VerseResponse {
    fn from(verse: &Verse) -> Self {
        Self {
            book: verse.book.clone(),
            chapter: verse.chapter,
            verse: verse.verse,
            text: verse.text.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerseOfDayResponse {
    pub reference: String,
    pub text: String,
}

impl From<&VerseOfDay> for VerseOfDayResponse {
    fn from(vod: &VerseOfDay) -> Self {
        Self {
            reference: vod.reference.clone(),
            text: vod.text.clone(),
        }
    }
}

// ============================================================================
// Journal DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub created_at: String,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id().to_string(),
            book: bookmark.book().to_string(),
            chapter: bookmark.chapter(),
            verse: bookmark.verse(),
            text: bookmark.text().to_string(),
            created_at: bookmark.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PrayerResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub answered: bool,
    pub date: String,
}

impl From<&Prayer> for PrayerResponse {
    fn from(prayer: &Prayer) -> Self {
        Self {
            id: prayer.id().to_string(),
            title: prayer.title().to_string(),
            content: prayer.content().to_string(),
            answered: prayer.answered(),
            date: prayer.date().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub verse_ref: String,
    pub content: String,
    pub updated_at: String,
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().to_string(),
            verse_ref: note.verse_ref().to_string(),
            content: note.content().to_string(),
            updated_at: note.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Session DTOs
// ============================================================================

/// 阅读视图
#[derive(Debug, Serialize)]
pub struct ReaderViewResponse {
    pub book: BookResponse,
    pub chapter: u32,
    pub is_loading: bool,
    pub error: Option<String>,
    pub verses: Vec<VerseResponse>,
}

impl From<&SessionState> for ReaderViewResponse {
    fn from(state: &SessionState) -> Self {
        Self {
            book: BookResponse::from(&state.book),
            chapter: state.chapter,
            is_loading: state.is_loading_verses,
            error: state.reader_error.clone(),
            verses: state.verses.iter().map(VerseResponse::from).collect(),
        }
    }
}

/// 完整会话快照
#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub active_tab: Tab,
    pub reader: ReaderViewResponse,
    pub is_insight_loading: bool,
    pub insight: Option<String>,
    pub verse_of_day: VerseOfDayResponse,
    pub bookmarks: Vec<BookmarkResponse>,
    pub prayers: Vec<PrayerResponse>,
    pub notes: Vec<NoteResponse>,
}

impl From<&SessionState> for SessionStateResponse {
    fn from(state: &SessionState) -> Self {
        Self {
            active_tab: state.active_tab,
            reader: ReaderViewResponse::from(state),
            is_insight_loading: state.is_insight_loading,
            insight: state.insight.clone(),
            verse_of_day: VerseOfDayResponse::from(&state.verse_of_day),
            bookmarks: state.bookmarks.iter().map(BookmarkResponse::from).collect(),
            prayers: state.prayers.iter().map(PrayerResponse::from).collect(),
            notes: state.notes.iter().map(NoteResponse::from).collect(),
        }
    }
}
