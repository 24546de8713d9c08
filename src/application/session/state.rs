//! Session State - 显式会话状态与 reducer

use serde::{Deserialize, Serialize};

use super::events::SessionEvent;
use crate::domain::canon::{default_book, Book, Verse, VerseOfDay};
use crate::domain::journal::{Bookmark, Note, Prayer};

/// 洞见请求失败时的兜底文案
pub const INSIGHT_FALLBACK_TEXT: &str =
    "Could not reach the divine archives at this moment. Check your connection.";

/// 标签页 - 纯显示模式选择器，标签间无交叉不变量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Reader,
    Insights,
    Atlas,
    Prayer,
    Notes,
    Bookmarks,
}

/// 会话状态
///
/// 不变量:
/// - 换卷后 chapter 恢复为 1
/// - 世代号落后于当前计数的完成事件不落地
/// - 日志列表与存储保持同步（每次变更整表重写由 controller 负责）
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub active_tab: Tab,
    pub book: Book,
    pub chapter: u32,
    pub verses: Vec<Verse>,
    pub is_loading_verses: bool,
    /// 阅读视图的内联错误态（内容取章失败时呈现，不崩溃）
    pub reader_error: Option<String>,
    pub is_insight_loading: bool,
    pub insight: Option<String>,
    pub verse_of_day: VerseOfDay,
    pub bookmarks: Vec<Bookmark>,
    pub prayers: Vec<Prayer>,
    pub notes: Vec<Note>,

    /// 取章世代号（换卷/换章时推进）
    #[serde(skip)]
    pub fetch_generation: u64,
    /// 洞见世代号
    #[serde(skip)]
    pub insight_generation: u64,
}

impl SessionState {
    pub fn new(verse_of_day: VerseOfDay) -> Self {
        Self {
            active_tab: Tab::Reader,
            book: default_book().clone(),
            chapter: 1,
            verses: Vec::new(),
            is_loading_verses: false,
            reader_error: None,
            is_insight_loading: false,
            insight: None,
            verse_of_day,
            bookmarks: Vec::new(),
            prayers: Vec::new(),
            notes: Vec::new(),
            fetch_generation: 0,
            insight_generation: 0,
        }
    }

    /// 应用一个事件
    ///
    /// 返回 false 表示事件被丢弃（世代过期，或目标记录不存在）
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::TabSwitched(tab) => {
                self.active_tab = tab;
                true
            }
            SessionEvent::BookSelected { book, generation } => {
                self.book = book;
                self.chapter = 1;
                self.verses.clear();
                self.reader_error = None;
                self.is_loading_verses = true;
                self.fetch_generation = generation;
                true
            }
            SessionEvent::ChapterSelected {
                chapter,
                generation,
            } => {
                self.chapter = chapter;
                self.verses.clear();
                self.reader_error = None;
                self.is_loading_verses = true;
                self.fetch_generation = generation;
                true
            }
            SessionEvent::VersesLoaded { generation, verses } => {
                if generation != self.fetch_generation {
                    return false;
                }
                self.verses = verses;
                self.is_loading_verses = false;
                true
            }
            SessionEvent::VersesFailed {
                generation,
                message,
            } => {
                if generation != self.fetch_generation {
                    return false;
                }
                self.reader_error = Some(message);
                self.is_loading_verses = false;
                true
            }
            SessionEvent::InsightRequested { generation } => {
                self.insight = None;
                self.is_insight_loading = true;
                self.insight_generation = generation;
                true
            }
            SessionEvent::InsightArrived { generation, text } => {
                if generation != self.insight_generation {
                    return false;
                }
                self.insight = Some(text);
                self.is_insight_loading = false;
                true
            }
            SessionEvent::JournalLoaded {
                bookmarks,
                prayers,
                notes,
            } => {
                self.bookmarks = bookmarks;
                self.prayers = prayers;
                self.notes = notes;
                true
            }
            SessionEvent::BookmarkAdded(bookmark) => {
                self.bookmarks.push(bookmark);
                true
            }
            SessionEvent::PrayerCreated(prayer) => {
                self.prayers.push(prayer);
                true
            }
            SessionEvent::PrayerAnswered { id } => {
                match self.prayers.iter_mut().find(|p| p.id() == id) {
                    Some(prayer) => {
                        prayer.mark_answered();
                        true
                    }
                    None => false,
                }
            }
            SessionEvent::NoteCreated(note) => {
                self.notes.push(note);
                true
            }
            SessionEvent::NoteEdited { id, content } => {
                match self.notes.iter_mut().find(|n| n.id() == id) {
                    Some(note) => {
                        note.edit(content);
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canon::find_book;

    fn fresh_state() -> SessionState {
        SessionState::new(VerseOfDay {
            reference: "Psalm 23:1".to_string(),
            text: "The Lord is my shepherd; I shall not want.".to_string(),
        })
    }

    fn verse(book: &str, chapter: u32, verse: u32) -> Verse {
        Verse {
            book: book.to_string(),
            chapter,
            verse,
            text: format!("{} {}:{}", book, chapter, verse),
        }
    }

    #[test]
    fn test_book_selection_resets_chapter() {
        let mut state = fresh_state();
        state.chapter = 7;

        let psalms = find_book("psa").unwrap().clone();
        assert!(state.apply(SessionEvent::BookSelected {
            book: psalms,
            generation: 1,
        }));

        assert_eq!(state.book.name(), "Psalms");
        assert_eq!(state.chapter, 1);
        assert!(state.is_loading_verses);
        assert!(state.verses.is_empty());
    }

    #[test]
    fn test_stale_verses_discarded() {
        let mut state = fresh_state();
        let genesis = find_book("gen").unwrap().clone();
        let psalms = find_book("psa").unwrap().clone();

        state.apply(SessionEvent::BookSelected {
            book: genesis,
            generation: 1,
        });
        // 用户在第一次取章完成前又换了卷
        state.apply(SessionEvent::BookSelected {
            book: psalms,
            generation: 2,
        });

        // 旧世代的完成事件必须被丢弃
        let applied = state.apply(SessionEvent::VersesLoaded {
            generation: 1,
            verses: vec![verse("Genesis", 1, 1)],
        });
        assert!(!applied);
        assert!(state.verses.is_empty());
        assert!(state.is_loading_verses);

        // 当前世代正常落地
        assert!(state.apply(SessionEvent::VersesLoaded {
            generation: 2,
            verses: vec![verse("Psalms", 1, 1)],
        }));
        assert_eq!(state.verses[0].book, "Psalms");
        assert!(!state.is_loading_verses);
    }

    #[test]
    fn test_fetch_failure_is_inline_error() {
        let mut state = fresh_state();
        state.apply(SessionEvent::ChapterSelected {
            chapter: 3,
            generation: 1,
        });
        assert!(state.apply(SessionEvent::VersesFailed {
            generation: 1,
            message: "chapter store unavailable".to_string(),
        }));
        assert!(!state.is_loading_verses);
        assert_eq!(
            state.reader_error.as_deref(),
            Some("chapter store unavailable")
        );
    }

    #[test]
    fn test_stale_insight_discarded() {
        let mut state = fresh_state();
        state.apply(SessionEvent::InsightRequested { generation: 1 });
        state.apply(SessionEvent::InsightRequested { generation: 2 });

        assert!(!state.apply(SessionEvent::InsightArrived {
            generation: 1,
            text: "old".to_string(),
        }));
        assert!(state.apply(SessionEvent::InsightArrived {
            generation: 2,
            text: "new".to_string(),
        }));
        assert_eq!(state.insight.as_deref(), Some("new"));
    }

    #[test]
    fn test_prayer_answered_unknown_id_is_noop() {
        let mut state = fresh_state();
        assert!(!state.apply(SessionEvent::PrayerAnswered {
            id: "missing".to_string(),
        }));
    }
}
