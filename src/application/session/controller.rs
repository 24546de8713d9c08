//! Session Controller - 会话编排
//!
//! 持有显式会话状态，编排端口调用，把完成结果折回 reducer。
//! 取章与洞见请求用世代计数标记，过期完成直接丢弃。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::events::SessionEvent;
use super::state::{SessionState, Tab, INSIGHT_FALLBACK_TEXT};
use crate::application::error::ApplicationError;
use crate::application::ports::{JournalStorePort, OraclePort, ScriptureProviderPort};
use crate::domain::canon::{find_book, Book, VerseOfDay};
use crate::domain::journal::{Bookmark, Note, Prayer};

/// 会话控制器
pub struct SessionController {
    state: RwLock<SessionState>,
    fetch_counter: AtomicU64,
    insight_counter: AtomicU64,
    scripture: Arc<dyn ScriptureProviderPort>,
    journal: Arc<dyn JournalStorePort>,
    oracle: Arc<dyn OraclePort>,
}

impl SessionController {
    pub fn new(
        scripture: Arc<dyn ScriptureProviderPort>,
        journal: Arc<dyn JournalStorePort>,
        oracle: Arc<dyn OraclePort>,
        verse_of_day: VerseOfDay,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::new(verse_of_day)),
            fetch_counter: AtomicU64::new(0),
            insight_counter: AtomicU64::new(0),
            scripture,
            journal,
            oracle,
        }
    }

    /// 启动引导：载入日志槽位并取默认书卷第 1 章
    ///
    /// 槽位损坏在存储适配器层已降级为空列表，这里只会因
    /// 数据库本身不可用而失败
    pub async fn bootstrap(&self) -> Result<(), ApplicationError> {
        let bookmarks = self.journal.load_bookmarks().await?;
        let prayers = self.journal.load_prayers().await?;
        let notes = self.journal.load_notes().await?;

        tracing::info!(
            bookmarks = bookmarks.len(),
            prayers = prayers.len(),
            notes = notes.len(),
            "Journal slots loaded"
        );

        let book = {
            let mut state = self.state.write().await;
            state.apply(SessionEvent::JournalLoaded {
                bookmarks,
                prayers,
                notes,
            });
            state.book.clone()
        };

        self.refresh_verses(book, 1, true).await;
        Ok(())
    }

    /// 当前状态快照
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// 切换标签页
    pub async fn switch_tab(&self, tab: Tab) {
        self.state.write().await.apply(SessionEvent::TabSwitched(tab));
    }

    /// 选中书卷：章号归一并重新取章
    pub async fn select_book(&self, book_id: &str) -> Result<SessionState, ApplicationError> {
        let book = find_book(book_id)?.clone();
        self.refresh_verses(book, 1, true).await;
        Ok(self.snapshot().await)
    }

    /// 选中章：按当前书卷重新取章
    ///
    /// 章号不做范围校验，越界语义由经文提供器决定
    pub async fn select_chapter(&self, chapter: u32) -> Result<SessionState, ApplicationError> {
        if chapter == 0 {
            return Err(ApplicationError::validation("Chapter must be at least 1"));
        }
        let book = self.state.read().await.book.clone();
        self.refresh_verses(book, chapter, false).await;
        Ok(self.snapshot().await)
    }

    /// 发起一次取章并把结果折回状态
    ///
    /// 完成事件带着发起时的世代号；若期间又发起了新的取章，
    /// 旧结果会被 reducer 丢弃
    async fn refresh_verses(&self, book: Book, chapter: u32, book_changed: bool) {
        let generation = self.fetch_counter.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            if book_changed {
                state.apply(SessionEvent::BookSelected {
                    book: book.clone(),
                    generation,
                });
            } else {
                state.apply(SessionEvent::ChapterSelected {
                    chapter,
                    generation,
                });
            }
        }

        let result = self.scripture.fetch_chapter(&book, chapter).await;

        let mut state = self.state.write().await;
        let applied = match result {
            Ok(verses) => {
                let count = verses.len();
                let applied = state.apply(SessionEvent::VersesLoaded { generation, verses });
                if applied {
                    tracing::debug!(
                        book = %book.name(),
                        chapter = chapter,
                        verses = count,
                        "Chapter loaded"
                    );
                }
                applied
            }
            Err(e) => {
                tracing::warn!(
                    book = %book.name(),
                    chapter = chapter,
                    error = %e,
                    "Chapter fetch failed"
                );
                state.apply(SessionEvent::VersesFailed {
                    generation,
                    message: e.to_string(),
                })
            }
        };

        if !applied {
            tracing::debug!(
                book = %book.name(),
                chapter = chapter,
                generation = generation,
                "Stale chapter fetch discarded"
            );
        }
    }

    /// 为当前章的某一节加书签并整表落盘
    pub async fn add_bookmark(&self, verse_number: u32) -> Result<Bookmark, ApplicationError> {
        let (bookmark, bookmarks) = {
            let mut state = self.state.write().await;
            let verse = state
                .verses
                .iter()
                .find(|v| v.verse == verse_number)
                .cloned()
                .ok_or_else(|| {
                    ApplicationError::not_found("Verse", verse_number.to_string())
                })?;

            let bookmark = Bookmark::from_verse(&verse);
            state.apply(SessionEvent::BookmarkAdded(bookmark.clone()));
            (bookmark, state.bookmarks.clone())
        };

        self.journal.save_bookmarks(&bookmarks).await?;

        tracing::info!(
            bookmark_id = %bookmark.id(),
            book = %bookmark.book(),
            chapter = bookmark.chapter(),
            verse = bookmark.verse(),
            "Bookmark added"
        );
        Ok(bookmark)
    }

    /// 新建祷告并整表落盘
    pub async fn create_prayer(
        &self,
        title: &str,
        content: &str,
    ) -> Result<Prayer, ApplicationError> {
        let prayer = Prayer::new(title, content).map_err(ApplicationError::validation)?;

        let prayers = {
            let mut state = self.state.write().await;
            state.apply(SessionEvent::PrayerCreated(prayer.clone()));
            state.prayers.clone()
        };
        self.journal.save_prayers(&prayers).await?;

        tracing::info!(prayer_id = %prayer.id(), "Prayer created");
        Ok(prayer)
    }

    /// 标记祷告已应允并整表落盘
    pub async fn answer_prayer(&self, id: &str) -> Result<(), ApplicationError> {
        let prayers = {
            let mut state = self.state.write().await;
            if !state.apply(SessionEvent::PrayerAnswered { id: id.to_string() }) {
                return Err(ApplicationError::not_found("Prayer", id));
            }
            state.prayers.clone()
        };
        self.journal.save_prayers(&prayers).await?;

        tracing::info!(prayer_id = %id, "Prayer marked answered");
        Ok(())
    }

    /// 新建笔记并整表落盘
    pub async fn create_note(
        &self,
        verse_ref: &str,
        content: &str,
    ) -> Result<Note, ApplicationError> {
        let note = Note::new(verse_ref, content).map_err(ApplicationError::validation)?;

        let notes = {
            let mut state = self.state.write().await;
            state.apply(SessionEvent::NoteCreated(note.clone()));
            state.notes.clone()
        };
        self.journal.save_notes(&notes).await?;

        tracing::info!(note_id = %note.id(), verse_ref = %note.verse_ref(), "Note created");
        Ok(note)
    }

    /// 编辑笔记内容并整表落盘
    pub async fn edit_note(&self, id: &str, content: &str) -> Result<Note, ApplicationError> {
        let (note, notes) = {
            let mut state = self.state.write().await;
            if !state.apply(SessionEvent::NoteEdited {
                id: id.to_string(),
                content: content.to_string(),
            }) {
                return Err(ApplicationError::not_found("Note", id));
            }
            let note = state
                .notes
                .iter()
                .find(|n| n.id() == id)
                .cloned()
                .ok_or_else(|| ApplicationError::not_found("Note", id))?;
            (note, state.notes.clone())
        };
        self.journal.save_notes(&notes).await?;

        tracing::info!(note_id = %id, "Note edited");
        Ok(note)
    }

    /// 请求当前书卷的深度洞见
    ///
    /// 网关失败不向上抛：按原行为落地固定兜底文案
    pub async fn fetch_insight(&self) -> Result<SessionState, ApplicationError> {
        let generation = self.insight_counter.fetch_add(1, Ordering::SeqCst) + 1;

        let topic = {
            let mut state = self.state.write().await;
            state.apply(SessionEvent::InsightRequested { generation });
            state.book.name().to_string()
        };

        let text = match self.oracle.deep_insight(&topic).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(topic = %topic, error = %e, "Deep insight request failed");
                INSIGHT_FALLBACK_TEXT.to_string()
            }
        };

        let mut state = self.state.write().await;
        if !state.apply(SessionEvent::InsightArrived { generation, text }) {
            tracing::debug!(
                topic = %topic,
                generation = generation,
                "Stale insight discarded"
            );
        }
        drop(state);

        Ok(self.snapshot().await)
    }

    /// 本会话的每日金句
    pub async fn verse_of_day(&self) -> VerseOfDay {
        self.state.read().await.verse_of_day.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    use crate::application::ports::{
        GeoHint, GroundedAnswer, OracleError, ScriptureError, ScriptureProviderPort,
    };
    use crate::domain::canon::Verse;
    use crate::infrastructure::memory::InMemoryJournalStore;

    /// 立即返回 20 节占位文本并统计调用次数
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ScriptureProviderPort for CountingProvider {
        async fn fetch_chapter(
            &self,
            book: &Book,
            chapter: u32,
        ) -> Result<Vec<Verse>, ScriptureError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((1..=20)
                .map(|n| Verse {
                    book: book.name().to_string(),
                    chapter,
                    verse: n,
                    text: format!("{} {}:{}", book.name(), chapter, n),
                })
                .collect())
        }
    }

    struct FailingOracle;

    #[async_trait]
    impl crate::application::ports::OraclePort for FailingOracle {
        async fn deep_insight(&self, _topic: &str) -> Result<String, OracleError> {
            Err(OracleError::NetworkError("offline".to_string()))
        }

        async fn daily_devotional(&self) -> Result<String, OracleError> {
            Err(OracleError::NetworkError("offline".to_string()))
        }

        async fn verse_commentary(&self, _verse_text: &str) -> Result<String, OracleError> {
            Err(OracleError::NetworkError("offline".to_string()))
        }

        async fn synthesize_speech(&self, _text: &str) -> Result<Option<String>, OracleError> {
            Err(OracleError::NetworkError("offline".to_string()))
        }

        async fn locate(
            &self,
            _place: &str,
            _hint: Option<GeoHint>,
        ) -> Result<GroundedAnswer, OracleError> {
            Err(OracleError::NetworkError("offline".to_string()))
        }
    }

    fn verse_of_day() -> VerseOfDay {
        VerseOfDay {
            reference: "Psalm 23:1".to_string(),
            text: "The Lord is my shepherd; I shall not want.".to_string(),
        }
    }

    fn controller_with(
        provider: Arc<CountingProvider>,
        journal: Arc<InMemoryJournalStore>,
    ) -> SessionController {
        SessionController::new(provider, journal, Arc::new(FailingOracle), verse_of_day())
    }

    #[tokio::test]
    async fn test_bootstrap_loads_default_chapter() {
        let provider = Arc::new(CountingProvider::new());
        let controller = controller_with(provider.clone(), Arc::new(InMemoryJournalStore::new()));

        controller.bootstrap().await.unwrap();

        let state = controller.snapshot().await;
        assert_eq!(state.book.name(), "Genesis");
        assert_eq!(state.chapter, 1);
        assert_eq!(state.verses.len(), 20);
        assert!(!state.is_loading_verses);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_select_book_resets_chapter_and_fetches_once() {
        let provider = Arc::new(CountingProvider::new());
        let controller = controller_with(provider.clone(), Arc::new(InMemoryJournalStore::new()));
        controller.bootstrap().await.unwrap();
        controller.select_chapter(5).await.unwrap();

        let before = provider.calls.load(Ordering::SeqCst);
        let state = controller.select_book("psa").await.unwrap();

        assert_eq!(state.book.name(), "Psalms");
        assert_eq!(state.chapter, 1);
        assert_eq!(state.verses.len(), 20);
        assert!(state.verses.iter().all(|v| v.book == "Psalms"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), before + 1);
    }

    #[tokio::test]
    async fn test_select_unknown_book_is_not_found() {
        let controller = controller_with(
            Arc::new(CountingProvider::new()),
            Arc::new(InMemoryJournalStore::new()),
        );
        let err = controller.select_book("atlantis").await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_bookmark_appends_and_persists() {
        let journal = Arc::new(InMemoryJournalStore::new());
        let controller = controller_with(Arc::new(CountingProvider::new()), journal.clone());
        controller.bootstrap().await.unwrap();

        let bookmark = controller.add_bookmark(3).await.unwrap();
        assert_eq!(bookmark.book(), "Genesis");
        assert_eq!(bookmark.chapter(), 1);
        assert_eq!(bookmark.verse(), 3);

        let state = controller.snapshot().await;
        assert_eq!(state.bookmarks.len(), 1);
        assert_eq!(state.bookmarks[0].id(), bookmark.id());

        // 落盘后的列表与内存一致
        let stored = journal.load_bookmarks().await.unwrap();
        assert_eq!(stored, state.bookmarks);
    }

    #[tokio::test]
    async fn test_bookmark_unknown_verse_is_not_found() {
        let controller = controller_with(
            Arc::new(CountingProvider::new()),
            Arc::new(InMemoryJournalStore::new()),
        );
        controller.bootstrap().await.unwrap();

        let err = controller.add_bookmark(99).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_prayer_and_note_paths() {
        let journal = Arc::new(InMemoryJournalStore::new());
        let controller = controller_with(Arc::new(CountingProvider::new()), journal.clone());
        controller.bootstrap().await.unwrap();

        let prayer = controller
            .create_prayer("For the city", "Peace over the city")
            .await
            .unwrap();
        controller.answer_prayer(prayer.id()).await.unwrap();
        assert!(controller.snapshot().await.prayers[0].answered());

        let note = controller.create_note("Genesis 1:3", "light").await.unwrap();
        let edited = controller.edit_note(note.id(), "light, expanded").await.unwrap();
        assert_eq!(edited.content(), "light, expanded");

        assert_eq!(journal.load_prayers().await.unwrap().len(), 1);
        assert_eq!(journal.load_notes().await.unwrap().len(), 1);

        let err = controller.answer_prayer("missing").await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_insight_failure_falls_back() {
        let controller = controller_with(
            Arc::new(CountingProvider::new()),
            Arc::new(InMemoryJournalStore::new()),
        );
        controller.bootstrap().await.unwrap();

        let state = controller.fetch_insight().await.unwrap();
        assert!(!state.is_insight_loading);
        assert_eq!(state.insight.as_deref(), Some(INSIGHT_FALLBACK_TEXT));
    }
}
