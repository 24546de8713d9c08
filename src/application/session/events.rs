//! Session Events - 状态转移事件
//!
//! 异步完成事件（取章 / 洞见）携带发起时的世代号，
//! reducer 据此丢弃过期完成。

use super::state::Tab;
use crate::domain::canon::{Book, Verse};
use crate::domain::journal::{Bookmark, Note, Prayer};

/// 会话事件
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// 切换标签页
    TabSwitched(Tab),

    /// 选中书卷（章号归一，触发取章）
    BookSelected { book: Book, generation: u64 },

    /// 选中章（触发取章）
    ChapterSelected { chapter: u32, generation: u64 },

    /// 取章完成
    VersesLoaded { generation: u64, verses: Vec<Verse> },

    /// 取章失败（呈现为阅读视图内联错误）
    VersesFailed { generation: u64, message: String },

    /// 洞见请求发出
    InsightRequested { generation: u64 },

    /// 洞见文本返回（含兜底文案路径）
    InsightArrived { generation: u64, text: String },

    /// 启动时从存储载入三个日志列表
    JournalLoaded {
        bookmarks: Vec<Bookmark>,
        prayers: Vec<Prayer>,
        notes: Vec<Note>,
    },

    /// 追加书签
    BookmarkAdded(Bookmark),

    /// 新建祷告
    PrayerCreated(Prayer),

    /// 祷告标记已应允
    PrayerAnswered { id: String },

    /// 新建笔记
    NoteCreated(Note),

    /// 编辑笔记内容
    NoteEdited { id: String, content: String },
}
