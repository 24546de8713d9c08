//! Session - 会话状态机
//!
//! 把原来散落的全局可变视图状态收敛为显式的 `SessionState`，
//! 所有变更经由 `SessionEvent` 的 reducer 式转移完成；
//! 异步完成事件携带世代号，过期完成被丢弃而不是覆盖新状态。

mod controller;
mod events;
mod state;

pub use controller::SessionController;
pub use events::SessionEvent;
pub use state::{SessionState, Tab, INSIGHT_FALLBACK_TEXT};
