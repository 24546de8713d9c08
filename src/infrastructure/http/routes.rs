//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                     GET   健康检查
//! - /api/library/books            GET   书卷目录
//! - /api/library/verse_of_day     GET   每日金句
//! - /api/reader/view              GET   当前阅读视图
//! - /api/reader/book              POST  选中书卷（章号归一并取章）
//! - /api/reader/chapter           POST  选中章
//! - /api/journal/bookmarks        GET   书签列表
//! - /api/journal/bookmarks        POST  加书签
//! - /api/journal/prayers          GET   祷告列表
//! - /api/journal/prayers          POST  新建祷告
//! - /api/journal/prayers/answered POST  标记已应允
//! - /api/journal/notes            GET   笔记列表
//! - /api/journal/notes            POST  新建笔记
//! - /api/journal/notes/edit       POST  编辑笔记
//! - /api/insight/deep             POST  深度洞见（当前书卷）
//! - /api/insight/devotional       POST  每日灵修
//! - /api/insight/commentary       POST  经文注释
//! - /api/atlas/locate             POST  地名接地查询
//! - /api/narration/speak          POST  朗读经文（异步，WS 通知完成）
//! - /api/session/state            GET   完整会话快照
//! - /api/session/tab              POST  切换标签页
//! - /ws/events                    WS    全局事件（取章落地 / 朗读生命周期）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/events", get(handlers::events_websocket_handler))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/library", library_routes())
        .nest("/reader", reader_routes())
        .nest("/journal", journal_routes())
        .nest("/insight", insight_routes())
        .nest("/atlas", atlas_routes())
        .nest("/narration", narration_routes())
        .nest("/session", session_routes())
}

/// Library 路由
fn library_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(handlers::list_books))
        .route("/verse_of_day", get(handlers::verse_of_day))
}

/// Reader 路由
fn reader_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/view", get(handlers::reader_view))
        .route("/book", post(handlers::select_book))
        .route("/chapter", post(handlers::select_chapter))
}

/// Journal 路由
fn journal_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/bookmarks",
            get(handlers::list_bookmarks).post(handlers::add_bookmark),
        )
        .route(
            "/prayers",
            get(handlers::list_prayers).post(handlers::create_prayer),
        )
        .route("/prayers/answered", post(handlers::answer_prayer))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/notes/edit", post(handlers::edit_note))
}

/// Insight 路由
fn insight_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deep", post(handlers::deep_insight))
        .route("/devotional", post(handlers::daily_devotional))
        .route("/commentary", post(handlers::verse_commentary))
}

/// Atlas 路由
fn atlas_routes() -> Router<Arc<AppState>> {
    Router::new().route("/locate", post(handlers::locate))
}

/// Narration 路由
fn narration_routes() -> Router<Arc<AppState>> {
    Router::new().route("/speak", post(handlers::speak))
}

/// Session 路由
fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/state", get(handlers::session_state))
        .route("/tab", post(handlers::switch_tab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http::header::CONTENT_TYPE;
    use tower::util::ServiceExt;

    use crate::application::{Narrator, SessionController};
    use crate::domain::canon::VerseOfDay;
    use crate::infrastructure::adapters::{
        FixedOracle, PlaceholderProvider, PlaceholderProviderConfig, SilentSpeaker,
    };
    use crate::infrastructure::events::EventPublisher;
    use crate::infrastructure::memory::InMemoryJournalStore;

    async fn test_state() -> Arc<AppState> {
        let scripture = Arc::new(PlaceholderProvider::new(PlaceholderProviderConfig {
            fetch_latency_ms: 0,
        }));
        let journal = Arc::new(InMemoryJournalStore::new());
        let oracle = Arc::new(FixedOracle::new());

        let controller = Arc::new(SessionController::new(
            scripture,
            journal,
            oracle.clone(),
            VerseOfDay {
                reference: "Psalm 23:1".to_string(),
                text: "The Lord is my shepherd; I shall not want.".to_string(),
            },
        ));
        controller.bootstrap().await.unwrap();

        let narrator = Arc::new(Narrator::new(oracle.clone(), Arc::new(SilentSpeaker::new())));

        Arc::new(AppState::new(
            controller,
            narrator,
            oracle,
            Arc::new(EventPublisher::new()),
        ))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = create_routes().with_state(test_state().await);
        let response = app
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_books() {
        let app = create_routes().with_state(test_state().await);
        let response = app
            .oneshot(
                Request::get("/api/library/books")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"][0]["name"], "Genesis");
    }

    #[tokio::test]
    async fn test_select_book_and_bookmark_scenario() {
        let state = test_state().await;

        // 换卷到诗篇
        let response = create_routes()
            .with_state(state.clone())
            .oneshot(
                Request::post("/api/reader/book")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"id":"psa"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["book"]["name"], "Psalms");
        assert_eq!(json["data"]["chapter"], 1);
        assert_eq!(json["data"]["verses"].as_array().unwrap().len(), 20);

        // 给第 3 节加书签
        let response = create_routes()
            .with_state(state.clone())
            .oneshot(
                Request::post("/api/journal/bookmarks")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"verse":3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["book"], "Psalms");
        assert_eq!(json["data"]["verse"], 3);

        // 书签列表恰好一条
        let response = create_routes()
            .with_state(state)
            .oneshot(
                Request::get("/api/journal/bookmarks")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_book_is_errno_404() {
        let app = create_routes().with_state(test_state().await);
        let response = app
            .oneshot(
                Request::post("/api/reader/book")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"id":"atlantis"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["errno"], 404);
    }

    #[tokio::test]
    async fn test_narration_speak_starts() {
        let state = test_state().await;

        // FixedOracle 默认无音频载荷：started 之后很快回落
        let response = create_routes()
            .with_state(state.clone())
            .oneshot(
                Request::post("/api/narration/speak")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text":"The Lord is my shepherd"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "started");
    }
}
