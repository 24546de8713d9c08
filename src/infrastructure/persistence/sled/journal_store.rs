//! Sled Journal Store Implementation
//!
//! 三个命名槽位，各存一个 JSON 序列化的列表；每次保存整槽覆写。
//! 槽位缺失读作空列表；槽位损坏告警后读作空列表（不允许拖垮启动）。

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{JournalStorePort, StoreError};
use crate::domain::journal::{Bookmark, Note, Prayer};

/// 槽位键名
const SLOT_BOOKMARKS: &str = "bookmarks-list";
const SLOT_PRAYERS: &str = "prayers-list";
const SLOT_NOTES: &str = "notes-list";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledJournalStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledJournalStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/journal.sled".to_string(),
        }
    }
}

/// Sled 日志槽位存储
pub struct SledJournalStore {
    db: Db,
}

impl SledJournalStore {
    /// 创建新的存储实例
    pub fn new(config: &SledJournalStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledJournalStore initialized");

        Ok(Self { db })
    }

    /// 打开指定路径的存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let config = SledJournalStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 读一个槽位
    ///
    /// 缺失 → 空列表；损坏 → 告警 + 空列表
    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>, StoreError> {
        match self.db.get(slot) {
            Ok(Some(raw)) => match serde_json::from_slice::<Vec<T>>(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    tracing::warn!(
                        slot = %slot,
                        error = %e,
                        "Slot content malformed, falling back to empty list"
                    );
                    Ok(Vec::new())
                }
            },
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(StoreError::DatabaseError(e.to_string())),
        }
    }

    /// 整槽覆写
    fn save_slot<T: Serialize>(&self, slot: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_vec(items)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        self.db
            .insert(slot, raw)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(slot = %slot, items = items.len(), "Slot saved");
        Ok(())
    }
}

#[async_trait]
impl JournalStorePort for SledJournalStore {
    async fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        self.load_slot(SLOT_BOOKMARKS)
    }

    async fn save_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        self.save_slot(SLOT_BOOKMARKS, bookmarks)
    }

    async fn load_prayers(&self) -> Result<Vec<Prayer>, StoreError> {
        self.load_slot(SLOT_PRAYERS)
    }

    async fn save_prayers(&self, prayers: &[Prayer]) -> Result<(), StoreError> {
        self.save_slot(SLOT_PRAYERS, prayers)
    }

    async fn load_notes(&self) -> Result<Vec<Note>, StoreError> {
        self.load_slot(SLOT_NOTES)
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        self.save_slot(SLOT_NOTES, notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::domain::canon::Verse;

    fn open_store(dir: &tempfile::TempDir) -> SledJournalStore {
        SledJournalStore::open(dir.path().join("test.sled")).unwrap()
    }

    fn sample_bookmark(verse: u32) -> Bookmark {
        Bookmark::from_verse(&Verse {
            book: "Genesis".to_string(),
            chapter: 1,
            verse,
            text: format!("Genesis 1:{}", verse),
        })
    }

    #[tokio::test]
    async fn test_missing_slots_load_empty() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        assert!(store.load_bookmarks().await.unwrap().is_empty());
        assert!(store.load_prayers().await.unwrap().is_empty());
        assert!(store.load_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bookmark_round_trip() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let bookmarks = vec![sample_bookmark(1), sample_bookmark(3)];
        store.save_bookmarks(&bookmarks).await.unwrap();

        // 往返律: load(save(L)) == L
        let loaded = store.load_bookmarks().await.unwrap();
        assert_eq!(loaded, bookmarks);
    }

    #[tokio::test]
    async fn test_round_trip_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");

        let bookmarks = vec![sample_bookmark(7)];
        {
            let store = SledJournalStore::open(&path).unwrap();
            store.save_bookmarks(&bookmarks).await.unwrap();
        }

        let store = SledJournalStore::open(&path).unwrap();
        assert_eq!(store.load_bookmarks().await.unwrap(), bookmarks);
    }

    #[tokio::test]
    async fn test_prayers_and_notes_round_trip() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let prayers = vec![Prayer::new("For the city", "Peace").unwrap()];
        let notes = vec![Note::new("Genesis 1:3", "light").unwrap()];
        store.save_prayers(&prayers).await.unwrap();
        store.save_notes(&notes).await.unwrap();

        assert_eq!(store.load_prayers().await.unwrap(), prayers);
        assert_eq!(store.load_notes().await.unwrap(), notes);
    }

    #[tokio::test]
    async fn test_malformed_slot_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        // 直接往槽位里塞坏 JSON
        store.db.insert(SLOT_BOOKMARKS, &b"{not json"[..]).unwrap();

        let loaded = store.load_bookmarks().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.save_bookmarks(&[sample_bookmark(1)]).await.unwrap();

        // 书签槽位写入不影响其他槽位
        assert!(store.load_prayers().await.unwrap().is_empty());
        assert!(store.load_notes().await.unwrap().is_empty());
    }
}
