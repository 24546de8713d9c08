//! In-Memory Journal Store Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::ports::{JournalStorePort, StoreError};
use crate::domain::journal::{Bookmark, Note, Prayer};

/// 内存日志存储
#[derive(Default)]
pub struct InMemoryJournalStore {
    bookmarks: Mutex<Vec<Bookmark>>,
    prayers: Mutex<Vec<Prayer>>,
    notes: Mutex<Vec<Note>>,
}

impl InMemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl JournalStorePort for InMemoryJournalStore {
    async fn load_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.bookmarks.lock().await.clone())
    }

    async fn save_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<(), StoreError> {
        *self.bookmarks.lock().await = bookmarks.to_vec();
        Ok(())
    }

    async fn load_prayers(&self) -> Result<Vec<Prayer>, StoreError> {
        Ok(self.prayers.lock().await.clone())
    }

    async fn save_prayers(&self, prayers: &[Prayer]) -> Result<(), StoreError> {
        *self.prayers.lock().await = prayers.to_vec();
        Ok(())
    }

    async fn load_notes(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.notes.lock().await.clone())
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        *self.notes.lock().await = notes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canon::Verse;

    #[tokio::test]
    async fn test_round_trip() {
        let store = InMemoryJournalStore::new();
        let bookmark = Bookmark::from_verse(&Verse {
            book: "Genesis".to_string(),
            chapter: 1,
            verse: 1,
            text: "In the beginning".to_string(),
        });

        store.save_bookmarks(&[bookmark.clone()]).await.unwrap();
        assert_eq!(store.load_bookmarks().await.unwrap(), vec![bookmark]);
    }
}
