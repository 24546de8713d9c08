//! Placeholder Provider - 占位经文合成器
//!
//! 真正的经文文本库（SQLite / 压缩语料）明确在范围之外；
//! 本实现按固定延迟合成 20 节模板文本，永不失败。
//! 对越界章号同样照常合成，不做范围校验。

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{ScriptureError, ScriptureProviderPort};
use crate::domain::canon::{Book, Verse};

/// 每章固定节数
pub const VERSES_PER_CHAPTER: u32 = 20;

/// 占位提供器配置
#[derive(Debug, Clone)]
pub struct PlaceholderProviderConfig {
    /// 模拟取章延迟（毫秒）
    pub fetch_latency_ms: u64,
}

impl Default for PlaceholderProviderConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: 400,
        }
    }
}

/// 占位经文提供器
pub struct PlaceholderProvider {
    config: PlaceholderProviderConfig,
}

impl PlaceholderProvider {
    pub fn new(config: PlaceholderProviderConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(PlaceholderProviderConfig::default())
    }

    fn verse_text(book: &Book, chapter: u32, verse: u32) -> String {
        format!(
            "This is the placeholder text for {} Chapter {}, Verse {}. \
             The Word stands ready for the faithful reader.",
            book.name(),
            chapter,
            verse
        )
    }
}

#[async_trait]
impl ScriptureProviderPort for PlaceholderProvider {
    async fn fetch_chapter(&self, book: &Book, chapter: u32) -> Result<Vec<Verse>, ScriptureError> {
        if self.config.fetch_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.fetch_latency_ms)).await;
        }

        tracing::debug!(
            book = %book.name(),
            chapter = chapter,
            "Placeholder chapter synthesized"
        );

        Ok((1..=VERSES_PER_CHAPTER)
            .map(|verse| Verse {
                book: book.name().to_string(),
                chapter,
                verse,
                text: Self::verse_text(book, chapter, verse),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canon::find_book;

    fn instant_provider() -> PlaceholderProvider {
        PlaceholderProvider::new(PlaceholderProviderConfig { fetch_latency_ms: 0 })
    }

    #[tokio::test]
    async fn test_exactly_twenty_contiguous_verses() {
        let provider = instant_provider();
        let book = find_book("psa").unwrap();

        let verses = provider.fetch_chapter(book, 3).await.unwrap();

        assert_eq!(verses.len(), 20);
        for (i, verse) in verses.iter().enumerate() {
            assert_eq!(verse.verse, i as u32 + 1);
            assert_eq!(verse.book, "Psalms");
            assert_eq!(verse.chapter, 3);
            assert!(verse.text.contains("Psalms"));
            assert!(verse.text.contains("Chapter 3"));
            assert!(verse.text.contains(&format!("Verse {}", i + 1)));
        }
    }

    #[tokio::test]
    async fn test_out_of_range_chapter_still_synthesized() {
        // 合同规定不校验章号范围
        let provider = instant_provider();
        let book = find_book("tho").unwrap(); // 只有 1 章

        let verses = provider.fetch_chapter(book, 40).await.unwrap();
        assert_eq!(verses.len(), 20);
        assert_eq!(verses[0].chapter, 40);
    }
}
