//! Canon Context - Value Objects

use serde::{Deserialize, Serialize};

/// 书卷分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BibleSection {
    #[serde(rename = "Old Testament")]
    OldTestament,
    #[serde(rename = "New Testament")]
    NewTestament,
    #[serde(rename = "Apocrypha")]
    Apocrypha,
    #[serde(rename = "Pseudepigrapha")]
    Pseudepigrapha,
    #[serde(rename = "Gnostic Gospels")]
    GnosticGospels,
}

impl BibleSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BibleSection::OldTestament => "Old Testament",
            BibleSection::NewTestament => "New Testament",
            BibleSection::Apocrypha => "Apocrypha",
            BibleSection::Pseudepigrapha => "Pseudepigrapha",
            BibleSection::GnosticGospels => "Gnostic Gospels",
        }
    }

    /// 全部分区，按目录显示顺序
    pub fn all() -> &'static [BibleSection] {
        &[
            BibleSection::OldTestament,
            BibleSection::NewTestament,
            BibleSection::Apocrypha,
            BibleSection::Pseudepigrapha,
            BibleSection::GnosticGospels,
        ]
    }
}

impl std::fmt::Display for BibleSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 书卷标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.is_empty() {
            return Err("书卷标识不能为空");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书卷
///
/// 目录在构建期定义，运行期不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    name: String,
    section: BibleSection,
    chapters: u32,
}

impl Book {
    pub fn new(
        id: BookId,
        name: impl Into<String>,
        section: BibleSection,
        chapters: u32,
    ) -> Result<Self, &'static str> {
        let name = name.into();
        if name.is_empty() {
            return Err("书卷名不能为空");
        }
        if chapters == 0 {
            return Err("章数必须大于 0");
        }
        Ok(Self {
            id,
            name,
            section,
            chapters,
        })
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> BibleSection {
        self.section
    }

    pub fn chapters(&self) -> u32 {
        self.chapters
    }
}

/// 经文
///
/// 按需合成，不持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// 每日金句
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseOfDay {
    pub reference: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_rejects_empty() {
        assert!(BookId::new("").is_err());
        assert!(BookId::new("gen").is_ok());
    }

    #[test]
    fn test_book_validation() {
        let id = BookId::new("gen").unwrap();
        assert!(Book::new(id.clone(), "", BibleSection::OldTestament, 50).is_err());
        assert!(Book::new(id.clone(), "Genesis", BibleSection::OldTestament, 0).is_err());

        let book = Book::new(id, "Genesis", BibleSection::OldTestament, 50).unwrap();
        assert_eq!(book.name(), "Genesis");
        assert_eq!(book.chapters(), 50);
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(BibleSection::GnosticGospels.as_str(), "Gnostic Gospels");
        assert_eq!(BibleSection::all().len(), 5);
    }
}
