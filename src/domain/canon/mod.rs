//! Canon Context - 书卷目录与经文模型

mod catalog;
mod errors;
mod value_objects;

pub use catalog::{catalog, default_book, find_book, pick_verse_of_day, VERSES_OF_DAY};
pub use errors::CanonError;
pub use value_objects::{BibleSection, Book, BookId, Verse, VerseOfDay};
