//! Canon Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanonError {
    #[error("未知书卷: {0}")]
    UnknownBook(String),
}
