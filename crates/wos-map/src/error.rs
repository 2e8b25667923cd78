//! Error types for header mapping.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("header line is empty")]
    EmptyInput,
    #[error("unbalanced quote opened at byte {position}")]
    UnbalancedQuotes { position: usize },
    #[error("product item key '{base_key}' does not follow product_item_<index>_<field>")]
    MalformedProductItem { base_key: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
