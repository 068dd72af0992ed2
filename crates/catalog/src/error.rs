use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode product collection: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode product collection: {0}")]
    Encode(#[source] serde_json::Error),

    /// 输入无法持久化，存储未被修改
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
