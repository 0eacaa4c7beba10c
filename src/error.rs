use thiserror::Error;

/// Failures of the key-value backend holding the serialized cart.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("malformed cart data: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CartResult<T> = Result<T, CartError>;
