//! Cross-crate trait definitions.

pub mod cache;
pub mod storage;

pub use cache::CacheProvider;
pub use storage::{ByteStream, StorageObjectMeta, StorageProvider};
