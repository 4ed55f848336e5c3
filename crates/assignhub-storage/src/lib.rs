//! # assignhub-storage
//!
//! Blob storage for submission files behind the
//! [`assignhub_core::traits::StorageProvider`] trait: a local filesystem
//! provider (default) and an S3 provider (feature `s3`), plus the
//! [`manager::StorageManager`] that selects the configured backend and
//! the submission blob key layout.

pub mod manager;
pub mod path;
pub mod providers;

pub use manager::StorageManager;
