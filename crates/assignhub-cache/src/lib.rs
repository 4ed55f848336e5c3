//! # assignhub-cache
//!
//! Cache layer for AssignHub. The only cached datum is the per-account
//! role decision, so a single in-memory (moka) provider behind the
//! [`assignhub_core::traits::CacheProvider`] trait is all the portal
//! needs.

pub mod keys;
pub mod memory;
pub mod provider;

pub use provider::CacheManager;
