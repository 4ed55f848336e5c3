//! Storage manager — selects and holds the configured blob provider.

use std::sync::Arc;

use assignhub_core::config::StorageConfig;
use assignhub_core::error::AppError;
use assignhub_core::result::AppResult;
use assignhub_core::traits::storage::StorageProvider;

/// Holds the storage provider selected by configuration.
///
/// The portal uses a single backend for submission files; tests inject
/// an arbitrary provider through [`StorageManager::from_provider`].
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
}

impl StorageManager {
    /// Build the manager from configuration, constructing the provider.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn StorageProvider> = match config.provider.as_str() {
            #[cfg(feature = "local")]
            "local" => Arc::new(
                crate::providers::local::LocalStorageProvider::new(&config.local.root_path)
                    .await?,
            ),
            #[cfg(feature = "s3")]
            "s3" => Arc::new(crate::providers::s3::S3StorageProvider::new(&config.s3).await?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'"
                )));
            }
        };

        Ok(Self { provider })
    }

    /// Build the manager around an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// The active storage provider.
    pub fn provider(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.provider)
    }

    /// Check the health of the active provider.
    pub async fn health_check(&self) -> bool {
        self.provider.health_check().await.unwrap_or(false)
    }
}
