//! S3-compatible object storage provider (feature `s3`).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream as S3ByteStream;
use bytes::Bytes;
use tokio_util::io::ReaderStream;

use assignhub_core::config::storage::S3StorageConfig;
use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};

use futures::StreamExt;

/// S3-compatible storage provider.
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    client: aws_sdk_s3::Client,
    bucket: String,
    key_prefix: String,
}

impl S3StorageProvider {
    /// Create a new S3 storage provider from configuration.
    ///
    /// Credentials come from the standard AWS environment/profile chain.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 storage requires a bucket name"));
        }

        tracing::info!(
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 storage provider"
        );

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            builder = builder
                .endpoint_url(config.endpoint.clone())
                .force_path_style(true);
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            key_prefix: config.key_prefix.trim_matches('/').to_string(),
        })
    }

    /// Resolve a storage path to the full S3 object key.
    fn key(&self, path: &str) -> String {
        let clean = path.trim_start_matches('/');
        if self.key_prefix.is_empty() {
            clean.to_string()
        } else {
            format!("{}/{clean}", self.key_prefix)
        }
    }
}

#[async_trait]
impl StorageProvider for S3StorageProvider {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(self.key(path))
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    AppError::not_found(format!("File not found: {path}"))
                } else {
                    AppError::storage(format!("S3 get failed for {path}: {service_err}"))
                }
            })?;

        let reader = output.body.into_async_read();
        let stream = ReaderStream::new(reader);
        Ok(Box::pin(stream.map(|r| r.map(|b| b.into()))))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(self.key(path))
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    AppError::not_found(format!("File not found: {path}"))
                } else {
                    AppError::storage(format!("S3 get failed for {path}: {service_err}"))
                }
            })?;

        let aggregated = output.body.collect().await.map_err(|e| {
            AppError::new(
                ErrorKind::Storage,
                format!("S3 body read failed for {path}: {e}"),
            )
        })?;
        Ok(aggregated.into_bytes())
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(self.key(path))
            .body(S3ByteStream::from(data))
            .send()
            .await
            .map_err(|e| AppError::storage(format!("S3 put failed for {path}: {e}")))?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(self.key(path))
            .send()
            .await
            .map_err(|e| AppError::storage(format!("S3 delete failed for {path}: {e}")))?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(self.key(path))
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(AppError::storage(format!(
                        "S3 head failed for {path}: {service_err}"
                    )))
                }
            }
        }
    }

    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta> {
        let output = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(self.key(path))
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    AppError::not_found(format!("File not found: {path}"))
                } else {
                    AppError::storage(format!("S3 head failed for {path}: {service_err}"))
                }
            })?;

        let last_modified = output
            .last_modified()
            .and_then(|dt| chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()));

        Ok(StorageObjectMeta {
            path: path.to_string(),
            size_bytes: output.content_length().unwrap_or(0).max(0) as u64,
            last_modified,
        })
    }
}
