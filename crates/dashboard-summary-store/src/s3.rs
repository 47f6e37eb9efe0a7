// crates/dashboard-summary-store/src/s3.rs
// ============================================================================
// Module: S3 Object Reader
// Description: S3-compatible object reads for configuration and summaries.
// Purpose: Serve object-store schemes through aws-sdk-s3.
// Dependencies: aws-config, aws-sdk-s3, tokio
// ============================================================================

//! ## Overview
//! One [`S3ObjectReader`] serves one configured scheme. Locations name the
//! bucket in their first path segment, so a single reader can address any
//! bucket the credentials allow. Storage is untrusted: object sizes are
//! checked against the declared content length and again while streaming.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use dashboard_summary_config::ObjectStoreConfig;
use tokio::io::AsyncReadExt;

use crate::error::ObjectReadError;
use crate::location::StorageLocation;
use crate::reader::ObjectReader;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Streaming read chunk size in bytes.
const READ_CHUNK_BYTES: usize = 8192;

// ============================================================================
// SECTION: S3 Reader
// ============================================================================

/// S3-backed object reader.
#[derive(Debug, Clone)]
pub struct S3ObjectReader {
    /// Underlying S3 client.
    client: Client,
}

impl S3ObjectReader {
    /// Builds a reader from object-store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectReadError::Invalid`] when the configuration is invalid.
    pub async fn connect(config: &ObjectStoreConfig) -> Result<Self, ObjectReadError> {
        config.validate().map_err(|err| ObjectReadError::Invalid(err.to_string()))?;
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.trim());
        }
        let shared_config = loader.load().await;
        let mut s3_builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if config.force_path_style {
            s3_builder = s3_builder.force_path_style(true);
        }
        Ok(Self {
            client: Client::from_conf(s3_builder.build()),
        })
    }
}

#[async_trait]
impl ObjectReader for S3ObjectReader {
    async fn read(
        &self,
        location: &StorageLocation<'_>,
        max_bytes: usize,
    ) -> Result<Vec<u8>, ObjectReadError> {
        let (bucket, key) = location.bucket_and_key()?;
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| classify_get_error(&err, key))?;
        if let Some(length) = output.content_length() {
            let actual_bytes = usize::try_from(length).unwrap_or(usize::MAX);
            if actual_bytes > max_bytes {
                return Err(ObjectReadError::TooLarge {
                    path: key.to_string(),
                    max_bytes,
                    actual_bytes,
                });
            }
        }
        let mut reader = output.body.into_async_read();
        let mut buffer = Vec::new();
        let mut total_bytes = 0usize;
        let mut chunk = [0u8; READ_CHUNK_BYTES];
        loop {
            let read =
                reader.read(&mut chunk).await.map_err(|err| ObjectReadError::Io(err.to_string()))?;
            if read == 0 {
                break;
            }
            total_bytes = total_bytes
                .checked_add(read)
                .ok_or_else(|| ObjectReadError::Io("object size overflow".to_string()))?;
            if total_bytes > max_bytes {
                return Err(ObjectReadError::TooLarge {
                    path: key.to_string(),
                    max_bytes,
                    actual_bytes: total_bytes,
                });
            }
            buffer.extend_from_slice(&chunk[.. read]);
        }
        Ok(buffer)
    }
}

/// Separates absent objects from every other get failure.
fn classify_get_error<R>(err: &SdkError<GetObjectError, R>, key: &str) -> ObjectReadError {
    if err.as_service_error().is_some_and(GetObjectError::is_no_such_key) {
        ObjectReadError::Missing(key.to_string())
    } else {
        ObjectReadError::Backend(err.to_string())
    }
}
