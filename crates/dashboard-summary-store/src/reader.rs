// crates/dashboard-summary-store/src/reader.rs
// ============================================================================
// Module: Object Readers
// Description: Size-capped raw object reads and the filesystem backend.
// Purpose: Give every backend one read contract with a hard byte limit.
// Dependencies: async-trait, tokio
// ============================================================================

//! ## Overview
//! [`ObjectReader`] returns the raw bytes of one object and never buffers more
//! than `max_bytes + 1` bytes. [`FilesystemReader`] serves plain paths and
//! `file://` locations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::error::ObjectReadError;
use crate::location::StorageLocation;

// ============================================================================
// SECTION: Reader Trait
// ============================================================================

/// Raw object reads with a size limit.
#[async_trait]
pub trait ObjectReader: Send + Sync {
    /// Reads a single object with a size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectReadError::Missing`] when the object does not exist,
    /// [`ObjectReadError::TooLarge`] when it exceeds `max_bytes`, or another
    /// variant for backend failures.
    async fn read(
        &self,
        location: &StorageLocation<'_>,
        max_bytes: usize,
    ) -> Result<Vec<u8>, ObjectReadError>;
}

// ============================================================================
// SECTION: Filesystem Reader
// ============================================================================

/// Reads objects from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemReader;

#[async_trait]
impl ObjectReader for FilesystemReader {
    async fn read(
        &self,
        location: &StorageLocation<'_>,
        max_bytes: usize,
    ) -> Result<Vec<u8>, ObjectReadError> {
        let path = location.path;
        if path.is_empty() {
            return Err(ObjectReadError::Invalid("filesystem location is empty".to_string()));
        }
        let file = tokio::fs::File::open(path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => ObjectReadError::Missing(path.to_string()),
            _ => ObjectReadError::Io(err.to_string()),
        })?;
        let metadata = file.metadata().await.map_err(|err| ObjectReadError::Io(err.to_string()))?;
        if !metadata.is_file() {
            return Err(ObjectReadError::Invalid(format!("{path} is not a regular file")));
        }
        let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
        let mut buffer = Vec::new();
        file.take(limit)
            .read_to_end(&mut buffer)
            .await
            .map_err(|err| ObjectReadError::Io(err.to_string()))?;
        if buffer.len() > max_bytes {
            return Err(ObjectReadError::TooLarge {
                path: path.to_string(),
                max_bytes,
                actual_bytes: buffer.len(),
            });
        }
        Ok(buffer)
    }
}
