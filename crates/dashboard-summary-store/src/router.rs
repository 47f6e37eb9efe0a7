// crates/dashboard-summary-store/src/router.rs
// ============================================================================
// Module: Object Router
// Description: Scheme-based dispatch of object reads to storage backends.
// Purpose: Let one location syntax address local files and object stores.
// Dependencies: dashboard-summary-config, crate::{reader, s3}
// ============================================================================

//! ## Overview
//! The router owns one reader per configured scheme plus the filesystem
//! reader, and applies the configured object size limit to every read. A
//! scheme with no configured store fails the read; it never falls back to
//! another backend.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use dashboard_summary_config::ObjectStoreProvider;
use dashboard_summary_config::StorageConfig;

use crate::error::ObjectReadError;
use crate::location::StorageLocation;
use crate::reader::FilesystemReader;
use crate::reader::ObjectReader;
use crate::s3::S3ObjectReader;

// ============================================================================
// SECTION: Router
// ============================================================================

/// Dispatches reads by location scheme.
#[derive(Clone)]
pub struct ObjectRouter {
    /// Reader for plain paths and `file://` locations.
    filesystem: Arc<dyn ObjectReader>,
    /// Readers keyed by lowercase scheme.
    object_stores: BTreeMap<String, Arc<dyn ObjectReader>>,
    /// Maximum size of a single object in bytes.
    max_object_bytes: usize,
}

impl ObjectRouter {
    /// Creates a router that only serves the local filesystem.
    #[must_use]
    pub fn new(max_object_bytes: usize) -> Self {
        Self {
            filesystem: Arc::new(FilesystemReader),
            object_stores: BTreeMap::new(),
            max_object_bytes,
        }
    }

    /// Routes `scheme` to `reader`, replacing any earlier reader.
    #[must_use]
    pub fn with_reader(mut self, scheme: &str, reader: Arc<dyn ObjectReader>) -> Self {
        self.object_stores.insert(scheme.to_ascii_lowercase(), reader);
        self
    }

    /// Builds a router with a reader for every configured object store.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectReadError::Invalid`] when an object store cannot be
    /// configured.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, ObjectReadError> {
        let mut router = Self::new(config.max_object_bytes);
        for store in &config.object_stores {
            let reader: Arc<dyn ObjectReader> = match store.provider {
                ObjectStoreProvider::S3 => Arc::new(S3ObjectReader::connect(store).await?),
            };
            router = router.with_reader(&store.scheme, reader);
        }
        Ok(router)
    }

    /// Reads the object at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectReadError`] when no backend serves the scheme or the
    /// backend read fails.
    pub async fn read(&self, location: &str) -> Result<Vec<u8>, ObjectReadError> {
        let parsed = StorageLocation::parse(location);
        let reader = self.reader_for(&parsed)?;
        reader.read(&parsed, self.max_object_bytes).await
    }

    /// Selects the reader for a parsed location.
    fn reader_for(
        &self,
        location: &StorageLocation<'_>,
    ) -> Result<&dyn ObjectReader, ObjectReadError> {
        if location.is_filesystem() {
            return Ok(self.filesystem.as_ref());
        }
        let scheme = location.scheme.map(str::to_ascii_lowercase).unwrap_or_default();
        self.object_stores.get(&scheme).map(AsRef::as_ref).ok_or_else(|| {
            ObjectReadError::Invalid(format!("no object store configured for scheme {scheme}"))
        })
    }
}
