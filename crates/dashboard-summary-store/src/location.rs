// crates/dashboard-summary-store/src/location.rs
// ============================================================================
// Module: Storage Locations
// Description: Parsing of `scheme://rest` storage locations.
// Purpose: Split locations into a backend selector and a backend path.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! A location without `://` is a plain filesystem path. `file://` locations
//! keep everything after the separator as the path, so `file://./data` and
//! `file:///srv/data` are relative and absolute paths respectively. Every
//! other scheme addresses an object store where the first path segment is the
//! bucket and the remainder is the object key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dashboard_summary_config::FILE_SCHEME;

use crate::error::ObjectReadError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator between scheme and path.
const SCHEME_SEPARATOR: &str = "://";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Parsed storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageLocation<'a> {
    /// Scheme as written, absent for plain paths.
    pub scheme: Option<&'a str>,
    /// Everything after the scheme separator.
    pub path: &'a str,
}

impl<'a> StorageLocation<'a> {
    /// Parses a raw location string.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(SCHEME_SEPARATOR) {
            Some((scheme, path)) if !scheme.is_empty() => Self {
                scheme: Some(scheme),
                path,
            },
            _ => Self {
                scheme: None,
                path: raw,
            },
        }
    }

    /// Returns true when the location reads from the local filesystem.
    #[must_use]
    pub fn is_filesystem(&self) -> bool {
        self.scheme.is_none_or(|scheme| scheme.eq_ignore_ascii_case(FILE_SCHEME))
    }

    /// Splits an object-store path into bucket and key.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectReadError::Invalid`] when either part is empty.
    pub fn bucket_and_key(&self) -> Result<(&'a str, &'a str), ObjectReadError> {
        let (bucket, key) = self
            .path
            .split_once('/')
            .ok_or_else(|| ObjectReadError::Invalid("location has no object key".to_string()))?;
        let key = key.trim_start_matches('/');
        if bucket.is_empty() || key.is_empty() {
            return Err(ObjectReadError::Invalid(
                "location must name a bucket and an object key".to_string(),
            ));
        }
        Ok((bucket, key))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
