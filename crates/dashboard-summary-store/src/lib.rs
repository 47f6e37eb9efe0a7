// crates/dashboard-summary-store/src/lib.rs
// ============================================================================
// Module: Dashboard Summary Store Library
// Description: Storage backends for configuration and summary documents.
// Purpose: Implement the core store interfaces over files and object stores.
// Dependencies: dashboard-summary-core, dashboard-summary-config, aws-sdk-s3
// ============================================================================

//! ## Overview
//! Locations are `scheme://path` strings. Plain paths and `file://` read the
//! local filesystem; every other scheme is routed to the object store
//! configured for it. Reads are size-capped and every document is JSON.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod location;
pub mod reader;
pub mod router;
pub mod s3;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ObjectReadError;
pub use location::StorageLocation;
pub use reader::FilesystemReader;
pub use reader::ObjectReader;
pub use router::ObjectRouter;
pub use s3::S3ObjectReader;
pub use store::ObjectBackedStore;
