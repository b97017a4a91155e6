//! Error types for config generation.
//!
//! This module defines [`ConfigGenError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lookup failures (unknown category, unresolved alias, divergent
//!   hierarchies) are fatal: they mean the static tables are inconsistent
//!   and every document derived from them is suspect.
//! - Metadata problems in the rule catalog (an unrecognized platform-version
//!   key) are reported at load time and the rule falls back to its bare
//!   severity; [`ConfigGenError::UnknownPlatformKey`] carries the report.
//! - Use `anyhow::Error` (via `ConfigGenError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for config generation.
#[derive(Debug, Error)]
pub enum ConfigGenError {
    /// Category id not present in the inheritance tables.
    #[error("Unknown category: {id}")]
    UnknownCategory { id: String },

    /// A flat-hierarchy alias points at a category id that does not exist.
    #[error("Alias target '{target}' for category '{category}' does not resolve to a known category")]
    UnresolvedAlias { category: String, target: String },

    /// The legacy and flat chains of a category disagree on a rule's
    /// effective severity.
    #[error("Hierarchies diverge for category '{category}' on rule '{rule}'")]
    HierarchyDivergence { category: String, rule: String },

    /// Catalog file not found at the given location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse the catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// A rule declares default options for a platform version the naming
    /// convention does not recognize.
    #[error("Rule '{rule}' declares default options for unrecognized platform key '{key}'")]
    UnknownPlatformKey { rule: String, key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for config generation.
pub type Result<T> = std::result::Result<T, ConfigGenError>;
