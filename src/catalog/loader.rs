//! Catalog file loading.
//!
//! Reads the category catalog JSON from disk, mapping missing files and
//! parse failures to path-carrying error variants. Metadata issues found
//! during conversion (unrecognized platform-version keys) are reported via
//! `tracing::warn!` and do not abort the load.

use std::fs;
use std::path::Path;

use crate::catalog::schema::{Catalog, CatalogEntry};
use crate::error::{ConfigGenError, Result};

/// Load and convert the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigGenError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigGenError::Io(e)
        }
    })?;

    let (catalog, issues) = parse_catalog(&content).map_err(|e| ConfigGenError::CatalogParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for issue in &issues {
        tracing::warn!("{issue}");
    }
    tracing::debug!(
        categories = catalog.len(),
        "loaded catalog from {}",
        path.display()
    );

    Ok(catalog)
}

/// Parse catalog JSON from a string.
///
/// Returns the catalog alongside any metadata issues so callers can decide
/// how to surface them; [`load_catalog`] logs them as warnings.
pub fn parse_catalog(content: &str) -> serde_json::Result<(Catalog, Vec<ConfigGenError>)> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(content)?;
    Ok(Catalog::from_entries(entries))
}
