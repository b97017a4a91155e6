//! Persistence boundary for composed documents.
//!
//! The generator core hands back immutable [`ConfigDocument`] values and
//! stays decoupled from how they reach disk; sinks implement
//! [`EmissionSink`]:
//!
//! - [`FsSink`] writes each document under its hierarchy's output root.
//! - [`CheckSink`] byte-compares documents against existing files and
//!   records stale paths, for `--check` runs that must not write.
//!
//! The host project's formatter pass over written files is a separate,
//! external concern.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::ConfigDocument;
use crate::error::Result;
use crate::resolve::Hierarchy;

/// Accepts composed documents for persistence.
pub trait EmissionSink {
    fn persist(&mut self, documents: &[ConfigDocument]) -> Result<()>;
}

fn target_path(legacy_root: &Path, flat_root: &Path, document: &ConfigDocument) -> PathBuf {
    let root = match document.hierarchy {
        Hierarchy::Legacy => legacy_root,
        Hierarchy::Flat => flat_root,
    };
    root.join(document.file_name())
}

/// Writes documents to the filesystem, creating output roots as needed.
pub struct FsSink {
    legacy_root: PathBuf,
    flat_root: PathBuf,
}

impl FsSink {
    pub fn new(legacy_root: impl Into<PathBuf>, flat_root: impl Into<PathBuf>) -> Self {
        Self {
            legacy_root: legacy_root.into(),
            flat_root: flat_root.into(),
        }
    }
}

impl EmissionSink for FsSink {
    fn persist(&mut self, documents: &[ConfigDocument]) -> Result<()> {
        for document in documents {
            let path = target_path(&self.legacy_root, &self.flat_root, document);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &document.body)?;
            tracing::debug!("wrote {}", path.display());
        }
        Ok(())
    }
}

/// Compares documents against existing files without writing.
pub struct CheckSink {
    legacy_root: PathBuf,
    flat_root: PathBuf,
    stale: Vec<PathBuf>,
}

impl CheckSink {
    pub fn new(legacy_root: impl Into<PathBuf>, flat_root: impl Into<PathBuf>) -> Self {
        Self {
            legacy_root: legacy_root.into(),
            flat_root: flat_root.into(),
            stale: Vec::new(),
        }
    }

    /// Paths whose on-disk content is missing or differs.
    pub fn stale(&self) -> &[PathBuf] {
        &self.stale
    }

    pub fn is_clean(&self) -> bool {
        self.stale.is_empty()
    }
}

impl EmissionSink for CheckSink {
    fn persist(&mut self, documents: &[ConfigDocument]) -> Result<()> {
        for document in documents {
            let path = target_path(&self.legacy_root, &self.flat_root, document);
            match fs::read_to_string(&path) {
                Ok(existing) if existing == document.body => {}
                _ => {
                    tracing::debug!("stale: {}", path.display());
                    self.stale.push(path);
                }
            }
        }
        Ok(())
    }
}
