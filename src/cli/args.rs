//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Regenerate the plugin's shareable config files from the rule catalog.
#[derive(Debug, Parser)]
#[command(name = "vue-config-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the category catalog JSON
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Output directory for legacy (eslintrc) configs
    #[arg(long, default_value = "lib/configs")]
    pub legacy_dir: PathBuf,

    /// Output directory for flat configs
    #[arg(long, default_value = "configs")]
    pub flat_dir: PathBuf,

    /// Compare against existing files instead of writing; exit nonzero if stale
    #[arg(long)]
    pub check: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::parse_from(["vue-config-gen", "--catalog", "catalog.json"]);

        assert_eq!(cli.catalog, PathBuf::from("catalog.json"));
        assert_eq!(cli.legacy_dir, PathBuf::from("lib/configs"));
        assert_eq!(cli.flat_dir, PathBuf::from("configs"));
        assert!(!cli.check);
    }

    #[test]
    fn parses_check_mode_with_custom_dirs() {
        let cli = Cli::parse_from([
            "vue-config-gen",
            "--catalog",
            "catalog.json",
            "--legacy-dir",
            "out/legacy",
            "--flat-dir",
            "out/flat",
            "--check",
        ]);

        assert!(cli.check);
        assert_eq!(cli.legacy_dir, PathBuf::from("out/legacy"));
        assert_eq!(cli.flat_dir, PathBuf::from("out/flat"));
    }

    #[test]
    fn catalog_is_required() {
        assert!(Cli::try_parse_from(["vue-config-gen"]).is_err());
    }
}
