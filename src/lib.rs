//! vue-config-gen - Shareable lint-config generation for a Vue template
//! plugin.
//!
//! Given a catalog of rule metadata grouped into strictness categories, this
//! crate resolves per-rule severities and composes the plugin's config
//! artifacts in two parallel representations: the legacy eslintrc chain and
//! the flat-config chain, each with its own inheritance topology.
//!
//! # Modules
//!
//! - [`catalog`] - Rule/category data model and catalog JSON loading
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compose`] - Document templates and the config composer
//! - [`emit`] - Persistence sinks (filesystem writer, check mode)
//! - [`error`] - Error types and result aliases
//! - [`resolve`] - Tier classification, severity and inheritance resolution
//!
//! # Example
//!
//! ```
//! use vue_config_gen::catalog::parse_catalog;
//! use vue_config_gen::compose::generate;
//! use vue_config_gen::resolve::InheritanceResolver;
//!
//! let (catalog, _) = parse_catalog(
//!     r#"[
//!         {"categoryId": "base", "rules": [{"ruleId": "vue/comment-directive"}]},
//!         {"categoryId": "essential", "rules": [{"ruleId": "vue/no-dupe-keys"}]}
//!     ]"#,
//! ).unwrap();
//!
//! let documents = generate(&catalog, &InheritanceResolver::new()).unwrap();
//! let essential = documents
//!     .iter()
//!     .find(|d| d.file_name() == "essential.js" && d.parent_ref() == Some("base"))
//!     .unwrap();
//! assert!(essential.body.contains("\"vue/no-dupe-keys\": \"error\""));
//! ```

pub mod catalog;
pub mod cli;
pub mod compose;
pub mod emit;
pub mod error;
pub mod resolve;

pub use error::{ConfigGenError, Result};
