//! Rule and category catalog.
//!
//! The catalog is the generator's only runtime input: an ordered list of
//! categories, each naming the rules it introduces, with optional per
//! platform-version default options attached to individual rules.
//!
//! - Schema definitions in [`schema`]
//! - Catalog file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use vue_config_gen::catalog::parse_catalog;
//!
//! let (catalog, issues) = parse_catalog(
//!     r#"[{"categoryId": "base", "rules": [{"ruleId": "vue/comment-directive"}]}]"#,
//! ).unwrap();
//!
//! assert!(issues.is_empty());
//! assert_eq!(catalog.get("base").unwrap().rules[0].id, "vue/comment-directive");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_catalog, parse_catalog};
pub use schema::{Catalog, Category, PlatformVersion, Rule};
