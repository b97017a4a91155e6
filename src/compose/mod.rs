//! Config document composition.
//!
//! - Document value types in [`document`]
//! - Template rendering and the [`Composer`] in [`composer`]
//!
//! [`generate`] is the batch entry point: it validates the inheritance
//! tables, composes every category under both hierarchies, and cross-checks
//! that the two hierarchies resolve to the same effective severities.
//!
//! # Example
//!
//! ```
//! use vue_config_gen::catalog::parse_catalog;
//! use vue_config_gen::compose::generate;
//! use vue_config_gen::resolve::InheritanceResolver;
//!
//! let (catalog, _) = parse_catalog(
//!     r#"[{"categoryId": "base", "rules": [{"ruleId": "vue/comment-directive"}]}]"#,
//! ).unwrap();
//!
//! let documents = generate(&catalog, &InheritanceResolver::new()).unwrap();
//! // base is a root in both hierarchies, so it emits two full documents.
//! assert_eq!(documents.len(), 2);
//! assert!(documents.iter().all(|d| d.is_full()));
//! ```

pub mod composer;
pub mod document;

pub use composer::Composer;
pub use document::{ConfigDocument, DocumentKind};

use crate::catalog::Catalog;
use crate::error::{ConfigGenError, Result};
use crate::resolve::{Hierarchy, InheritanceResolver};

/// Compose documents for every catalog category under both hierarchies.
pub fn generate(
    catalog: &Catalog,
    inheritance: &InheritanceResolver,
) -> Result<Vec<ConfigDocument>> {
    inheritance.validate()?;

    let composer = Composer::new(catalog, inheritance);
    let mut documents = Vec::new();
    for category in catalog.iter() {
        for hierarchy in [Hierarchy::Legacy, Hierarchy::Flat] {
            if let Some(document) = composer.compose(category, hierarchy)? {
                tracing::debug!(
                    category = %document.category_id,
                    hierarchy = %document.hierarchy,
                    file = %document.file_name(),
                    "composed document"
                );
                documents.push(document);
            }
        }
        if inheritance.in_hierarchy(&category.id, Hierarchy::Flat) {
            verify_equivalence(&composer, &category.id)?;
        }
    }
    Ok(documents)
}

/// The two hierarchies are different spellings of one severity assignment;
/// a divergence means the static tables were edited inconsistently.
fn verify_equivalence(composer: &Composer<'_>, category_id: &str) -> Result<()> {
    let legacy = composer.effective_table(category_id, Hierarchy::Legacy)?;
    let flat = composer.effective_table(category_id, Hierarchy::Flat)?;

    for (rule, severity) in legacy.iter() {
        if flat.get(rule) != Some(severity) {
            return Err(ConfigGenError::HierarchyDivergence {
                category: category_id.to_string(),
                rule: rule.to_string(),
            });
        }
    }
    for (rule, _) in flat.iter() {
        if legacy.get(rule).is_none() {
            return Err(ConfigGenError::HierarchyDivergence {
                category: category_id.to_string(),
                rule: rule.to_string(),
            });
        }
    }
    Ok(())
}
