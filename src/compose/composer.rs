//! Document composition.
//!
//! Renders the body of every config artifact from a category, the severity
//! resolver, and the inheritance tables. The templates reproduce the emitted
//! format byte-for-byte (banner, type annotations, wiring, and the
//! trailing-newline differences between document shapes); the host project's
//! formatter normalizes quoting style after files are written, which stays
//! outside this crate.

use serde_json::Value;

use crate::catalog::{Catalog, Category};
use crate::compose::document::{ConfigDocument, DocumentKind};
use crate::error::{ConfigGenError, Result};
use crate::resolve::{Hierarchy, InheritanceResolver, ResolvedSeverityTable, SeverityResolver};

const BANNER: &str = "/*
 * IMPORTANT!
 * This file has been automatically generated,
 * in order to update its content execute \"npm run update\"
 */
";

/// Composes config documents for categories.
///
/// Pure with respect to its inputs: the same catalog and tables always
/// produce structurally identical documents.
pub struct Composer<'a> {
    catalog: &'a Catalog,
    inheritance: &'a InheritanceResolver,
    severity: SeverityResolver,
}

impl<'a> Composer<'a> {
    pub fn new(catalog: &'a Catalog, inheritance: &'a InheritanceResolver) -> Self {
        Self {
            catalog,
            inheritance,
            severity: SeverityResolver::new(),
        }
    }

    /// Compose the document for `category` in `hierarchy`.
    ///
    /// Returns `Ok(None)` when the category has no counterpart in the
    /// hierarchy (the `use-with-caution` tiers in the flat chain), and a
    /// lookup error when the category is missing from the tables entirely.
    pub fn compose(
        &self,
        category: &Category,
        hierarchy: Hierarchy,
    ) -> Result<Option<ConfigDocument>> {
        if !self.inheritance.is_known(&category.id) {
            return Err(ConfigGenError::UnknownCategory {
                id: category.id.clone(),
            });
        }
        if !self.inheritance.in_hierarchy(&category.id, hierarchy) {
            return Ok(None);
        }

        let parent = self.inheritance.parent_of(&category.id, hierarchy)?;
        let resolved_id = self
            .inheritance
            .resolved_id(&category.id, hierarchy)
            .to_string();

        let (kind, body) = match (hierarchy, parent) {
            (Hierarchy::Legacy, None) => {
                (DocumentKind::Full, legacy_full(&self.render_rules(category)?))
            }
            (Hierarchy::Flat, None) => {
                (DocumentKind::Full, flat_full(&self.render_rules(category)?))
            }
            (Hierarchy::Legacy, Some(parent)) => {
                // The original generator only terminates the file with a
                // newline when the category also has a flat counterpart.
                let trailing_newline = self.inheritance.in_hierarchy(&category.id, Hierarchy::Flat);
                (
                    DocumentKind::Delta {
                        parent: parent.to_string(),
                    },
                    legacy_delta(parent, &self.render_rules(category)?, trailing_newline),
                )
            }
            (Hierarchy::Flat, Some(parent)) => {
                let parent_ref = self.inheritance.resolved_id(parent, Hierarchy::Flat);
                (
                    DocumentKind::Delta {
                        parent: parent_ref.to_string(),
                    },
                    // The flat delta re-exports the legacy artifact's rule
                    // table instead of rendering its own copy.
                    flat_delta(parent_ref, &category.id),
                )
            }
        };

        Ok(Some(ConfigDocument {
            category_id: category.id.clone(),
            resolved_id,
            hierarchy,
            kind,
            body,
        }))
    }

    /// Render a category's severity table as an ordered JSON object.
    pub fn render_rules(&self, category: &Category) -> Result<String> {
        let map = self.severity.resolve(category).to_json_map();
        serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| anyhow::Error::from(e).into())
    }

    /// Effective severity table for a category: its ancestor chain merged
    /// root-first, child entries overriding parent entries.
    pub fn effective_table(
        &self,
        category_id: &str,
        hierarchy: Hierarchy,
    ) -> Result<ResolvedSeverityTable> {
        let mut table = ResolvedSeverityTable::new();
        for ancestor in self.inheritance.chain(category_id, hierarchy)? {
            let category = self
                .catalog
                .get(ancestor)
                .ok_or_else(|| ConfigGenError::UnknownCategory {
                    id: ancestor.to_string(),
                })?;
            table.apply(&self.severity.resolve(category));
        }
        Ok(table)
    }
}

fn legacy_full(rules: &str) -> String {
    format!(
        "{BANNER}/** @type {{import('eslint').Linter.Config}} */
module.exports = {{
  parser: require.resolve('vue-eslint-parser'),
  parserOptions: {{
    ecmaVersion: 2020,
    sourceType: 'module'
  }},
  env: {{
    browser: true,
    es6: true
  }},
  plugins: [
    'vue'
  ],
  rules: {rules}
}}
"
    )
}

fn flat_full(rules: &str) -> String {
    format!(
        "{BANNER}/** @type {{import('eslint').Linter.FlatConfig[]}} */
module.exports = [
  {{
    files: ['**/*.vue'],
    languageOptions: {{
      parser: /** @type {{any}} */ (require('vue-eslint-parser')),
      ecmaVersion: 'latest',
      sourceType: 'module',
    }},
    processor: require('../lib/processor'),
  }},
  {{
    plugins: {{ vue: /** @type {{any}} */ (require('../lib/index')) }},
    rules: {rules},
  }}
]
"
    )
}

fn legacy_delta(parent: &str, rules: &str, trailing_newline: bool) -> String {
    let newline = if trailing_newline { "\n" } else { "" };
    format!(
        "{BANNER}/** @type {{import('eslint').Linter.Config}} */
module.exports = {{
  extends: require.resolve('./{parent}'),
  rules: {rules}
}}{newline}"
    )
}

fn flat_delta(parent_ref: &str, category_id: &str) -> String {
    format!(
        "{BANNER}/** @type {{import('eslint').Linter.FlatConfig[]}} */
module.exports = [
  ...require('./{parent_ref}'),
  {{
    rules: /** @type {{any}} */ (
      require('../lib/configs/{category_id}').rules
    )
  }}
]
"
    )
}
