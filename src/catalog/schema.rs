//! Catalog data model and its JSON input shape.
//!
//! The on-disk catalog mirrors the rule metadata exported by the lint
//! plugin: an array of `{categoryId, rules}` entries where each rule may
//! carry `meta.docs.defaultOptions` keyed by platform version (`vue2`,
//! `vue3`). The raw serde structs live here next to the cleaned-up domain
//! types they convert into.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigGenError;

/// Target platform major version a set of default options applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlatformVersion {
    V2,
    V3,
}

impl PlatformVersion {
    /// Parse a `defaultOptions` key (`"vue2"` / `"vue3"`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "vue2" => Some(PlatformVersion::V2),
            "vue3" => Some(PlatformVersion::V3),
            _ => None,
        }
    }

    /// The `defaultOptions` key this version is spelled as.
    pub fn key(&self) -> &'static str {
        match self {
            PlatformVersion::V2 => "vue2",
            PlatformVersion::V3 => "vue3",
        }
    }
}

/// A single lint rule as the generator sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Globally unique rule id, e.g. `vue/attributes-order`.
    pub id: String,
    /// Default option payloads keyed by platform version.
    pub default_options: BTreeMap<PlatformVersion, Vec<Value>>,
}

impl Rule {
    /// Create a rule with no default options.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_options: BTreeMap::new(),
        }
    }

    /// Attach default options for a platform version.
    pub fn with_default_options(mut self, version: PlatformVersion, options: Vec<Value>) -> Self {
        self.default_options.insert(version, options);
        self
    }
}

/// A named strictness tier bundling the rules it introduces, in catalog
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub rules: Vec<Rule>,
}

impl Category {
    pub fn new(id: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            id: id.into(),
            rules,
        }
    }
}

/// The loaded catalog: categories in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Convert raw catalog entries, collecting metadata issues instead of
    /// failing: a rule with an unrecognized platform-version key keeps its
    /// remaining options and falls back to bare severity for the bad key.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> (Self, Vec<ConfigGenError>) {
        let mut issues = Vec::new();
        let categories = entries
            .into_iter()
            .map(|entry| {
                let rules = entry
                    .rules
                    .into_iter()
                    .map(|raw| {
                        let mut rule = Rule::new(raw.rule_id);
                        let declared = raw
                            .meta
                            .and_then(|m| m.docs)
                            .and_then(|d| d.default_options)
                            .unwrap_or_default();
                        for (key, options) in declared {
                            match PlatformVersion::from_key(&key) {
                                Some(version) => {
                                    rule.default_options.insert(version, options);
                                }
                                None => issues.push(ConfigGenError::UnknownPlatformKey {
                                    rule: rule.id.clone(),
                                    key,
                                }),
                            }
                        }
                        rule
                    })
                    .collect();
                Category::new(entry.category_id, rules)
            })
            .collect();
        (Self::new(categories), issues)
    }

    /// Categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Look up a category by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Raw catalog entry as it appears on disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub category_id: String,
    #[serde(default)]
    pub rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRule {
    pub rule_id: String,
    #[serde(default)]
    pub meta: Option<RawMeta>,
}

#[derive(Debug, Deserialize)]
pub struct RawMeta {
    #[serde(default)]
    pub docs: Option<RawDocs>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocs {
    #[serde(default)]
    pub default_options: Option<BTreeMap<String, Vec<Value>>>,
}
