//! Per-category severity resolution.
//!
//! The resolver maps a category's own rules (inherited rules are
//! intentionally excluded; transitivity belongs to the inheritance
//! resolver) to their enforcement level, attaching default options where
//! the rule declares them for the category's platform version.
//!
//! [`ResolvedSeverityTable`] preserves insertion order because rendered
//! rule-map key order is part of the output contract consumed by the host
//! linter.

use serde_json::Value;

use crate::catalog::Category;
use crate::resolve::tier::{is_error_tier, platform_version};

/// Enforcement level assigned to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

impl Severity {
    /// The level token as it appears in emitted configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule's resolved severity: bare level, or level plus default options
/// (`[level, ...options]` in the emitted config).
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSeverity {
    Level(Severity),
    WithOptions(Severity, Vec<Value>),
}

impl RuleSeverity {
    pub fn level(&self) -> Severity {
        match self {
            RuleSeverity::Level(level) => *level,
            RuleSeverity::WithOptions(level, _) => *level,
        }
    }

    /// Render as the JSON value emitted into a rule map.
    pub fn to_value(&self) -> Value {
        match self {
            RuleSeverity::Level(level) => Value::String(level.as_str().to_string()),
            RuleSeverity::WithOptions(level, options) => {
                let mut entries = vec![Value::String(level.as_str().to_string())];
                entries.extend(options.iter().cloned());
                Value::Array(entries)
            }
        }
    }
}

/// Insertion-ordered mapping from rule id to resolved severity.
///
/// Overriding an existing rule id keeps its original position, matching the
/// object-spread semantics of the emitted configs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSeverityTable {
    entries: Vec<(String, RuleSeverity)>,
}

impl ResolvedSeverityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or override an entry; existing entries keep their position.
    pub fn insert(&mut self, rule_id: impl Into<String>, severity: RuleSeverity) {
        let rule_id = rule_id.into();
        match self.entries.iter_mut().find(|(id, _)| *id == rule_id) {
            Some((_, existing)) => *existing = severity,
            None => self.entries.push((rule_id, severity)),
        }
    }

    pub fn get(&self, rule_id: &str) -> Option<&RuleSeverity> {
        self.entries
            .iter()
            .find(|(id, _)| id == rule_id)
            .map(|(_, severity)| severity)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSeverity)> {
        self.entries
            .iter()
            .map(|(id, severity)| (id.as_str(), severity))
    }

    /// Overlay another table on top of this one, child overriding parent.
    pub fn apply(&mut self, overlay: &ResolvedSeverityTable) {
        for (rule_id, severity) in overlay.iter() {
            self.insert(rule_id, severity.clone());
        }
    }

    /// Render as an ordered JSON object mapping rule id to severity value.
    pub fn to_json_map(&self) -> serde_json::Map<String, Value> {
        self.iter()
            .map(|(id, severity)| (id.to_string(), severity.to_value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps a category to its [`ResolvedSeverityTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityResolver;

impl SeverityResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve severities for exactly the rules the category declares.
    pub fn resolve(&self, category: &Category) -> ResolvedSeverityTable {
        let level = if is_error_tier(&category.id) {
            Severity::Error
        } else {
            Severity::Warn
        };
        let version = platform_version(&category.id);

        let mut table = ResolvedSeverityTable::new();
        for rule in &category.rules {
            let severity = match rule.default_options.get(&version) {
                Some(options) => RuleSeverity::WithOptions(level, options.clone()),
                None => RuleSeverity::Level(level),
            };
            table.insert(rule.id.clone(), severity);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, PlatformVersion, Rule};
    use serde_json::json;

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Warn), "warn");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn error_tier_category_resolves_to_error() {
        let category = Category::new("essential", vec![Rule::new("vue/no-dupe-keys")]);

        let table = SeverityResolver::new().resolve(&category);

        assert_eq!(
            table.get("vue/no-dupe-keys"),
            Some(&RuleSeverity::Level(Severity::Error))
        );
    }

    #[test]
    fn warn_tier_category_resolves_to_warn() {
        let category = Category::new("strongly-recommended", vec![Rule::new("vue/attributes-order")]);

        let table = SeverityResolver::new().resolve(&category);

        assert_eq!(
            table.get("vue/attributes-order").unwrap().level(),
            Severity::Warn
        );
    }

    #[test]
    fn default_options_selected_by_category_version() {
        let rule = Rule::new("vue/attribute-hyphenation")
            .with_default_options(PlatformVersion::V2, vec![json!("always")])
            .with_default_options(PlatformVersion::V3, vec![json!("never")]);
        let v2 = Category::new("strongly-recommended", vec![rule.clone()]);
        let v3 = Category::new("vue3-strongly-recommended", vec![rule]);
        let resolver = SeverityResolver::new();

        let v2_table = resolver.resolve(&v2);
        let v3_table = resolver.resolve(&v3);

        assert_eq!(
            v2_table.get("vue/attribute-hyphenation"),
            Some(&RuleSeverity::WithOptions(Severity::Warn, vec![json!("always")]))
        );
        assert_eq!(
            v3_table.get("vue/attribute-hyphenation"),
            Some(&RuleSeverity::WithOptions(Severity::Warn, vec![json!("never")]))
        );
    }

    #[test]
    fn missing_options_for_selected_version_fall_back_to_bare_level() {
        // Only vue3 options declared; a version-2 category gets the bare level.
        let rule = Rule::new("vue/no-foo")
            .with_default_options(PlatformVersion::V3, vec![json!("always")]);
        let category = Category::new("recommended", vec![rule]);

        let table = SeverityResolver::new().resolve(&category);

        assert_eq!(
            table.get("vue/no-foo"),
            Some(&RuleSeverity::Level(Severity::Warn))
        );
    }

    #[test]
    fn resolution_is_not_transitive() {
        // The table contains exactly the category's own rules.
        let category = Category::new("recommended", vec![Rule::new("vue/order-in-components")]);

        let table = SeverityResolver::new().resolve(&category);

        assert_eq!(table.len(), 1);
        assert!(table.get("vue/no-dupe-keys").is_none());
    }

    #[test]
    fn empty_category_yields_empty_table() {
        let table = SeverityResolver::new().resolve(&Category::new("base", vec![]));
        assert!(table.is_empty());
    }

    #[test]
    fn table_preserves_insertion_order() {
        let category = Category::new(
            "base",
            vec![
                Rule::new("vue/comment-directive"),
                Rule::new("vue/jsx-uses-vars"),
            ],
        );

        let table = SeverityResolver::new().resolve(&category);
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();

        assert_eq!(ids, vec!["vue/comment-directive", "vue/jsx-uses-vars"]);
    }

    #[test]
    fn override_keeps_original_position() {
        let mut table = ResolvedSeverityTable::new();
        table.insert("vue/a", RuleSeverity::Level(Severity::Error));
        table.insert("vue/b", RuleSeverity::Level(Severity::Error));
        table.insert("vue/a", RuleSeverity::Level(Severity::Warn));

        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();

        assert_eq!(ids, vec!["vue/a", "vue/b"]);
        assert_eq!(table.get("vue/a").unwrap().level(), Severity::Warn);
    }

    #[test]
    fn apply_overlays_child_over_parent() {
        let mut parent = ResolvedSeverityTable::new();
        parent.insert("vue/a", RuleSeverity::Level(Severity::Error));
        parent.insert("vue/b", RuleSeverity::Level(Severity::Error));

        let mut child = ResolvedSeverityTable::new();
        child.insert("vue/b", RuleSeverity::Level(Severity::Warn));
        child.insert("vue/c", RuleSeverity::Level(Severity::Warn));

        parent.apply(&child);

        assert_eq!(parent.len(), 3);
        assert_eq!(parent.get("vue/a").unwrap().level(), Severity::Error);
        assert_eq!(parent.get("vue/b").unwrap().level(), Severity::Warn);
        assert_eq!(parent.get("vue/c").unwrap().level(), Severity::Warn);
    }

    #[test]
    fn to_value_renders_tuple_form() {
        let severity = RuleSeverity::WithOptions(Severity::Warn, vec![json!({"order": ["a"]})]);
        assert_eq!(severity.to_value(), json!(["warn", {"order": ["a"]}]));
    }
}
