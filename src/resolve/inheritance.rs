//! Category inheritance tables for the two config hierarchies.
//!
//! Both hierarchies are expressed as const data so the cross-track reroute
//! stays inspectable and editable without touching resolver or composer
//! code:
//!
//! - [`LEGACY_PARENTS`] — the eslintrc inheritance chain. Two parallel
//!   tracks (version 2, version 3) share `base` as root.
//! - [`FLAT_PARENTS`] — the flat-config chain, keyed by legacy category id.
//!   Categories absent from this table have no flat counterpart and emit
//!   only a legacy document.
//! - [`FLAT_ALIASES`] — where the flat hierarchy renames a category: the
//!   version-3 track takes the unprefixed names and the version-2 track
//!   moves to `vue2-` prefixed names. Absence means the id is the same in
//!   both hierarchies.

use std::collections::{HashMap, HashSet};

use crate::error::{ConfigGenError, Result};

/// Legacy (eslintrc) parent of each category; `None` marks a root.
pub const LEGACY_PARENTS: &[(&str, Option<&str>)] = &[
    ("base", None),
    ("essential", Some("base")),
    ("vue3-essential", Some("base")),
    ("strongly-recommended", Some("essential")),
    ("vue3-strongly-recommended", Some("vue3-essential")),
    ("recommended", Some("strongly-recommended")),
    ("vue3-recommended", Some("vue3-strongly-recommended")),
    ("use-with-caution", Some("recommended")),
    ("vue3-use-with-caution", Some("vue3-recommended")),
];

/// Flat-config parent of each flat-participating category, in legacy id
/// space; rendering translates through [`FLAT_ALIASES`].
pub const FLAT_PARENTS: &[(&str, Option<&str>)] = &[
    ("base", None),
    ("essential", Some("base")),
    ("strongly-recommended", Some("essential")),
    ("recommended", Some("strongly-recommended")),
    ("vue3-essential", Some("base")),
    ("vue3-strongly-recommended", Some("vue3-essential")),
    ("vue3-recommended", Some("vue3-strongly-recommended")),
];

/// Prefix the flat hierarchy gives the version-2 track's renamed files.
const FLAT_V2_PREFIX: &str = "vue2-";

/// Legacy id → flat id, for the categories the flat hierarchy renames.
pub const FLAT_ALIASES: &[(&str, &str)] = &[
    ("essential", "vue2-essential"),
    ("strongly-recommended", "vue2-strongly-recommended"),
    ("recommended", "vue2-recommended"),
    ("vue3-essential", "essential"),
    ("vue3-strongly-recommended", "strongly-recommended"),
    ("vue3-recommended", "recommended"),
];

/// Which inheritance chain a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hierarchy {
    Legacy,
    Flat,
}

impl std::fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hierarchy::Legacy => write!(f, "legacy"),
            Hierarchy::Flat => write!(f, "flat"),
        }
    }
}

/// Answers parentage and alias questions over the static tables.
pub struct InheritanceResolver {
    legacy: HashMap<&'static str, Option<&'static str>>,
    flat: HashMap<&'static str, Option<&'static str>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl InheritanceResolver {
    /// Resolver over the built-in tables.
    pub fn new() -> Self {
        Self::from_tables(LEGACY_PARENTS, FLAT_PARENTS, FLAT_ALIASES)
    }

    /// Resolver over caller-supplied tables. [`validate`](Self::validate)
    /// checks their closure.
    pub fn from_tables(
        legacy: &[(&'static str, Option<&'static str>)],
        flat: &[(&'static str, Option<&'static str>)],
        aliases: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            legacy: legacy.iter().copied().collect(),
            flat: flat.iter().copied().collect(),
            aliases: aliases.iter().copied().collect(),
        }
    }

    /// Whether the category id appears in the inheritance tables at all.
    pub fn is_known(&self, id: &str) -> bool {
        self.legacy.contains_key(id)
    }

    /// Whether the category emits a document in the given hierarchy.
    pub fn in_hierarchy(&self, id: &str, hierarchy: Hierarchy) -> bool {
        match hierarchy {
            Hierarchy::Legacy => self.legacy.contains_key(id),
            Hierarchy::Flat => self.flat.contains_key(id),
        }
    }

    /// Parent category (legacy id space), or `None` for a root.
    pub fn parent_of(&self, id: &str, hierarchy: Hierarchy) -> Result<Option<&'static str>> {
        let table = match hierarchy {
            Hierarchy::Legacy => &self.legacy,
            Hierarchy::Flat => &self.flat,
        };
        table
            .get(id)
            .copied()
            .ok_or_else(|| ConfigGenError::UnknownCategory { id: id.to_string() })
    }

    /// The flat hierarchy's name for a legacy category, where it differs.
    pub fn flat_alias(&self, id: &str) -> Option<&'static str> {
        self.aliases.get(id).copied()
    }

    /// The id a category's document is published under in the hierarchy.
    pub fn resolved_id<'a>(&self, id: &'a str, hierarchy: Hierarchy) -> &'a str {
        match hierarchy {
            Hierarchy::Legacy => id,
            Hierarchy::Flat => self.flat_alias(id).unwrap_or(id),
        }
    }

    /// Ancestor chain root-first, ending with `id` itself (legacy id space).
    pub fn chain(&self, id: &str, hierarchy: Hierarchy) -> Result<Vec<&'static str>> {
        // Resolve the caller's id to the table's own key so the returned
        // chain borrows from the static tables.
        let mut current = match hierarchy {
            Hierarchy::Legacy => self.legacy.get_key_value(id),
            Hierarchy::Flat => self.flat.get_key_value(id),
        }
        .map(|(key, _)| *key)
        .ok_or_else(|| ConfigGenError::UnknownCategory { id: id.to_string() })?;

        let mut chain = vec![current];
        let mut visited: HashSet<&str> = HashSet::from([current]);
        while let Some(parent) = self.parent_of(current, hierarchy)? {
            if !visited.insert(parent) {
                return Err(ConfigGenError::Other(anyhow::anyhow!(
                    "inheritance cycle through category '{parent}'"
                )));
            }
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        Ok(chain)
    }

    /// Check table closure: every parent and alias target must resolve to a
    /// known category, and both hierarchies must be cycle-free forests.
    pub fn validate(&self) -> Result<()> {
        for (id, parent) in self.legacy.iter().chain(self.flat.iter()) {
            if let Some(parent) = parent {
                if !self.is_known(parent) {
                    return Err(ConfigGenError::UnknownCategory {
                        id: parent.to_string(),
                    });
                }
            }
            // Walks the chain, surfacing cycles.
            self.chain(id, Hierarchy::Legacy)?;
        }
        for id in self.flat.keys() {
            if !self.is_known(id) {
                return Err(ConfigGenError::UnknownCategory { id: id.to_string() });
            }
            self.chain(id, Hierarchy::Flat)?;
        }

        // Alias targets must resolve to a known category: either a category
        // id directly (the version-3 track's unprefixed names) or a known id
        // behind the vue2 marker (the version-2 track's renamed files).
        for (category, target) in &self.aliases {
            if !self.flat.contains_key(category) {
                return Err(ConfigGenError::UnknownCategory {
                    id: category.to_string(),
                });
            }
            let resolves = self.is_known(target)
                || target
                    .strip_prefix(FLAT_V2_PREFIX)
                    .is_some_and(|id| self.is_known(id));
            if !resolves {
                return Err(ConfigGenError::UnresolvedAlias {
                    category: category.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for InheritanceResolver {
    fn default() -> Self {
        Self::new()
    }
}
