//! Severity and inheritance resolution.
//!
//! This module turns catalog data into per-category severity tables and
//! answers parentage questions for the two config hierarchies:
//!
//! - Tier and platform-version classification in [`tier`]
//! - Per-category severity resolution in [`severity`]
//! - The legacy/flat parent tables and alias table in [`inheritance`]
//!
//! All classification is driven by editable const tables; the resolvers
//! themselves contain no category-name literals.

pub mod inheritance;
pub mod severity;
pub mod tier;

pub use inheritance::{Hierarchy, InheritanceResolver};
pub use severity::{ResolvedSeverityTable, RuleSeverity, Severity, SeverityResolver};
pub use tier::{is_error_tier, platform_version, ERROR_TIER_CATEGORIES};
