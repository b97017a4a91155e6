//! Category classification tables and predicates.
//!
//! Two independent classifications drive severity resolution:
//!
//! - **Error tier**: categories whose rules enforce at `error` level; every
//!   other category enforces at `warn`. The classification is flat — a
//!   category's tier is independent of its parent's.
//! - **Platform version**: a `vue3`-prefixed category id targets platform
//!   version 3; all other categories target version 2, whether or not they
//!   carry a version marker. Downstream consumers depend on this implicit
//!   default, so it is preserved as-is.

use crate::catalog::PlatformVersion;

/// Categories whose rules resolve to `error` severity.
pub const ERROR_TIER_CATEGORIES: &[&str] = &["base", "essential", "vue3-essential"];

/// Category id prefix marking platform-version-3 tiers.
const VUE3_PREFIX: &str = "vue3";

/// Whether rules in this category enforce at `error` level.
pub fn is_error_tier(category_id: &str) -> bool {
    ERROR_TIER_CATEGORIES.contains(&category_id)
}

/// Which platform version's default options apply in this category.
pub fn platform_version(category_id: &str) -> PlatformVersion {
    if category_id.starts_with(VUE3_PREFIX) {
        PlatformVersion::V3
    } else {
        PlatformVersion::V2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_tier_covers_foundational_categories() {
        assert!(is_error_tier("base"));
        assert!(is_error_tier("essential"));
        assert!(is_error_tier("vue3-essential"));
    }

    #[test]
    fn other_categories_are_warn_tier() {
        assert!(!is_error_tier("strongly-recommended"));
        assert!(!is_error_tier("vue3-strongly-recommended"));
        assert!(!is_error_tier("recommended"));
        assert!(!is_error_tier("vue3-recommended"));
        assert!(!is_error_tier("use-with-caution"));
        assert!(!is_error_tier("vue3-use-with-caution"));
    }

    #[test]
    fn tier_is_not_inherited() {
        // strongly-recommended extends essential (error tier) but is itself
        // warn tier; the classification is a flat lookup.
        assert!(is_error_tier("essential"));
        assert!(!is_error_tier("strongly-recommended"));
    }

    #[test]
    fn vue3_prefix_selects_version_3() {
        assert_eq!(platform_version("vue3-essential"), PlatformVersion::V3);
        assert_eq!(platform_version("vue3-recommended"), PlatformVersion::V3);
    }

    #[test]
    fn unmarked_categories_default_to_version_2() {
        assert_eq!(platform_version("base"), PlatformVersion::V2);
        assert_eq!(platform_version("essential"), PlatformVersion::V2);
        assert_eq!(platform_version("use-with-caution"), PlatformVersion::V2);
    }
}
