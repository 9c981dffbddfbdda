//! Catalog registry for accessing all builtin signatures.

use crate::catalog::Catalog;
use crate::catalogs::builtin_catalogs;
use crate::signature::SignatureDef;

/// Central registry of all builtin signature catalogs.
///
/// Flattens the per-category catalogs into one sequence, preserving
/// catalog declaration order. The catalog set is fixed at process start
/// and never mutated.
pub struct CatalogRegistry {
    catalogs: Vec<&'static dyn Catalog>,
}

impl CatalogRegistry {
    /// Creates a registry pre-loaded with all builtin catalogs.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            catalogs: builtin_catalogs(),
        }
    }

    /// Returns an iterator over every signature definition across all catalogs.
    pub fn all_signatures(&self) -> impl Iterator<Item = &SignatureDef> {
        self.catalogs.iter().flat_map(|c| c.signatures().iter())
    }

    /// Returns the total number of signatures across all catalogs.
    #[must_use]
    pub fn signature_count(&self) -> usize {
        self.catalogs.iter().map(|c| c.signatures().len()).sum()
    }

    /// Returns the underlying slice of registered catalogs.
    #[must_use]
    pub fn catalogs(&self) -> &[&'static dyn Catalog] {
        &self.catalogs
    }
}

impl std::fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogRegistry")
            .field("catalog_count", &self.catalogs.len())
            .field("signature_count", &self.signature_count())
            .finish_non_exhaustive()
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::signature::Category;

    #[test]
    fn builtin_registry_has_catalogs_for_every_category() {
        let registry = CatalogRegistry::builtin();
        let categories: HashSet<Category> = registry.catalogs().iter().map(|c| c.category()).collect();
        assert_eq!(categories.len(), Category::ALL.len());
    }

    #[test]
    fn builtin_loads_more_than_40_signatures() {
        let registry = CatalogRegistry::builtin();
        assert!(registry.signature_count() > 40);
    }

    #[test]
    fn all_signatures_returns_every_definition() {
        let registry = CatalogRegistry::builtin();
        assert_eq!(registry.all_signatures().count(), registry.signature_count());
    }

    #[test]
    fn category_and_name_pairs_are_unique() {
        let registry = CatalogRegistry::builtin();
        let mut seen = HashSet::new();
        for signature in registry.all_signatures() {
            assert!(
                seen.insert((signature.category, signature.name)),
                "duplicate signature {}/{}",
                signature.category,
                signature.name
            );
        }
    }

    #[test]
    fn all_signatures_have_name_description_and_regex() {
        let registry = CatalogRegistry::builtin();
        for signature in registry.all_signatures() {
            assert!(!signature.name.is_empty());
            assert!(!signature.description.is_empty());
            assert!(!signature.regex.is_empty());
        }
    }

    #[test]
    fn all_signatures_preserve_catalog_declaration_order() {
        let registry = CatalogRegistry::builtin();
        let first = registry.all_signatures().next().unwrap();
        assert_eq!(first.category, Category::Cms);
        assert_eq!(first.name, "WordPress");
    }

    #[test]
    fn default_is_equivalent_to_builtin() {
        assert_eq!(
            CatalogRegistry::default().signature_count(),
            CatalogRegistry::builtin().signature_count()
        );
    }
}
