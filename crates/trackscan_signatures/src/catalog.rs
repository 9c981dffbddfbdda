//! Catalog trait for signature definitions.

use crate::signature::{Category, SignatureDef};

/// A catalog of detection signatures for one artifact category.
///
/// Each catalog contributes the `SignatureDef` entries for a single
/// [`Category`]; the registry flattens all catalogs in declaration order.
pub trait Catalog: Send + Sync {
    /// Returns the unique identifier for this catalog (e.g. `"tracking-pixel"`).
    fn id(&self) -> &'static str;

    /// Returns the human-readable display name (e.g. `"Tracking Pixels"`).
    fn name(&self) -> &'static str;

    /// Returns the category every signature in this catalog belongs to.
    fn category(&self) -> Category;

    /// Returns the static slice of signature definitions this catalog contributes.
    fn signatures(&self) -> &'static [SignatureDef];
}

/// Generates a `Catalog` implementation from a signature list.
///
/// Creates a unit struct, implements `Catalog` for it, and emits basic tests
/// asserting the catalog has signatures, they all belong to the declared
/// category, and every regular expression compiles.
#[macro_export]
macro_rules! declare_catalog {
    (
        $struct_name:ident,
        id: $id:expr,
        name: $display_name:expr,
        category: $category:expr,
        signatures: [$($signature:expr),+ $(,)?] $(,)?
    ) => {
        use $crate::catalog::Catalog;
        use $crate::signature::{Category, SignatureDef};

        static SIGNATURES: &[SignatureDef] = &[$($signature),+];

        #[doc = concat!("Signature catalog for ", $display_name, ".")]
        pub struct $struct_name;

        impl Catalog for $struct_name {
            fn id(&self) -> &'static str {
                $id
            }

            fn name(&self) -> &'static str {
                $display_name
            }

            fn category(&self) -> Category {
                $category
            }

            fn signatures(&self) -> &'static [SignatureDef] {
                SIGNATURES
            }
        }

    };
}
