//! # Identifiers
//!
//! String-based identifiers for the entities the optimizer touches.
//!
//! Identifiers are opaque strings assigned by the persistence layer. The
//! optimizer only compares them, so ordering is plain lexicographic
//! ordering, which the tie-break on store ids relies on.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::value_objects::{PriceId, StoreId};
//!
//! let store = StoreId::new("store-1");
//! assert_eq!(store.as_str(), "store-1");
//! assert!(StoreId::new("a") < StoreId::new("b"));
//!
//! let generated = PriceId::generate();
//! assert!(!generated.as_str().is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Creates a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is blank.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of one observed price.
    PriceId
);
string_id!(
    /// Identifier of a store.
    StoreId
);
string_id!(
    /// Identifier of a product.
    ProductId
);
string_id!(
    /// Identifier of a shopping-list item.
    ItemId
);
string_id!(
    /// Identifier of a shopping list.
    ShoppingListId
);
string_id!(
    /// Identifier of a user profile.
    UserId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let mut ids = vec![StoreId::new("s2"), StoreId::new("s10"), StoreId::new("s1")];
        ids.sort();
        assert_eq!(
            ids,
            vec![StoreId::new("s1"), StoreId::new("s10"), StoreId::new("s2")]
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn blank_detection() {
        assert!(PriceId::new("  ").is_blank());
        assert!(!PriceId::new("p1").is_blank());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("prod-9")).unwrap();
        assert_eq!(json, "\"prod-9\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductId::new("prod-9"));
    }
}
