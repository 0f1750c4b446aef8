use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a path segment is not a valid numeric identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: {input:?}")]
pub struct ParseIdError {
    /// Which identifier was being parsed (e.g. "cart ID").
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its raw value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self).map_err(|_| ParseIdError {
                    kind: $kind,
                    input: s.to_string(),
                })
            }
        }
    };
}

numeric_id!(
    /// Identifier of a cart, unique across the store and assigned in increasing order.
    CartId,
    "cart ID"
);

numeric_id!(
    /// Identifier of an item, unique within its cart.
    CartItemId,
    "item ID"
);

numeric_id!(
    /// Catalog product identifier.
    ProductId,
    "product ID"
);

numeric_id!(
    /// Catalog category identifier.
    CategoryId,
    "category ID"
);

numeric_id!(
    /// Identifier of the user owning a cart.
    UserId,
    "user ID"
);

impl CartId {
    /// The first identifier handed out by a fresh store.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Returns the identifier following this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl CartItemId {
    /// The first item identifier within a cart.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Returns the identifier following this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}
