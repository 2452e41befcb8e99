//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the request and line-item types used by order creation.

/// Failure to parse a resource identifier from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid {kind} id: {input:?}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub input: String,
}

/// Declares a string newtype id.
///
/// Any non-empty string is a valid id, so ids minted elsewhere (`"c1"`, UUIDs) can be
/// looked up as-is. Ids the actors generate themselves come from their `u32`
/// counter and read `<prefix>_<n>`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(format!(concat!($prefix, "_{}"), n))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err($crate::model::ParseIdError {
                        kind: $prefix,
                        input: s.to_string(),
                    });
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
