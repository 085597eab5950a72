//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally passing a round ID where a debate ID is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize` with `#[serde(transparent)]`
/// - `Deserialize` from a JSON integer or a numeric string
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>`, `Into<i32>` and `FromStr` implementations
///
/// IDs are opaque to the client: no range or existence checks are made,
/// the server rejects unknown identifiers. Freshly inserted rows come back
/// from the backend as decimal strings (`"debate_id": "8"`), so both wire
/// forms are accepted.
///
/// # Example
///
/// ```rust
/// # use debate_platform_core::define_id;
/// define_id!(TopicId);
/// define_id!(DebateId);
///
/// let topic_id = TopicId::new(1);
/// let debate_id = DebateId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: TopicId = debate_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(untagged)]
                enum Wire {
                    Number(i32),
                    Text(String),
                }

                match Wire::deserialize(deserializer)? {
                    Wire::Number(id) => Ok(Self(id)),
                    Wire::Text(text) => text
                        .trim()
                        .parse::<i32>()
                        .map(Self)
                        .map_err(::serde::de::Error::custom),
                }
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(TopicId);
define_id!(DebateId);
define_id!(RoundId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_matches_path_segment() {
        assert_eq!(RoundId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&DebateId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: UserId = serde_json::from_str("13").unwrap();
        assert_eq!(parsed.as_i32(), 13);
    }

    #[test]
    fn test_id_accepts_numeric_string() {
        let parsed: DebateId = serde_json::from_str(r#""8""#).unwrap();
        assert_eq!(parsed, DebateId::new(8));

        let parsed: Option<UserId> = serde_json::from_value(serde_json::json!(" 21 ")).unwrap();
        assert_eq!(parsed, Some(UserId::new(21)));

        assert!(serde_json::from_str::<RoundId>(r#""8.5""#).is_err());
        assert!(serde_json::from_str::<RoundId>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<RoundId>("true").is_err());
    }

    #[test]
    fn test_id_from_str() {
        let id: TopicId = " 5 ".parse().unwrap();
        assert_eq!(id, TopicId::new(5));
        assert!("abc".parse::<TopicId>().is_err());
    }
}
