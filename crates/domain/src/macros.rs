//! Macro for implementing Display and FromStr for wire enums
//!
//! Dinero encodes enumerations as fixed strings (`"cubicMetre"`,
//! `"NettoCash"`, `"da-DK"`). This macro maps each variant to its wire string
//! once, and the resulting `Display`/`FromStr` pair drives serde through
//! `serde_with::{SerializeDisplay, DeserializeFromStr}`.
//!
//! # Example
//!
//! ```rust
//! use dinero_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Inbound,
//!     Outbound,
//! }
//!
//! impl_wire_enum_conversions!(Direction {
//!     Inbound => "inBound",
//!     Outbound => "outBound",
//! });
//!
//! assert_eq!(Direction::Inbound.to_string(), "inBound");
//! assert_eq!("OUTBOUND".parse::<Direction>().unwrap(), Direction::Outbound);
//! ```

/// Implements Display and FromStr traits for wire enums
///
/// - Display writes the exact wire string
/// - FromStr accepts the wire string case-insensitively
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Exact string used on the wire.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
