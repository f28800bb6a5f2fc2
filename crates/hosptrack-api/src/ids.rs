// ── Torn identifiers ──
//
// Users, factions and faction members are all positive integers on the
// Torn side. Zero means "not supplied" and has no typed representation;
// callers carry `Option<_>` instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Exclusive upper bound observed for faction IDs.
pub const FACTION_ID_UPPER_BOUND: u64 = 999_999;

macro_rules! torn_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw ID, returning `None` for zero.
            pub fn new(raw: u64) -> Option<Self> {
                (raw > 0).then_some(Self(raw))
            }

            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw: u64 = s
                    .trim()
                    .parse()
                    .map_err(|_| format!("'{s}' is not a positive integer"))?;
                Self::new(raw).ok_or_else(|| format!("'{s}' must be greater than zero"))
            }
        }
    };
}

torn_id!(
    /// A Torn player ID.
    UserId
);

torn_id!(
    /// A Torn faction ID.
    FactionId
);

torn_id!(
    /// A faction member's player ID, as keyed in the faction `members` map.
    MemberId
);

impl FactionId {
    /// Whether the ID falls inside `(0, 999999)`.
    pub fn is_in_known_range(self) -> bool {
        self.0 < FACTION_ID_UPPER_BOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_id() {
        assert!(UserId::new(0).is_none());
        assert!("0".parse::<FactionId>().is_err());
        assert!("-4".parse::<FactionId>().is_err());
        assert_eq!("10820".parse::<FactionId>().map(FactionId::get), Ok(10820));
    }

    #[test]
    fn faction_range() {
        assert!(FactionId::new(1).is_some_and(FactionId::is_in_known_range));
        assert!(FactionId::new(999_998).is_some_and(FactionId::is_in_known_range));
        assert!(!FactionId::new(999_999).is_some_and(FactionId::is_in_known_range));
    }

    #[test]
    fn member_ids_decode_from_string_map_keys() {
        let map: std::collections::BTreeMap<MemberId, u8> =
            serde_json::from_str(r#"{"42": 1, "7": 2}"#).expect("decodes");
        let keys: Vec<u64> = map.keys().map(|k| k.get()).collect();
        assert_eq!(keys, vec![7, 42]);
    }
}
