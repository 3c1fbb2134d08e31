//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Actor roles in the certification workflow
///
/// A closed union of every role the system dispatches on. The stored
/// profile keeps the role as a lowercase string tag; unknown tags parse
/// as [`Role::Unset`] rather than failing, since a profile written by an
/// older version must still load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Buyer,
    Distributor,
    Inspector,
    Agency,
    #[default]
    #[serde(other)]
    Unset,
}

impl Role {
    /// Lowercase tag used in the persisted profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Buyer => "buyer",
            Role::Distributor => "distributor",
            Role::Inspector => "inspector",
            Role::Agency => "agency",
            Role::Unset => "",
        }
    }

    /// Parse a role tag, treating anything unrecognized as unset
    pub fn parse_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "farmer" => Role::Farmer,
            "buyer" => Role::Buyer,
            "distributor" => Role::Distributor,
            "inspector" => Role::Inspector,
            "agency" => Role::Agency,
            _ => Role::Unset,
        }
    }

    /// Whether a role has been chosen at all
    pub fn is_set(&self) -> bool {
        !matches!(self, Role::Unset)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Unset => write!(f, "unset"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Role::parse_tag("farmer"), Role::Farmer);
        assert_eq!(Role::parse_tag("AGENCY"), Role::Agency);
        assert_eq!(Role::parse_tag(" inspector "), Role::Inspector);
    }

    #[test]
    fn test_parse_unknown_tag_is_unset() {
        assert_eq!(Role::parse_tag(""), Role::Unset);
        assert_eq!(Role::parse_tag("admin"), Role::Unset);
    }

    #[test]
    fn test_round_trip() {
        for role in [Role::Farmer, Role::Buyer, Role::Distributor, Role::Inspector, Role::Agency] {
            assert_eq!(Role::parse_tag(role.as_str()), role);
        }
    }
}
