//! Curated roll records
//!
//! A curated roll is a vendor-recommended combination of perks for a
//! specific weapon, sourced from a community text feed.

use serde::{Deserialize, Serialize};

/// A vendor-recommended perk combination for a single weapon.
///
/// Records are immutable once produced and have no identity beyond the
/// sequence holding them. Field names serialize in camelCase to match the
/// JSON shape downstream inventory tools consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedRoll {
    /// Stable integer identifier of the weapon's definition in the
    /// external item catalog.
    pub item_hash: u64,

    /// Perk/plug identifiers to highlight, in the order they appeared in
    /// the source line.
    pub recommended_perks: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let roll = CuratedRoll {
            item_hash: 1234,
            recommended_perks: vec![10, 20, 30],
        };

        let json = serde_json::to_value(&roll).unwrap();
        assert_eq!(json["itemHash"], 1234);
        assert_eq!(json["recommendedPerks"], serde_json::json!([10, 20, 30]));
    }

    #[test]
    fn test_json_round_trip() {
        let roll = CuratedRoll {
            item_hash: 9007199254740991,
            recommended_perks: vec![5],
        };

        let json = serde_json::to_string(&roll).unwrap();
        let back: CuratedRoll = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roll);
    }
}
