//! Weapon record definitions and the wire format shared by remote payloads
//! and the local cache.

use serde::{Deserialize, Serialize};

/// A single weapon balance entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    /// Weapon identity
    pub id: i32,
    /// Damage per hit, must be non-negative
    pub damage: f32,
    /// Seconds between uses, must be strictly positive
    pub cooldown: f32,
}

impl WeaponRecord {
    pub fn new(id: i32, damage: f32, cooldown: f32) -> Self {
        Self {
            id,
            damage,
            cooldown,
        }
    }

    /// Validity invariant: non-negative damage and a strictly positive
    /// cooldown. Records failing this are dropped during parsing rather
    /// than surfacing as loader errors.
    pub fn is_valid(&self) -> bool {
        self.damage >= 0.0 && self.cooldown > 0.0
    }
}

/// Wire wrapper matching `{"weapons": [...]}`.
///
/// Used by both the remote JSON payload and the local cache file, so a
/// cached config round-trips through the same schema the server sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponSet {
    pub weapons: Vec<WeaponRecord>,
}

/// Which tier satisfied a load cycle.
///
/// Tiers are tried in this order; the loader stops at the first one that
/// yields at least one valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Fresh fetch from the configured URL
    Remote,
    /// Local cache of the last successful remote fetch
    LocalCache,
    /// Compiled-in defaults
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_damage_is_valid() {
        assert!(WeaponRecord::new(1, 0.0, 1.0).is_valid());
    }

    #[test]
    fn test_negative_damage_is_invalid() {
        assert!(!WeaponRecord::new(1, -1.0, 1.0).is_valid());
    }

    #[test]
    fn test_zero_cooldown_is_invalid() {
        assert!(!WeaponRecord::new(1, 5.0, 0.0).is_valid());
    }

    #[test]
    fn test_weapon_set_wire_shape() {
        let json = r#"{"weapons":[{"id":1,"damage":5.0,"cooldown":1.0}]}"#;
        let set: WeaponSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.weapons, vec![WeaponRecord::new(1, 5.0, 1.0)]);
    }
}
