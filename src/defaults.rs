//! Compiled-in fallback values.
//!
//! These are the last tier of the pipeline: used verbatim when both the
//! remote fetch and the local cache yield nothing. The embedding
//! application may supply its own set instead.

use crate::weapon::WeaponRecord;
use std::path::{Path, PathBuf};

/// Cache file name under the host's persistent data directory.
pub const CACHE_FILE_NAME: &str = "weapon_config.json";

/// The stock weapon set compiled into the binary.
///
/// Defaults are assumed valid; the loader never re-validates them.
pub fn default_weapons() -> Vec<WeaponRecord> {
    vec![
        WeaponRecord::new(1, 5.0, 1.0),
        WeaponRecord::new(2, 10.0, 0.8),
    ]
}

/// Cache path under a host-supplied persistent data directory.
pub fn cache_path(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join(CACHE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weapons_are_valid() {
        let weapons = default_weapons();
        assert_eq!(weapons.len(), 2);
        assert!(weapons.iter().all(WeaponRecord::is_valid));
        assert_eq!(weapons[0], WeaponRecord::new(1, 5.0, 1.0));
        assert_eq!(weapons[1], WeaponRecord::new(2, 10.0, 0.8));
    }

    #[test]
    fn test_cache_path() {
        assert_eq!(
            cache_path("/data"),
            PathBuf::from("/data/weapon_config.json")
        );
    }
}
