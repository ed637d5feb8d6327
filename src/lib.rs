//! Tiered weapon-balance configuration loading.
//!
//! Obtains the game's weapon table from the best available source,
//! degrading gracefully across three tiers (highest to lowest):
//! 1. Remote config file (HTTP GET, JSON or CSV)
//! 2. Local cache of the last successful remote fetch
//! 3. Compiled-in defaults
//!
//! The loader stops at the first tier that yields at least one valid
//! record. Every failure along the way — transport, file IO, parse — is
//! contained within its own tier and logged; [`ConfigLoader::load`] itself
//! never fails, and its result is empty only if the defaults are empty too.
//!
//! # Example
//!
//! ```ignore
//! use balance_config::{cache_path, default_weapons, ConfigLoader};
//!
//! let mut loader = ConfigLoader::new(
//!     "https://example.com/config/weapons.json",
//!     cache_path("/var/lib/mygame"),
//!     default_weapons(),
//! );
//! let weapons = loader.load().await;
//! ```

mod cache;
mod defaults;
mod error;
mod format;
mod loader;
mod parse;
mod weapon;

pub use defaults::{cache_path, default_weapons, CACHE_FILE_NAME};
pub use error::ConfigError;
pub use format::ConfigFormat;
pub use loader::ConfigLoader;
pub use weapon::{ConfigSource, WeaponRecord, WeaponSet};
