//! The tiered load pipeline.

use crate::cache;
use crate::error::ConfigError;
use crate::format::ConfigFormat;
use crate::parse;
use crate::weapon::{ConfigSource, WeaponRecord};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Loads the weapon table from the best available source.
///
/// Tiers are tried in strict priority order — remote fetch, then the local
/// cache of the last successful fetch, then compiled-in defaults — stopping
/// at the first tier that yields at least one valid record. Every external
/// failure (network, file, parse) is contained within its own tier and
/// logged; [`ConfigLoader::load`] itself never fails.
pub struct ConfigLoader {
    source_url: String,
    cache_path: PathBuf,
    format: ConfigFormat,
    client: reqwest::Client,
    defaults: Vec<WeaponRecord>,
    weapons: Vec<WeaponRecord>,
    source: ConfigSource,
}

impl ConfigLoader {
    /// Create a loader for the given remote URL, cache file path, and
    /// default weapon set.
    ///
    /// The payload format is decided here, once, from the URL's extension
    ///hint; see [`ConfigFormat::for_url`].
    pub fn new(
        source_url: impl Into<String>,
        cache_path: impl Into<PathBuf>,
        defaults: Vec<WeaponRecord>,
    ) -> Self {
        let source_url = source_url.into();
        let format = ConfigFormat::for_url(&source_url);
        Self {
            source_url,
            cache_path: cache_path.into(),
            format,
            client: reqwest::Client::new(),
            defaults,
            weapons: Vec::new(),
            source: ConfigSource::Default,
        }
    }

    /// Use a preconfigured HTTP client.
    ///
    /// Timeouts and cancellation follow whatever the client is set up with;
    /// a timed-out fetch is treated like any other transport failure.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Override the format picked from the URL suffix.
    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    /// The collection produced by the most recent load cycle.
    pub fn weapons(&self) -> &[WeaponRecord] {
        &self.weapons
    }

    /// Which tier satisfied the most recent load cycle.
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Run one load cycle.
    ///
    /// The remote fetch is the only suspension point on the hot path; at
    /// most one request and one cache file operation are in flight at a
    /// time. The result is empty only if the defaults are empty too.
    pub async fn load(&mut self) -> &[WeaponRecord] {
        let (weapons, source) = match self.try_remote().await {
            Ok(weapons) if !weapons.is_empty() => (weapons, ConfigSource::Remote),
            Ok(_) => {
                // A payload whose every record fails validity is handled the
                // same as an unreachable server: zero records for this tier.
                debug!("Remote config at {} held no valid records", self.source_url);
                self.fall_back().await
            }
            Err(e) => {
                warn!("Remote config fetch failed: {}", e);
                self.fall_back().await
            }
        };

        if source == ConfigSource::Remote {
            if let Err(e) = cache::write(&self.cache_path, &weapons).await {
                warn!(
                    "Failed to cache config at {}: {}",
                    self.cache_path.display(),
                    e
                );
            }
            // A later reload that can't reach the network falls back to the
            // newest remote snapshot, not the original compiled-in set.
            self.defaults = weapons.clone();
        }

        self.weapons = weapons;
        self.source = source;
        self.log_loaded();
        &self.weapons
    }

    /// Tier 1: fetch and parse the remote config.
    async fn try_remote(&self) -> Result<Vec<WeaponRecord>, ConfigError> {
        let response = self
            .client
            .get(&self.source_url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        match self.format {
            ConfigFormat::Json => parse::parse_json(&body),
            ConfigFormat::Csv => Ok(parse::parse_csv(&body)),
        }
    }

    /// Tiers 2 and 3: local cache, then compiled-in defaults.
    async fn fall_back(&self) -> (Vec<WeaponRecord>, ConfigSource) {
        match cache::read(&self.cache_path).await {
            Ok(weapons) if !weapons.is_empty() => {
                info!(
                    "Loaded config from local cache at {}",
                    self.cache_path.display()
                );
                return (weapons, ConfigSource::LocalCache);
            }
            Ok(_) => debug!(
                "Local cache at {} held no valid records",
                self.cache_path.display()
            ),
            Err(e) => debug!("Local cache unavailable: {}", e),
        }

        info!("Falling back to compiled-in defaults");
        (self.defaults.clone(), ConfigSource::Default)
    }

    fn log_loaded(&self) {
        for (i, w) in self.weapons.iter().enumerate() {
            debug!(
                "[{}] weapon id={} damage={} cooldown={}",
                i, w.id, w.damage, w.cooldown
            );
        }
        info!(
            "Loaded {} weapon(s) from {:?}",
            self.weapons.len(),
            self.source
        );
    }
}
