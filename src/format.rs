//! Remote payload format dispatch.

/// Format of the remote config payload.
///
/// Decided once when the loader is constructed, from the source URL's
/// file-extension hint, and reused for every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `{"weapons": [...]}` document
    Json,
    /// Header line plus `id,damage,cooldown[,...]` rows
    Csv,
}

impl ConfigFormat {
    /// Pick the format from the source URL: a `.json` suffix selects JSON,
    /// anything else is treated as CSV.
    pub fn for_url(url: &str) -> Self {
        if url.trim_end().ends_with(".json") {
            ConfigFormat::Json
        } else {
            ConfigFormat::Csv
        }
    }
}
