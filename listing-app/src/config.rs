//! Launch configuration read from the page URL.

use anyhow::{anyhow, Result};
use listing_ui::sort_mode::SortMode;

/// DOM element ID the app mounts into.
pub const DEFAULT_ROOT_NAME: &str = "listing-root";

/// Settings the app starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub root_name: String,
    /// Ordering shown on first render
    pub initial_sort: SortMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            initial_sort: SortMode::default(),
        }
    }
}

impl AppConfig {
    /// Build a config from a URL query string such as `?sort=new`.
    ///
    /// Only the `sort` key is read. A value that is not a sort tag is
    /// logged and the default ordering is kept.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")));

        for (key, value) in pairs {
            if key != "sort" {
                continue;
            }
            match value.parse::<SortMode>() {
                Ok(mode) => config.initial_sort = mode,
                Err(e) => log::warn!("Ignoring sort query parameter: {}", e),
            }
        }
        config
    }
}

/// Query string of the current page, including the leading `?`.
pub fn location_query() -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
    window
        .location()
        .search()
        .map_err(|e| anyhow!("Failed to read location.search: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DEFAULT_ROOT_NAME};
    use listing_ui::sort_mode::SortMode;

    #[test]
    fn test_from_query_reads_sort() {
        let config = AppConfig::from_query("?sort=new");
        assert_eq!(config.initial_sort, SortMode::New);
        assert_eq!(config.root_name, DEFAULT_ROOT_NAME);

        let config = AppConfig::from_query("page=2&sort=marketcap");
        assert_eq!(config.initial_sort, SortMode::MarketCap);
    }

    #[test]
    fn test_from_query_falls_back_to_trending() {
        assert_eq!(AppConfig::from_query("").initial_sort, SortMode::Trending);
        assert_eq!(AppConfig::from_query("?").initial_sort, SortMode::Trending);
        assert_eq!(
            AppConfig::from_query("?sort=bogus").initial_sort,
            SortMode::Trending
        );
        assert_eq!(AppConfig::from_query("?sort").initial_sort, SortMode::Trending);
    }

    #[test]
    fn test_from_query_ignores_unknown_keys() {
        let config = AppConfig::from_query("?theme=dark&limit=50");
        assert_eq!(config, AppConfig::default());
    }
}
