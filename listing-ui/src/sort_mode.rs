//! Listing order tags shared between the selector and its host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four orderings the token list can be shown in.
///
/// `MarketCap` is a refinement of `Trending`; the two form the "Trending
/// family" and are rendered as a single button group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Trending,
    New,
    Finalized,
    MarketCap,
}

impl SortMode {
    /// Every legal mode, in display order.
    pub const ALL: [SortMode; 4] = [
        SortMode::Trending,
        SortMode::MarketCap,
        SortMode::New,
        SortMode::Finalized,
    ];

    /// Wire tag used in query strings and serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Trending => "trending",
            SortMode::New => "new",
            SortMode::Finalized => "finalized",
            SortMode::MarketCap => "marketcap",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Trending => "Trending",
            SortMode::New => "New",
            SortMode::Finalized => "Finalized",
            SortMode::MarketCap => "Market Cap",
        }
    }

    pub fn is_trending_family(&self) -> bool {
        matches!(self, SortMode::Trending | SortMode::MarketCap)
    }

    /// Flip between the two Trending family members.
    ///
    /// Only `Trending` turns into `MarketCap`; every other mode maps back
    /// to `Trending`.
    pub fn toggle_market_cap(&self) -> SortMode {
        match self {
            SortMode::Trending => SortMode::MarketCap,
            _ => SortMode::Trending,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseSortModeError(s.to_string()))
    }
}

/// Returned when a string is not one of the four sort tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortModeError(pub String);

impl fmt::Display for ParseSortModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sort mode error: {:?} is not one of trending, new, finalized, marketcap",
            self.0
        )
    }
}

impl std::error::Error for ParseSortModeError {}

#[cfg(test)]
mod tests {
    use super::{ParseSortModeError, SortMode};

    #[test]
    fn test_trending_family_membership() {
        assert!(SortMode::Trending.is_trending_family());
        assert!(SortMode::MarketCap.is_trending_family());
        assert!(!SortMode::New.is_trending_family());
        assert!(!SortMode::Finalized.is_trending_family());
    }

    #[test]
    fn test_toggle_market_cap() {
        assert_eq!(SortMode::Trending.toggle_market_cap(), SortMode::MarketCap);
        assert_eq!(SortMode::MarketCap.toggle_market_cap(), SortMode::Trending);
        assert_eq!(SortMode::New.toggle_market_cap(), SortMode::Trending);
        assert_eq!(SortMode::Finalized.toggle_market_cap(), SortMode::Trending);
    }

    #[test]
    fn test_parse_wire_tags() {
        assert_eq!("trending".parse::<SortMode>(), Ok(SortMode::Trending));
        assert_eq!("new".parse::<SortMode>(), Ok(SortMode::New));
        assert_eq!("finalized".parse::<SortMode>(), Ok(SortMode::Finalized));
        assert_eq!("marketcap".parse::<SortMode>(), Ok(SortMode::MarketCap));
        assert_eq!(" MarketCap ".parse::<SortMode>(), Ok(SortMode::MarketCap));
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "market cap".parse::<SortMode>().unwrap_err();
        assert_eq!(err, ParseSortModeError("market cap".to_string()));
        assert!(err.to_string().contains("market cap"));
        assert!("".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        assert_eq!(
            serde_json::to_string(&SortMode::MarketCap).unwrap(),
            "\"marketcap\""
        );
        let modes: Vec<SortMode> =
            serde_json::from_str(r#"["trending","new","finalized","marketcap"]"#).unwrap();
        assert_eq!(
            modes,
            vec![
                SortMode::Trending,
                SortMode::New,
                SortMode::Finalized,
                SortMode::MarketCap
            ]
        );
    }

    #[test]
    fn test_default_is_trending() {
        assert_eq!(SortMode::default(), SortMode::Trending);
    }
}
