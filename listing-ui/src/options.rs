//! View model for the sort selector.
//!
//! Everything the `SortSelector` component shows is derived here from the
//! current mode alone, so the rendering rules can be checked without a DOM.

use crate::sort_mode::SortMode;

/// A clickable control in the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Trending,
    MarketCap,
    New,
    Finalized,
}

impl SortOption {
    /// Mode this control stands for.
    pub fn mode(&self) -> SortMode {
        match self {
            SortOption::Trending => SortMode::Trending,
            SortOption::MarketCap => SortMode::MarketCap,
            SortOption::New => SortMode::New,
            SortOption::Finalized => SortMode::Finalized,
        }
    }

    pub fn label(&self) -> &'static str {
        self.mode().label()
    }

    /// Mode emitted when this control is clicked while `current` is shown.
    ///
    /// Trending never toggles away; Market Cap flips within the Trending
    /// family.
    pub fn target(&self, current: SortMode) -> SortMode {
        match self {
            SortOption::Trending => SortMode::Trending,
            SortOption::MarketCap => current.toggle_market_cap(),
            SortOption::New => SortMode::New,
            SortOption::Finalized => SortMode::Finalized,
        }
    }
}

/// A single rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionButton {
    pub option: SortOption,
    pub label: &'static str,
    pub active: bool,
    /// Mode passed to the selection callback on click
    pub target: SortMode,
}

impl OptionButton {
    fn new(option: SortOption, current: SortMode, active: bool) -> Self {
        Self {
            option,
            label: option.label(),
            active,
            target: option.target(current),
        }
    }
}

/// The full set of buttons for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptionsView {
    /// Trending group button; active for both Trending and MarketCap
    pub trending: OptionButton,
    /// Present only while the Trending family is selected
    pub market_cap: Option<OptionButton>,
    pub new: OptionButton,
    pub finalized: OptionButton,
}

impl SortOptionsView {
    pub fn for_mode(current: SortMode) -> Self {
        let family = current.is_trending_family();
        Self {
            trending: OptionButton::new(SortOption::Trending, current, family),
            market_cap: family.then(|| {
                OptionButton::new(
                    SortOption::MarketCap,
                    current,
                    current == SortMode::MarketCap,
                )
            }),
            new: OptionButton::new(SortOption::New, current, current == SortMode::New),
            finalized: OptionButton::new(
                SortOption::Finalized,
                current,
                current == SortMode::Finalized,
            ),
        }
    }

    #[cfg(test)]
    /// Rendered buttons in display order.
    pub(crate) fn buttons(&self) -> impl Iterator<Item = &OptionButton> + '_ {
        std::iter::once(&self.trending)
            .chain(self.market_cap.as_ref())
            .chain([&self.new, &self.finalized])
    }

    #[cfg(test)]
    /// The emphasized primary option (Trending group, New or Finalized).
    pub(crate) fn active_top_level(&self) -> Option<SortOption> {
        [&self.trending, &self.new, &self.finalized]
            .into_iter()
            .find(|button| button.active)
            .map(|button| button.option)
    }

    #[cfg(test)]
    pub(crate) fn button(&self, option: SortOption) -> Option<&OptionButton> {
        self.buttons().find(|button| button.option == option)
    }
}
