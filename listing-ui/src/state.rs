//! Application state managed via Dioxus context.
//!
//! The host app owns the current sort mode; `SortSelector` only ever reads it
//! through props. `AppState` is provided with `use_context_provider` and
//! retrieved with `use_context::<AppState>()`.

use crate::sort_mode::SortMode;
use dioxus::prelude::*;

/// Shared application state for the token listing.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Ordering currently applied to the token list
    pub sort_mode: Signal<SortMode>,
}

impl AppState {
    /// Create a new AppState starting at `initial`.
    pub fn new(initial: SortMode) -> Self {
        Self {
            sort_mode: Signal::new(initial),
        }
    }
}
