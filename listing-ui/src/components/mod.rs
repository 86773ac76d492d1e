//! Reusable Dioxus RSX components for the token listing app.

mod sort_selector;

pub use sort_selector::SortSelector;
