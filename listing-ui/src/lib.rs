//! Shared Dioxus components and sort state for the token listing app.
//!
//! This crate provides:
//! - `sort_mode`: the closed `SortMode` enum and its wire tags
//! - `options`: the pure view model behind the sort buttons
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components

pub mod components;
pub mod options;
pub mod sort_mode;
pub mod state;
