//! Token Listing
//!
//! Web entry point hosting the `SortSelector`. The app owns the current sort
//! mode in `AppState`; the selector reports clicks back through `on_select`
//! and the signal update re-renders it with the new mode.
//!
//! The initial ordering can be chosen with a `?sort=` query parameter
//! (`trending`, `new`, `finalized`, `marketcap`).

mod config;

use config::AppConfig;
use dioxus::prelude::*;
use listing_ui::components::SortSelector;
use listing_ui::sort_mode::SortMode;
use listing_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let config = match config::location_query() {
        Ok(query) => AppConfig::from_query(&query),
        Err(e) => {
            log::error!("Failed to read launch configuration: {}", e);
            AppConfig::default()
        }
    };
    log::info!(
        "Starting token listing in #{} sorted by {}",
        config.root_name,
        config.initial_sort
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(config.root_name.clone()))
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_context_provider(|| AppState::new(config.initial_sort));
    let current = (state.sort_mode)();
    let label = current.label();

    let on_select = move |mode: SortMode| {
        if mode != (state.sort_mode)() {
            log::info!("Sort mode changed to {}", mode);
        }
        state.sort_mode.set(mode);
    };

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px; background: #111111; color: #ffffff; min-height: 100vh;",
            SortSelector {
                current_mode: current,
                on_select: on_select,
            }
            p {
                style: "text-align: center; font-size: 12px; color: #9ca3af;",
                "Tokens ordered by {label}"
            }
        }
    }
}
