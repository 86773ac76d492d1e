//! Sort mode selector for the token list.

use crate::options::{OptionButton, SortOptionsView};
use crate::sort_mode::SortMode;
use dioxus::prelude::*;

const ACTIVE_STYLE: &str = "background: #222222; color: #ffffff;";
const INACTIVE_STYLE: &str = "background: transparent; color: #d1d5db;";
const SUB_INACTIVE_STYLE: &str = "background: #1a1a1a; color: #9ca3af;";

const PRIMARY_STYLE: &str =
    "padding: 8px 16px; font-size: 14px; border: none; cursor: pointer; transition: background-color 200ms;";
const SUB_STYLE: &str =
    "padding: 8px 12px; font-size: 12px; border: none; border-left: 1px solid #374151; border-radius: 0 6px 6px 0; cursor: pointer; transition: background-color 200ms;";

/// Inline styles win over stylesheet rules, so hover needs `!important`.
const HOVER_CSS: &str =
    ".sort-option[aria-pressed=false]:hover { background: #222222 !important; }";

fn button_style(button: &OptionButton, layout: &str, inactive: &str) -> String {
    let colors = if button.active { ACTIVE_STYLE } else { inactive };
    format!("{layout} {colors}")
}

/// Report a click on `button` while `current_mode` is shown.
fn select_option(current_mode: SortMode, button: OptionButton, on_select: impl FnOnce(SortMode)) {
    log::debug!(
        "sort selector: {} clicked, {} -> {}",
        button.label,
        current_mode,
        button.target
    );
    on_select(button.target);
}

/// Button row for choosing the token list ordering.
///
/// Controlled: the host passes `current_mode` on every render and updates it
/// from `on_select`. Nothing is stored here.
#[component]
pub fn SortSelector(current_mode: SortMode, on_select: EventHandler<SortMode>) -> Element {
    let view = SortOptionsView::for_mode(current_mode);

    let emit = move |button: OptionButton| {
        move |_: Event<MouseData>| select_option(current_mode, button, |mode| on_select.call(mode))
    };

    let trending = view.trending;
    let trending_radius = if view.market_cap.is_some() {
        "border-radius: 6px 0 0 6px;"
    } else {
        "border-radius: 6px;"
    };
    let trending_style = format!(
        "{} {}",
        button_style(&trending, PRIMARY_STYLE, INACTIVE_STYLE),
        trending_radius
    );
    let group_style = if trending.active {
        "display: flex; gap: 4px; border-radius: 6px; box-shadow: 0 0 0 1px #374151;"
    } else {
        "display: flex; gap: 4px;"
    };

    let new = view.new;
    let new_style = format!(
        "{} border-radius: 6px;",
        button_style(&new, PRIMARY_STYLE, INACTIVE_STYLE)
    );
    let finalized = view.finalized;
    let finalized_style = format!(
        "{} border-radius: 6px;",
        button_style(&finalized, PRIMARY_STYLE, INACTIVE_STYLE)
    );

    rsx! {
        style { "{HOVER_CSS}" }
        div {
            style: "margin-bottom: 20px; display: flex; flex-wrap: wrap; gap: 8px; justify-content: center;",
            div {
                style: "{group_style}",
                button {
                    class: "sort-option",
                    style: "{trending_style}",
                    aria_pressed: "{trending.active}",
                    onclick: emit(trending),
                    "{trending.label}"
                }
                if let Some(market_cap) = view.market_cap {
                    button {
                        class: "sort-option",
                        style: button_style(&market_cap, SUB_STYLE, SUB_INACTIVE_STYLE),
                        aria_pressed: "{market_cap.active}",
                        onclick: emit(market_cap),
                        "{market_cap.label}"
                    }
                }
            }
            button {
                class: "sort-option",
                style: "{new_style}",
                aria_pressed: "{new.active}",
                onclick: emit(new),
                "{new.label}"
            }
            button {
                class: "sort-option",
                style: "{finalized_style}",
                aria_pressed: "{finalized.active}",
                onclick: emit(finalized),
                "{finalized.label}"
            }
        }
    }
}
