//! "Load More" button, fetch status and the explicit retry after a failed page.

use common::accumulator::{FetchState, FetchTrigger};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandMore, MdRefresh}};

use crate::data_definitions::dashboard_context::DashboardContext;

#[component]
pub fn LoadMoreControls() -> Element {
    let DashboardContext { dashboard, load_page } = use_context::<DashboardContext>();
    let state = dashboard.read().fetch_state().clone();
    let can_load_more = dashboard.read().can_load_more();
    let next_page = dashboard.read().cursor();

    let status = match &state {
        FetchState::Idle => format!("Next page: {next_page}"),
        FetchState::Fetching { page } => format!("Loading page {page}..."),
        FetchState::Failed { page, .. } => format!("Page {page} could not be loaded"),
        FetchState::Closed => String::new(),
    };
    let failure = match &state {
        FetchState::Failed { page, error } => Some((*page, error.to_string())),
        _ => None,
    };
    let btn_color = if can_load_more { "rgba(0,0,0,1)" } else { "rgba(0,0,0,0.3)" };
    let btn_cursor = if can_load_more { "pointer" } else { "not-allowed" };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
            button {
                class: "load",
                disabled: !can_load_more,
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    background: white;
                    border-radius: 8px;
                    padding: 6px 14px;
                    box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                    color: {btn_color};
                    cursor: {btn_cursor};
                ",
                onclick: move |_| {
                    if can_load_more {
                        load_page(FetchTrigger::NextPage);
                    }
                },
                Icon { icon: MdExpandMore, style: "width: 22px; height: 22px;" }
                "Load More Breweries"
            }
            span { style: "font-size: 15px; color: rgba(0,0,0,0.6);", "{status}" }
        }
        {failure.map(|(page, error_txt)| rsx! {
            FetchErrorBanner { page, error_txt, on_retry: move |_| load_page(FetchTrigger::Retry) }
        })}
    }
}

#[component]
fn FetchErrorBanner(page: u64, error_txt: String, on_retry: Callback<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                color: darkred;
                border: 1px solid red;
                border-radius: 5px;
                padding: 10px;
            ",
            span { "Error fetching data: {error_txt}" }
            button {
                style: "display: flex; align-items: center; gap: 6px; color: blue; border: 1px solid blue; border-radius: 5px; padding: 4px 10px; cursor: pointer; background: white;",
                onclick: move |_| on_retry(()),
                Icon { icon: MdRefresh, style: "width: 20px; height: 20px;" }
                "Retry page {page}"
            }
        }
    }
}
