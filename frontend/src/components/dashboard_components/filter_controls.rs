//! Search box and the type / state / nation selects.

use common::{
    brewery_const::{BREWERY_TYPES, NATIONS, US_STATES},
    projection::FilterKind,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::dashboard_context::DashboardContext;

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn FilterControls() -> Element {
    let mut dashboard = use_context::<DashboardContext>().dashboard;
    let name_query = dashboard.read().filter().name_query.clone();
    let is_filtered = !dashboard.read().filter().is_unrestricted();

    rsx! {
        div {
            id: "x-dashboard-filter-controls",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 16px;
            ",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    box-sizing: border-box;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    width: 400px;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Search breweries...",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        font-size: 18px;
                    ",
                    value: "{name_query}",
                    oninput: move |event: Event<FormData>| {
                        dashboard.write().set_filter(FilterKind::Name, event.value());
                    },
                }
            }
            FilterSelect { label: "Filter by type:", kind: FilterKind::BreweryType, choices: BREWERY_TYPES }
            FilterSelect { label: "Filter by state (US only):", kind: FilterKind::State, choices: US_STATES }
            FilterSelect { label: "Filter by nation:", kind: FilterKind::Country, choices: NATIONS }
            if is_filtered {
                button {
                    style: "cursor: pointer; border: 1px solid rgba(0,0,0,0.5); border-radius: 8px; background: white; padding: 6px 12px;",
                    onclick: move |_| dashboard.write().clear_filters(),
                    "Clear filters"
                }
            }
        }
    }
}

#[component]
fn FilterSelect(label: &'static str, kind: FilterKind, choices: &'static [&'static str]) -> Element {
    let mut dashboard = use_context::<DashboardContext>().dashboard;
    let selected = dashboard.read().filter().get(kind).unwrap_or_default().to_string();
    let choices = choices
        .iter()
        .map(|choice| (choice.to_string(), capitalize(choice), *choice == selected))
        .collect::<Vec<_>>();

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 15px;",
            "{label}"
            select {
                style: "padding: 4px 8px; border-radius: 6px; font-size: 15px;",
                value: "{selected}",
                onchange: move |event: Event<FormData>| {
                    dashboard.write().set_filter(kind, event.value());
                },
                option { value: "", "All" }
                for (value, display, is_selected) in choices {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: is_selected,
                        "{display}"
                    }
                }
            }
        }
    }
}
