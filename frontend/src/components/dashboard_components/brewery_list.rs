//! Filtered brewery list and the brewery cards.

use common::brewery::Brewery;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};

use crate::{data_definitions::dashboard_context::DashboardContext, routes::Route};

#[component]
pub fn BreweryList() -> Element {
    let dashboard = use_context::<DashboardContext>().dashboard;
    let breweries = dashboard.read().filtered_breweries().into_iter().cloned().collect::<Vec<_>>();
    let total = dashboard.read().total_count();
    let shown = breweries.len();

    rsx! {
        div {
            style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112);",
            "{shown} of {total} breweries"
        }
        ul {
            class: "brews",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 16px;
                padding: 0;
                margin: 0;
                list-style: none;
            ",
            for brewery in breweries {
                li {
                    key: "{brewery.id}",
                    BreweryCard { brewery }
                }
            }
        }
    }
}

#[component]
pub fn BreweryCard(brewery: ReadSignal<Brewery>) -> Element {
    let Brewery { id, name, brewery_type, phone, website_url, .. } = brewery.read().clone();
    let location = brewery.read().location_line();
    let brewery_type = brewery_type.unwrap_or_default();

    rsx! {
        div {
            class: "brewsco",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                height: 100%;
                box-sizing: border-box;
            ",
            h2 {
                style: "font-size: 20px; font-weight: 500; margin: 0;",
                Link { to: Route::BreweryDetailPage { brewery_id: id }, "{name}" }
            }
            p { style: "margin: 0; text-transform: capitalize;", "{brewery_type}" }
            p { style: "margin: 0;", "{location}" }
            {phone.map(|phone| rsx! {
                p { style: "margin: 0; color: rgba(0,0,0,0.7);", "{phone}" }
            })}
            div { style: "flex-grow: 1;" }
            {website_url.map(|url| rsx! {
                VisitWebsiteButton { url }
            })}
        }
    }
}

#[component]
pub fn VisitWebsiteButton(url: String) -> Element {
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                width: fit-content;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                padding: 4px 10px;
            ",
            onclick: move |_| {
                let Some(window) = web_sys::window() else { return };
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    tracing::error!("could not open {url}: {e:?}");
                }
            },
            Icon { icon: MdOpenInNew, style: "width: 18px; height: 18px;" }
            "Visit Website"
        }
    }
}
