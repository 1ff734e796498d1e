use common::{
    accumulator::BrewerySource,
    brewery::{Brewery, BreweryId},
    fetch_error::FetchError,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdHome};

use crate::{
    api::brewery_api::ServerFnBrewerySource,
    components::{
        dashboard_components::brewery_list::VisitWebsiteButton, error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};


/// Single brewery page, reached from a card on the dashboard.
#[component]
pub fn BreweryDetailPage(brewery_id: BreweryId) -> Element {
    rsx! {
        Title { "Brewery Dashboard - {brewery_id}" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            SuspendWrapper {
                message: "Loading brewery...",
                BreweryDetail { brewery_id }
            }
        }
    }
}

#[component]
fn BreweryDetail(brewery_id: ReadSignal<BreweryId>) -> Element {
    let brewery = use_resource(move || async move {
        let id = brewery_id.read().clone();
        ServerFnBrewerySource.fetch_brewery(&id).await
    })
    .suspend()?
    .cloned();

    let brewery = match brewery {
        Ok(brewery) => brewery,
        Err(FetchError::NotFound(_)) => return rsx! { BreweryNotFound {} },
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: e.to_string() } },
    };

    rsx! {
        BreweryDetailCard { brewery }
    }
}

#[component]
fn BreweryDetailCard(brewery: ReadSignal<Brewery>) -> Element {
    let Brewery { name, brewery_type, website_url, .. } = brewery.read().clone();
    let description = brewery.read().description();
    let brewery_type = brewery_type.unwrap_or_default();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 24px 28px;
                max-width: 720px;
            ",
            h1 {
                style: "color: #0F172A; font-size: 40px; font-weight: 500; margin: 0;",
                "{name}"
            }
            p { style: "margin: 0; font-size: 20px; text-transform: capitalize;", "{brewery_type}" }
            p { style: "margin: 0; font-size: 18px; color: rgba(0,0,0,0.8);", "{description}" }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                {website_url.map(|url| rsx! {
                    VisitWebsiteButton { url }
                })}
                HomeLink {}
            }
        }
    }
}

#[component]
fn BreweryNotFound() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            h1 { style: "font-size: 34px; font-weight: 500; margin: 0;", "Brewery not found." }
            HomeLink {}
        }
    }
}

#[component]
fn HomeLink() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            style: "display: flex; align-items: center; gap: 6px; color: #1C212D;",
            Icon { icon: MdHome, style: "width: 20px; height: 20px;" }
            "Home"
        }
    }
}
