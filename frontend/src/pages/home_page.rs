use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::{
    accumulator::{BrewerySource, FetchOutcome, FetchTrigger},
    dashboard::BreweryDashboard,
};
use crate::{
    api::brewery_api::ServerFnBrewerySource,
    components::{
        dashboard_components::{
            brewery_chart::BreweryChartPanel, brewery_list::BreweryList, filter_controls::FilterControls,
            load_more_controls::LoadMoreControls,
        },
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::dashboard_context::DashboardContext,
};


/// Server-side rendering drops its scope before a page could arrive; only the browser loads.
fn fetches_first_page_on_mount() -> bool {
    !cfg!(feature = "server")
}

/// Home page: brewery dashboard
#[component]
pub fn HomePage() -> Element {
    let mut dashboard = use_signal(BreweryDashboard::default);

    let load_page = use_callback(move |trigger: FetchTrigger| {
        spawn(async move {
            // the in-flight check and the cursor read happen before the request goes out
            let begun = dashboard.write().begin_fetch(trigger);
            let ticket = match begun {
                Ok(ticket) => ticket,
                Err(e) => {
                    tracing::warn!("brewery page fetch not started: {e}");
                    return;
                }
            };
            let result = ServerFnBrewerySource.fetch_page(ticket.request()).await;
            let outcome = dashboard.write().complete_fetch(ticket, result);
            match outcome {
                FetchOutcome::Merged(new_records) => {
                    tracing::info!("page {} added {} breweries", new_records.page, new_records.records.len());
                }
                FetchOutcome::Failed { page, error } => tracing::error!("page {page} failed: {error}"),
                FetchOutcome::Discarded { page } => tracing::warn!("page {page} response discarded"),
            }
        });
    });

    // first page is an explicit command, not a side effect of rendering
    use_hook(move || {
        if fetches_first_page_on_mount() {
            load_page.call(FetchTrigger::NextPage);
        }
    });
    use_drop(move || {
        if let Ok(mut dashboard) = dashboard.try_write() {
            dashboard.close();
        }
    });
    use_context_provider(move || DashboardContext { dashboard, load_page });

    let first_page_loading = dashboard.read().is_fetching() && dashboard.read().total_count() == 0;

    rsx! {
        Title { "Brewery Dashboard" }
        div {
            id: "x-dashboard-container",
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
            h1 {
                style: "color: #0F172A; font-size: 46px; font-weight: 500; letter-spacing: -0.02em; margin: 0;",
                "Brewery Dashboard"
            }
            if first_page_loading {
                LoadingIndicator { message: "Loading breweries..." }
            } else {
                BreweryChartPanel {}
                LoadMoreControls {}
                FilterControls {}
                BreweryList {}
            }
        }
    }
}
