//! Context shared by the dashboard page components.

use common::{accumulator::FetchTrigger, dashboard::BreweryDashboard};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub dashboard: Signal<BreweryDashboard>,
    /// Issues one page fetch; rejected by the dashboard while another is in flight.
    pub load_page: Callback<FetchTrigger>,
}
