use common::brewery::BreweryId;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::brewery_detail_page::BreweryDetailPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/brewery/:brewery_id")]
    BreweryDetailPage { brewery_id: BreweryId },

}
