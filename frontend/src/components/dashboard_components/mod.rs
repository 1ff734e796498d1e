//! Components of the brewery dashboard page.

pub mod brewery_chart;
pub mod brewery_list;
pub mod filter_controls;
pub mod load_more_controls;
