pub mod brewery_api;
