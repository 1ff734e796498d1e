//! Configuration and HTTP client helpers for the listing API.

pub mod brewery_api_utils;
