//! Server-side access to the brewery listing API.

pub mod api;
pub mod api_utils;
