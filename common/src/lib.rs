//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod brewery;
pub mod brewery_const;
pub mod collection;
pub mod accumulator;
pub mod projection;
pub mod dashboard;
pub mod fetch_error;
