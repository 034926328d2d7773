//! Flight itinerary pricer server.
//!
//! Answers three questions over a flight inventory: which round trips exist
//! on two given dates, how to get from A to B on a date with at most one
//! change, and which round trips exist between two airports at all.

pub mod domain;
pub mod inventory;
pub mod pricing;
pub mod settings;
pub mod store;
pub mod web;
