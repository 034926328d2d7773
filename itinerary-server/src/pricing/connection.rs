//! Connection matching.
//!
//! A flight that lands short of the final destination can be continued by
//! any flight that leaves its arrival airport for the destination within
//! the layover window `[arrival, arrival + waiting_time_between_flights]`.
//! Both ends of the window are inclusive and all comparisons are on UTC
//! instants.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{AirportCode, Flight};

use super::config::PricingConfig;

/// The inclusive window in which a next leg must depart after `origin`.
pub fn connection_window(origin: &Flight, waiting: Duration) -> (DateTime<Utc>, DateTime<Utc>) {
    let arrival = origin.arrival_utc();
    (arrival, arrival + waiting)
}

/// Returns true if `origin` still needs a further leg to reach `destination`.
pub fn is_connection_origin(origin: &Flight, destination: &AirportCode) -> bool {
    &origin.to != destination
}

/// The connection predicate: can `next` continue `origin` to `destination`?
///
/// Holds when:
/// - `origin` does not already end at `destination`
/// - `next` departs the airport `origin` lands at
/// - `next` lands at `destination`
/// - `next` departs within the inclusive layover window
/// - `next` has at least the configured seat floor available
pub fn is_connection(
    origin: &Flight,
    next: &Flight,
    destination: &AirportCode,
    config: &PricingConfig,
) -> bool {
    if !is_connection_origin(origin, destination) {
        return false;
    }

    let (earliest, latest) = connection_window(origin, config.connection_window());

    next.from == origin.to
        && &next.to == destination
        && next.departure_utc >= earliest
        && next.departure_utc <= latest
        && next.is_bookable(config.minimum_available_seats())
}

/// Every candidate that continues `origin` to `destination`, in candidate order.
pub fn find_connections(
    origin: &Flight,
    candidates: &[Arc<Flight>],
    destination: &AirportCode,
    config: &PricingConfig,
) -> Vec<Arc<Flight>> {
    candidates
        .iter()
        .filter(|next| is_connection(origin, next, destination, config))
        .cloned()
        .collect()
}

/// The departure range covering the layover windows of all `origins`.
///
/// Used to fetch every possible next leg with a single store query.
/// Returns `None` when there are no origins.
pub fn candidate_bounds(
    origins: &[Arc<Flight>],
    waiting: Duration,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let earliest = origins.iter().map(|f| f.arrival_utc()).min()?;
    let latest = origins.iter().map(|f| f.arrival_utc()).max()?;
    Some((earliest, latest + waiting))
}
