//! Itinerary matching engine.
//!
//! This module derives priceable itineraries from a flight inventory by
//! joining flight records on airport, time window and seat availability:
//!
//! - direct and one-connection trips from an origin on a given date
//! - round trips on fixed departure and return dates
//! - every valid round trip between two airports, regardless of date
//!
//! The matchers are pure functions over already-fetched flight sets;
//! `ItineraryPricer` is the facade that queries the store and runs them.

mod assembler;
mod config;
mod connection;
mod pricer;
mod round_trip;

use crate::domain::DomainError;
use crate::store::StoreError;

pub use assembler::{connection_itineraries, connection_origins, direct_itineraries};
pub use config::{InvalidConfiguration, PricingConfig};
pub use connection::{
    candidate_bounds, connection_window, find_connections, is_connection, is_connection_origin,
};
pub use pricer::ItineraryPricer;
pub use round_trip::{RoundTripCandidates, is_leg_on, is_round_flight, pair_exact_dates};

/// Error from a pricing query.
///
/// An empty result is never an error; these are genuine failures only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// The flight store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An itinerary could not be built from matched legs
    #[error(transparent)]
    Domain(#[from] DomainError),
}
