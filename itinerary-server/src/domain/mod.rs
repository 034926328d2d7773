//! Domain types for the itinerary pricer.
//!
//! This module contains the core domain model types that represent
//! validated flight inventory. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airport;
mod error;
mod flight;
mod itinerary;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use flight::Flight;
pub use itinerary::Itinerary;
pub use time::{TimeError, parse_date, parse_departure_instant};
