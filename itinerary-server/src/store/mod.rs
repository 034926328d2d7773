//! Flight query capability.
//!
//! The pricing core never owns storage. It asks a `FlightQuery`
//! implementation for candidate flight sets and joins them in memory.
//! `InMemoryFlightStore` is the implementation used by the server.

mod memory;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{AirportCode, Flight};

pub use memory::InMemoryFlightStore;

/// Errors raised by a flight store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Two flights share the same `(flight number, date)` key
    #[error("duplicate flight {flight_number} on {date}")]
    DuplicateFlight {
        flight_number: String,
        date: NaiveDate,
    },

    /// The backing store could not answer the query
    #[error("flight store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for querying the flight inventory.
///
/// Every query applies the seat floor inclusively: only flights with
/// `available_seats >= min_seats` are returned. This abstraction allows the
/// pricer to be tested with mock data.
pub trait FlightQuery {
    /// Flights departing `from` on local date `date`.
    fn find_by_date_and_origin(
        &self,
        date: NaiveDate,
        from: &AirportCode,
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError>;

    /// Flights on any of `dates` whose departure and arrival airports are
    /// both drawn from `airports`.
    fn find_by_dates_and_airports(
        &self,
        dates: &[NaiveDate],
        airports: &[AirportCode],
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError>;

    /// Flights whose departure and arrival airports are both drawn from
    /// `airports`, ascending by date.
    fn find_by_airports_ordered_by_date(
        &self,
        airports: &[AirportCode],
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError>;

    /// Flights arriving at `to` that depart within `[start, end]`.
    fn find_by_time_window_and_destination(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        to: &AirportCode,
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::DuplicateFlight {
            flight_number: "LY001".into(),
            date: NaiveDate::from_ymd_opt(2022, 9, 14).unwrap(),
        };
        assert_eq!(err.to_string(), "duplicate flight LY001 on 2022-09-14");

        let err = StoreError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "flight store unavailable: connection refused");
    }
}
