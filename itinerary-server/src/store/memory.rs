//! In-memory flight store.
//!
//! Holds the whole inventory as an immutable list in ingestion order. All
//! queries are linear scans; the inventory is loaded once at startup and
//! shared read-only across requests.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{AirportCode, Flight};

use super::{FlightQuery, StoreError};

/// Flight store backed by a `Vec` in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlightStore {
    flights: Vec<Arc<Flight>>,
}

impl InMemoryFlightStore {
    /// Create a store from flights in ingestion order.
    ///
    /// Rejects the inventory if two flights share `(flight_number, date)`.
    pub fn new(flights: Vec<Flight>) -> Result<Self, StoreError> {
        let mut seen: HashSet<(String, NaiveDate)> = HashSet::with_capacity(flights.len());

        for flight in &flights {
            if !seen.insert((flight.flight_number.clone(), flight.date)) {
                return Err(StoreError::DuplicateFlight {
                    flight_number: flight.flight_number.clone(),
                    date: flight.date,
                });
            }
        }

        Ok(Self {
            flights: flights.into_iter().map(Arc::new).collect(),
        })
    }

    /// Number of flights held.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if the store holds no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    fn select<F>(&self, min_seats: u32, predicate: F) -> Vec<Arc<Flight>>
    where
        F: Fn(&Flight) -> bool,
    {
        self.flights
            .iter()
            .filter(|f| f.is_bookable(min_seats) && predicate(f))
            .cloned()
            .collect()
    }
}

impl FlightQuery for InMemoryFlightStore {
    fn find_by_date_and_origin(
        &self,
        date: NaiveDate,
        from: &AirportCode,
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError> {
        Ok(self.select(min_seats, |f| f.date == date && &f.from == from))
    }

    fn find_by_dates_and_airports(
        &self,
        dates: &[NaiveDate],
        airports: &[AirportCode],
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError> {
        Ok(self.select(min_seats, |f| {
            dates.contains(&f.date) && airports.contains(&f.from) && airports.contains(&f.to)
        }))
    }

    fn find_by_airports_ordered_by_date(
        &self,
        airports: &[AirportCode],
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError> {
        let mut flights = self.select(min_seats, |f| {
            airports.contains(&f.from) && airports.contains(&f.to)
        });
        // Stable: same-instant flights keep ingestion order.
        flights.sort_by_key(|f| (f.date, f.departure_utc));
        Ok(flights)
    }

    fn find_by_time_window_and_destination(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        to: &AirportCode,
        min_seats: u32,
    ) -> Result<Vec<Arc<Flight>>, StoreError> {
        Ok(self.select(min_seats, |f| {
            &f.to == to && f.departure_utc >= start && f.departure_utc <= end
        }))
    }
}
