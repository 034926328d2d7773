//! Scheduled flight legs.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::time::{TimeError, parse_departure_instant};
use super::AirportCode;

/// One scheduled flight leg.
///
/// A flight is identified by `(flight_number, date)`. Flights are created
/// once at ingestion and never mutated afterwards; the pricing core shares
/// them behind `Arc`.
///
/// `departure_utc` is the authoritative instant for every temporal
/// comparison. `date` and `departure_time` are the local schedule fields,
/// kept for display and for date-keyed queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Carrier flight number.
    pub flight_number: String,

    /// Local departure date.
    pub date: NaiveDate,

    /// Departure airport.
    pub from: AirportCode,

    /// Arrival airport.
    pub to: AirportCode,

    /// Local departure time as published, including its offset (e.g. "09:00Z").
    pub departure_time: String,

    /// Absolute departure instant.
    pub departure_utc: DateTime<Utc>,

    /// Flight time in minutes.
    pub duration_mins: u32,

    /// Fare for this leg.
    pub price: f64,

    /// Seats still bookable.
    pub available_seats: u32,
}

impl Flight {
    /// Build a flight from its schedule fields, deriving the UTC departure
    /// instant from `date` and `departure_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn scheduled(
        flight_number: impl Into<String>,
        date: NaiveDate,
        from: AirportCode,
        to: AirportCode,
        departure_time: impl Into<String>,
        duration_mins: u32,
        price: f64,
        available_seats: u32,
    ) -> Result<Self, TimeError> {
        let departure_time = departure_time.into();
        let departure_utc = parse_departure_instant(date, &departure_time)?;

        Ok(Self {
            flight_number: flight_number.into(),
            date,
            from,
            to,
            departure_time,
            departure_utc,
            duration_mins,
            price,
            available_seats,
        })
    }

    /// Returns the flight time as a Duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_mins as i64)
    }

    /// Returns the absolute arrival instant (departure plus flight time).
    pub fn arrival_utc(&self) -> DateTime<Utc> {
        self.departure_utc + self.duration()
    }

    /// Returns true if at least `floor` seats are still bookable.
    pub fn is_bookable(&self, floor: u32) -> bool {
        self.available_seats >= floor
    }

    /// Returns true if this flight flies `from -> to`.
    pub fn serves(&self, from: &AirportCode, to: &AirportCode) -> bool {
        &self.from == from && &self.to == to
    }
}
