//! Pricing configuration for the itinerary matcher.

use chrono::Duration;

/// Error returned when a pricing parameter is out of range.
///
/// Raised once at startup; a running pricer always holds a valid config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid configuration: {field} must be between 0 and {max} (got {value})")]
pub struct InvalidConfiguration {
    pub field: &'static str,
    pub value: i64,
    pub max: u32,
}

/// Longest accepted minimum stay: 100 years.
const MAX_MINIMUM_DAYS: u32 = 36_500;

/// Longest accepted layover: one year, in minutes.
const MAX_WAITING_MINUTES: u32 = 365 * 24 * 60;

/// Configuration parameters for itinerary pricing.
///
/// Immutable after construction and passed by reference into every
/// matching call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Inclusive floor of available seats for a flight to be bookable.
    minimum_available_seats: u32,

    /// Minimum whole days between outbound and return departures.
    minimum_days_for_round_trip: u32,

    /// Longest accepted layover between arrival and the next departure (minutes).
    waiting_time_between_flights: u32,
}

impl PricingConfig {
    /// Create a configuration, rejecting negative values and time spans too
    /// long to add to a departure instant.
    pub fn new(
        minimum_available_seats: i64,
        minimum_days_for_round_trip: i64,
        waiting_time_between_flights: i64,
    ) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            minimum_available_seats: bounded(
                "minimum_available_seats",
                minimum_available_seats,
                u32::MAX,
            )?,
            minimum_days_for_round_trip: bounded(
                "minimum_days_for_round_trip",
                minimum_days_for_round_trip,
                MAX_MINIMUM_DAYS,
            )?,
            waiting_time_between_flights: bounded(
                "waiting_time_between_flights",
                waiting_time_between_flights,
                MAX_WAITING_MINUTES,
            )?,
        })
    }

    /// Seat floor applied to every candidate flight.
    pub fn minimum_available_seats(&self) -> u32 {
        self.minimum_available_seats
    }

    /// Minimum stay in whole days.
    pub fn minimum_days_for_round_trip(&self) -> u32 {
        self.minimum_days_for_round_trip
    }

    /// Layover window in minutes.
    pub fn waiting_time_between_flights(&self) -> u32 {
        self.waiting_time_between_flights
    }

    /// Returns the minimum stay as a Duration.
    pub fn minimum_stay(&self) -> Duration {
        Duration::days(self.minimum_days_for_round_trip as i64)
    }

    /// Returns the layover window as a Duration.
    pub fn connection_window(&self) -> Duration {
        Duration::minutes(self.waiting_time_between_flights as i64)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            minimum_available_seats: 1,
            minimum_days_for_round_trip: 1,
            waiting_time_between_flights: 360, // 6 hours
        }
    }
}

fn bounded(field: &'static str, value: i64, max: u32) -> Result<u32, InvalidConfiguration> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or(InvalidConfiguration { field, value, max })
}
