//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{Flight, Itinerary};

/// Request to price a round trip on fixed dates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTripRequest {
    /// Outbound date (YYYY-MM-DD)
    pub departure_date: String,

    /// Origin airport code
    pub from_airport: String,

    /// Return date (YYYY-MM-DD), strictly after the departure date
    pub return_date: String,

    /// Destination airport code
    pub to_airport: String,
}

/// Request to price one-way trips with at most one connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsRequest {
    /// Departure date (YYYY-MM-DD)
    pub date: String,

    pub from_airport: String,

    pub to_airport: String,
}

/// Request to price every round trip between two airports.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllRoundTripRequest {
    pub from_airport: String,

    pub to_airport: String,
}

/// A priced itinerary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Legs in travel order
    pub flights: Vec<FlightResult>,

    /// Sum of leg prices
    pub total_price: f64,

    /// First departure (RFC 3339, UTC)
    pub departure: String,

    /// Last arrival (RFC 3339, UTC)
    pub arrival: String,

    /// Elapsed minutes from first departure to last arrival
    pub duration_mins: i64,

    /// Number of changes (legs - 1)
    pub changes: usize,
}

/// One leg of an itinerary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResult {
    pub flight_number: String,

    /// Local departure date
    pub date: String,

    pub from_airport: String,

    pub to_airport: String,

    /// Local departure time as published
    pub departure_time: String,

    /// Flight time in minutes
    pub duration: u32,

    pub price: f64,

    pub available_seats: u32,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Conversion implementations

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            flights: itinerary
                .legs()
                .iter()
                .map(|f| FlightResult::from_flight(f))
                .collect(),
            total_price: itinerary.total_price(),
            departure: itinerary.departure_utc().to_rfc3339(),
            arrival: itinerary.arrival_utc().to_rfc3339(),
            duration_mins: itinerary.total_duration().num_minutes(),
            changes: itinerary.change_count(),
        }
    }
}

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            date: flight.date.to_string(),
            from_airport: flight.from.to_string(),
            to_airport: flight.to.to_string(),
            departure_time: flight.departure_time.clone(),
            duration: flight.duration_mins,
            price: flight.price,
            available_seats: flight.available_seats,
        }
    }
}
