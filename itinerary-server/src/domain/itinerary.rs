//! Itinerary types.
//!
//! An `Itinerary` is one priceable journey: one flight leg for a direct
//! trip, or several legs flown in order for a connection or a paired round
//! trip.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::{AirportCode, DomainError, Flight};

/// An ordered, non-empty sequence of flight legs.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (arrival airport of one = departure airport
///   of the next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Arc<Flight>>,
}

impl Itinerary {
    /// Constructs an itinerary from legs in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The leg list is empty
    /// - Two consecutive legs don't connect
    pub fn new(legs: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let arrival = window[0].to;
            let departure = window[1].from;
            if arrival != departure {
                return Err(DomainError::LegsNotConnected(arrival, departure));
            }
        }

        Ok(Itinerary { legs })
    }

    /// A single-leg itinerary.
    pub fn direct(flight: Arc<Flight>) -> Self {
        Itinerary { legs: vec![flight] }
    }

    /// A two-leg itinerary: `first` followed by `next`.
    pub fn connecting(first: Arc<Flight>, next: Arc<Flight>) -> Result<Self, DomainError> {
        Self::new(vec![first, next])
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Arc<Flight>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the number of changes (legs - 1).
    pub fn change_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Returns true for a single-leg itinerary.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    fn first(&self) -> &Flight {
        // Non-empty by construction.
        &self.legs[0]
    }

    fn last(&self) -> &Flight {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the departure airport of the first leg.
    pub fn origin(&self) -> AirportCode {
        self.first().from
    }

    /// Returns the arrival airport of the last leg.
    pub fn destination(&self) -> AirportCode {
        self.last().to
    }

    /// Returns the departure instant of the first leg.
    pub fn departure_utc(&self) -> DateTime<Utc> {
        self.first().departure_utc
    }

    /// Returns the arrival instant of the last leg.
    pub fn arrival_utc(&self) -> DateTime<Utc> {
        self.last().arrival_utc()
    }

    /// Returns the elapsed time from first departure to last arrival.
    pub fn total_duration(&self) -> Duration {
        self.arrival_utc().signed_duration_since(self.departure_utc())
    }

    /// Returns the sum of all leg fares.
    pub fn total_price(&self) -> f64 {
        self.legs.iter().map(|leg| leg.price).sum()
    }
}
