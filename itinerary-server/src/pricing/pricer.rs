//! Pricing facade.
//!
//! The three public queries. Each one issues its store queries up front and
//! then joins the returned flight sets in memory; nothing here blocks on
//! anything but the store, and nothing is shared between calls except the
//! read-only configuration.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{AirportCode, Itinerary};
use crate::store::FlightQuery;

use super::assembler::{connection_itineraries, connection_origins, direct_itineraries};
use super::config::PricingConfig;
use super::connection::candidate_bounds;
use super::round_trip::{RoundTripCandidates, is_leg_on, pair_exact_dates};
use super::PricingError;

/// Itinerary pricer over a flight store.
pub struct ItineraryPricer<'a, Q: FlightQuery> {
    store: &'a Q,
    config: &'a PricingConfig,
}

impl<'a, Q: FlightQuery> ItineraryPricer<'a, Q> {
    /// Create a new pricer.
    pub fn new(store: &'a Q, config: &'a PricingConfig) -> Self {
        Self { store, config }
    }

    /// Price a round trip on fixed dates.
    ///
    /// Returns the Cartesian product of outbound flights on
    /// `departure_date` and return flights on `return_date`, each pair as
    /// two single-leg itineraries (outbound, then return). Date ordering is
    /// the caller's responsibility.
    pub fn price_round_trip(
        &self,
        departure_date: NaiveDate,
        from: AirportCode,
        return_date: NaiveDate,
        to: AirportCode,
    ) -> Result<Vec<Itinerary>, PricingError> {
        let floor = self.config.minimum_available_seats();
        let flights =
            self.store
                .find_by_dates_and_airports(&[departure_date, return_date], &[from, to], floor)?;

        let outbound: Vec<_> = flights
            .iter()
            .filter(|f| is_leg_on(f, departure_date, &from, &to, floor))
            .cloned()
            .collect();
        let returns: Vec<_> = flights
            .iter()
            .filter(|f| is_leg_on(f, return_date, &to, &from, floor))
            .cloned()
            .collect();

        debug!(
            %from,
            %to,
            outbound = outbound.len(),
            returns = returns.len(),
            "round trip candidates"
        );

        Ok(pair_exact_dates(&outbound, &returns))
    }

    /// Price one-way trips on `date`, direct or with one connection.
    ///
    /// Direct itineraries come first, then connecting ones, both in the
    /// order the store returned the origin flights.
    pub fn price_with_connections(
        &self,
        date: NaiveDate,
        from: AirportCode,
        to: AirportCode,
    ) -> Result<Vec<Itinerary>, PricingError> {
        let floor = self.config.minimum_available_seats();
        let flights = self.store.find_by_date_and_origin(date, &from, floor)?;

        let mut itineraries = direct_itineraries(&flights, &to, floor);
        let origins = connection_origins(&flights, &to, floor);

        let Some((start, end)) = candidate_bounds(&origins, self.config.connection_window())
        else {
            debug!(%from, %to, direct = itineraries.len(), "no connection origins");
            return Ok(itineraries);
        };

        let candidates = self
            .store
            .find_by_time_window_and_destination(start, end, &to, floor)?;
        let connections = connection_itineraries(&origins, &candidates, &to, self.config)?;

        debug!(
            %from,
            %to,
            direct = itineraries.len(),
            origins = origins.len(),
            candidates = candidates.len(),
            connections = connections.len(),
            "priced with connections"
        );

        itineraries.extend(connections);
        Ok(itineraries)
    }

    /// Price every valid round trip between two airports, on any dates.
    ///
    /// Returns one two-leg itinerary per (departure, return) pair that
    /// satisfies the round-flight predicate. No outbound flight, or no
    /// return after the minimum stay, yields an empty result.
    pub fn price_all_round_trip(
        &self,
        from: AirportCode,
        to: AirportCode,
    ) -> Result<Vec<Itinerary>, PricingError> {
        let floor = self.config.minimum_available_seats();
        let stay = self.config.minimum_stay();
        let flights = self
            .store
            .find_by_airports_ordered_by_date(&[from, to], floor)?;

        let Some(candidates) = RoundTripCandidates::select(&flights, &from, &to, floor, stay)
        else {
            return Ok(Vec::new());
        };

        let itineraries = candidates.pair(stay)?;

        debug!(
            %from,
            %to,
            departures = candidates.departures.len(),
            returns = candidates.returns.len(),
            pairs = itineraries.len(),
            "priced all round trips"
        );

        Ok(itineraries)
    }
}

#[cfg(test)]
#[path = "pricer_tests.rs"]
mod tests;
