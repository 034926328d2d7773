//! Round-trip matching.
//!
//! Two modes:
//!
//! - **Exact dates**: outbound flights on the departure date are joined with
//!   return flights on the return date. Every pair is emitted as two
//!   single-leg itineraries (outbound first, then return).
//! - **All round trips**: with no fixed dates, the earliest outbound and the
//!   latest qualifying return bound a window of departure and return
//!   candidates. Candidates are then paired one by one under the
//!   round-flight predicate and every valid pair becomes one two-leg
//!   itinerary.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::domain::{AirportCode, DomainError, Flight, Itinerary};

/// True if `flight` is an outbound leg `from -> to` on `date` with at least
/// `floor` seats.
pub fn is_leg_on(
    flight: &Flight,
    date: NaiveDate,
    from: &AirportCode,
    to: &AirportCode,
    floor: u32,
) -> bool {
    flight.date == date && flight.serves(from, to) && flight.is_bookable(floor)
}

/// Cartesian join for the exact-date mode.
///
/// For each outbound (in order) and each return (in order) emits the
/// outbound itinerary followed by the return itinerary. An empty side
/// yields an empty result.
pub fn pair_exact_dates(outbound: &[Arc<Flight>], returns: &[Arc<Flight>]) -> Vec<Itinerary> {
    let mut itineraries = Vec::with_capacity(outbound.len() * returns.len() * 2);

    for departure in outbound {
        for ret in returns {
            itineraries.push(Itinerary::direct(departure.clone()));
            itineraries.push(Itinerary::direct(ret.clone()));
        }
    }

    itineraries
}

/// The round-flight predicate.
///
/// `ret` is a valid return for `departure` when it flies the reverse route
/// and leaves no earlier than the outbound arrival plus the minimum stay.
pub fn is_round_flight(departure: &Flight, ret: &Flight, minimum_stay: Duration) -> bool {
    departure.to == ret.from
        && ret.to == departure.from
        && ret.departure_utc >= departure.arrival_utc() + minimum_stay
}

/// Departure and return candidates for the all-round-trips mode.
#[derive(Debug, Clone, Default)]
pub struct RoundTripCandidates {
    /// Outbound flights leaving before the latest return minus the minimum stay.
    pub departures: Vec<Arc<Flight>>,

    /// Return flights leaving after the earliest outbound plus the minimum stay.
    pub returns: Vec<Arc<Flight>>,
}

impl RoundTripCandidates {
    /// Select candidates from `flights`, which must be ordered by date.
    ///
    /// Returns `None` when there is no outbound flight at all, or when no
    /// return leaves after the earliest outbound plus the minimum stay.
    pub fn select(
        flights: &[Arc<Flight>],
        origin: &AirportCode,
        destination: &AirportCode,
        floor: u32,
        minimum_stay: Duration,
    ) -> Option<Self> {
        let is_outbound = |f: &Flight| f.serves(origin, destination) && f.is_bookable(floor);
        let is_inbound = |f: &Flight| f.serves(destination, origin) && f.is_bookable(floor);

        let Some(earliest_outbound) = flights.iter().find(|f| is_outbound(f)) else {
            debug!(%origin, %destination, "no outbound flight for round trip");
            return None;
        };

        let return_window_start = earliest_outbound.departure_utc + minimum_stay;
        let returns: Vec<Arc<Flight>> = flights
            .iter()
            .filter(|f| is_inbound(f) && f.departure_utc > return_window_start)
            .cloned()
            .collect();

        let Some(latest_return) = returns.last() else {
            debug!(%origin, %destination, "no return flight after minimum stay");
            return None;
        };

        let departure_window_end = latest_return.departure_utc - minimum_stay;
        let departures: Vec<Arc<Flight>> = flights
            .iter()
            .filter(|f| is_outbound(f) && f.departure_utc < departure_window_end)
            .cloned()
            .collect();

        Some(Self {
            departures,
            returns,
        })
    }

    /// Pair every departure with every return that satisfies
    /// [`is_round_flight`], as two-leg itineraries in departure-then-return
    /// order.
    pub fn pair(&self, minimum_stay: Duration) -> Result<Vec<Itinerary>, DomainError> {
        let mut itineraries = Vec::new();

        for departure in &self.departures {
            for ret in &self.returns {
                if is_round_flight(departure, ret, minimum_stay) {
                    itineraries.push(Itinerary::connecting(departure.clone(), ret.clone())?);
                }
            }
        }

        Ok(itineraries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn flight(number: &str, day: &str, from: &str, to: &str, time: &str) -> Arc<Flight> {
        flight_with_seats(number, day, from, to, time, 5)
    }

    fn flight_with_seats(
        number: &str,
        day: &str,
        from: &str,
        to: &str,
        time: &str,
        seats: u32,
    ) -> Arc<Flight> {
        Arc::new(
            Flight::scheduled(number, date(day), code(from), code(to), time, 300, 100.0, seats)
                .unwrap(),
        )
    }

    fn numbers(itinerary: &Itinerary) -> Vec<&str> {
        itinerary
            .legs()
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect()
    }

    // Exact-date mode

    #[test]
    fn leg_on_checks_date_route_and_floor() {
        let f = flight_with_seats("1", "2022-09-14", "TLV", "JFK", "09:00Z", 2);
        let (tlv, jfk) = (code("TLV"), code("JFK"));

        assert!(is_leg_on(&f, date("2022-09-14"), &tlv, &jfk, 2));
        assert!(!is_leg_on(&f, date("2022-09-15"), &tlv, &jfk, 2));
        assert!(!is_leg_on(&f, date("2022-09-14"), &jfk, &tlv, 2));
        assert!(!is_leg_on(&f, date("2022-09-14"), &tlv, &jfk, 3));
    }

    #[test]
    fn one_by_one_gives_two_itineraries() {
        let out = flight("1", "2022-09-14", "TLV", "JFK", "09:00Z");
        let back = flight("2", "2022-09-18", "JFK", "TLV", "09:00Z");

        let itineraries = pair_exact_dates(&[out], &[back]);

        assert_eq!(itineraries.len(), 2);
        assert_eq!(numbers(&itineraries[0]), ["1"]);
        assert_eq!(numbers(&itineraries[1]), ["2"]);
    }

    #[test]
    fn exact_dates_is_a_full_cartesian_product() {
        let outs = [
            flight("1", "2022-09-14", "TLV", "JFK", "09:00Z"),
            flight("2", "2022-09-14", "TLV", "JFK", "15:00Z"),
        ];
        let backs = [
            flight("3", "2022-09-18", "JFK", "TLV", "09:00Z"),
            flight("4", "2022-09-18", "JFK", "TLV", "19:00Z"),
            flight("5", "2022-09-18", "JFK", "TLV", "23:00Z"),
        ];

        let itineraries = pair_exact_dates(&outs, &backs);
        assert_eq!(itineraries.len(), 2 * 3 * 2);

        let flattened: Vec<&str> = itineraries.iter().flat_map(|i| numbers(i)).collect();
        assert_eq!(
            flattened,
            ["1", "3", "1", "4", "1", "5", "2", "3", "2", "4", "2", "5"]
        );
    }

    #[test]
    fn exact_dates_with_empty_side_is_empty() {
        let out = flight("1", "2022-09-14", "TLV", "JFK", "09:00Z");
        assert!(pair_exact_dates(&[out.clone()], &[]).is_empty());
        assert!(pair_exact_dates(&[], &[out]).is_empty());
    }

    // Round-flight predicate

    #[test]
    fn round_flight_respects_minimum_stay_after_arrival() {
        // Outbound lands 14:00 on the 14th
        let out = flight("1", "2022-09-14", "TLV", "JFK", "09:00Z");
        let exactly = flight("2", "2022-09-15", "JFK", "TLV", "14:00Z");
        let too_soon = flight("3", "2022-09-15", "JFK", "TLV", "13:59Z");

        assert!(is_round_flight(&out, &exactly, Duration::days(1)));
        assert!(!is_round_flight(&out, &too_soon, Duration::days(1)));
    }

    #[test]
    fn round_flight_requires_reverse_route() {
        let out = flight("1", "2022-09-14", "TLV", "JFK", "09:00Z");
        let same_way = flight("2", "2022-09-18", "TLV", "JFK", "09:00Z");
        let elsewhere = flight("3", "2022-09-18", "JFK", "MEX", "09:00Z");

        assert!(!is_round_flight(&out, &same_way, Duration::days(1)));
        assert!(!is_round_flight(&out, &elsewhere, Duration::days(1)));
    }

    #[test]
    fn round_flight_with_zero_stay_allows_immediate_return() {
        let out = flight("1", "2022-09-14", "TLV", "JFK", "09:00Z");
        let back = flight("2", "2022-09-14", "JFK", "TLV", "14:00Z");
        assert!(is_round_flight(&out, &back, Duration::zero()));
    }

    // All-round-trips candidate selection

    #[test]
    fn no_outbound_means_no_candidates() {
        let flights = vec![flight("1", "2022-09-18", "JFK", "TLV", "09:00Z")];
        let selected =
            RoundTripCandidates::select(&flights, &code("TLV"), &code("JFK"), 1, Duration::days(1));
        assert!(selected.is_none());
    }

    #[test]
    fn return_on_same_day_is_outside_window() {
        let flights = vec![
            flight("1", "2022-09-14", "TLV", "JFK", "09:00Z"),
            flight("2", "2022-09-14", "JFK", "TLV", "20:00Z"),
        ];
        let selected =
            RoundTripCandidates::select(&flights, &code("TLV"), &code("JFK"), 1, Duration::days(1));
        assert!(selected.is_none());
    }

    #[test]
    fn window_bounds_both_sides() {
        let flights = vec![
            flight("1", "2022-09-14", "TLV", "JFK", "09:00Z"),
            flight("2", "2022-09-15", "JFK", "TLV", "08:00Z"),
            flight("3", "2022-09-16", "TLV", "JFK", "09:00Z"),
            flight("4", "2022-09-17", "JFK", "TLV", "09:00Z"),
            flight("5", "2022-09-17", "TLV", "JFK", "09:00Z"),
        ];

        let selected =
            RoundTripCandidates::select(&flights, &code("TLV"), &code("JFK"), 1, Duration::days(1))
                .unwrap();

        // Return window opens after 2022-09-15T09:00Z: flight 2 is too early
        let returns: Vec<_> = selected.returns.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(returns, ["4"]);

        // Departure window closes before 2022-09-16T09:00Z (exclusive)
        let departures: Vec<_> = selected
            .departures
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect();
        assert_eq!(departures, ["1"]);
    }

    #[test]
    fn candidates_skip_flights_below_floor() {
        let flights = vec![
            flight_with_seats("1", "2022-09-13", "TLV", "JFK", "09:00Z", 0),
            flight("2", "2022-09-14", "TLV", "JFK", "09:00Z"),
            flight("3", "2022-09-17", "JFK", "TLV", "09:00Z"),
            flight_with_seats("4", "2022-09-19", "JFK", "TLV", "09:00Z", 0),
        ];

        let selected =
            RoundTripCandidates::select(&flights, &code("TLV"), &code("JFK"), 1, Duration::days(1))
                .unwrap();

        assert_eq!(selected.departures.len(), 1);
        assert_eq!(selected.departures[0].flight_number, "2");
        assert_eq!(selected.returns.len(), 1);
        assert_eq!(selected.returns[0].flight_number, "3");
    }

    #[test]
    fn pairing_emits_two_leg_itineraries() {
        let flights = vec![
            flight("1", "2022-09-14", "TLV", "JFK", "09:00Z"),
            flight("2", "2022-09-16", "TLV", "JFK", "09:00Z"),
            flight("3", "2022-09-17", "JFK", "TLV", "09:00Z"),
            flight("4", "2022-09-18", "JFK", "TLV", "09:00Z"),
        ];
        let stay = Duration::days(1);

        let selected =
            RoundTripCandidates::select(&flights, &code("TLV"), &code("JFK"), 1, stay).unwrap();
        let itineraries = selected.pair(stay).unwrap();

        let pairs: Vec<Vec<&str>> = itineraries.iter().map(numbers).collect();
        assert_eq!(pairs, [["1", "3"], ["1", "4"], ["2", "4"]]);
        assert!(itineraries.iter().all(|i| i.origin() == code("TLV")));
    }

    #[test]
    fn pairing_filters_candidates_inside_window() {
        // Flight 2 lands 14:00 on the 16th: its return needs >= 14:00 on the 17th
        let flights = vec![
            flight("1", "2022-09-14", "TLV", "JFK", "09:00Z"),
            flight("2", "2022-09-16", "TLV", "JFK", "09:00Z"),
            flight("3", "2022-09-17", "JFK", "TLV", "12:00Z"),
            flight("4", "2022-09-18", "JFK", "TLV", "09:00Z"),
        ];
        let stay = Duration::days(1);

        let selected =
            RoundTripCandidates::select(&flights, &code("TLV"), &code("JFK"), 1, stay).unwrap();
        let itineraries = selected.pair(stay).unwrap();
        let pairs: Vec<Vec<&str>> = itineraries.iter().map(numbers).collect();

        assert_eq!(pairs, [["1", "3"], ["1", "4"], ["2", "4"]]);
    }
}
