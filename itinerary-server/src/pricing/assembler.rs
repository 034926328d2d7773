//! Direct and connecting itinerary assembly.
//!
//! Flights leaving the origin are split in two: those landing at the
//! destination become direct itineraries, the rest are connection origins
//! continued by the connection matcher.

use std::sync::Arc;

use crate::domain::{AirportCode, DomainError, Flight, Itinerary};

use super::config::PricingConfig;
use super::connection::{find_connections, is_connection_origin};

/// One single-leg itinerary per bookable flight landing at `destination`,
/// in input order.
pub fn direct_itineraries(
    flights: &[Arc<Flight>],
    destination: &AirportCode,
    floor: u32,
) -> Vec<Itinerary> {
    flights
        .iter()
        .filter(|f| &f.to == destination && f.is_bookable(floor))
        .map(|f| Itinerary::direct(f.clone()))
        .collect()
}

/// Bookable flights that do not land at `destination`, in input order.
pub fn connection_origins(
    flights: &[Arc<Flight>],
    destination: &AirportCode,
    floor: u32,
) -> Vec<Arc<Flight>> {
    flights
        .iter()
        .filter(|f| is_connection_origin(f, destination) && f.is_bookable(floor))
        .cloned()
        .collect()
}

/// One two-leg itinerary per (origin, next leg) match.
///
/// Ordered by origin, then by the order of `candidates`. An origin with N
/// qualifying next legs produces N itineraries; one with none produces
/// nothing.
pub fn connection_itineraries(
    origins: &[Arc<Flight>],
    candidates: &[Arc<Flight>],
    destination: &AirportCode,
    config: &PricingConfig,
) -> Result<Vec<Itinerary>, DomainError> {
    let mut itineraries = Vec::new();

    for origin in origins {
        for next in find_connections(origin, candidates, destination, config) {
            itineraries.push(Itinerary::connecting(origin.clone(), next)?);
        }
    }

    Ok(itineraries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn flight(number: &str, from: &str, to: &str, time: &str, seats: u32) -> Arc<Flight> {
        Arc::new(
            Flight::scheduled(
                number,
                NaiveDate::from_ymd_opt(2022, 9, 14).unwrap(),
                code(from),
                code(to),
                time,
                300,
                100.0,
                seats,
            )
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

    #[test]
    fn directs_keep_input_order() {
        let flights = vec![
            flight("1", "TLV", "JFK", "12:00Z", 5),
            flight("2", "TLV", "MEX", "09:00Z", 5),
            flight("3", "TLV", "JFK", "06:00Z", 5),
        ];

        let directs = direct_itineraries(&flights, &code("JFK"), 1);
        let got: Vec<_> = directs.iter().map(numbers).collect();
        assert_eq!(got, [["1"], ["3"]]);
    }

    #[test]
    fn directs_fail_closed_on_seat_floor() {
        let flights = vec![flight("1", "TLV", "JFK", "12:00Z", 0)];
        assert!(direct_itineraries(&flights, &code("JFK"), 1).is_empty());
    }

    #[test]
    fn origins_exclude_directs() {
        let flights = vec![
            flight("1", "TLV", "JFK", "12:00Z", 5),
            flight("2", "TLV", "MEX", "09:00Z", 5),
            flight("3", "TLV", "LIM", "09:00Z", 0),
        ];

        let origins = connection_origins(&flights, &code("JFK"), 1);
        assert_eq!(origins.len(), 1);
        assert_eq!(origins[0].flight_number, "2");
    }

    #[test]
    fn each_match_is_its_own_itinerary() {
        let origins = vec![
            flight("1", "TLV", "MEX", "09:00Z", 5),
            flight("2", "TLV", "LIM", "09:00Z", 5),
        ];
        let candidates = vec![
            flight("3", "MEX", "JFK", "16:00Z", 5),
            flight("4", "LIM", "JFK", "15:00Z", 5),
            flight("5", "MEX", "JFK", "19:30Z", 5),
            flight("6", "MEX", "JFK", "22:00Z", 5),
        ];

        let itineraries =
            connection_itineraries(&origins, &candidates, &code("JFK"), &PricingConfig::default())
                .unwrap();
        let got: Vec<_> = itineraries.iter().map(numbers).collect();

        assert_eq!(got, [["1", "3"], ["1", "5"], ["2", "4"]]);
        assert!(itineraries.iter().all(|i| i.leg_count() == 2));
    }

    #[test]
    fn origin_without_match_contributes_nothing() {
        let origins = vec![flight("1", "TLV", "MEX", "09:00Z", 5)];
        let candidates = vec![flight("2", "MEX", "JFK", "21:00Z", 5)];

        let itineraries =
            connection_itineraries(&origins, &candidates, &code("JFK"), &PricingConfig::default())
                .unwrap();
        assert!(itineraries.is_empty());
    }
}
