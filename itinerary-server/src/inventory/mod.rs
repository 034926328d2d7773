//! Flight inventory ingestion.
//!
//! The inventory ships as two header-less CSV files:
//!
//! - schedule: `date,flightNumber,fromAirport,toAirport,departureTime,duration`
//! - prices: `date,flightNumber,availableSeats,price`
//!
//! Each schedule row is joined with the price row sharing its
//! `(flightNumber, date)` key. Loading is all-or-nothing: the first bad
//! record aborts the whole load.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::info;

use crate::domain::{AirportCode, Flight, InvalidAirportCode, TimeError, parse_date};

/// Errors raised while loading the inventory.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A file could not be opened or a row could not be decoded
    #[error("failed to read {file} file: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A field holds an invalid date or departure time
    #[error("{file} line {line}: {source}")]
    InvalidTime {
        file: &'static str,
        line: usize,
        #[source]
        source: TimeError,
    },

    /// A schedule row holds an invalid airport code
    #[error("schedule line {line}: {source}")]
    InvalidAirport {
        line: usize,
        #[source]
        source: InvalidAirportCode,
    },

    /// A schedule row has no matching price row
    #[error("no price for flight {flight_number} on {date}")]
    MissingPrice {
        flight_number: String,
        date: NaiveDate,
    },

    /// Two price rows share the same key
    #[error("duplicate price for flight {flight_number} on {date}")]
    DuplicatePrice {
        flight_number: String,
        date: NaiveDate,
    },
}

const SCHEDULE: &str = "schedule";
const PRICES: &str = "prices";

#[derive(Debug, Deserialize)]
struct ScheduleRecord {
    date: String,
    flight_number: String,
    from: String,
    to: String,
    departure_time: String,
    duration: u32,
}

#[derive(Debug, Deserialize)]
struct PriceRecord {
    date: String,
    flight_number: String,
    available_seats: u32,
    price: f64,
}

/// Load the inventory from a schedule file and a prices file.
pub fn load_inventory(
    schedule_path: impl AsRef<Path>,
    prices_path: impl AsRef<Path>,
) -> Result<Vec<Flight>, InventoryError> {
    let schedule = builder()
        .from_path(schedule_path)
        .map_err(|source| InventoryError::Csv {
            file: SCHEDULE,
            source,
        })?;
    let prices = builder()
        .from_path(prices_path)
        .map_err(|source| InventoryError::Csv {
            file: PRICES,
            source,
        })?;

    join(schedule, prices)
}

/// Read the inventory from in-memory or streamed CSV sources.
pub fn read_inventory<S: io::Read, P: io::Read>(
    schedule: S,
    prices: P,
) -> Result<Vec<Flight>, InventoryError> {
    join(builder().from_reader(schedule), builder().from_reader(prices))
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).trim(Trim::All);
    builder
}

fn join<S: io::Read, P: io::Read>(
    mut schedule: Reader<S>,
    mut prices: Reader<P>,
) -> Result<Vec<Flight>, InventoryError> {
    let prices = read_prices(&mut prices)?;
    let mut flights = Vec::new();

    for (index, row) in schedule.deserialize::<ScheduleRecord>().enumerate() {
        let line = index + 1;
        let record = row.map_err(|source| InventoryError::Csv {
            file: SCHEDULE,
            source,
        })?;

        let date = parse_date(&record.date).map_err(|source| InventoryError::InvalidTime {
            file: SCHEDULE,
            line,
            source,
        })?;
        let from = parse_airport(&record.from, line)?;
        let to = parse_airport(&record.to, line)?;

        let Some(price) = prices.get(&(record.flight_number.clone(), date)) else {
            return Err(InventoryError::MissingPrice {
                flight_number: record.flight_number,
                date,
            });
        };

        let flight = Flight::scheduled(
            record.flight_number,
            date,
            from,
            to,
            record.departure_time,
            record.duration,
            price.price,
            price.available_seats,
        )
        .map_err(|source| InventoryError::InvalidTime {
            file: SCHEDULE,
            line,
            source,
        })?;

        flights.push(flight);
    }

    info!(flights = flights.len(), "loaded flight inventory");
    Ok(flights)
}

fn read_prices<P: io::Read>(
    reader: &mut Reader<P>,
) -> Result<HashMap<(String, NaiveDate), PriceRecord>, InventoryError> {
    let mut prices = HashMap::new();

    for (index, row) in reader.deserialize::<PriceRecord>().enumerate() {
        let record = row.map_err(|source| InventoryError::Csv {
            file: PRICES,
            source,
        })?;
        let date = parse_date(&record.date).map_err(|source| InventoryError::InvalidTime {
            file: PRICES,
            line: index + 1,
            source,
        })?;

        let key = (record.flight_number.clone(), date);
        if prices.contains_key(&key) {
            return Err(InventoryError::DuplicatePrice {
                flight_number: record.flight_number,
                date,
            });
        }
        prices.insert(key, record);
    }

    Ok(prices)
}

fn parse_airport(s: &str, line: usize) -> Result<AirportCode, InventoryError> {
    AirportCode::parse_normalized(s).map_err(|source| InventoryError::InvalidAirport { line, source })
}
