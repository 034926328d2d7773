//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{AirportCode, Itinerary, parse_date};
use crate::pricing::{ItineraryPricer, PricingError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Every pricing route takes a JSON body and answers both GET and POST.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/itinerary/priceRoundTrip",
            get(price_round_trip).post(price_round_trip),
        )
        .route(
            "/itinerary/priceWithConnections",
            get(price_with_connections).post(price_with_connections),
        )
        .route(
            "/itinerary/priceAllRoundTrip",
            get(price_all_round_trip).post(price_all_round_trip),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Price a round trip on fixed dates.
async fn price_round_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<ItineraryResult>>, AppError> {
    let req: RoundTripRequest = parse_body(&body)?;

    let from = parse_airport("fromAirport", &req.from_airport)?;
    let to = parse_airport("toAirport", &req.to_airport)?;
    let departure_date = parse_request_date("departureDate", &req.departure_date)?;
    let return_date = parse_request_date("returnDate", &req.return_date)?;

    if return_date <= departure_date {
        return Err(AppError::BadRequest {
            message: "returnDate must be after departureDate".into(),
        });
    }

    let pricer = ItineraryPricer::new(state.store.as_ref(), state.config.as_ref());
    let itineraries = pricer.price_round_trip(departure_date, from, return_date, to)?;

    Ok(respond(&itineraries))
}

/// Price one-way trips, direct or with one connection.
async fn price_with_connections(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<ItineraryResult>>, AppError> {
    let req: ConnectionsRequest = parse_body(&body)?;

    let from = parse_airport("fromAirport", &req.from_airport)?;
    let to = parse_airport("toAirport", &req.to_airport)?;
    let date = parse_request_date("date", &req.date)?;

    let pricer = ItineraryPricer::new(state.store.as_ref(), state.config.as_ref());
    let itineraries = pricer.price_with_connections(date, from, to)?;

    Ok(respond(&itineraries))
}

/// Price every round trip between two airports.
async fn price_all_round_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<ItineraryResult>>, AppError> {
    let req: AllRoundTripRequest = parse_body(&body)?;

    let from = parse_airport("fromAirport", &req.from_airport)?;
    let to = parse_airport("toAirport", &req.to_airport)?;

    let pricer = ItineraryPricer::new(state.store.as_ref(), state.config.as_ref());
    let itineraries = pricer.price_all_round_trip(from, to)?;

    Ok(respond(&itineraries))
}

// Parse JSON by hand so that GET requests without a content type work too
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })
}

fn parse_airport(field: &str, value: &str) -> Result<AirportCode, AppError> {
    AirportCode::parse_normalized(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field}: {value}"),
    })
}

fn parse_request_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    parse_date(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field}: {value} (expected YYYY-MM-DD)"),
    })
}

fn respond(itineraries: &[Itinerary]) -> Json<Vec<ItineraryResult>> {
    Json(
        itineraries
            .iter()
            .map(ItineraryResult::from_itinerary)
            .collect(),
    )
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "pricing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
