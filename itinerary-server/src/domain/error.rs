//! Domain error types.
//!
//! These errors represent violated invariants in the domain layer. They are
//! distinct from store and transport errors.

use super::AirportCode;

/// Domain-level errors for itinerary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't share an airport
    #[error("leg arriving at {0} does not connect to leg departing {1}")]
    LegsNotConnected(AirportCode, AirportCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one leg");

        let mex = AirportCode::parse("MEX").unwrap();
        let jfk = AirportCode::parse("JFK").unwrap();
        let err = DomainError::LegsNotConnected(mex, jfk);
        assert_eq!(
            err.to_string(),
            "leg arriving at MEX does not connect to leg departing JFK"
        );
    }
}
