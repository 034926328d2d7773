//! IATA airport codes.

use std::fmt;

/// Rejection reason for a string that is not an airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// An IATA location code such as `TLV` or `JFK`.
///
/// Stored inline as three bytes, so it is `Copy` and cheap to compare and
/// hash. Holding one means the letters were already checked.
///
/// ```
/// use itinerary_server::domain::AirportCode;
///
/// let mex = AirportCode::parse("MEX").unwrap();
/// assert_eq!(mex.to_string(), "MEX");
/// assert!(AirportCode::parse("mex").is_err());
/// assert!(AirportCode::parse("MEXI").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Strict parse: three bytes, each in `A..=Z`.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        match *s.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(u8::is_ascii_uppercase) => Ok(Self([a, b, c])),
            [_, _, _] => Err(InvalidAirportCode {
                reason: "only the letters A-Z are allowed",
            }),
            _ => Err(InvalidAirportCode {
                reason: "expected three letters",
            }),
        }
    }

    /// Lenient parse for request fields and inventory files: ignores
    /// surrounding whitespace and letter case.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// The code as text.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_codes() {
        for s in ["TLV", "JFK", "MEX", "LHR", "CDG"] {
            assert_eq!(AirportCode::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn strict_parse_is_case_sensitive() {
        let err = AirportCode::parse("Jfk").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid airport code: only the letters A-Z are allowed"
        );
    }

    #[test]
    fn digits_and_punctuation_rejected() {
        for s in ["J1K", "JF.", "J K", "123"] {
            assert!(AirportCode::parse(s).is_err(), "{s}");
        }
    }

    #[test]
    fn multibyte_letters_rejected() {
        // "TÖ" is three bytes but not three ASCII letters
        assert!(AirportCode::parse("TÖ").is_err());
        assert!(AirportCode::parse("ÖRE").is_err());
    }

    #[test]
    fn length_checked() {
        let err = AirportCode::parse("KJFK").unwrap_err();
        assert_eq!(err.to_string(), "invalid airport code: expected three letters");
        assert!(AirportCode::parse("").is_err());
    }

    #[test]
    fn normalized_accepts_request_input() {
        assert_eq!(AirportCode::parse_normalized(" tlv\n").unwrap(), AirportCode::parse("TLV").unwrap());
        assert!(AirportCode::parse_normalized("t lv").is_err());
        assert!(AirportCode::parse_normalized("   ").is_err());
    }

    #[test]
    fn ordering_is_alphabetical() {
        let mut codes: Vec<_> = ["MEX", "JFK", "TLV"]
            .into_iter()
            .map(|s| AirportCode::parse(s).unwrap())
            .collect();
        codes.sort();
        assert_eq!(codes.iter().map(|c| c.as_str()).collect::<Vec<_>>(), ["JFK", "MEX", "TLV"]);
    }

    #[test]
    fn debug_names_the_type() {
        let code = AirportCode::parse("LIM").unwrap();
        assert_eq!(format!("{code:?}"), "AirportCode(LIM)");
        assert_eq!(format!("{code}"), "LIM");
    }
}
