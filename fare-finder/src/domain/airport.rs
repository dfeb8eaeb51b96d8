//! Airport code types.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid airport port code as accepted by the pricing source.
///
/// Port codes are 3 uppercase ASCII letters (IATA style), optionally
/// followed by an underscore and 3 more letters for a multi-airport
/// city code (e.g. `IST_SAW` covers both Istanbul airports). This type
/// guarantees that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use fare_finder::domain::AirportCode;
///
/// let ist = AirportCode::parse("IST").unwrap();
/// assert_eq!(ist.as_str(), "IST");
///
/// // Multi-airport city codes
/// assert!(AirportCode::parse("IST_SAW").is_ok());
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("ist").is_err());
///
/// // Wrong shapes are rejected
/// assert!(AirportCode::parse("IS").is_err());
/// assert!(AirportCode::parse("ISTA").is_err());
/// assert!(AirportCode::parse("IST_").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AirportCode(String);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be one 3-letter group, or two 3-letter groups
    /// joined by a single underscore. Letters must be uppercase ASCII.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let mut groups = 0;
        for group in s.split('_') {
            groups += 1;
            if groups > 2 {
                return Err(InvalidAirportCode {
                    reason: "at most two underscore-joined groups",
                });
            }
            if group.len() != 3 {
                return Err(InvalidAirportCode {
                    reason: "each group must be exactly 3 characters",
                });
            }
            if !group.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(InvalidAirportCode {
                    reason: "letters must be uppercase ASCII A-Z",
                });
            }
        }

        Ok(AirportCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("IST").is_ok());
        assert!(AirportCode::parse("SAW").is_ok());
        assert!(AirportCode::parse("LWO").is_ok());
        assert!(AirportCode::parse("AAA").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn parse_city_codes() {
        assert!(AirportCode::parse("IST_SAW").is_ok());
        assert_eq!(AirportCode::parse("IST_SAW").unwrap().as_str(), "IST_SAW");
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("ist").is_err());
        assert!(AirportCode::parse("Ist").is_err());
        assert!(AirportCode::parse("ISt").is_err());
        assert!(AirportCode::parse("IST_saw").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("I").is_err());
        assert!(AirportCode::parse("IS").is_err());
        assert!(AirportCode::parse("ISTA").is_err());
        assert!(AirportCode::parse("ISTANBUL").is_err());
    }

    #[test]
    fn reject_malformed_city_codes() {
        assert!(AirportCode::parse("IST_").is_err());
        assert!(AirportCode::parse("_SAW").is_err());
        assert!(AirportCode::parse("IST__SAW").is_err());
        assert!(AirportCode::parse("IST_SAW_ESB").is_err());
        assert!(AirportCode::parse("IST_SA").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("I1T").is_err());
        assert!(AirportCode::parse("I-T").is_err());
        assert!(AirportCode::parse("I T").is_err());
        assert!(AirportCode::parse("IÖT").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = AirportCode::parse("LWO").unwrap();
        assert_eq!(code.as_str(), "LWO");
    }

    #[test]
    fn display() {
        let code = AirportCode::parse("IST").unwrap();
        assert_eq!(format!("{}", code), "IST");
    }

    #[test]
    fn debug() {
        let code = AirportCode::parse("SAW").unwrap();
        assert_eq!(format!("{:?}", code), "AirportCode(SAW)");
    }

    #[test]
    fn equality() {
        let a = AirportCode::parse("IST").unwrap();
        let b = AirportCode::parse("IST").unwrap();
        let c = AirportCode::parse("LWO").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
