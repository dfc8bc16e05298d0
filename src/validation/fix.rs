//! Validation of live position payloads
//!
//! The engine requires every fix handed to it to be well formed; this is
//! the boundary where raw transport payloads are checked and converted.
//! Transports deliver timestamps either as epoch milliseconds or as an
//! RFC 3339 string, so both encodings are accepted here.

use crate::core::{Coordinate, PositionFix};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp encodings accepted from the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixTimestamp {
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// RFC 3339 date-time string
    Text(String),
}

/// Raw live position payload, prior to validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFixPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: FixTimestamp,
}

/// Errors raised while validating a raw fix payload
#[derive(Debug, Clone, PartialEq)]
pub enum FixError {
    /// Coordinates fall outside the valid geodetic range
    OutOfRangeCoordinate { latitude: f64, longitude: f64 },
    /// The timestamp could not be interpreted
    InvalidTimestamp { value: String },
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::OutOfRangeCoordinate {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "fix coordinates out of range: ({}, {})",
                    latitude, longitude
                )
            }
            FixError::InvalidTimestamp { value } => {
                write!(f, "unparseable fix timestamp {:?}", value)
            }
        }
    }
}

impl std::error::Error for FixError {}

impl RawFixPayload {
    /// Validate the payload and convert it into an engine-ready fix.
    pub fn into_fix(self) -> Result<PositionFix, FixError> {
        let location = Coordinate::new(self.latitude, self.longitude);
        if !location.is_valid() {
            return Err(FixError::OutOfRangeCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }

        let timestamp = match &self.timestamp {
            FixTimestamp::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .ok_or_else(|| FixError::InvalidTimestamp {
                    value: millis.to_string(),
                })?,
            FixTimestamp::Text(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|_| FixError::InvalidTimestamp { value: raw.clone() })?,
        };

        Ok(PositionFix::new(location, timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_millis_payload_converts() {
        let payload = RawFixPayload {
            latitude: 24.8607,
            longitude: 67.0011,
            timestamp: FixTimestamp::EpochMillis(1_709_294_400_000),
        };

        let fix = payload.into_fix().unwrap();
        assert_eq!(
            fix.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(fix.location.latitude, 24.8607);
    }

    #[test]
    fn test_rfc3339_payload_converts() {
        let payload = RawFixPayload {
            latitude: 0.0,
            longitude: 0.5,
            timestamp: FixTimestamp::Text("2024-03-01T12:00:00+05:00".to_string()),
        };

        let fix = payload.into_fix().unwrap();
        assert_eq!(
            fix.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 7, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        let payload = RawFixPayload {
            latitude: 95.0,
            longitude: 0.0,
            timestamp: FixTimestamp::EpochMillis(0),
        };

        assert!(matches!(
            payload.into_fix(),
            Err(FixError::OutOfRangeCoordinate { .. })
        ));
    }

    #[test]
    fn test_unparseable_timestamp_is_rejected() {
        let payload = RawFixPayload {
            latitude: 0.0,
            longitude: 0.0,
            timestamp: FixTimestamp::Text("five past noon".to_string()),
        };

        assert!(matches!(
            payload.into_fix(),
            Err(FixError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_payload_deserializes_both_timestamp_encodings() {
        let numeric: RawFixPayload = serde_json::from_str(
            r#"{"latitude": 1.0, "longitude": 2.0, "timestamp": 1709294400000}"#,
        )
        .unwrap();
        assert_eq!(
            numeric.timestamp,
            FixTimestamp::EpochMillis(1_709_294_400_000)
        );

        let textual: RawFixPayload = serde_json::from_str(
            r#"{"latitude": 1.0, "longitude": 2.0, "timestamp": "2024-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            textual.timestamp,
            FixTimestamp::Text("2024-03-01T12:00:00Z".to_string())
        );
    }
}
