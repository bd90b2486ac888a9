use crate::domain::GeoSample;
use crate::domain::coordinate::{CoordinateError, validate_finite};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A raw reading from a location service, not yet validated.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>, // In meters
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl LocationFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LocationFix {
            latitude,
            longitude,
            altitude: None,
            accuracy: None,
            timestamp: None,
        }
    }

    pub fn to_sample(&self) -> Result<GeoSample, CoordinateError> {
        if let Some(accuracy) = self.accuracy {
            let accuracy = validate_finite("accuracy", accuracy)?;
            if accuracy < 0.0 {
                return Err(CoordinateError::InvalidCoordinate {
                    field: "accuracy",
                    value: accuracy,
                    reason: "must not be negative",
                });
            }
        }

        GeoSample::try_new(self.latitude, self.longitude, self.altitude)
    }
}
