use crate::domain::coordinate::{CoordinateError, validate_altitude, validate_latitude, validate_longitude};

/// A WGS84 reading. A missing altitude counts as zero.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoSample {
    pub lat: f64,
    pub lon: f64,
    pub alt: Option<f64>,
}

impl GeoSample {
    pub fn new(lat: f64, lon: f64, alt: Option<f64>) -> Self {
        GeoSample { lat, lon, alt }
    }

    pub fn try_new(lat: f64, lon: f64, alt: Option<f64>) -> Result<Self, CoordinateError> {
        Ok(GeoSample {
            lat: validate_latitude(lat)?,
            lon: validate_longitude(lon)?,
            alt: alt.map(validate_altitude).transpose()?,
        })
    }

    pub fn altitude_or_zero(&self) -> f64 {
        self.alt.unwrap_or(0.0)
    }
}
