use crate::domain::coordinate::{CoordinateError, validate_altitude, validate_latitude, validate_longitude};

/// The anchor of the local tangent plane. All local offsets of a scene session are expressed
/// relative to a single origin, so the value is never mutated once a session has started.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoOrigin {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64, // In meters
}

impl GeoOrigin {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoOrigin { lat, lon, alt: 0.0 }
    }

    pub fn with_altitude(self, alt: f64) -> Self {
        GeoOrigin { alt, ..self }
    }

    pub fn try_new(lat: f64, lon: f64, alt: f64) -> Result<Self, CoordinateError> {
        Ok(GeoOrigin {
            lat: validate_latitude(lat)?,
            lon: validate_longitude(lon)?,
            alt: validate_altitude(alt)?,
        })
    }
}
