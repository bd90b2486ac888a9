use crate::domain::GeoOrigin;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoOrigin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude_m: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoOrigin::try_new(inner.latitude, inner.longitude, inner.altitude_m)
            .map_err(|e| Error::custom(format!("invalid scene origin: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn deserializes_an_origin_without_altitude() {
        let origin = serde_json::from_str::<GeoOrigin>(r#"{"latitude": 24.942349, "longitude": 121.367164}"#).unwrap();

        assert_eq!(origin, GeoOrigin::new(24.942349, 121.367164));
    }

    #[test]
    fn deserializes_an_origin_with_altitude() {
        let json = r#"{"latitude": 51.8615899, "longitude": 4.3580323, "altitude_m": -2.5}"#;

        let origin = serde_json::from_str::<GeoOrigin>(json).unwrap();

        assert_eq!(origin, GeoOrigin::new(51.8615899, 4.3580323).with_altitude(-2.5));
    }

    #[rstest]
    #[case::latitude(
        r#"{"latitude": 90.5, "longitude": 4.0}"#,
        "invalid scene origin: invalid coordinate latitude: 90.5, must be between -90 and 90"
    )]
    #[case::longitude(
        r#"{"latitude": 51.0, "longitude": -200.0}"#,
        "invalid scene origin: invalid coordinate longitude: -200, must be between -180 and 180"
    )]
    fn rejects_out_of_range_values(#[case] json: &str, #[case] expected: &str) {
        let error = serde_json::from_str::<GeoOrigin>(json).unwrap_err();

        assert!(error.to_string().starts_with(expected), "unexpected error: {}", error);
    }
}
