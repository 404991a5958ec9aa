use crate::domain::Coordinates;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(Coordinates::new(inner.latitude, inner.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_valid_coordinates() -> Result<(), serde_json::Error> {
        let coordinates: Coordinates = serde_json::from_str(r#"{ "latitude": 17.989, "longitude": -92.933 }"#)?;

        assert_eq!(coordinates, Coordinates::new(17.989, -92.933));
        Ok(())
    }

    #[test]
    fn rejects_an_out_of_range_latitude() {
        let result = serde_json::from_str::<Coordinates>(r#"{ "latitude": 91.0, "longitude": -92.933 }"#);

        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("invalid latitude: 91, must be between -90 and 90")
        );
    }

    #[test]
    fn rejects_an_out_of_range_longitude() {
        let result = serde_json::from_str::<Coordinates>(r#"{ "latitude": 17.0, "longitude": -181.0 }"#);

        assert!(result.is_err());
    }
}
