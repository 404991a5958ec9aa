use crate::domain::Coordinates;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// An axis-aligned latitude/longitude rectangle, edges inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    /// The region the map is allowed to show.
    pub const TABASCO: Bounds = Bounds {
        south: 17.015,
        north: 18.630,
        west: -94.718,
        east: -90.500,
    };

    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        self.south <= coordinates.latitude
            && coordinates.latitude <= self.north
            && self.west <= coordinates.longitude
            && coordinates.longitude <= self.east
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::TABASCO
    }
}

/// Rectangle test against the fixed Tabasco bounds.
#[cfg(test)]
pub fn in_bounds(latitude: f64, longitude: f64) -> bool {
    Bounds::TABASCO.contains(&Coordinates::new(latitude, longitude))
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            south: f64,
            north: f64,
            west: f64,
            east: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.south <= inner.north) {
            return Err(Error::custom(format!(
                "invalid bounds: south {} must not be above north {}",
                inner.south, inner.north
            )));
        }

        if !(inner.west <= inner.east) {
            return Err(Error::custom(format!(
                "invalid bounds: west {} must not be east of {}",
                inner.west, inner.east
            )));
        }

        Ok(Bounds {
            south: inner.south,
            north: inner.north,
            west: inner.west,
            east: inner.east,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(17.989, -92.933)]
    #[case(17.015, -94.718)]
    #[case(18.630, -90.500)]
    #[case(18.0, -91.0)]
    fn in_bounds_accepts_points_inside_the_rectangle(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(in_bounds(latitude, longitude));
    }

    #[rstest]
    #[case(19.0, -92.933)]
    #[case(17.0, -92.933)]
    #[case(17.989, -95.0)]
    #[case(17.989, -90.4)]
    #[case(f64::NAN, -92.933)]
    fn in_bounds_rejects_points_outside_any_bound(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(!in_bounds(latitude, longitude));
    }

    #[test]
    fn deserialize_rejects_inverted_bounds() {
        let result = serde_json::from_str::<Bounds>(r#"{ "south": 18.0, "north": 17.0, "west": -94.0, "east": -90.0 }"#);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("south 18 must not be above north 17"));
    }

    #[test]
    fn deserialize_accepts_valid_bounds() -> Result<(), serde_json::Error> {
        let bounds = serde_json::from_str::<Bounds>(r#"{ "south": 17.015, "north": 18.630, "west": -94.718, "east": -90.500 }"#)?;

        assert_eq!(bounds, Bounds::TABASCO);
        Ok(())
    }
}
