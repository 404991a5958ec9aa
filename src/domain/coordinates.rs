use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates { latitude, longitude }
    }

    /// Exact float equality on both components, the way stored records are matched.
    pub fn matches(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude == latitude && self.longitude == longitude
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_exact_equality() {
        let coordinates = Coordinates::new(17.989, -92.933);

        assert!(coordinates.matches(17.989, -92.933));
        assert!(!coordinates.matches(17.9890001, -92.933));
        assert!(!coordinates.matches(-92.933, 17.989));
    }

    #[test]
    fn displays_as_latitude_comma_longitude() {
        assert_eq!(Coordinates::new(17.5, -92.25).to_string(), "17.5, -92.25");
    }
}
