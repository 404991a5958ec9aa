use crate::domain::{Bounds, Category, Coordinates};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier generated by the remote store when a record is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteKey(String);

impl RemoteKey {
    pub fn new(key: impl Into<String>) -> Self {
        RemoteKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RemoteKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub remote_key: RemoteKey,
    pub coordinates: Coordinates,
    pub category: Category,
    pub description: String,
}

impl Location {
    /// Whether the location lies inside the region the map shows.
    pub fn in_view(&self, bounds: &Bounds) -> bool {
        bounds.contains(&self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_at(latitude: f64, longitude: f64) -> Location {
        Location {
            remote_key: RemoteKey::new("-OA1"),
            coordinates: Coordinates::new(latitude, longitude),
            category: Category::Cocoa,
            description: "Finca".to_string(),
        }
    }

    #[test]
    fn in_view_uses_the_given_bounds() {
        let narrow = Bounds {
            south: 17.5,
            north: 18.0,
            west: -93.0,
            east: -92.0,
        };
        let location = location_at(18.5, -91.0);

        assert!(location.in_view(&Bounds::TABASCO));
        assert!(!location.in_view(&narrow));
        assert!(location_at(17.75, -92.5).in_view(&narrow));
    }
}
