use crate::domain::{Category, Coordinates, Location, RemoteKey};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DESCRIPTION: &str = "Sin descripción";

/// A location as stored under the collection. Field names are the stored data's contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "latitud", default)]
    pub latitude: f64,
    #[serde(rename = "longitud", default)]
    pub longitude: f64,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocationRecord {
    pub fn new(coordinates: Coordinates, category: &Category, description: &str) -> Self {
        LocationRecord {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            category: category.stored_label().map(str::to_string),
            description: Some(description.to_string()),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn into_location(self, remote_key: RemoteKey) -> Location {
        Location {
            remote_key,
            coordinates: self.coordinates(),
            category: Category::from_stored(self.category.as_deref()),
            description: self.description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_the_stored_field_names() -> Result<(), serde_json::Error> {
        let record = LocationRecord::new(Coordinates::new(17.989, -92.933), &Category::Cocoa, "Finca");

        assert_eq!(
            serde_json::to_value(&record)?,
            json!({ "latitud": 17.989, "longitud": -92.933, "tipo": "Cacao", "descripcion": "Finca" })
        );
        Ok(())
    }

    #[test]
    fn omits_an_unknown_category() -> Result<(), serde_json::Error> {
        let record = LocationRecord::new(Coordinates::new(17.989, -92.933), &Category::Unknown, "");

        assert_eq!(
            serde_json::to_value(&record)?,
            json!({ "latitud": 17.989, "longitud": -92.933, "descripcion": "" })
        );
        Ok(())
    }

    #[test]
    fn into_location_applies_defaults_for_missing_fields() -> Result<(), serde_json::Error> {
        let record: LocationRecord = serde_json::from_value(json!({ "latitud": 18.1 }))?;

        let location = record.into_location(RemoteKey::new("-Nkey"));

        assert_eq!(
            location,
            Location {
                remote_key: RemoteKey::new("-Nkey"),
                coordinates: Coordinates::new(18.1, 0.0),
                category: Category::Unknown,
                description: "Sin descripción".to_string(),
            }
        );
        assert_eq!(location.category.to_string(), "Desconocido");
        Ok(())
    }
}
