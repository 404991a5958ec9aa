use crate::domain::RemoteKey;
use serde::Deserialize;

/// Input from the form, the map and the location table.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    MapTapped { latitude: f64, longitude: f64 },
    /// The viewport was panned or zoomed and is now centered here.
    MapMoved { latitude: f64, longitude: f64 },
    SelectCategory { category: Option<String> },
    EditDescription { description: String },
    Add,
    Update,
    ViewRow { key: RemoteKey },
    DeleteRow { key: RemoteKey },
    /// Removal of the marker drawn at these coordinates.
    DeleteAt { latitude: f64, longitude: f64 },
    Close,
}
