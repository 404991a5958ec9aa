use crate::domain::{Category, Coordinates, Location, UnknownCategory};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The values currently entered in the add/update form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub latitude: String,
    pub longitude: String,
    pub category: Option<String>,
    pub description: String,
}

impl FormState {
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.latitude = coordinates.latitude.to_string();
        self.longitude = coordinates.longitude.to_string();
    }

    pub fn populate(&mut self, location: &Location) {
        self.set_coordinates(location.coordinates);
        self.category = location.category.stored_label().map(str::to_string);
        self.description = location.description.clone();
    }

    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    pub fn coordinates(&self) -> Result<Coordinates, ValidationError> {
        parse_coordinates(&self.latitude, &self.longitude)
    }

    /// The chosen category, if any. Creating a location does not require one.
    pub fn category(&self) -> Result<Option<Category>, ValidationError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(label) => Ok(Some(label.parse()?)),
        }
    }

    /// Category and description, both required to update a location.
    pub fn details(&self) -> Result<(Category, &str), ValidationError> {
        let category = self.category()?;
        match category {
            Some(category) if !self.description.trim().is_empty() => Ok((category, self.description.as_str())),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// Parses user-entered coordinates; both must be finite numbers.
pub fn parse_coordinates(latitude: &str, longitude: &str) -> Result<Coordinates, ValidationError> {
    let parse = |value: &str| value.trim().parse::<f64>().ok().filter(|number| number.is_finite());

    match (parse(latitude), parse(longitude)) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
        _ => Err(ValidationError::InvalidCoordinates {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }),
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("invalid coordinates '{latitude}', '{longitude}'")]
    InvalidCoordinates { latitude: String, longitude: String },
    #[error("category and description are required")]
    MissingFields,
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

/// A short message shown to the user after an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Added,
    Updated,
    Deleted(Coordinates),
    InvalidCoordinates,
    MissingFields,
    UnknownCategory(String),
    NotFound(Coordinates),
    Failed(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Added | Notice::Updated | Notice::Deleted(_))
    }
}

impl From<&ValidationError> for Notice {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::InvalidCoordinates { .. } => Notice::InvalidCoordinates,
            ValidationError::MissingFields => Notice::MissingFields,
            ValidationError::UnknownCategory(UnknownCategory(label)) => Notice::UnknownCategory(label.clone()),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Added => write!(f, "Marcador agregado correctamente."),
            Notice::Updated => write!(f, "Marcador actualizado correctamente."),
            Notice::Deleted(coordinates) => write!(f, "Marcador en {} eliminado.", coordinates),
            Notice::InvalidCoordinates => write!(f, "Las coordenadas deben ser números válidos."),
            Notice::MissingFields => write!(f, "Por favor, completa todos los campos antes de actualizar el marcador."),
            Notice::UnknownCategory(label) => write!(f, "Tipo desconocido: {}.", label),
            Notice::NotFound(coordinates) => write!(f, "No se encontró un marcador en {}.", coordinates),
            Notice::Failed(reason) => write!(f, "La operación falló: {}", reason),
        }
    }
}
