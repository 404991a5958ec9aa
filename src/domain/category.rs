use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const UNKNOWN_LABEL: &str = "Desconocido";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    SugarCaneBagasse,
    Banana,
    Cocoa,
    OilPalm,
    /// No category was stored for the record.
    Unknown,
    /// A stored label outside the known set, kept verbatim.
    Other(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::SugarCaneBagasse => "Bagazo de caña de azúcar",
            Category::Banana => "Plátano",
            Category::Cocoa => "Cacao",
            Category::OilPalm => "Palma de aceite",
            Category::Unknown => UNKNOWN_LABEL,
            Category::Other(label) => label,
        }
    }

    /// The categories a user can pick in the form.
    pub fn selectable() -> [Category; 4] {
        [Category::SugarCaneBagasse, Category::Banana, Category::Cocoa, Category::OilPalm]
    }

    /// Maps the `tipo` field of a stored record.
    pub fn from_stored(label: Option<&str>) -> Category {
        match label {
            None => Category::Unknown,
            Some(label) => label.parse().unwrap_or_else(|_| Category::Other(label.to_string())),
        }
    }

    /// The value written to the `tipo` field, `None` when nothing was chosen.
    pub fn stored_label(&self) -> Option<&str> {
        match self {
            Category::Unknown => None,
            _ => Some(self.label()),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::selectable()
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
