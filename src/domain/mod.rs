mod bounds;
mod category;
mod coordinates;
pub mod events;
mod location;

pub use bounds::Bounds;
pub use category::{Category, UnknownCategory};
pub use coordinates::Coordinates;
pub use location::{Location, RemoteKey};
