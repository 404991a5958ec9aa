mod client;
mod collection;
mod location_record;
mod push_response;

pub use client::new_client;
pub use collection::{CollectionError, FirebaseCollection, RemoteCollection};
pub use location_record::LocationRecord;
