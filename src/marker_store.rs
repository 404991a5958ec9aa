use crate::domain::{Category, Coordinates, Location, RemoteKey};
use crate::firebase::{CollectionError, LocationRecord, RemoteCollection};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Keeps the markers shown on the map in sync with the remote collection.
#[derive(Debug)]
pub struct MarkerStore<C: RemoteCollection> {
    collection: C,
    markers: Vec<Location>,
}

impl<C: RemoteCollection> MarkerStore<C> {
    pub fn new(collection: C) -> Self {
        MarkerStore {
            collection,
            markers: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// The markers as of the last reload.
    #[cfg(test)]
    pub fn markers(&self) -> &[Location] {
        &self.markers
    }

    pub fn marker(&self, key: &RemoteKey) -> Option<&Location> {
        self.markers.iter().find(|location| &location.remote_key == key)
    }

    /// Fetches every stored location. An unreachable store yields no locations.
    pub async fn list_all(&self) -> Vec<Location> {
        self.try_list_all().await.unwrap_or_else(|e| {
            warn!("⚠️ Unable to load locations: {}", e);
            Vec::new()
        })
    }

    pub async fn try_list_all(&self) -> Result<Vec<Location>, StoreError> {
        let records = self.collection.fetch_all().await?;
        Ok(records.into_iter().map(|(key, record)| record.into_location(key)).collect())
    }

    /// Replaces the cached markers with the current contents of the remote collection.
    #[instrument(skip(self))]
    pub async fn reload(&mut self) -> &[Location] {
        debug!("📍 Reloading markers...");
        self.markers = self.list_all().await;
        warn_on_shared_coordinates(&self.markers);
        debug!("📍 Reloading markers... OK, {} loaded", self.markers.len());
        &self.markers
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        coordinates: Coordinates,
        category: Option<Category>,
        description: &str,
    ) -> Result<RemoteKey, StoreError> {
        let record = LocationRecord::new(coordinates, &category.unwrap_or(Category::Unknown), description);
        let key = self.collection.push(&record).await?;

        info!(key = %key, "🟢 Created location at {}", coordinates);
        Ok(key)
    }

    /// Overwrites the first record stored at exactly `coordinates`.
    #[instrument(skip(self))]
    pub async fn update(&self, coordinates: Coordinates, category: Category, description: &str) -> Result<RemoteKey, StoreError> {
        let Some((key, _)) = self.find_by_coordinates(coordinates).await? else {
            warn!("⚠️ No location found at {}", coordinates);
            return Err(StoreError::NotFound { coordinates });
        };

        info!(key = %key, "🔵 Updating location at {}", coordinates);
        self.collection
            .put(&key, &LocationRecord::new(coordinates, &category, description))
            .await?;
        Ok(key)
    }

    /// Removes the first record stored at exactly `coordinates`.
    #[instrument(skip(self))]
    pub async fn delete(&self, coordinates: Coordinates) -> Result<RemoteKey, StoreError> {
        let Some((key, _)) = self.find_by_coordinates(coordinates).await? else {
            warn!("⚠️ No location found at {}", coordinates);
            return Err(StoreError::NotFound { coordinates });
        };

        self.collection.remove(&key).await?;
        info!(key = %key, "🔴 Deleted location at {}", coordinates);
        Ok(key)
    }

    #[instrument(skip(self))]
    pub async fn update_by_key(
        &self,
        key: &RemoteKey,
        coordinates: Coordinates,
        category: Category,
        description: &str,
    ) -> Result<(), StoreError> {
        self.ensure_exists(key).await?;
        self.collection
            .put(key, &LocationRecord::new(coordinates, &category, description))
            .await?;

        info!(key = %key, "🔵 Updated location at {}", coordinates);
        Ok(())
    }

    /// Removes the record stored under `key` and returns where it was.
    #[instrument(skip(self))]
    pub async fn delete_by_key(&self, key: &RemoteKey) -> Result<Coordinates, StoreError> {
        let record = self.ensure_exists(key).await?;
        self.collection.remove(key).await?;

        info!(key = %key, "🔴 Deleted location at {}", record.coordinates());
        Ok(record.coordinates())
    }

    /// The first record, in key order, stored at exactly `coordinates`.
    pub async fn find_by_coordinates(&self, coordinates: Coordinates) -> Result<Option<(RemoteKey, LocationRecord)>, StoreError> {
        let records = self.collection.fetch_all().await?;
        Ok(records
            .into_iter()
            .find(|(_, record)| coordinates.matches(record.latitude, record.longitude)))
    }

    async fn ensure_exists(&self, key: &RemoteKey) -> Result<LocationRecord, StoreError> {
        self.collection
            .fetch_all()
            .await?
            .into_iter()
            .find_map(|(candidate, record)| (&candidate == key).then_some(record))
            .ok_or_else(|| StoreError::UnknownKey { key: key.clone() })
    }
}

fn warn_on_shared_coordinates(markers: &[Location]) {
    let mut counts: HashMap<(OrderedFloat<f64>, OrderedFloat<f64>), usize> = HashMap::new();
    for location in markers {
        let point = (OrderedFloat(location.coordinates.latitude), OrderedFloat(location.coordinates.longitude));
        *counts.entry(point).or_default() += 1;
    }

    for ((latitude, longitude), count) in counts.into_iter().filter(|(_, count)| *count > 1) {
        warn!("⚠️ {} locations share {}, {}; coordinate lookups use the first", count, latitude, longitude);
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no location found at {coordinates}")]
    NotFound { coordinates: Coordinates },
    #[error("unknown location '{key}'")]
    UnknownKey { key: RemoteKey },
    #[error(transparent)]
    Collection(#[from] CollectionError),
}
