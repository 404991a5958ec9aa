use crate::domain::{Bounds, Coordinates, Location};
use crate::form::{FormState, Notice};
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// The map widget: draws markers and owns the viewport.
pub trait MapView: Debug + Send {
    fn render_markers(&mut self, markers: &[Location]);

    fn recenter(&mut self, center: Coordinates, zoom: f64);

    /// Tears the widget down and builds a fresh one around `center`.
    fn recreate(&mut self, center: Coordinates, zoom: f64, markers: &[Location]);
}

/// The form next to the map and the table of locations under it.
pub trait FormView: Debug + Send {
    fn show_notice(&mut self, notice: &Notice);

    fn render_table(&mut self, locations: &[Location]);

    fn show_fields(&mut self, form: &FormState);
}

/// Presents everything through the log, for running without a display.
#[derive(Debug, Default)]
pub struct TracingView {
    bounds: Bounds,
}

impl TracingView {
    pub fn new(bounds: Bounds) -> Self {
        TracingView { bounds }
    }

    fn count_outside(&self, locations: &[Location]) -> usize {
        locations.iter().filter(|location| !location.in_view(&self.bounds)).count()
    }
}

impl MapView for TracingView {
    fn render_markers(&mut self, markers: &[Location]) {
        info!("🗺️ Showing {} marker(s)", markers.len());
    }

    fn recenter(&mut self, center: Coordinates, zoom: f64) {
        info!("🗺️ Centering map on {} at zoom {}", center, zoom);
    }

    fn recreate(&mut self, center: Coordinates, zoom: f64, markers: &[Location]) {
        info!("🗺️ Rebuilding map at {} (zoom {}) with {} marker(s)", center, zoom, markers.len());
    }
}

impl FormView for TracingView {
    fn show_notice(&mut self, notice: &Notice) {
        if notice.is_error() {
            warn!("⚠️ {}", notice);
        } else {
            info!("✅ {}", notice);
        }
    }

    fn render_table(&mut self, locations: &[Location]) {
        let outside = self.count_outside(locations);
        info!("📋 {} location(s), {} outside the map bounds", locations.len(), outside);
        for location in locations {
            info!(
                key = %location.remote_key,
                "📋 {} | {} | {} | {}",
                location.coordinates.latitude,
                location.coordinates.longitude,
                location.category,
                location.description
            );
        }
    }

    fn show_fields(&mut self, form: &FormState) {
        debug!(?form, "Form fields changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, RemoteKey};

    fn location_at(key: &str, latitude: f64, longitude: f64) -> Location {
        Location {
            remote_key: RemoteKey::new(key),
            coordinates: Coordinates::new(latitude, longitude),
            category: Category::Banana,
            description: "Platanar".to_string(),
        }
    }

    #[test]
    fn counts_locations_outside_the_configured_bounds() {
        let view = TracingView::new(Bounds {
            south: 17.5,
            north: 18.0,
            west: -93.0,
            east: -92.0,
        });
        let locations = vec![location_at("-OA1", 17.75, -92.5), location_at("-OA2", 18.5, -91.0)];

        assert_eq!(view.count_outside(&locations), 1);
        assert_eq!(TracingView::default().count_outside(&locations), 0);
    }
}
