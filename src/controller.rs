use crate::app_config::AppConfig;
use crate::bounds_guard::{BoundsGuard, MoveOutcome};
use crate::domain::events::FormEvent;
use crate::domain::{Category, Coordinates, RemoteKey};
use crate::firebase::RemoteCollection;
use crate::form::{FormState, Notice, ValidationError};
use crate::marker_store::{MarkerStore, StoreError};
use crate::view::{FormView, MapView};
use std::ops::ControlFlow;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument, warn};

/// Handles form, map and table events one at a time against the marker store.
#[derive(Debug)]
pub struct FormController<C: RemoteCollection, V: MapView + FormView> {
    store: MarkerStore<C>,
    guard: BoundsGuard,
    form: FormState,
    /// The table row the form was populated from, while its coordinates are unchanged.
    selected: Option<(RemoteKey, Coordinates)>,
    view: V,
    rx: Receiver<FormEvent>,
    initial_center: Coordinates,
    initial_zoom: f64,
    focus_zoom: f64,
}

impl<C: RemoteCollection, V: MapView + FormView> FormController<C, V> {
    pub fn new(store: MarkerStore<C>, view: V, config: &AppConfig, rx: Receiver<FormEvent>) -> Self {
        let map = config.map();
        FormController {
            store,
            guard: BoundsGuard::new(map.bounds(), map.initial_center()),
            form: FormState::default(),
            selected: None,
            view,
            rx,
            initial_center: map.initial_center(),
            initial_zoom: map.initial_zoom(),
            focus_zoom: map.focus_zoom(),
        }
    }

    /// Loads the markers and draws the initial map and table.
    #[instrument(skip(self))]
    pub async fn start(&mut self) {
        let markers = self.store.reload().await;
        self.view.recreate(self.initial_center, self.initial_zoom, markers);
        self.view.render_table(markers);
        self.view.show_fields(&self.form);
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            if self.handle(event).await.is_break() {
                info!("👋 Closing the form");
                break;
            }
        }
    }

    pub async fn handle(&mut self, event: FormEvent) -> ControlFlow<()> {
        match event {
            FormEvent::MapTapped { latitude, longitude } => {
                self.form.set_coordinates(Coordinates::new(latitude, longitude));
                self.view.show_fields(&self.form);
            }
            FormEvent::MapMoved { latitude, longitude } => self.map_moved(Coordinates::new(latitude, longitude)).await,
            FormEvent::SelectCategory { category } => {
                self.form.category = category;
                self.view.show_fields(&self.form);
            }
            FormEvent::EditDescription { description } => {
                self.form.description = description;
                self.view.show_fields(&self.form);
            }
            FormEvent::Add => self.add().await,
            FormEvent::Update => self.update().await,
            FormEvent::ViewRow { key } => self.view_row(&key),
            FormEvent::DeleteRow { key } => self.delete_row(&key).await,
            FormEvent::DeleteAt { latitude, longitude } => self.delete_at(Coordinates::new(latitude, longitude)).await,
            FormEvent::Close => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    async fn add(&mut self) {
        let validated = self.form.coordinates().and_then(|coordinates| Ok((coordinates, self.form.category()?)));
        let (coordinates, category) = match validated {
            Ok(values) => values,
            Err(e) => return self.reject(&e),
        };

        match self.store.create(coordinates, category, &self.form.description).await {
            Ok(_) => {
                self.refresh().await;
                self.view.show_notice(&Notice::Added);
                self.clear_fields();
            }
            Err(e) => self.report(&e),
        }
    }

    async fn update(&mut self) {
        let validated = self.form.coordinates().and_then(|coordinates| {
            let (category, description) = self.form.details()?;
            Ok((coordinates, category, description.to_string()))
        });

        match validated {
            Ok((coordinates, category, description)) => match self.update_location(coordinates, category, &description).await {
                Ok(()) => {
                    self.refresh().await;
                    self.view.show_notice(&Notice::Updated);
                }
                Err(e) => self.report(&e),
            },
            Err(e) => self.reject(&e),
        }

        // The form is emptied whether or not the update went through
        self.clear_fields();
    }

    async fn update_location(&mut self, coordinates: Coordinates, category: Category, description: &str) -> Result<(), StoreError> {
        match self.selected.take() {
            Some((key, selected_at)) if selected_at == coordinates => {
                self.store.update_by_key(&key, coordinates, category, description).await
            }
            _ => self.store.update(coordinates, category, description).await.map(|_| ()),
        }
    }

    fn view_row(&mut self, key: &RemoteKey) {
        let Some(location) = self.store.marker(key) else {
            return self.report(&StoreError::UnknownKey { key: key.clone() });
        };

        self.form.populate(location);
        self.selected = Some((location.remote_key.clone(), location.coordinates));
        self.view.recenter(location.coordinates, self.focus_zoom);
        self.view.show_fields(&self.form);
    }

    async fn delete_row(&mut self, key: &RemoteKey) {
        match self.store.delete_by_key(key).await {
            Ok(coordinates) => {
                self.view.show_notice(&Notice::Deleted(coordinates));
                let markers = self.store.reload().await;
                self.view.render_table(markers);
                self.view.recreate(self.initial_center, self.initial_zoom, markers);
                self.clear_fields();
            }
            Err(e) => self.report(&e),
        }
    }

    async fn delete_at(&mut self, coordinates: Coordinates) {
        match self.store.delete(coordinates).await {
            Ok(_) => {
                self.view.show_notice(&Notice::Deleted(coordinates));
                self.refresh().await;
            }
            Err(e) => self.report(&e),
        }
    }

    async fn map_moved(&mut self, center: Coordinates) {
        if let MoveOutcome::Reset(last_valid_center) = self.guard.on_move(center) {
            let markers = self.store.reload().await;
            self.view.recreate(last_valid_center, self.initial_zoom, markers);
        }
    }

    async fn refresh(&mut self) {
        let markers = self.store.reload().await;
        self.view.render_markers(markers);
        self.view.render_table(markers);
    }

    fn clear_fields(&mut self) {
        self.form.clear();
        self.selected = None;
        self.view.show_fields(&self.form);
    }

    fn reject(&mut self, error: &ValidationError) {
        debug!("Rejected form input: {}", error);
        self.view.show_notice(&Notice::from(error));
    }

    fn report(&mut self, error: &StoreError) {
        warn!("⚠️ {}", error);
        let notice = match error {
            StoreError::NotFound { coordinates } => Notice::NotFound(*coordinates),
            other => Notice::Failed(other.to_string()),
        };
        self.view.show_notice(&notice);
    }
}
