//! In-memory stand-ins for the map, form, list and alert surfaces. They
//! record what the controller asked for so a session can be inspected or
//! printed afterwards.

use crate::types::Coords;
use crate::view::{
    DetailRow, FormValues, MapWidget, Notifier, PanOptions, Popup, TileLayer, WorkoutForm,
    WorkoutList,
};
use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct RecordingMap {
    pub loaded: Option<(Coords, u8)>,
    pub tile_layers: Vec<TileLayer>,
    pub markers: Vec<(Coords, Popup)>,
    pub views: Vec<(Coords, u8, PanOptions)>,
}

impl RecordingMap {
    /// Where the map is looking now, if it was ever loaded.
    pub fn current_view(&self) -> Option<(Coords, u8)> {
        self.views
            .last()
            .map(|&(center, zoom, _)| (center, zoom))
            .or(self.loaded)
    }
}

impl MapWidget for RecordingMap {
    fn load(&mut self, center: Coords, zoom: u8) {
        self.loaded = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn add_marker(&mut self, at: Coords, popup: &Popup) {
        self.markers.push((at, popup.clone()));
    }

    fn set_view(&mut self, center: Coords, zoom: u8, pan: PanOptions) {
        self.views.push((center, zoom, pan));
    }
}

#[derive(Debug, Default, Clone)]
pub struct ScriptedForm {
    pub values: FormValues,
    pub visible: bool,
    pub focused: bool,
    pub detail_row: DetailRow,
}

impl WorkoutForm for ScriptedForm {
    fn read(&self) -> FormValues {
        self.values.clone()
    }

    fn show(&mut self) {
        self.visible = true;
        self.focused = true;
    }

    fn hide(&mut self) {
        self.values.distance.clear();
        self.values.duration.clear();
        self.values.cadence.clear();
        self.values.elevation.clear();
        self.visible = false;
        self.focused = false;
    }

    fn set_detail_row(&mut self, row: DetailRow) {
        self.detail_row = row;
    }
}

#[derive(Debug, Default, Clone)]
pub struct HtmlList {
    pub items: Vec<String>,
}

impl HtmlList {
    pub fn markup(&self) -> String {
        let mut out = String::from("<ul class=\"workouts\">\n");
        for item in &self.items {
            out.push_str(item);
        }
        out.push_str("</ul>\n");
        out
    }
}

impl WorkoutList for HtmlList {
    fn append(&mut self, markup: &str) {
        self.items.push(markup.to_string());
    }
}

#[derive(Debug, Default, Clone)]
pub struct CollectingNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for CollectingNotifier {
    fn alert(&mut self, message: &str) {
        tracing::warn!(%message, "alert");
        self.alerts.push(message.to_string());
    }
}
