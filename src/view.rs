//! The surface the controller drives: a map widget, the entry form, the
//! workout list and a way to alert the user.

use crate::types::Coords;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub trait MapWidget {
    /// Create the map centered on `center`.
    fn load(&mut self, center: Coords, zoom: u8);
    fn add_tile_layer(&mut self, layer: &TileLayer);
    /// Place a marker and open its popup.
    fn add_marker(&mut self, at: Coords, popup: &Popup);
    fn set_view(&mut self, center: Coords, zoom: u8, pan: PanOptions);
}

pub trait WorkoutForm {
    fn read(&self) -> FormValues;
    /// Reveal the form and focus the distance field.
    fn show(&mut self);
    /// Clear the numeric fields and hide the form.
    fn hide(&mut self);
    fn set_detail_row(&mut self, row: DetailRow);
}

pub trait WorkoutList {
    fn append(&mut self, markup: &str);
}

pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Raw field contents at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub activity: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            activity: "running".to_string(),
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

/// Which variant-specific row of the form is showing. Exactly one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailRow {
    #[default]
    Cadence,
    Elevation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub auto_close: bool,
    pub close_on_click: bool,
    pub close_on_escape_key: bool,
    pub class_name: String,
}

impl PopupOptions {
    /// A popup that stays open until the page goes away.
    pub fn sticky(class_name: impl Into<String>) -> Self {
        Self {
            auto_close: false,
            close_on_click: false,
            close_on_escape_key: false,
            class_name: class_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popup {
    pub content: String,
    pub options: PopupOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanOptions {
    pub animate: bool,
    /// Seconds.
    pub duration: f64,
}

/// Map settings for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub zoom: u8,
    pub tiles: TileLayer,
    pub pan_duration: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tiles: TileLayer::default(),
            pan_duration: 1.0,
        }
    }
}
