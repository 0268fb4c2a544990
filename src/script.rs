use crate::controller::Controller;
use crate::dlog;
use crate::error::LocationError;
use crate::headless::{CollectingNotifier, HtmlList, RecordingMap, ScriptedForm};
use crate::types::Coords;
use crate::view::MapConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub type HeadlessController = Controller<RecordingMap, ScriptedForm, HtmlList, CollectingNotifier>;

/// One recorded UI event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Position {
        lat: f64,
        lng: f64,
    },
    PositionError {
        code: u16,
    },
    MapClick {
        lat: f64,
        lng: f64,
    },
    Fill {
        #[serde(default, rename = "type")]
        activity: Option<String>,
        #[serde(default)]
        distance: Option<String>,
        #[serde(default)]
        duration: Option<String>,
        #[serde(default)]
        cadence: Option<String>,
        #[serde(default)]
        elevation: Option<String>,
    },
    ChangeType {
        value: String,
    },
    Submit,
    ListClick {
        #[serde(default)]
        id: Option<String>,
    },
}

/// Read a script from `path`, or from stdin when `path` is `-`.
pub fn load_script(path: &Path) -> Result<Vec<SessionEvent>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading script from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading script: {}", path.display()))?
    };

    parse_script(&text).with_context(|| format!("parsing script: {}", path.display()))
}

/// Accepts a JSON array of events or one event per line. Blank lines and
/// lines starting with `#` are skipped in the line form.
pub fn parse_script(text: &str) -> Result<Vec<SessionEvent>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("decoding event array");
    }

    let mut events = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: SessionEvent = serde_json::from_str(line)
            .with_context(|| format!("line {}: bad event {line:?}", i + 1))?;
        events.push(event);
    }

    Ok(events)
}

pub fn replay(events: &[SessionEvent], config: MapConfig) -> HeadlessController {
    let mut app = Controller::new(
        RecordingMap::default(),
        ScriptedForm::default(),
        HtmlList::default(),
        CollectingNotifier::default(),
        config,
    );

    for event in events {
        apply(&mut app, event);
    }

    tracing::info!(
        events = events.len(),
        workouts = app.workouts().len(),
        "replay done"
    );
    app
}

fn apply(app: &mut HeadlessController, event: &SessionEvent) {
    dlog!("event {event:?}");
    match event {
        SessionEvent::Position { lat, lng } => app.on_position(Ok(Coords::new(*lat, *lng))),
        SessionEvent::PositionError { code } => {
            app.on_position(Err(LocationError::from_code(*code)));
        }
        SessionEvent::MapClick { lat, lng } => {
            app.on_map_click(Coords::new(*lat, *lng));
        }
        SessionEvent::Fill {
            activity,
            distance,
            duration,
            cadence,
            elevation,
        } => {
            let values = &mut app.form_mut().values;
            let fields = [
                (&mut values.activity, activity),
                (&mut values.distance, distance),
                (&mut values.duration, duration),
                (&mut values.cadence, cadence),
                (&mut values.elevation, elevation),
            ];
            for (slot, given) in fields {
                if let Some(v) = given {
                    slot.clone_from(v);
                }
            }
        }
        SessionEvent::ChangeType { value } => {
            app.form_mut().values.activity.clone_from(value);
            app.on_type_change();
        }
        SessionEvent::Submit => {
            app.on_submit();
        }
        SessionEvent::ListClick { id } => {
            app.on_list_click(id.as_deref());
        }
    }
}
