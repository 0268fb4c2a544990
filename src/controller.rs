use crate::dlog;
use crate::error::LocationError;
use crate::render::{list_entry, marker_popup};
use crate::types::{ActivityType, Coords, WorkoutId};
use crate::view::{DetailRow, MapConfig, MapWidget, Notifier, PanOptions, WorkoutForm, WorkoutList};
use crate::workout::Workout;
use chrono::{DateTime, Local};
use serde::Serialize;

pub const LOCATION_ALERT: &str = "Check if your location is turned on";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum MapState {
    Locating,
    Ready,
    Unavailable(LocationError),
}

/// Session state for one page: the map, the form, the list and every
/// workout logged so far.
pub struct Controller<M, F, L, N> {
    map: M,
    form: F,
    list: L,
    notifier: N,
    config: MapConfig,
    state: MapState,
    pending_click: Option<Coords>,
    detail_row: DetailRow,
    workouts: Vec<Workout>,
    next_id: u64,
    clock: fn() -> DateTime<Local>,
}

impl<M, F, L, N> Controller<M, F, L, N>
where
    M: MapWidget,
    F: WorkoutForm,
    L: WorkoutList,
    N: Notifier,
{
    pub fn new(map: M, form: F, list: L, notifier: N, config: MapConfig) -> Self {
        Self {
            map,
            form,
            list,
            notifier,
            config,
            state: MapState::Locating,
            pending_click: None,
            detail_row: DetailRow::default(),
            workouts: Vec::new(),
            next_id: 1,
            clock: Local::now,
        }
    }

    /// Replace the source of creation timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// Deliver the outcome of the position request. Only the first call counts.
    pub fn on_position(&mut self, position: Result<Coords, LocationError>) {
        if self.state != MapState::Locating {
            dlog!("position_ignored state={:?}", self.state);
            return;
        }

        match position {
            Ok(center) => {
                self.map.load(center, self.config.zoom);
                self.map.add_tile_layer(&self.config.tiles);
                self.state = MapState::Ready;
                tracing::info!(%center, zoom = self.config.zoom, "map ready");
            }
            Err(e) => {
                tracing::warn!(err = %e, code = e.code(), "geolocation failed");
                self.notifier.alert(LOCATION_ALERT);
                self.state = MapState::Unavailable(e);
            }
        }
    }

    /// Returns whether the click opened the form.
    pub fn on_map_click(&mut self, at: Coords) -> bool {
        if self.state != MapState::Ready {
            dlog!("map_click_ignored state={:?}", self.state);
            return false;
        }

        self.pending_click = Some(at);
        self.form.show();
        dlog!("map_click at={at}");
        true
    }

    pub fn on_submit(&mut self) -> Option<&Workout> {
        if self.state != MapState::Ready {
            dlog!("submit_ignored state={:?}", self.state);
            return None;
        }
        let Some(coords) = self.pending_click else {
            dlog!("submit_ignored no pending map click");
            return None;
        };

        let values = self.form.read();
        let activity = match values.activity.parse::<ActivityType>() {
            Ok(a) => a,
            Err(e) => {
                dlog!("submit_ignored {e}");
                return None;
            }
        };

        let id = WorkoutId::new(self.next_id);
        self.next_id += 1;
        let date = (self.clock)();

        let workout = match activity {
            ActivityType::Running => Workout::running(
                id,
                date,
                &values.distance,
                &values.duration,
                coords,
                &values.cadence,
            ),
            ActivityType::Cycling => Workout::cycling(
                id,
                date,
                &values.distance,
                &values.duration,
                coords,
                &values.elevation,
            ),
        };

        self.list.append(&list_entry(&workout));
        self.map.add_marker(workout.coords(), &marker_popup(&workout));
        self.form.hide();
        self.pending_click = None;

        tracing::info!(
            id = %workout.id(),
            kind = %activity,
            at = %workout.coords(),
            "workout logged"
        );
        self.workouts.push(workout);
        self.workouts.last()
    }

    pub fn on_type_change(&mut self) {
        let selected = self.form.read().activity;
        let row = match selected.parse::<ActivityType>() {
            Ok(ActivityType::Running) => DetailRow::Cadence,
            Ok(ActivityType::Cycling) => DetailRow::Elevation,
            Err(e) => {
                dlog!("type_change_ignored {e}");
                return;
            }
        };

        self.detail_row = row;
        self.form.set_detail_row(row);
    }

    /// `entry_id` is the `data-id` of the list item around the click, if any.
    /// Returns whether the map moved.
    pub fn on_list_click(&mut self, entry_id: Option<&str>) -> bool {
        let Some(entry_id) = entry_id else {
            return false;
        };

        let Some(coords) = self
            .workouts
            .iter()
            .find(|w| w.id().to_string() == entry_id)
            .map(Workout::coords)
        else {
            dlog!("list_click_unmatched id={entry_id}");
            return false;
        };

        self.map.set_view(
            coords,
            self.config.zoom,
            PanOptions {
                animate: true,
                duration: self.config.pan_duration,
            },
        );
        true
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub const fn state(&self) -> MapState {
        self.state
    }

    pub const fn pending_click(&self) -> Option<Coords> {
        self.pending_click
    }

    pub const fn detail_row(&self) -> DetailRow {
        self.detail_row
    }

    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    pub const fn map(&self) -> &M {
        &self.map
    }

    pub const fn form(&self) -> &F {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub const fn list(&self) -> &L {
        &self.list
    }

    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}
