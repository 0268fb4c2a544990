use crate::controller::MapState;
use crate::script::HeadlessController;
use crate::types::Coords;
use crate::view::Popup;
use crate::workout::Workout;
use serde::Serialize;

/// What a replayed session left behind, in a form that serializes.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub map: MapState,
    pub workouts: &'a [Workout],
    pub markers: Vec<Marker<'a>>,
    pub view: Option<View>,
    pub alerts: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct Marker<'a> {
    pub at: Coords,
    pub popup: &'a Popup,
}

#[derive(Debug, Serialize)]
pub struct View {
    pub center: Coords,
    pub zoom: u8,
}

impl<'a> Snapshot<'a> {
    pub fn of(app: &'a HeadlessController) -> Self {
        Self {
            map: app.state(),
            workouts: app.workouts(),
            markers: app
                .map()
                .markers
                .iter()
                .map(|(at, popup)| Marker { at: *at, popup })
                .collect(),
            view: app
                .map()
                .current_view()
                .map(|(center, zoom)| View { center, zoom }),
            alerts: &app.notifier().alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{parse_script, replay};
    use crate::view::MapConfig;

    #[test]
    fn snapshot_serializes_workouts_and_markers() {
        let events = parse_script(
            r#"
            {"event": "position", "lat": 40.0, "lng": -3.7}
            {"event": "map_click", "lat": 40.1, "lng": -3.6}
            {"event": "fill", "type": "running", "distance": "0", "duration": "30", "cadence": "170"}
            {"event": "submit"}
            "#,
        )
        .unwrap();
        let app = replay(&events, MapConfig::default());
        let v = serde_json::to_value(Snapshot::of(&app)).unwrap();

        assert_eq!(v["map"], serde_json::json!({"state": "ready"}));
        assert_eq!(v["workouts"][0]["type"], "running");
        assert_eq!(v["workouts"][0]["id"], 1);
        assert_eq!(v["workouts"][0]["distance"]["raw"], "0");
        // Infinite pace has no JSON number form.
        assert!(v["workouts"][0]["pace"].is_null());
        assert_eq!(v["markers"][0]["popup"]["options"]["className"], "running-popup");
        assert_eq!(v["view"]["zoom"], 13);
    }

    #[test]
    fn unavailable_map_serializes_its_reason() {
        let events = parse_script(r#"{"event": "position_error", "code": 1}"#).unwrap();
        let app = replay(&events, MapConfig::default());
        let v = serde_json::to_value(Snapshot::of(&app)).unwrap();

        assert_eq!(
            v["map"],
            serde_json::json!({"state": "unavailable", "reason": "permission_denied"})
        );
        assert_eq!(v["alerts"][0], "Check if your location is turned on");
        assert!(v["view"].is_null());
    }
}
