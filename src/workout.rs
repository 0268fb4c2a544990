use crate::dlog;
use crate::types::{ActivityType, Coords, Reading, WorkoutId};
use crate::utils::round_one_decimal;
use chrono::{DateTime, Datelike, Local};
use serde::Serialize;

/// A logged session. Nothing changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    id: WorkoutId,
    date: DateTime<Local>,
    distance: Reading,
    duration: Reading,
    coords: Coords,
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running { cadence: Reading, pace: f64 },
    Cycling { elevation_gain: Reading, speed: f64 },
}

impl WorkoutKind {
    pub const fn activity(&self) -> ActivityType {
        match self {
            Self::Running { .. } => ActivityType::Running,
            Self::Cycling { .. } => ActivityType::Cycling,
        }
    }
}

impl Workout {
    pub fn running(
        id: WorkoutId,
        date: DateTime<Local>,
        distance: &str,
        duration: &str,
        coords: Coords,
        cadence: &str,
    ) -> Self {
        let distance = Reading::coerce(distance);
        let duration = Reading::coerce(duration);
        let pace = calc_pace(distance.value, duration.value);
        Self::build(
            id,
            date,
            distance,
            duration,
            coords,
            WorkoutKind::Running {
                cadence: Reading::coerce(cadence),
                pace,
            },
        )
    }

    pub fn cycling(
        id: WorkoutId,
        date: DateTime<Local>,
        distance: &str,
        duration: &str,
        coords: Coords,
        elevation_gain: &str,
    ) -> Self {
        let distance = Reading::coerce(distance);
        let duration = Reading::coerce(duration);
        let speed = calc_speed(distance.value, duration.value);
        Self::build(
            id,
            date,
            distance,
            duration,
            coords,
            WorkoutKind::Cycling {
                elevation_gain: Reading::coerce(elevation_gain),
                speed,
            },
        )
    }

    fn build(
        id: WorkoutId,
        date: DateTime<Local>,
        distance: Reading,
        duration: Reading,
        coords: Coords,
        kind: WorkoutKind,
    ) -> Self {
        let description = describe(kind.activity(), &date);
        dlog!(
            "workout_created id={id} type={} date={}",
            kind.activity(),
            date.to_rfc3339()
        );
        Self {
            id,
            date,
            distance,
            duration,
            coords,
            description,
            kind,
        }
    }

    pub const fn id(&self) -> WorkoutId {
        self.id
    }

    pub const fn date(&self) -> &DateTime<Local> {
        &self.date
    }

    pub const fn distance(&self) -> &Reading {
        &self.distance
    }

    pub const fn duration(&self) -> &Reading {
        &self.duration
    }

    pub const fn coords(&self) -> Coords {
        self.coords
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub const fn activity(&self) -> ActivityType {
        self.kind.activity()
    }

    /// Pace for running, speed for cycling.
    pub fn metric(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running { pace, .. } => pace,
            WorkoutKind::Cycling { speed, .. } => speed,
        }
    }
}

/// Minutes per kilometre. Zero distance is not guarded.
pub fn calc_pace(distance: f64, duration: f64) -> f64 {
    round_one_decimal(duration / distance)
}

/// Kilometres per minute. Zero duration is not guarded.
pub fn calc_speed(distance: f64, duration: f64) -> f64 {
    round_one_decimal(distance / duration)
}

fn describe(activity: ActivityType, date: &DateTime<Local>) -> String {
    format!(
        "{} {} on {} {}",
        activity.glyph(),
        activity.title(),
        date.format("%B"),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format_metric;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(month: u32, day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, month, day, 9, 30, 0)
            .single()
            .expect("unambiguous local time")
    }

    fn here() -> Coords {
        Coords::new(48.8566, 2.3522)
    }

    #[test]
    fn running_scenario() {
        let w = Workout::running(WorkoutId::new(1), at(3, 7), "5", "30", here(), "178");
        assert_eq!(w.metric(), 6.0);
        assert_eq!(w.description(), "🏃‍♂️ Running on March 7");
        assert_eq!(w.activity(), ActivityType::Running);
        let WorkoutKind::Running { cadence, .. } = w.kind() else {
            panic!("expected running");
        };
        assert_eq!(cadence.value, 178.0);
    }

    #[test]
    fn cycling_scenario() {
        let w = Workout::cycling(WorkoutId::new(2), at(12, 25), "20", "60", here(), "300");
        assert_eq!(w.metric(), 0.3);
        assert_eq!(w.description(), "🚴‍♂️ Cycling on December 25");
        let WorkoutKind::Cycling { elevation_gain, .. } = w.kind() else {
            panic!("expected cycling");
        };
        assert_eq!(elevation_gain.raw, "300");
    }

    #[test]
    fn degenerate_input_flows_into_metric() {
        let zero = Workout::running(WorkoutId::new(3), at(1, 1), "0", "30", here(), "");
        assert_eq!(zero.metric(), f64::INFINITY);

        let junk = Workout::cycling(WorkoutId::new(4), at(1, 1), "far", "60", here(), "x");
        assert!(junk.metric().is_nan());
        assert_eq!(junk.distance().raw, "far");
    }

    #[test]
    fn halfway_ratios_round_on_the_stored_value() {
        let run = Workout::running(WorkoutId::new(6), at(2, 2), "20", "3", here(), "160");
        assert_eq!(run.metric(), 0.1);
        assert_eq!(format_metric(run.metric()), "0.1");

        let ride = Workout::cycling(WorkoutId::new(7), at(2, 2), "1.5", "10", here(), "40");
        assert_eq!(ride.metric(), 0.1);
        assert_eq!(format_metric(ride.metric()), "0.1");
    }

    #[test]
    fn negative_distance_over_zero_shows_plain_zero() {
        let w = Workout::running(WorkoutId::new(8), at(2, 2), "-5", "0", here(), "");
        assert_eq!(format_metric(w.metric()), "0.0");
    }

    #[test]
    fn label_uses_creation_date() {
        let now = Local::now();
        let w = Workout::running(WorkoutId::new(5), now, "5", "30", here(), "178");
        let expected = format!("🏃‍♂️ Running on {} {}", now.format("%B"), now.day());
        assert_eq!(w.description(), expected);
    }

    proptest! {
        #[test]
        fn pace_is_rounded_ratio(distance in 0.01f64..500.0, duration in 0.0f64..2000.0) {
            let w = Workout::running(
                WorkoutId::new(1),
                at(6, 1),
                &distance.to_string(),
                &duration.to_string(),
                here(),
                "170",
            );
            prop_assert_eq!(format_metric(w.metric()), format!("{:.1}", duration / distance));
        }

        #[test]
        fn speed_is_rounded_ratio(distance in 0.0f64..500.0, duration in 0.01f64..2000.0) {
            let w = Workout::cycling(
                WorkoutId::new(1),
                at(6, 1),
                &distance.to_string(),
                &duration.to_string(),
                here(),
                "120",
            );
            prop_assert_eq!(format_metric(w.metric()), format!("{:.1}", distance / duration));
        }
    }
}
