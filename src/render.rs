use crate::utils::format_metric;
use crate::view::{Popup, PopupOptions};
use crate::workout::{Workout, WorkoutKind};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Markup for one entry of the workout list.
///
/// User-typed values are shown as typed (escaped), the derived metric as
/// computed.
pub fn list_entry(w: &Workout) -> String {
    let activity = w.activity();
    let mut html = String::new();

    let _ = writeln!(
        html,
        r#"<li class="workout workout--{activity}" data-id="{}">"#,
        w.id()
    );
    let _ = writeln!(
        html,
        r#"  <h2 class="workout__title">{}</h2>"#,
        escape(w.description())
    );
    push_detail(&mut html, activity.glyph(), &escape(&w.distance().raw), "km");
    push_detail(&mut html, "⏱", &escape(&w.duration().raw), "min");

    match w.kind() {
        WorkoutKind::Running { cadence, pace } => {
            push_detail(&mut html, "⚡️", &format_metric(*pace), "min/km");
            push_detail(&mut html, "🦶🏼", &escape(&cadence.raw), "spm");
        }
        WorkoutKind::Cycling {
            elevation_gain,
            speed,
        } => {
            push_detail(&mut html, "⚡️", &format_metric(*speed), "km/min");
            push_detail(&mut html, "⛰", &escape(&elevation_gain.raw), "m");
        }
    }

    html.push_str("</li>\n");
    html
}

fn push_detail(html: &mut String, icon: &str, value: &str, unit: &str) {
    let _ = writeln!(
        html,
        r#"  <div class="workout__details"><span class="workout__icon">{icon}</span><span class="workout__value">{value}</span><span class="workout__unit">{unit}</span></div>"#
    );
}

pub fn marker_popup(w: &Workout) -> Popup {
    Popup {
        content: w.description().to_string(),
        options: PopupOptions::sticky(format!("{}-popup", w.activity())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coords, WorkoutId};
    use chrono::Local;

    fn coords() -> Coords {
        Coords::new(51.5, -0.12)
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let w = Workout::running(WorkoutId::new(7), Local::now(), "5", "30", coords(), "178");
        let html = list_entry(&w);
        assert!(html.starts_with(r#"<li class="workout workout--running" data-id="7">"#));
        assert!(html.contains(r#"<span class="workout__value">6.0</span><span class="workout__unit">min/km</span>"#));
        assert!(html.contains(r#"<span class="workout__value">178</span><span class="workout__unit">spm</span>"#));
        assert!(!html.contains("km/min"));
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let w = Workout::cycling(WorkoutId::new(8), Local::now(), "20", "60", coords(), "300");
        let html = list_entry(&w);
        assert!(html.contains("workout--cycling"));
        assert!(html.contains(r#"<span class="workout__value">0.3</span><span class="workout__unit">km/min</span>"#));
        assert!(html.contains(r#"<span class="workout__value">300</span><span class="workout__unit">m</span>"#));
    }

    #[test]
    fn raw_input_is_escaped_and_nan_rendered() {
        let w = Workout::running(WorkoutId::new(9), Local::now(), "<b>5</b>", "30", coords(), "");
        let html = list_entry(&w);
        assert!(html.contains("&lt;b&gt;5&lt;/b&gt;"));
        assert!(html.contains(r#"<span class="workout__value">NaN</span>"#));
    }

    #[test]
    fn popup_is_sticky_and_styled_per_type() {
        let w = Workout::cycling(WorkoutId::new(1), Local::now(), "20", "60", coords(), "300");
        let popup = marker_popup(&w);
        assert_eq!(popup.content, w.description());
        assert_eq!(popup.options, PopupOptions::sticky("cycling-popup"));
    }
}
