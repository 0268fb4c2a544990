use crate::error::UnknownActivity;
use crate::utils::coerce_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkoutId(u64);

impl WorkoutId {
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A form value as typed, alongside its numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub raw: String,
    pub value: f64,
}

impl Reading {
    pub fn coerce(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = coerce_number(&raw);
        Self { raw, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Running,
    Cycling,
}

impl ActivityType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♂️",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(UnknownActivity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_parses_only_known_values() {
        assert_eq!("running".parse::<ActivityType>(), Ok(ActivityType::Running));
        assert_eq!("cycling".parse::<ActivityType>(), Ok(ActivityType::Cycling));
        assert!("Running".parse::<ActivityType>().is_err());
        assert_eq!(
            "".parse::<ActivityType>().unwrap_err().to_string(),
            "unknown activity type \"\""
        );
    }

    #[test]
    fn reading_keeps_raw_text() {
        let r = Reading::coerce("12 km");
        assert_eq!(r.raw, "12 km");
        assert!(r.value.is_nan());
    }
}
