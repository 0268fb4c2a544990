use serde::Serialize;
use thiserror::Error;

/// An activity selector value that names neither running nor cycling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity type {0:?}")]
pub struct UnknownActivity(pub String);

/// Failure modes of a one-shot geolocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,
}

impl LocationError {
    /// Maps the numeric geolocation error code (1, 2, 3).
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::PositionUnavailable,
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::PermissionDenied => 1,
            Self::PositionUnavailable => 2,
            Self::Timeout => 3,
        }
    }
}
