use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Validation failures raised by the yardage model before any physics runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Unknown club: {0}")]
    UnknownClub(String),

    #[error("Unknown ball model: {0}")]
    UnknownBall(String),

    #[error("Wind speed {0} mph is outside the supported range (0-50 mph)")]
    WindSpeedOutOfRange(f64),

    #[error("Wind direction {0} must be between 0 and 359 degrees")]
    WindDirectionOutOfRange(f64),
}

/// Failure categories surfaced to callers of the wind calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindErrorKind {
    InvalidInput,
    InvalidClub,
    InvalidParameters,
    CalculationFailed,
    /// Reserved for collaborators (compass, GPS).
    SensorUnavailable,
    /// Reserved for collaborators (weather fetch).
    NetworkError,
}

impl WindErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WindErrorKind::InvalidInput => "INVALID_INPUT",
            WindErrorKind::InvalidClub => "INVALID_CLUB",
            WindErrorKind::InvalidParameters => "INVALID_PARAMETERS",
            WindErrorKind::CalculationFailed => "CALCULATION_FAILED",
            WindErrorKind::SensorUnavailable => "SENSOR_UNAVAILABLE",
            WindErrorKind::NetworkError => "NETWORK_ERROR",
        }
    }

    /// Message suitable for showing to a golfer.
    pub fn user_message(self) -> &'static str {
        match self {
            WindErrorKind::InvalidInput => "Please check your input values and try again.",
            WindErrorKind::InvalidClub => {
                "The selected club is not recognized. Please select a different club."
            }
            WindErrorKind::InvalidParameters => "Invalid calculation parameters. Please try again.",
            WindErrorKind::CalculationFailed => "Unable to calculate wind effect. Please try again.",
            WindErrorKind::SensorUnavailable => "Required sensor is not available on this device.",
            WindErrorKind::NetworkError => {
                "Network error. Please check your connection and try again."
            }
        }
    }
}

impl fmt::Display for WindErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed failure with a free-form diagnostic context.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("[{kind}] {message}")]
pub struct WindError {
    kind: WindErrorKind,
    message: String,
    context: BTreeMap<String, Value>,
}

impl WindError {
    pub fn new(kind: WindErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn invalid_input(message: impl Into<String>, field: &str, value: impl Into<Value>) -> Self {
        Self::new(WindErrorKind::InvalidInput, message)
            .with_context("field", field)
            .with_context("value", value)
    }

    pub fn invalid_club(club_name: &str) -> Self {
        Self::new(
            WindErrorKind::InvalidClub,
            format!("Invalid or unknown club: {}", club_name),
        )
        .with_context("club_name", club_name)
    }

    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(WindErrorKind::InvalidParameters, message)
    }

    pub fn calculation_failed(message: impl Into<String>) -> Self {
        Self::new(WindErrorKind::CalculationFailed, message)
    }

    pub fn sensor_unavailable(sensor: &str) -> Self {
        Self::new(
            WindErrorKind::SensorUnavailable,
            format!("{} sensor is not available on this device", sensor),
        )
        .with_context("sensor", sensor)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(WindErrorKind::NetworkError, message)
    }

    /// Attach a diagnostic key/value, replacing any previous value for `key`.
    pub fn with_context(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    pub fn kind(&self) -> WindErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &BTreeMap<String, Value> {
        &self.context
    }

    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }
}

impl From<ModelError> for WindError {
    fn from(err: ModelError) -> Self {
        match &err {
            ModelError::UnknownClub(club) => WindError::invalid_club(club),
            ModelError::UnknownBall(ball) => {
                WindError::invalid_parameters(err.to_string()).with_context("ball_model", ball.as_str())
            }
            ModelError::WindSpeedOutOfRange(speed) => {
                WindError::invalid_input(err.to_string(), "wind_speed", *speed)
            }
            ModelError::WindDirectionOutOfRange(direction) => {
                WindError::invalid_input(err.to_string(), "wind_direction", *direction)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WindError>;
