use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::atmosphere::{
    air_density, STANDARD_HUMIDITY_PCT, STANDARD_PRESSURE_MB, STANDARD_TEMPERATURE_F,
};

/// Weather at the course, as supplied by a weather source or the user.
///
/// Wind direction is the meteorological "from" bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    pub temperature_f: f64,
    pub humidity_pct: f64,
    /// Station pressure (mb).
    pub pressure_mb: f64,
    pub altitude_ft: f64,
    pub wind_speed_mph: f64,
    pub wind_direction_deg: f64,
    pub wind_gust_mph: f64,
    /// kg/m³
    pub density: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}

impl EnvironmentalConditions {
    /// Calm conditions with density derived from the inputs.
    pub fn new(temperature_f: f64, humidity_pct: f64, pressure_mb: f64, altitude_ft: f64) -> Self {
        Self {
            temperature_f,
            humidity_pct,
            pressure_mb,
            altitude_ft,
            wind_speed_mph: 0.0,
            wind_direction_deg: 0.0,
            wind_gust_mph: 0.0,
            density: air_density(temperature_f, pressure_mb, humidity_pct),
            observed_at: None,
        }
    }

    /// 70 °F, 50 %, 1013.25 mb, sea level, calm.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_TEMPERATURE_F,
            STANDARD_HUMIDITY_PCT,
            STANDARD_PRESSURE_MB,
            0.0,
        )
    }

    /// Gusts below the sustained speed are raised to it.
    pub fn with_wind(mut self, speed_mph: f64, direction_deg: f64, gust_mph: f64) -> Self {
        self.wind_speed_mph = speed_mph;
        self.wind_direction_deg = direction_deg;
        self.wind_gust_mph = gust_mph.max(speed_mph);
        self
    }

    pub fn observed(mut self, at: DateTime<Utc>) -> Self {
        self.observed_at = Some(at);
        self
    }
}

impl Default for EnvironmentalConditions {
    fn default() -> Self {
        Self::standard()
    }
}
