use serde::Serialize;

const METERS_PER_YARD: f64 = 0.9144;
const METERS_PER_FOOT: f64 = 0.3048;
const KMH_PER_MPH: f64 = 1.60934;

// Conversions round to whole units for display.

pub fn yards_to_meters(yards: f64) -> f64 {
    (yards * METERS_PER_YARD).round()
}

pub fn meters_to_yards(meters: f64) -> f64 {
    (meters / METERS_PER_YARD).round()
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    ((f - 32.0) * 5.0 / 9.0).round()
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0 + 32.0).round()
}

pub fn mph_to_kmh(mph: f64) -> f64 {
    (mph * KMH_PER_MPH).round()
}

pub fn kmh_to_mph(kmh: f64) -> f64 {
    (kmh / KMH_PER_MPH).round()
}

pub fn feet_to_meters(feet: f64) -> f64 {
    (feet * METERS_PER_FOOT).round()
}

pub fn meters_to_feet(meters: f64) -> f64 {
    (meters / METERS_PER_FOOT).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

/// A display-ready number with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub label: &'static str,
    pub short_label: &'static str,
}

impl Measurement {
    fn new(value: f64, label: &'static str, short_label: &'static str) -> Self {
        Self {
            value,
            label,
            short_label,
        }
    }
}

pub fn format_distance(yards: f64, units: UnitSystem) -> Measurement {
    match units {
        UnitSystem::Metric => Measurement::new(yards_to_meters(yards), "meters", "m"),
        UnitSystem::Imperial => Measurement::new(yards, "yards", "yds"),
    }
}

pub fn format_temperature(fahrenheit: f64, units: UnitSystem) -> Measurement {
    match units {
        UnitSystem::Metric => {
            Measurement::new(fahrenheit_to_celsius(fahrenheit), "degrees Celsius", "°C")
        }
        UnitSystem::Imperial => Measurement::new(fahrenheit, "degrees Fahrenheit", "°F"),
    }
}

pub fn format_wind_speed(mph: f64, units: UnitSystem) -> Measurement {
    match units {
        UnitSystem::Metric => Measurement::new(mph_to_kmh(mph), "kilometers per hour", "km/h"),
        UnitSystem::Imperial => Measurement::new(mph, "miles per hour", "mph"),
    }
}

/// Altitude follows the distance unit: meters alongside meters, feet
/// alongside yards.
pub fn format_altitude(feet: f64, units: UnitSystem) -> Measurement {
    match units {
        UnitSystem::Metric => Measurement::new(feet_to_meters(feet), "meters", "m"),
        UnitSystem::Imperial => Measurement::new(feet, "feet", "ft"),
    }
}
