use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::conditions::EnvironmentalConditions;
use crate::error::{Result, WindError};

/// Anything that can report the current conditions at the course.
pub trait WeatherSource {
    fn name(&self) -> &str;
    fn current_conditions(&mut self) -> Result<EnvironmentalConditions>;
}

/// Conditions supplied up front, e.g. from the command line.
#[derive(Debug, Clone)]
pub struct FixedWeather {
    conditions: EnvironmentalConditions,
}

impl FixedWeather {
    pub fn new(conditions: EnvironmentalConditions) -> Self {
        Self { conditions }
    }
}

impl WeatherSource for FixedWeather {
    fn name(&self) -> &str {
        "manual"
    }

    fn current_conditions(&mut self) -> Result<EnvironmentalConditions> {
        Ok(self.conditions.clone())
    }
}

/// Station pressure (mb) for `altitude_ft` under the standard atmosphere.
pub fn standard_station_pressure(altitude_ft: f64) -> f64 {
    1013.25 * (1.0 - 6.8756e-6 * altitude_ft).powf(5.2559)
}

/// Simulates a weather service for testing without a network connection.
pub struct MockWeather<R: Rng = StdRng> {
    rng: R,
    offline: bool,
    fetches: u32,
}

impl MockWeather<StdRng> {
    /// Seeded for reproducible runs, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> MockWeather<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            offline: false,
            fetches: 0,
        }
    }

    /// While offline every fetch fails with a network error.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn fetches(&self) -> u32 {
        self.fetches
    }

    fn generate(&mut self) -> EnvironmentalConditions {
        let rng = &mut self.rng;

        // Most rounds are played near sea level; one in four is up high.
        let altitude_ft = if rng.gen_bool(0.25) {
            rng.gen_range(3000.0..7000.0)
        } else {
            rng.gen_range(0.0..1500.0)
        };
        let pressure_mb = standard_station_pressure(altitude_ft) + rng.gen_range(-8.0..8.0);
        let temperature_f = rng.gen_range(45.0..95.0);
        let humidity_pct = rng.gen_range(20.0..90.0);

        let wind_speed_mph = rng.gen_range(0.0..20.0);
        let wind_direction_deg = rng.gen_range(0.0..360.0);
        let gust_mph = wind_speed_mph + rng.gen_range(0.0..10.0);

        EnvironmentalConditions::new(temperature_f, humidity_pct, pressure_mb, altitude_ft)
            .with_wind(wind_speed_mph, wind_direction_deg, gust_mph)
            .observed(Utc::now())
    }
}

impl<R: Rng> WeatherSource for MockWeather<R> {
    fn name(&self) -> &str {
        "mock"
    }

    fn current_conditions(&mut self) -> Result<EnvironmentalConditions> {
        self.fetches += 1;
        if self.offline {
            log::warn!("[WEATHER] Mock weather offline (fetch #{})", self.fetches);
            return Err(WindError::network_error("Weather service unreachable")
                .with_context("source", "mock"));
        }

        let conditions = self.generate();
        log::info!(
            "[WEATHER] Mock conditions: {:.0}°F, {:.0}% RH, {:.1} mb, {:.0} ft, wind {:.0} mph from {:.0}° (gusts {:.0})",
            conditions.temperature_f,
            conditions.humidity_pct,
            conditions.pressure_mb,
            conditions.altitude_ft,
            conditions.wind_speed_mph,
            conditions.wind_direction_deg,
            conditions.wind_gust_mph
        );
        Ok(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WindErrorKind;

    #[test]
    fn fixed_weather_returns_what_it_was_given() {
        let conditions = EnvironmentalConditions::standard().with_wind(8.0, 45.0, 12.0);
        let mut source = FixedWeather::new(conditions.clone());
        assert_eq!(source.current_conditions().unwrap(), conditions);
    }

    #[test]
    fn seeded_mock_is_reproducible() {
        let mut a = MockWeather::new(Some(7));
        let mut b = MockWeather::new(Some(7));
        let ca = a.current_conditions().unwrap();
        let cb = b.current_conditions().unwrap();
        assert_eq!(ca.temperature_f, cb.temperature_f);
        assert_eq!(ca.wind_direction_deg, cb.wind_direction_deg);
        assert_eq!(ca.pressure_mb, cb.pressure_mb);
    }

    #[test]
    fn mock_values_are_plausible() {
        let mut source = MockWeather::new(Some(42));
        for _ in 0..200 {
            let c = source.current_conditions().unwrap();
            assert!((45.0..95.0).contains(&c.temperature_f));
            assert!((20.0..90.0).contains(&c.humidity_pct));
            assert!((0.0..20.0).contains(&c.wind_speed_mph));
            assert!((0.0..360.0).contains(&c.wind_direction_deg));
            assert!(c.wind_gust_mph >= c.wind_speed_mph);
            assert!(c.pressure_mb > 750.0 && c.pressure_mb < 1025.0);
            assert!(c.observed_at.is_some());
        }
        assert_eq!(source.fetches(), 200);
    }

    #[test]
    fn offline_mock_reports_network_error() {
        let mut source = MockWeather::new(Some(1));
        source.set_offline(true);
        let err = source.current_conditions().unwrap_err();
        assert_eq!(err.kind(), WindErrorKind::NetworkError);
        source.set_offline(false);
        assert!(source.current_conditions().is_ok());
    }

    #[test]
    fn pressure_falls_with_altitude() {
        assert!((standard_station_pressure(0.0) - 1013.25).abs() < 1e-9);
        assert!(standard_station_pressure(5000.0) < 850.0);
    }
}
