use serde::Serialize;

use crate::atmosphere::{
    environmental_factor, STANDARD_HUMIDITY_PCT, STANDARD_PRESSURE_MB, STANDARD_TEMPERATURE_F,
};
use crate::ball::{ball_profile, default_ball, BallProfile};
use crate::clubs::{club_exists as club_key_exists, find_club, ClubProfile};
use crate::error::ModelError;
use crate::shot::{FlightParameters, ShotResult, SkillLevel};
use crate::wind::{wind_effect, wind_gradient, WindInputs};

pub const MAX_WIND_SPEED_MPH: f64 = 50.0;

/// A validated snapshot of the conditions one shot is computed under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotConditions {
    temperature_f: f64,
    altitude_ft: f64,
    wind_speed_mph: f64,
    wind_direction_deg: f64,
    pressure_mb: f64,
    humidity_pct: f64,
}

impl ShotConditions {
    pub fn new(
        temperature_f: f64,
        altitude_ft: f64,
        wind_speed_mph: f64,
        wind_direction_deg: f64,
        pressure_mb: f64,
        humidity_pct: f64,
    ) -> Result<Self, ModelError> {
        validate_wind(wind_speed_mph, wind_direction_deg)?;
        Ok(Self {
            temperature_f,
            altitude_ft,
            wind_speed_mph,
            wind_direction_deg,
            pressure_mb,
            humidity_pct,
        })
    }

    /// Standard day, sea level, calm.
    pub fn standard() -> Self {
        Self {
            temperature_f: STANDARD_TEMPERATURE_F,
            altitude_ft: 0.0,
            wind_speed_mph: 0.0,
            wind_direction_deg: 0.0,
            pressure_mb: STANDARD_PRESSURE_MB,
            humidity_pct: STANDARD_HUMIDITY_PCT,
        }
    }

    pub fn temperature_f(&self) -> f64 {
        self.temperature_f
    }

    pub fn altitude_ft(&self) -> f64 {
        self.altitude_ft
    }

    pub fn wind_speed_mph(&self) -> f64 {
        self.wind_speed_mph
    }

    pub fn wind_direction_deg(&self) -> f64 {
        self.wind_direction_deg
    }

    pub fn pressure_mb(&self) -> f64 {
        self.pressure_mb
    }

    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }
}

/// Wind speed in [0, 50] mph and direction in [0, 360).
pub fn validate_wind(wind_speed_mph: f64, wind_direction_deg: f64) -> Result<(), ModelError> {
    if !(0.0..=MAX_WIND_SPEED_MPH).contains(&wind_speed_mph) {
        return Err(ModelError::WindSpeedOutOfRange(wind_speed_mph));
    }
    if !(0.0..360.0).contains(&wind_direction_deg) {
        return Err(ModelError::WindDirectionOutOfRange(wind_direction_deg));
    }
    Ok(())
}

/// Adjusted carry and drift for `club` hitting to `target_yardage`.
///
/// Order matters: environmental factor, then skill multiplier, then the wind
/// distance effect (which scales with the running yardage).
pub fn compute_shot(
    conditions: &ShotConditions,
    club: &ClubProfile,
    ball: &BallProfile,
    target_yardage: f64,
    skill: SkillLevel,
) -> ShotResult {
    let flight = FlightParameters::for_club(club, ball);

    let env_factor = environmental_factor(
        conditions.temperature_f,
        conditions.pressure_mb,
        conditions.humidity_pct,
        conditions.altitude_ft,
    );

    let mut adjusted = target_yardage * env_factor;
    adjusted *= skill.multiplier();

    let gradient = wind_gradient(club.apex_height * 3.0);
    let effect = wind_effect(&WindInputs {
        yardage: adjusted,
        club,
        ball,
        effective_wind: conditions.wind_speed_mph * gradient,
        wind_angle_deg: conditions.wind_direction_deg,
        flight_time_s: flight.flight_time_s,
    });

    log::debug!(
        "[YARDAGE] {} target={:.1} env={:.4} skill={} wind_effect={:.2} lateral={:.2}",
        club.key,
        target_yardage,
        env_factor,
        skill,
        effect.distance_effect,
        effect.lateral_movement
    );

    adjusted -= effect.distance_effect;

    ShotResult::new(adjusted, effect.lateral_movement)
}

/// Stateful front end: set conditions once, then compute shots.
#[derive(Debug, Clone)]
pub struct YardageModel {
    conditions: Option<ShotConditions>,
    ball: &'static BallProfile,
}

impl YardageModel {
    pub fn new() -> Self {
        Self {
            conditions: None,
            ball: default_ball(),
        }
    }

    /// Replace the current snapshot. On error the previous one is kept.
    pub fn set_conditions(
        &mut self,
        temperature_f: f64,
        altitude_ft: f64,
        wind_speed_mph: f64,
        wind_direction_deg: f64,
        pressure_mb: f64,
        humidity_pct: f64,
    ) -> Result<(), ModelError> {
        let conditions = ShotConditions::new(
            temperature_f,
            altitude_ft,
            wind_speed_mph,
            wind_direction_deg,
            pressure_mb,
            humidity_pct,
        )?;
        self.conditions = Some(conditions);
        Ok(())
    }

    pub fn set_ball_model(&mut self, name: &str) -> Result<(), ModelError> {
        self.ball = ball_profile(name)?;
        Ok(())
    }

    pub fn conditions(&self) -> Option<&ShotConditions> {
        self.conditions.as_ref()
    }

    pub fn ball(&self) -> &'static BallProfile {
        self.ball
    }

    pub fn club_exists(&self, key: &str) -> bool {
        club_key_exists(key)
    }

    pub fn flight_parameters(&self, club: &str) -> Result<FlightParameters, ModelError> {
        Ok(FlightParameters::for_club(find_club(club)?, self.ball))
    }

    /// Unconfigured models compute under standard, calm conditions.
    pub fn calculate_adjusted_yardage(
        &self,
        target_yardage: f64,
        skill: SkillLevel,
        club: &str,
    ) -> Result<ShotResult, ModelError> {
        let club = find_club(club)?;
        let conditions = self.conditions.unwrap_or_else(ShotConditions::standard);
        Ok(compute_shot(&conditions, club, self.ball, target_yardage, skill))
    }
}

impl Default for YardageModel {
    fn default() -> Self {
        Self::new()
    }
}
