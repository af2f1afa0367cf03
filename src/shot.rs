use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ball::BallProfile;
use crate::clubs::ClubProfile;

/// Gravity (ft/s²)
pub const GRAVITY_FPS2: f64 = 32.174;
/// mph -> ft/s
pub const MPH_TO_FPS: f64 = 1.467;
/// Spin decay per second of flight, normalized to a 123 mph ball.
pub const SPIN_DECAY_RATE: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Professional,
    ];

    /// Control/efficiency loss, applied after the environmental factor.
    pub fn multiplier(self) -> f64 {
        match self {
            SkillLevel::Beginner => 0.90,
            SkillLevel::Intermediate => 0.95,
            SkillLevel::Advanced => 1.00,
            SkillLevel::Professional => 1.00,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Professional => "professional",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown skill level: {}", s))
    }
}

/// Carry and drift for one club under one set of conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotResult {
    /// Yards, one decimal.
    pub carry_distance: f64,
    /// Yards, one decimal; positive = aim right to allow for the drift.
    pub lateral_movement: f64,
}

impl ShotResult {
    pub fn new(carry_distance: f64, lateral_movement: f64) -> Self {
        Self {
            carry_distance: round_tenth(carry_distance),
            lateral_movement: round_tenth(lateral_movement),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.carry_distance.is_finite() && self.lateral_movement.is_finite()
    }
}

/// Launch kinematics for a club/ball pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightParameters {
    pub initial_velocity_fps: f64,
    /// Vacuum projectile hang time (s).
    pub flight_time_s: f64,
    pub landing_spin_rpm: f64,
}

impl FlightParameters {
    pub fn for_club(club: &ClubProfile, ball: &BallProfile) -> Self {
        let initial_velocity_fps = club.ball_speed_mph * MPH_TO_FPS * ball.speed_factor;
        let launch_rad = club.launch_angle_deg.to_radians();
        let flight_time_s = 2.0 * initial_velocity_fps * launch_rad.sin() / GRAVITY_FPS2;

        Self {
            initial_velocity_fps,
            flight_time_s,
            landing_spin_rpm: spin_after_flight(club.spin_rate_rpm, flight_time_s, club.ball_speed_mph),
        }
    }
}

/// Backspin remaining after `flight_time_s`; faster balls shed spin faster.
pub fn spin_after_flight(spin_rpm: f64, flight_time_s: f64, ball_speed_mph: f64) -> f64 {
    let speed_factor = ball_speed_mph / 123.0;
    spin_rpm * (-SPIN_DECAY_RATE * flight_time_s * speed_factor).exp()
}

pub fn round_tenth(value: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0
    (value * 10.0).round() / 10.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::default_ball;
    use crate::clubs::club_profile;
    use approx::assert_relative_eq;

    #[test]
    fn skill_multipliers_are_ordered() {
        assert!(SkillLevel::Beginner.multiplier() < SkillLevel::Intermediate.multiplier());
        assert!(SkillLevel::Intermediate.multiplier() < SkillLevel::Advanced.multiplier());
        assert_eq!(SkillLevel::Advanced.multiplier(), SkillLevel::Professional.multiplier());
    }

    #[test]
    fn skill_parses_case_insensitively() {
        assert_eq!("Professional".parse::<SkillLevel>(), Ok(SkillLevel::Professional));
        assert_eq!(" beginner ".parse::<SkillLevel>(), Ok(SkillLevel::Beginner));
        assert!("scratch".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn seven_iron_hang_time() {
        let club = club_profile("7-iron").unwrap();
        let flight = FlightParameters::for_club(club, default_ball());
        assert_relative_eq!(flight.initial_velocity_fps, 181.908, epsilon = 1e-9);
        assert_relative_eq!(flight.flight_time_s, 3.268, epsilon = 1e-2);
        assert!(flight.landing_spin_rpm < club.spin_rate_rpm);
        assert!(flight.landing_spin_rpm > 0.0);
    }

    #[test]
    fn rounding_to_one_decimal() {
        let result = ShotResult::new(149.918, -0.04);
        assert_eq!(result.carry_distance, 149.9);
        assert_eq!(result.lateral_movement, 0.0);
        assert_eq!(round_tenth(10.46), 10.5);
    }
}
