//! Wind effect on carry and lateral drift.
//!
//! Angles are relative to the target line. The model's convention puts the
//! amplified branch at a positive along-line component (cos > 0, 0°). Lateral
//! output is the aim correction: a wind from the right (90°) pushes the ball
//! left and gives a positive value, meaning aim right.
//!
//! Both outputs share the same shape terms:
//!   distance_factor = (yardage / 200)^(0.7 · (1 - max(0, yardage - 400) / 1000))
//!   height_factor   = (apex / 40)^3
//!   speed_factor    = sqrt(123 / ball_speed)
//!   stability       = 0.7 + 0.42 · min(1, spin / 6000)

use serde::Serialize;

use crate::ball::BallProfile;
use crate::clubs::ClubProfile;

/// Sub-linear wind-speed scaling exponent for the along-line effect.
pub const WIND_POWER_SCALE: f64 = 0.230;
pub const TAILWIND_AMPLIFIER: f64 = 1.235;
pub const LATERAL_BASE_MULTIPLIER: f64 = 2.0;
/// Spin at which the ball counts as fully gyro-stabilized (rpm).
pub const SPIN_GYRO_THRESHOLD: f64 = 6000.0;

const HEADTAIL_CALIBRATION: f64 = 0.15;
const HEADTAIL_SCALE: f64 = 3.7;
const CROSSWIND_CALIBRATION: f64 = 0.08;
const CROSSWIND_POWER_SCALE: f64 = 0.3;
const QUARTERING_POSITIVE: f64 = 1.3;
const QUARTERING_NEGATIVE: f64 = 0.8;

const GRADIENT_BASE: f64 = 1.1;
const GRADIENT_SCALE: f64 = 0.14;
const GRADIENT_REFERENCE_FT: f64 = 32.0;

/// Components closer to zero than this are float noise from `sin`/`cos`.
const COMPONENT_EPSILON: f64 = 1e-12;

/// Wind speed multiplier at `height_ft`, relative to the 10 m measurement
/// height. Heights under 32 ft use the reference value.
pub fn wind_gradient(height_ft: f64) -> f64 {
    GRADIENT_BASE + GRADIENT_SCALE * (height_ft.max(GRADIENT_REFERENCE_FT) / GRADIENT_REFERENCE_FT).log10()
}

/// Hard clamp: spin at or above the threshold is fully stabilized.
pub fn gyro_stability(spin_rpm: f64) -> f64 {
    (spin_rpm / SPIN_GYRO_THRESHOLD).min(1.0)
}

pub fn stability_factor(gyro: f64) -> f64 {
    0.7 + 0.42 * gyro
}

/// Wind effect grows sub-linearly with shot length and tapers past 400 yd.
pub fn distance_factor(yardage: f64) -> f64 {
    (yardage / 200.0).powf(0.7 * (1.0 - (yardage - 400.0).max(0.0) / 1000.0))
}

/// Higher-flying shots are cubically more wind-affected.
pub fn height_factor(apex_height: f64) -> f64 {
    (apex_height / 40.0).powi(3)
}

/// Slower balls are more wind-affected.
pub fn speed_factor(ball_speed_mph: f64) -> f64 {
    (123.0 / ball_speed_mph).sqrt()
}

/// Normalize `angle` into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Angle of the wind relative to the player's heading, both "from" bearings.
pub fn relative_wind_angle(wind_from_deg: f64, heading_deg: f64) -> f64 {
    normalize_angle(wind_from_deg - heading_deg)
}

/// Along-line (cos) and cross-line (sin) unit components of a wind angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindComponents {
    pub along: f64,
    pub cross: f64,
}

impl WindComponents {
    pub fn from_angle(angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            along: snap_to_zero(rad.cos()),
            cross: snap_to_zero(rad.sin()),
        }
    }
}

fn snap_to_zero(component: f64) -> f64 {
    if component.abs() < COMPONENT_EPSILON {
        0.0
    } else {
        component
    }
}

/// Everything the wind model needs for one shot.
#[derive(Debug, Clone, Copy)]
pub struct WindInputs<'a> {
    /// Running adjusted yardage (after environment and skill).
    pub yardage: f64,
    pub club: &'a ClubProfile,
    pub ball: &'a BallProfile,
    /// Raw wind speed times the gradient (mph).
    pub effective_wind: f64,
    pub wind_angle_deg: f64,
    pub flight_time_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindEffect {
    /// Yards removed from carry (negative adds carry).
    pub distance_effect: f64,
    /// Yards of aim correction, positive = aim right.
    pub lateral_movement: f64,
}

pub fn wind_effect(inputs: &WindInputs) -> WindEffect {
    let club = inputs.club;
    let ball = inputs.ball;
    let components = WindComponents::from_angle(inputs.wind_angle_deg);

    let distance = distance_factor(inputs.yardage);
    let height = height_factor(club.apex_height);
    let speed = speed_factor(club.ball_speed_mph * ball.speed_factor);
    let gyro = gyro_stability(club.spin_rate_rpm);
    let stability = stability_factor(gyro);

    let wind_normalized = (inputs.effective_wind / 5.0).abs();
    let half_flight = inputs.flight_time_s / 2.0;

    let wind_factor = if components.along > 0.0 {
        let spin_lift = 1.0 + gyro * 0.25;
        components.along
            * TAILWIND_AMPLIFIER
            * wind_normalized.powf(WIND_POWER_SCALE)
            * half_flight.powf(0.37)
            * spin_lift
            * HEADTAIL_CALIBRATION
            * HEADTAIL_SCALE
    } else {
        let spin_lift = 1.1 + gyro * 0.25;
        components.along
            * wind_normalized.powf(WIND_POWER_SCALE)
            * half_flight.powf(0.30)
            * spin_lift
            * HEADTAIL_CALIBRATION
            * HEADTAIL_SCALE
    };

    let shared = distance * speed * club.wind_sensitivity * height * stability;

    let distance_effect = inputs.effective_wind * wind_factor * shared;

    let quartering = if components.along > 0.0 {
        QUARTERING_POSITIVE
    } else {
        QUARTERING_NEGATIVE
    };
    let lateral_movement = components.cross
        * inputs.effective_wind
        * inputs.flight_time_s
        * shared
        * CROSSWIND_CALIBRATION
        * wind_normalized.powf(CROSSWIND_POWER_SCALE)
        * (1.0 + ball.spin_factor * 0.05)
        * LATERAL_BASE_MULTIPLIER
        * quartering;

    WindEffect {
        distance_effect,
        lateral_movement,
    }
}
