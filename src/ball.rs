use serde::Serialize;

use crate::error::ModelError;

pub const DEFAULT_BALL_MODEL: &str = "tour_premium";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub compression: u32,
    pub speed_factor: f64,
    pub spin_factor: f64,
    pub temp_sensitivity: f64,
    /// Cosmetic only.
    pub dimple_pattern: &'static str,
}

pub static BALL_MODELS: [BallProfile; 1] = [BallProfile {
    key: DEFAULT_BALL_MODEL,
    name: "Tour Premium",
    compression: 95,
    speed_factor: 1.00,
    spin_factor: 1.05,
    temp_sensitivity: 1.0,
    dimple_pattern: "hexagonal",
}];

pub fn ball_profile(key: &str) -> Result<&'static BallProfile, ModelError> {
    BALL_MODELS
        .iter()
        .find(|ball| ball.key == key)
        .ok_or_else(|| ModelError::UnknownBall(key.to_string()))
}

pub fn default_ball() -> &'static BallProfile {
    &BALL_MODELS[0]
}
