//! Plays-like distance for golf shots: how temperature, humidity, pressure,
//! altitude and wind change carry and drift, and which club to hit.

pub mod advisory;
pub mod atmosphere;
pub mod ball;
pub mod calculator;
pub mod club_bag;
pub mod clubs;
pub mod conditions;
pub mod error;
pub mod shot;
pub mod units;
pub mod weather;
pub mod wind;
pub mod yardage;

pub use calculator::{
    calculate_wind_effect, calculate_wind_effect_recursive, plays_like_report, ClubRecommendation,
    ClubRecommender, ConvergenceReason, ConvergenceThreshold, RecursiveOptions,
    RecursiveWindCalculationResult, WindCalculationParams, WindCalculationResult,
};
pub use club_bag::ClubBag;
pub use conditions::EnvironmentalConditions;
pub use error::{ModelError, WindError, WindErrorKind};
pub use shot::{ShotResult, SkillLevel};
pub use yardage::YardageModel;
