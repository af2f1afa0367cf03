//! Plays-like distance decomposition and club convergence.
//!
//! `calculate_wind_effect` is the soft-fail path: any problem is logged and
//! yields `None`. `calculate_wind_effect_recursive` is the hard-fail path and
//! returns a typed [`WindError`].

use std::fmt;

use serde::Serialize;

use crate::ball::DEFAULT_BALL_MODEL;
use crate::clubs::normalize_club_name;
use crate::conditions::EnvironmentalConditions;
use crate::error::{Result, WindError};
use crate::shot::SkillLevel;
use crate::units::{format_distance, UnitSystem};
use crate::wind::normalize_angle;
use crate::yardage::YardageModel;

/// Inputs for one wind calculation.
#[derive(Debug, Clone, Copy)]
pub struct WindCalculationParams<'a> {
    pub target_yardage: f64,
    pub wind_speed_mph: f64,
    /// Relative to the target line; normalized into [0, 360).
    pub wind_angle_deg: f64,
    pub club_name: &'a str,
    pub conditions: &'a EnvironmentalConditions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindCalculationResult {
    /// Yards the conditions alone add to the plays-like distance.
    pub environmental_effect: f64,
    /// Yards the wind adds on top of that (negative = plays shorter).
    pub wind_effect: f64,
    pub lateral_effect: f64,
    /// The distance to play the shot as.
    pub total_distance: f64,
    pub carry_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceReason {
    DistanceThreshold,
    ClubStable,
    NoClubRecommendation,
    MaxIterations,
}

impl fmt::Display for ConvergenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ConvergenceReason::DistanceThreshold => "distance_threshold",
            ConvergenceReason::ClubStable => "club_stable",
            ConvergenceReason::NoClubRecommendation => "no_club_recommendation",
            ConvergenceReason::MaxIterations => "max_iterations",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationDetail {
    pub iteration: usize,
    pub club: String,
    pub playing_distance: f64,
    pub environmental_effect: f64,
    pub wind_effect: f64,
    pub convergence_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecursiveWindCalculationResult {
    #[serde(flatten)]
    pub result: WindCalculationResult,
    pub initial_club: String,
    pub final_club: String,
    pub iterations: usize,
    pub effective_playing_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_details: Option<Vec<IterationDetail>>,
    pub converged_reason: ConvergenceReason,
}

/// A club suggested for a distance by the caller's bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubRecommendation {
    /// Club identifier the calculator resolves, e.g. `"7-iron"`.
    pub key: String,
    /// Display name only; may be anything the golfer chose.
    pub name: String,
    pub normal_yardage: f64,
}

/// Picks the club for a playing distance. Treated as an opaque oracle.
pub trait ClubRecommender {
    fn recommend(&self, yards: f64) -> Option<ClubRecommendation>;
}

impl<F> ClubRecommender for F
where
    F: Fn(f64) -> Option<ClubRecommendation>,
{
    fn recommend(&self, yards: f64) -> Option<ClubRecommendation> {
        self(yards)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvergenceThreshold {
    /// 1 yd under 100 yd, 2 yd under 200 yd, 3 yd beyond.
    Adaptive,
    Fixed(f64),
}

impl ConvergenceThreshold {
    pub fn for_distance(self, distance: f64) -> f64 {
        match self {
            ConvergenceThreshold::Adaptive => adaptive_convergence_threshold(distance),
            ConvergenceThreshold::Fixed(yards) => yards,
        }
    }
}

/// Shorter shots need tighter convergence; club gaps shrink at short range.
pub fn adaptive_convergence_threshold(distance: f64) -> f64 {
    if distance < 100.0 {
        1.0
    } else if distance < 200.0 {
        2.0
    } else {
        3.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecursiveOptions {
    pub max_iterations: usize,
    pub convergence_threshold: ConvergenceThreshold,
    pub include_iteration_details: bool,
}

impl Default for RecursiveOptions {
    fn default() -> Self {
        Self {
            max_iterations: 3,
            convergence_threshold: ConvergenceThreshold::Adaptive,
            include_iteration_details: false,
        }
    }
}

/// Environmental and wind effects for one club; `None` when the inputs can't
/// be computed. `None` means "unknown", never "no effect".
pub fn calculate_wind_effect(params: &WindCalculationParams) -> Option<WindCalculationResult> {
    if !params.target_yardage.is_finite() || params.target_yardage <= 0.0 {
        log::error!("[WIND] Invalid target yardage: {}", params.target_yardage);
        return None;
    }
    if params.wind_speed_mph < 0.0 {
        log::error!("[WIND] Invalid wind speed: {}", params.wind_speed_mph);
        return None;
    }

    match try_calculate_wind_effect(params) {
        Ok(result) => Some(result),
        Err(e) => {
            log::error!("[WIND] Error in wind effect calculation: {}", e);
            None
        }
    }
}

fn try_calculate_wind_effect(params: &WindCalculationParams) -> Result<WindCalculationResult> {
    let club_key = normalize_club_name(params.club_name)
        .ok_or_else(|| WindError::invalid_club(params.club_name))?;
    let target = params.target_yardage;
    let conditions = params.conditions;

    let mut model = YardageModel::new();
    model.set_ball_model(DEFAULT_BALL_MODEL)?;

    // Baseline: same conditions, no wind.
    model.set_conditions(
        conditions.temperature_f,
        conditions.altitude_ft,
        0.0,
        0.0,
        conditions.pressure_mb,
        conditions.humidity_pct,
    )?;
    let baseline = model.calculate_adjusted_yardage(target, SkillLevel::Professional, club_key)?;

    model.set_conditions(
        conditions.temperature_f,
        conditions.altitude_ft,
        params.wind_speed_mph,
        normalize_angle(params.wind_angle_deg),
        conditions.pressure_mb,
        conditions.humidity_pct,
    )?;
    let with_wind = model.calculate_adjusted_yardage(target, SkillLevel::Professional, club_key)?;

    if !baseline.is_finite() || !with_wind.is_finite() {
        return Err(WindError::calculation_failed("Wind calculation produced a non-finite result")
            .with_context("club", club_key)
            .with_context("target_yardage", target));
    }

    let wind_carry_change = with_wind.carry_distance - baseline.carry_distance;
    let result = WindCalculationResult {
        environmental_effect: -(baseline.carry_distance - target),
        wind_effect: -wind_carry_change,
        lateral_effect: with_wind.lateral_movement,
        total_distance: target - wind_carry_change,
        carry_distance: with_wind.carry_distance,
    };

    log::debug!(
        "[WIND] {} {:.0} yds: env={:.1} wind={:.1} lateral={:.1} plays_like={:.1} carry={:.1}",
        params.club_name,
        target,
        result.environmental_effect,
        result.wind_effect,
        result.lateral_effect,
        result.total_distance,
        result.carry_distance
    );

    Ok(result)
}

fn same_club(a: &str, b: &str) -> bool {
    match (normalize_club_name(a), normalize_club_name(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Re-pick the club as the plays-like distance moves, until the distance or
/// the club settles, the bag has nothing to offer, or the iteration budget
/// runs out.
pub fn calculate_wind_effect_recursive<R>(
    params: &WindCalculationParams,
    recommender: &R,
    options: &RecursiveOptions,
) -> Result<RecursiveWindCalculationResult>
where
    R: ClubRecommender + ?Sized,
{
    let target = params.target_yardage;

    if !target.is_finite() || target <= 0.0 {
        return Err(WindError::invalid_input(
            "Invalid target yardage",
            "target_yardage",
            target,
        ));
    }
    if !params.wind_speed_mph.is_finite() || params.wind_speed_mph < 0.0 {
        return Err(WindError::invalid_input(
            "Invalid wind speed",
            "wind_speed",
            params.wind_speed_mph,
        ));
    }
    if params.club_name.trim().is_empty() {
        return Err(WindError::invalid_club(params.club_name)
            .with_context("message", "Club name is required"));
    }
    if options.max_iterations == 0 {
        return Err(WindError::invalid_parameters("max_iterations must be at least 1")
            .with_context("max_iterations", options.max_iterations));
    }
    if let ConvergenceThreshold::Fixed(yards) = options.convergence_threshold {
        if !yards.is_finite() || yards < 0.0 {
            return Err(WindError::invalid_parameters(
                "Convergence threshold must be a non-negative number of yards",
            )
            .with_context("convergence_threshold", yards));
        }
    }

    log::info!(
        "[WIND] Starting recursive calculation for {} yards with {} mph wind at {}° (initial club: {})",
        target,
        params.wind_speed_mph,
        params.wind_angle_deg,
        params.club_name
    );

    let threshold = options.convergence_threshold.for_distance(target);
    let mut details = Vec::new();
    let mut iterations = 0;
    let mut current_key = params.club_name.to_string();
    let mut current_club = params.club_name.to_string();
    let mut previous_playing_distance = target;
    let mut reason = ConvergenceReason::MaxIterations;

    let final_result = loop {
        iterations += 1;

        let result = try_calculate_wind_effect(&WindCalculationParams {
            club_name: &current_key,
            ..*params
        })
        .map_err(|e| {
            log::error!("[WIND] Club calculation failed for {}: {}", current_club, e);
            e.with_context("iteration", iterations)
        })?;

        let playing_distance = target + result.environmental_effect + result.wind_effect;
        let delta = (playing_distance - previous_playing_distance).abs();

        if options.include_iteration_details {
            details.push(IterationDetail {
                iteration: iterations,
                club: current_club.clone(),
                playing_distance,
                environmental_effect: result.environmental_effect,
                wind_effect: result.wind_effect,
                convergence_delta: delta,
            });
        }

        log::info!(
            "[WIND] Iteration {}: {} yards plays like {:.0} yards with {} (delta {:.1})",
            iterations,
            target,
            playing_distance,
            current_club,
            delta
        );

        if delta < threshold {
            log::info!("[WIND] Converged - distance change under {} yards", threshold);
            reason = ConvergenceReason::DistanceThreshold;
            break (result, playing_distance);
        }

        let Some(recommended) = recommender.recommend(playing_distance) else {
            log::warn!("[WIND] No recommended club for {:.1} yards", playing_distance);
            reason = ConvergenceReason::NoClubRecommendation;
            break (result, playing_distance);
        };

        if same_club(&recommended.key, &current_key) {
            log::info!("[WIND] Club selection stable at {}", current_club);
            reason = ConvergenceReason::ClubStable;
            break (result, playing_distance);
        }

        if iterations >= options.max_iterations {
            log::warn!(
                "[WIND] Reached maximum iterations ({}) without convergence",
                options.max_iterations
            );
            break (result, playing_distance);
        }

        log::info!("[WIND] Switching to {} for next iteration", recommended.name);
        previous_playing_distance = playing_distance;
        current_key = recommended.key;
        current_club = recommended.name;
    };

    let (result, effective_playing_distance) = final_result;
    if !effective_playing_distance.is_finite() {
        return Err(WindError::calculation_failed(
            "Recursive calculation failed to produce a result",
        )
        .with_context("iterations", iterations));
    }

    Ok(RecursiveWindCalculationResult {
        result,
        initial_club: params.club_name.to_string(),
        final_club: current_club,
        iterations,
        effective_playing_distance,
        iteration_details: options.include_iteration_details.then_some(details),
        converged_reason: reason,
    })
}

/// Plays-like numbers for one wind speed, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaysLike {
    pub wind_speed_mph: f64,
    pub adjusted_yardage: f64,
    pub lateral_offset: f64,
    pub recommended_club: Option<String>,
    pub wind_effect: f64,
    pub environmental_effect: f64,
}

/// Sustained-wind and gust views of the same shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaysLikeReport {
    pub club: String,
    pub club_key: String,
    /// `None` when the shot couldn't be calculated.
    pub sustained: Option<PlaysLike>,
    pub gust: Option<PlaysLike>,
}

/// Picks the club for the raw target, then works out how the shot plays in
/// the sustained wind and in the gusts.
pub fn plays_like_report<R>(
    target_yardage: f64,
    wind_angle_deg: f64,
    conditions: &EnvironmentalConditions,
    recommender: &R,
) -> Option<PlaysLikeReport>
where
    R: ClubRecommender + ?Sized,
{
    let club = recommender.recommend(target_yardage)?;

    let plays_like = |wind_speed_mph: f64| {
        let result = calculate_wind_effect(&WindCalculationParams {
            target_yardage,
            wind_speed_mph,
            wind_angle_deg,
            club_name: &club.key,
            conditions,
        })?;
        let adjusted_yardage = result.total_distance.round();
        Some(PlaysLike {
            wind_speed_mph,
            adjusted_yardage,
            lateral_offset: result.lateral_effect.round(),
            recommended_club: recommender.recommend(adjusted_yardage).map(|c| c.name),
            wind_effect: result.wind_effect,
            environmental_effect: result.environmental_effect,
        })
    };

    let sustained = plays_like(conditions.wind_speed_mph);
    let gust = plays_like(conditions.wind_gust_mph);

    Some(PlaysLikeReport {
        club: club.name.clone(),
        club_key: club.key.clone(),
        sustained,
        gust,
    })
}

/// Aim text for a lateral offset in yards. A positive offset (wind from the
/// right, ball pushed left) means aim right.
pub fn aim_direction(offset: f64, units: UnitSystem) -> String {
    if offset.abs() < 1.0 {
        return "On target".to_string();
    }
    let side = if offset > 0.0 { "RIGHT" } else { "LEFT" };
    let distance = format_distance(offset.abs(), units);
    format!("Aim {:.0} {} {}", distance.value, distance.short_label, side)
}
