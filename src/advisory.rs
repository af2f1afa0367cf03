//! Quick, rule-of-thumb guidance built on air density and raw wind
//! components. Independent of the yardage model.

use serde::Serialize;

use crate::atmosphere::ALTITUDE_THRESHOLD_FT;
use crate::conditions::EnvironmentalConditions;

/// Sea-level ISA density (kg/m³) the rules of thumb are measured against.
pub const STANDARD_DENSITY: f64 = 1.225;

const NOTABLE_WIND_MPH: f64 = 5.0;
const COLD_TEMPERATURE_F: f64 = 50.0;
const HIGH_HUMIDITY_PCT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotAdjustments {
    /// Percent change in distance.
    pub distance_adjustment: f64,
    /// Yards, positive = right.
    pub trajectory_shift: f64,
    pub spin_adjustment: f64,
    pub launch_angle_adjustment: f64,
}

/// Headwind (positive = into the player) and crosswind components in mph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindSplit {
    pub headwind: f64,
    pub crosswind: f64,
}

pub fn split_wind(speed_mph: f64, wind_from_deg: f64, shot_direction_deg: f64) -> WindSplit {
    let relative = (wind_from_deg - shot_direction_deg).to_radians();
    WindSplit {
        headwind: speed_mph * relative.cos(),
        crosswind: speed_mph * relative.sin(),
    }
}

fn density_ratio(conditions: &EnvironmentalConditions) -> f64 {
    conditions.density / STANDARD_DENSITY
}

pub fn shot_adjustments(
    conditions: &EnvironmentalConditions,
    shot_direction_deg: f64,
) -> ShotAdjustments {
    let ratio = density_ratio(conditions);
    let wind = split_wind(
        conditions.wind_speed_mph,
        conditions.wind_direction_deg,
        shot_direction_deg,
    );

    ShotAdjustments {
        distance_adjustment: (1.0 - ratio) * 100.0 - wind.headwind * 1.5,
        trajectory_shift: wind.crosswind * 2.0,
        spin_adjustment: (ratio - 1.0) * -50.0,
        launch_angle_adjustment: wind.headwind * 0.1,
    }
}

/// Thinner air keeps the ball up slightly longer.
pub fn flight_time_adjustment(conditions: &EnvironmentalConditions) -> f64 {
    1.0 + (1.0 - density_ratio(conditions)) * 0.1
}

/// Plain-language tips for a shot played toward `shot_direction_deg`.
pub fn recommended_adjustments(
    conditions: &EnvironmentalConditions,
    shot_direction_deg: f64,
) -> Vec<&'static str> {
    let mut tips = Vec::new();
    let wind = split_wind(
        conditions.wind_speed_mph,
        conditions.wind_direction_deg,
        shot_direction_deg,
    );

    if wind.headwind.abs() > NOTABLE_WIND_MPH {
        tips.push(if wind.headwind > 0.0 {
            "Into wind: Club up and swing easier for better control"
        } else {
            "Downwind: Club down and be aware of reduced spin/control"
        });
    }
    if wind.crosswind.abs() > NOTABLE_WIND_MPH {
        tips.push("Significant crosswind: Allow for shot shape into the wind");
    }
    if conditions.temperature_f < COLD_TEMPERATURE_F {
        tips.push("Cold conditions: Ball will fly shorter, consider clubbing up");
    }
    if conditions.humidity_pct > HIGH_HUMIDITY_PCT {
        tips.push("High humidity: Ball will fly slightly shorter");
    }
    if conditions.altitude_ft > ALTITUDE_THRESHOLD_FT {
        tips.push("High altitude: Ball will fly further, consider clubbing down");
    }

    tips
}

pub fn environmental_summary(
    conditions: &EnvironmentalConditions,
    shot_direction_deg: f64,
) -> String {
    let adjustments = shot_adjustments(conditions, shot_direction_deg);
    let distance = if adjustments.distance_adjustment > 0.0 {
        "Increase"
    } else {
        "Decrease"
    };
    let side = if adjustments.trajectory_shift > 0.0 {
        "right"
    } else {
        "left"
    };
    let spin = if adjustments.spin_adjustment > 0.0 {
        "Increased"
    } else {
        "Decreased"
    };

    format!(
        "Playing conditions will affect your shots as follows:\n\
         • Distance: {} by {:.1}% (includes altitude effect)\n\
         • Ball flight: {:.1} yards {}\n\
         • Spin rate: {} effect",
        distance,
        adjustments.distance_adjustment.abs(),
        adjustments.trajectory_shift.abs(),
        side,
        spin
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn calm_standard_day_is_slightly_long() {
        let conditions = EnvironmentalConditions::standard();
        let adj = shot_adjustments(&conditions, 0.0);
        // 70 °F air is thinner than the 59 °F reference
        assert!(adj.distance_adjustment > 0.0);
        assert_eq!(adj.trajectory_shift, 0.0);
        assert_eq!(adj.launch_angle_adjustment, 0.0);
        assert!(flight_time_adjustment(&conditions) > 1.0);
    }

    #[test]
    fn headwind_costs_distance() {
        let calm = EnvironmentalConditions::standard();
        let windy = EnvironmentalConditions::standard().with_wind(10.0, 0.0, 10.0);
        let delta = shot_adjustments(&windy, 0.0).distance_adjustment
            - shot_adjustments(&calm, 0.0).distance_adjustment;
        assert_relative_eq!(delta, -15.0, epsilon = 1e-9);
        assert_relative_eq!(shot_adjustments(&windy, 0.0).launch_angle_adjustment, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn crosswind_shifts_trajectory() {
        let windy = EnvironmentalConditions::standard().with_wind(10.0, 90.0, 10.0);
        let adj = shot_adjustments(&windy, 0.0);
        assert_relative_eq!(adj.trajectory_shift, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn tips_cover_each_condition() {
        let mut conditions = EnvironmentalConditions::new(40.0, 90.0, 850.0, 5000.0);
        conditions = conditions.with_wind(12.0, 180.0, 15.0);
        let tips = recommended_adjustments(&conditions, 0.0);
        assert_eq!(tips.len(), 4);
        assert!(tips[0].starts_with("Downwind"));
        assert!(tips.iter().any(|t| t.starts_with("Cold")));
        assert!(tips.iter().any(|t| t.starts_with("High humidity")));
        assert!(tips.iter().any(|t| t.starts_with("High altitude")));

        assert!(recommended_adjustments(&EnvironmentalConditions::standard(), 0.0).is_empty());
    }

    #[test]
    fn summary_mentions_direction() {
        let windy = EnvironmentalConditions::standard().with_wind(10.0, 270.0, 10.0);
        let summary = environmental_summary(&windy, 0.0);
        assert!(summary.contains("yards left"));
        assert!(summary.starts_with("Playing conditions"));
    }

    #[test]
    fn advice_follows_the_shot_heading() {
        let conditions = EnvironmentalConditions::standard().with_wind(12.0, 180.0, 12.0);
        assert!(recommended_adjustments(&conditions, 0.0)[0].starts_with("Downwind"));
        assert!(recommended_adjustments(&conditions, 180.0)[0].starts_with("Into wind"));
        assert!(recommended_adjustments(&conditions, 90.0)[0].starts_with("Significant crosswind"));

        let westerly = EnvironmentalConditions::standard().with_wind(10.0, 270.0, 10.0);
        assert!(environmental_summary(&westerly, 180.0).contains("yards right"));
        assert_ne!(
            environmental_summary(&westerly, 0.0),
            environmental_summary(&westerly, 180.0)
        );
    }
}
