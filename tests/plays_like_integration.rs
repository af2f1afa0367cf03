//! Integration test: plays-like distances end to end
//!
//! Conditions in, carry/drift and club choice out, through the public API.

use approx::assert_relative_eq;

use playslike::calculator::{aim_direction, ConvergenceThreshold};
use playslike::units::UnitSystem;
use playslike::clubs::CLUB_DATABASE;
use playslike::error::WindErrorKind;
use playslike::{
    calculate_wind_effect, calculate_wind_effect_recursive, plays_like_report, ClubBag,
    ClubRecommendation, ConvergenceReason, EnvironmentalConditions, ModelError, RecursiveOptions,
    SkillLevel, WindCalculationParams, YardageModel,
};

fn params<'a>(
    conditions: &'a EnvironmentalConditions,
    target: f64,
    wind: f64,
    angle: f64,
    club: &'a str,
) -> WindCalculationParams<'a> {
    WindCalculationParams {
        target_yardage: target,
        wind_speed_mph: wind,
        wind_angle_deg: angle,
        club_name: club,
        conditions,
    }
}

fn carry(model: &YardageModel, club: &str) -> f64 {
    model
        .calculate_adjusted_yardage(150.0, SkillLevel::Professional, club)
        .unwrap()
        .carry_distance
}

#[test]
fn test_calm_standard_seven_iron() {
    let mut model = YardageModel::new();
    model.set_conditions(70.0, 0.0, 0.0, 0.0, 1013.25, 50.0).unwrap();
    let shot = model
        .calculate_adjusted_yardage(150.0, SkillLevel::Professional, "7-iron")
        .unwrap();

    assert_relative_eq!(shot.carry_distance, 150.0, epsilon = 0.5);
    assert_eq!(shot.lateral_movement, 0.0);
}

#[test]
fn test_skill_ordering_every_club() {
    let mut model = YardageModel::new();
    model.set_conditions(70.0, 0.0, 0.0, 0.0, 1013.25, 50.0).unwrap();

    for club in &CLUB_DATABASE {
        let by_skill: Vec<f64> = SkillLevel::ALL
            .iter()
            .map(|&skill| {
                model
                    .calculate_adjusted_yardage(150.0, skill, club.key)
                    .unwrap()
                    .carry_distance
            })
            .collect();

        assert!(by_skill[0] <= by_skill[1], "{}", club.key);
        assert!(by_skill[1] <= by_skill[2], "{}", club.key);
        assert_eq!(by_skill[2], by_skill[3], "{}", club.key);
    }
}

#[test]
fn test_heat_and_altitude_add_distance() {
    let mut model = YardageModel::new();

    model.set_conditions(50.0, 0.0, 0.0, 0.0, 1013.25, 50.0).unwrap();
    let cool = carry(&model, "7-iron");
    model.set_conditions(95.0, 0.0, 0.0, 0.0, 1013.25, 50.0).unwrap();
    let hot = carry(&model, "7-iron");
    assert!(hot > cool);

    model.set_conditions(70.0, 0.0, 0.0, 0.0, 1013.25, 50.0).unwrap();
    let sea_level = carry(&model, "7-iron");
    model.set_conditions(70.0, 6000.0, 0.0, 0.0, 812.0, 50.0).unwrap();
    let mountain = carry(&model, "7-iron");
    assert!(mountain > sea_level);
    assert!(mountain > 160.0);
}

#[test]
fn test_validation_happens_before_physics() {
    let mut model = YardageModel::new();
    assert_eq!(
        model.set_conditions(70.0, 0.0, 51.0, 0.0, 1013.25, 50.0),
        Err(ModelError::WindSpeedOutOfRange(51.0))
    );
    assert_eq!(
        model.set_conditions(70.0, 0.0, 10.0, 360.0, 1013.25, 50.0),
        Err(ModelError::WindDirectionOutOfRange(360.0))
    );
    assert_eq!(
        model.set_conditions(70.0, 0.0, 10.0, -1.0, 1013.25, 50.0),
        Err(ModelError::WindDirectionOutOfRange(-1.0))
    );
    assert!(matches!(
        model.calculate_adjusted_yardage(150.0, SkillLevel::Advanced, "putter"),
        Err(ModelError::UnknownClub(_))
    ));
}

#[test]
fn test_wind_at_zero_outweighs_wind_at_180() {
    let conditions = EnvironmentalConditions::standard();
    let zero = calculate_wind_effect(&params(&conditions, 150.0, 20.0, 0.0, "7-iron")).unwrap();
    let opposite =
        calculate_wind_effect(&params(&conditions, 150.0, 20.0, 180.0, "7-iron")).unwrap();

    assert!(zero.wind_effect > 0.0);
    assert!(opposite.wind_effect < 0.0);
    assert!(zero.wind_effect.abs() > opposite.wind_effect.abs());
    assert!(zero.total_distance > 150.0);
    assert!(opposite.total_distance < 150.0);
}

#[test]
fn test_pure_crosswind() {
    let conditions = EnvironmentalConditions::standard();
    let from_right =
        calculate_wind_effect(&params(&conditions, 150.0, 20.0, 90.0, "7-iron")).unwrap();
    let from_left =
        calculate_wind_effect(&params(&conditions, 150.0, 20.0, 270.0, "7-iron")).unwrap();

    assert_eq!(from_right.wind_effect, 0.0);
    assert_eq!(from_left.wind_effect, 0.0);
    assert!(from_right.lateral_effect > 0.0);
    assert_eq!(from_right.lateral_effect, -from_left.lateral_effect);
    // Wind from the right pushes the ball left: aim right.
    let aim = aim_direction(from_right.lateral_effect, UnitSystem::Imperial);
    assert!(aim.starts_with("Aim 1"));
    assert!(aim.ends_with("yds RIGHT"));
    assert!(aim_direction(from_left.lateral_effect, UnitSystem::Imperial).ends_with("LEFT"));
}

#[test]
fn test_decomposition_adds_up() {
    let conditions = EnvironmentalConditions::new(85.0, 30.0, 980.0, 1200.0);
    let result = calculate_wind_effect(&params(&conditions, 165.0, 14.0, 30.0, "6i")).unwrap();

    let baseline = 165.0 - result.environmental_effect;
    assert_relative_eq!(result.carry_distance, baseline - result.wind_effect, epsilon = 1e-9);
    assert_relative_eq!(result.total_distance, 165.0 + result.wind_effect, epsilon = 1e-9);
}

#[test]
fn test_bag_drives_recursive_club_change() {
    let conditions = EnvironmentalConditions::standard();
    let bag = ClubBag::default();
    let options = RecursiveOptions {
        include_iteration_details: true,
        ..RecursiveOptions::default()
    };

    let result = calculate_wind_effect_recursive(
        &params(&conditions, 150.0, 20.0, 0.0, "9-iron"),
        &bag,
        &options,
    )
    .unwrap();

    assert_eq!(result.initial_club, "9-iron");
    assert_eq!(result.final_club, "7-Iron");
    assert_eq!(result.iterations, 2);
    assert_eq!(result.converged_reason, ConvergenceReason::DistanceThreshold);

    let details = result.iteration_details.as_ref().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details[0].convergence_delta > 2.0);
    assert!(details[1].convergence_delta < 2.0);
    assert_relative_eq!(
        result.effective_playing_distance,
        details[1].playing_distance,
        epsilon = 1e-12
    );
}

#[test]
fn test_recursive_single_pass_matches_soft_path() {
    let conditions = EnvironmentalConditions::new(60.0, 65.0, 1000.0, 400.0);
    let p = params(&conditions, 140.0, 18.0, 200.0, "8-iron");
    let same_club = |_: f64| {
        Some(ClubRecommendation {
            key: "8-iron".to_string(),
            name: "8 Iron".to_string(),
            normal_yardage: 170.0,
        })
    };

    let soft = calculate_wind_effect(&p).unwrap();
    let hard = calculate_wind_effect_recursive(&p, &same_club, &RecursiveOptions::default()).unwrap();

    assert_eq!(hard.result, soft);
    assert_eq!(hard.iterations, 1);
}

#[test]
fn test_fixed_threshold_validation() {
    let conditions = EnvironmentalConditions::standard();
    let bag = ClubBag::default();

    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let err = calculate_wind_effect_recursive(
            &params(&conditions, 150.0, 10.0, 0.0, "7-iron"),
            &bag,
            &RecursiveOptions {
                convergence_threshold: ConvergenceThreshold::Fixed(bad),
                ..RecursiveOptions::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), WindErrorKind::InvalidParameters);
    }
}

#[test]
fn test_gusts_play_further_from_target() {
    let conditions = EnvironmentalConditions::standard().with_wind(10.0, 0.0, 25.0);
    let bag = ClubBag::default();
    let report = plays_like_report(150.0, 180.0, &conditions, &bag).unwrap();

    assert_eq!(report.club, "9-Iron");
    let sustained = report.sustained.unwrap();
    let gust = report.gust.unwrap();
    assert!(sustained.adjusted_yardage < 150.0);
    assert!(gust.adjusted_yardage < sustained.adjusted_yardage);
    assert_eq!(sustained.adjusted_yardage.fract(), 0.0);
    assert!(gust.recommended_club.is_some());
}

fn named_bag() -> ClubBag {
    ClubBag::from_toml_str(
        r#"
[[clubs]]
key = "8i"
name = "My Eight"
distance = 150

[[clubs]]
key = "7i"
name = "My Seven"
distance = 160
"#,
    )
    .unwrap()
}

#[test]
fn test_custom_named_bag_report() {
    let conditions = EnvironmentalConditions::standard().with_wind(20.0, 0.0, 20.0);
    let bag = named_bag();
    let report = plays_like_report(150.0, 0.0, &conditions, &bag).unwrap();

    let direct = calculate_wind_effect(&params(&conditions, 150.0, 20.0, 0.0, "8-iron")).unwrap();
    let sustained = report.sustained.unwrap();

    assert_eq!(report.club, "My Eight");
    assert_eq!(report.club_key, "8-iron");
    assert_eq!(sustained.wind_effect, direct.wind_effect);
    assert_eq!(sustained.adjusted_yardage, direct.total_distance.round());
    assert!(sustained.adjusted_yardage > 150.0);
    assert_eq!(sustained.recommended_club.as_deref(), Some("My Seven"));
}

#[test]
fn test_custom_named_bag_recursive() {
    let conditions = EnvironmentalConditions::standard();
    let bag = named_bag();

    let result = calculate_wind_effect_recursive(
        &params(&conditions, 150.0, 20.0, 0.0, "8-iron"),
        &bag,
        &RecursiveOptions::default(),
    )
    .unwrap();

    assert_eq!(result.iterations, 2);
    assert_eq!(result.final_club, "My Seven");
    assert!(result.result.wind_effect > 0.0);
}
