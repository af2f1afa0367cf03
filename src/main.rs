use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use playslike::advisory::{environmental_summary, recommended_adjustments};
use playslike::atmosphere::altitude_carry_factor;
use playslike::calculator::{aim_direction, PlaysLike, PlaysLikeReport};
use playslike::units::{format_altitude, format_distance, format_temperature, format_wind_speed, UnitSystem};
use playslike::weather::{standard_station_pressure, FixedWeather, MockWeather, WeatherSource};
use playslike::wind::relative_wind_angle;
use playslike::{
    calculate_wind_effect, calculate_wind_effect_recursive, plays_like_report, ClubBag,
    ClubRecommender, EnvironmentalConditions, RecursiveOptions, RecursiveWindCalculationResult,
    ShotResult, SkillLevel, WindCalculationParams, WindCalculationResult, YardageModel,
};

#[derive(Parser, Debug)]
#[command(name = "playslike")]
#[command(about = "Golf plays-like distance calculator", long_about = None)]
struct Args {
    /// Distance to the target in yards
    #[arg(short, long)]
    target: f64,

    /// Club to hit (recommended from the bag if not specified)
    #[arg(short, long)]
    club: Option<String>,

    /// Skill level: beginner, intermediate, advanced, professional
    #[arg(short, long, default_value = "professional")]
    skill: SkillLevel,

    /// Temperature (°F)
    #[arg(long, default_value = "70.0")]
    temperature: f64,

    /// Relative humidity (%)
    #[arg(long, default_value = "50.0")]
    humidity: f64,

    /// Station pressure (mb, defaults to the standard pressure at --altitude)
    #[arg(long)]
    pressure: Option<f64>,

    /// Altitude (ft)
    #[arg(long, default_value = "0.0")]
    altitude: f64,

    /// Sustained wind speed (mph)
    #[arg(long, default_value = "0.0")]
    wind_speed: f64,

    /// Gust speed (mph, defaults to the sustained speed)
    #[arg(long)]
    wind_gust: Option<f64>,

    /// Direction the wind blows from (degrees)
    #[arg(long, default_value = "0.0")]
    wind_direction: f64,

    /// Direction the shot is played toward (degrees)
    #[arg(long, default_value = "0.0")]
    heading: f64,

    /// Club bag TOML file
    #[arg(long)]
    bag: Option<PathBuf>,

    /// Use mock weather instead of the condition flags
    #[arg(short, long)]
    mock: bool,

    /// Seed for mock weather
    #[arg(long)]
    seed: Option<u64>,

    /// Re-pick the club until the plays-like distance settles
    #[arg(short, long)]
    recursive: bool,

    /// Include the per-iteration trace (with --recursive)
    #[arg(long)]
    details: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Show metric units
    #[arg(long)]
    metric: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Calculation {
    Single(WindCalculationResult),
    Recursive(RecursiveWindCalculationResult),
}

impl Calculation {
    fn result(&self) -> &WindCalculationResult {
        match self {
            Calculation::Single(result) => result,
            Calculation::Recursive(recursive) => &recursive.result,
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    source: &'a str,
    conditions: &'a EnvironmentalConditions,
    club: &'a str,
    skill: SkillLevel,
    relative_wind_angle: f64,
    expected_carry: ShotResult,
    calculation: &'a Calculation,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a PlaysLikeReport>,
    tips: Vec<&'static str>,
}

impl Args {
    fn station_pressure(&self) -> f64 {
        self.pressure
            .unwrap_or_else(|| standard_station_pressure(self.altitude))
    }
}

fn load_bag(path: Option<&PathBuf>) -> Result<ClubBag> {
    let Some(path) = path else {
        return Ok(ClubBag::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read club bag {}", path.display()))?;
    ClubBag::from_toml_str(&content)
        .with_context(|| format!("Failed to load club bag {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let units = if args.metric {
        UnitSystem::Metric
    } else {
        UnitSystem::Imperial
    };

    let mut source: Box<dyn WeatherSource> = if args.mock {
        Box::new(MockWeather::new(args.seed))
    } else {
        let conditions = EnvironmentalConditions::new(
            args.temperature,
            args.humidity,
            args.station_pressure(),
            args.altitude,
        )
        .with_wind(
            args.wind_speed,
            args.wind_direction,
            args.wind_gust.unwrap_or(args.wind_speed),
        );
        Box::new(FixedWeather::new(conditions))
    };
    let conditions = source
        .current_conditions()
        .context("Failed to get current conditions")?;

    let bag = load_bag(args.bag.as_ref())?;
    // `club` feeds the calculator, `club_label` is what gets printed.
    let (club, club_label) = match &args.club {
        Some(club) => (club.clone(), club.clone()),
        None => match bag.recommend(args.target) {
            Some(recommended) => (recommended.key, recommended.name),
            None => bail!("No enabled clubs in the bag"),
        },
    };

    let wind_angle = relative_wind_angle(conditions.wind_direction_deg, args.heading);
    let params = WindCalculationParams {
        target_yardage: args.target,
        wind_speed_mph: conditions.wind_speed_mph,
        wind_angle_deg: wind_angle,
        club_name: &club,
        conditions: &conditions,
    };

    let calculation = if args.recursive {
        let options = RecursiveOptions {
            include_iteration_details: args.details,
            ..RecursiveOptions::default()
        };
        let recursive = calculate_wind_effect_recursive(&params, &bag, &options)
            .with_context(|| format!("Recursive calculation failed for {}", club))?;
        Calculation::Recursive(recursive)
    } else {
        match calculate_wind_effect(&params) {
            Some(result) => Calculation::Single(result),
            None => bail!("Unable to calculate wind effect for {} at {} yards", club, args.target),
        }
    };

    let mut model = YardageModel::new();
    model
        .set_conditions(
            conditions.temperature_f,
            conditions.altitude_ft,
            conditions.wind_speed_mph,
            wind_angle,
            conditions.pressure_mb,
            conditions.humidity_pct,
        )
        .context("Invalid conditions")?;
    let expected_carry = model
        .calculate_adjusted_yardage(args.target, args.skill, &club)
        .with_context(|| format!("Unknown club {}", club))?;

    let report = plays_like_report(args.target, wind_angle, &conditions, &bag);
    let tips = recommended_adjustments(&conditions, args.heading);

    if args.json {
        let output = Output {
            source: source.name(),
            conditions: &conditions,
            club: &club_label,
            skill: args.skill,
            relative_wind_angle: wind_angle,
            expected_carry,
            calculation: &calculation,
            report: report.as_ref(),
            tips,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "=".repeat(50));
    println!("  PlaysLike - Golf Distance Calculator");
    if args.mock {
        println!("  Using MOCK Weather (Simulation Mode)");
    }
    println!("{}", "=".repeat(50));
    println!();

    let temperature = format_temperature(conditions.temperature_f, units);
    let wind = format_wind_speed(conditions.wind_speed_mph, units);
    let gust = format_wind_speed(conditions.wind_gust_mph, units);
    let altitude = format_altitude(conditions.altitude_ft, units);
    println!("Conditions ({}):", source.name());
    println!("  Temperature: {:.0}{}", temperature.value, temperature.short_label);
    println!("  Humidity:    {:.0}%", conditions.humidity_pct);
    println!("  Pressure:    {:.1} mb", conditions.pressure_mb);
    println!(
        "  Altitude:    {:.0} {} (typically {:+.1}% carry)",
        altitude.value,
        altitude.short_label,
        (altitude_carry_factor(conditions.altitude_ft) - 1.0) * 100.0
    );
    println!(
        "  Wind:        {:.0} {} from {:.0}° (gusts {:.0}), {:.0}° relative to the shot",
        wind.value, wind.short_label, conditions.wind_direction_deg, gust.value, wind_angle
    );
    println!();

    let show = |yards: f64| {
        let d = format_distance(yards, units);
        format!("{:.1} {}", d.value, d.short_label)
    };

    let result = calculation.result();
    println!("Club: {}  Target: {}", club_label, show(args.target));
    println!("  Environmental effect: {:+.1}", result.environmental_effect);
    println!("  Wind effect:          {:+.1}", result.wind_effect);
    println!("  Plays like:           {}", show(result.total_distance));
    println!("  Carry:                {}", show(result.carry_distance));
    println!("  {}", aim_direction(result.lateral_effect, units));
    println!(
        "  Expected carry ({}): {}",
        args.skill,
        show(expected_carry.carry_distance)
    );

    if let Calculation::Recursive(recursive) = &calculation {
        println!();
        println!(
            "Converged after {} iteration(s) ({}): {} -> {}",
            recursive.iterations,
            recursive.converged_reason,
            recursive.initial_club,
            recursive.final_club
        );
        println!(
            "  Effective playing distance: {}",
            show(recursive.effective_playing_distance)
        );
        for detail in recursive.iteration_details.iter().flatten() {
            println!(
                "  #{} {:<8} plays {} (env {:+.1}, wind {:+.1}, delta {:.1})",
                detail.iteration,
                detail.club,
                show(detail.playing_distance),
                detail.environmental_effect,
                detail.wind_effect,
                detail.convergence_delta
            );
        }
    }

    if let Some(report) = &report {
        println!();
        let entries: [(&str, &Option<PlaysLike>); 2] =
            [("Sustained", &report.sustained), ("Gusts", &report.gust)];
        for (label, plays) in entries {
            match plays {
                Some(plays) => println!(
                    "{:<10} plays like {} -> {} ({})",
                    label,
                    show(plays.adjusted_yardage),
                    plays.recommended_club.as_deref().unwrap_or("-"),
                    aim_direction(plays.lateral_offset, units)
                ),
                None => println!("{:<10} unavailable for {}", label, report.club),
            }
        }
    }

    println!();
    println!("{}", environmental_summary(&conditions, args.heading));
    for tip in tips {
        println!("  - {}", tip);
    }

    Ok(())
}
