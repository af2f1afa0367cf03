use serde::Serialize;

use crate::error::ModelError;

/// Physical launch and flight parameters for one club, as struck by a tour
/// player with a premium ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClubProfile {
    /// Normalized lookup key, e.g. `"7-iron"`.
    pub key: &'static str,
    pub name: &'static str,
    /// Baseline carry in yards.
    pub normal_yardage: f64,
    pub ball_speed_mph: f64,
    pub launch_angle_deg: f64,
    pub spin_rate_rpm: f64,
    /// Apex height in yards; the wind profile is sampled at the same number
    /// of feet times three.
    pub apex_height: f64,
    pub landing_angle_deg: f64,
    pub spin_decay: f64,
    /// Per-club wind tuning hook, 1.0 for every built-in club.
    pub wind_sensitivity: f64,
}

macro_rules! club {
    ($key:expr, $name:expr, $yards:expr, $speed:expr, $launch:expr, $spin:expr, $apex:expr, $land:expr, $decay:expr) => {
        ClubProfile {
            key: $key,
            name: $name,
            normal_yardage: $yards,
            ball_speed_mph: $speed,
            launch_angle_deg: $launch,
            spin_rate_rpm: $spin,
            apex_height: $apex,
            landing_angle_deg: $land,
            spin_decay: $decay,
            wind_sensitivity: 1.0,
        }
    };
}

/// Built-in clubs, longest first.
pub static CLUB_DATABASE: [ClubProfile; 13] = [
    //     key               name       yds    speed  launch  spin     apex  land  decay
    club!("driver",         "Driver", 300.0, 175.5, 11.0,  2575.0, 40.0, 39.0, 0.08),
    club!("3-wood",         "3-Wood", 265.0, 160.0, 11.5,  3333.0, 38.0, 42.0, 0.09),
    club!("5-wood",         "5-Wood", 245.0, 156.0, 10.7,  4622.0, 34.0, 37.0, 0.10),
    club!("4-iron",         "4-Iron", 220.0, 135.4, 12.5,  4273.0, 33.0, 40.0, 0.105),
    club!("5-iron",         "5-Iron", 210.0, 132.4, 13.6,  5004.0, 37.0, 42.6, 0.11),
    club!("6-iron",         "6-Iron", 198.0, 130.0, 15.0,  6004.0, 36.0, 46.0, 0.115),
    club!("7-iron",         "7-Iron", 185.0, 124.0, 16.8,  7024.0, 35.5, 48.2, 0.12),
    club!("8-iron",         "8-Iron", 170.0, 116.0, 18.5,  7708.0, 35.0, 47.3, 0.13),
    club!("9-iron",         "9-Iron", 153.0, 112.0, 19.6,  8893.0, 34.0, 49.6, 0.14),
    club!("pitching-wedge", "PW",     145.0, 107.5, 21.3,  9236.0, 34.0, 50.6, 0.15),
    club!("gap-wedge",      "GW",     135.0,  95.8, 23.0, 10070.0, 33.0, 51.1, 0.155),
    club!("sand-wedge",     "SW",     130.0,  89.0, 25.3, 10800.0, 33.0, 51.4, 0.16),
    club!("lob-wedge",      "LW",     120.0,  77.0, 28.1, 12000.0, 33.0, 52.0, 0.165),
];

/// Map a user-facing club name ("7 Iron", "7i", "PW", ...) to its table key.
pub fn normalize_club_name(name: &str) -> Option<&'static str> {
    let compact: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect();

    let key = match compact.as_str() {
        "driver" | "dr" | "1w" | "1wood" => "driver",
        "3wood" | "3w" => "3-wood",
        "5wood" | "5w" => "5-wood",
        "4iron" | "4i" => "4-iron",
        "5iron" | "5i" => "5-iron",
        "6iron" | "6i" => "6-iron",
        "7iron" | "7i" => "7-iron",
        "8iron" | "8i" => "8-iron",
        "9iron" | "9i" => "9-iron",
        "pitchingwedge" | "pw" | "pitching" => "pitching-wedge",
        "gapwedge" | "gw" | "aw" | "approachwedge" => "gap-wedge",
        "sandwedge" | "sw" => "sand-wedge",
        "lobwedge" | "lw" => "lob-wedge",
        _ => return None,
    };
    Some(key)
}

/// Exact-key lookup. Unknown keys are an error, never a default club.
pub fn club_profile(key: &str) -> Result<&'static ClubProfile, ModelError> {
    CLUB_DATABASE
        .iter()
        .find(|club| club.key == key)
        .ok_or_else(|| ModelError::UnknownClub(key.to_string()))
}

/// Normalize `name` and look it up.
pub fn find_club(name: &str) -> Result<&'static ClubProfile, ModelError> {
    let key = normalize_club_name(name).ok_or_else(|| ModelError::UnknownClub(name.to_string()))?;
    club_profile(key)
}

pub fn club_exists(key: &str) -> bool {
    CLUB_DATABASE.iter().any(|club| club.key == key)
}
