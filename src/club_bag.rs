use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::{ClubRecommendation, ClubRecommender};
use crate::clubs::{normalize_club_name, CLUB_DATABASE};

#[derive(Debug, Error)]
pub enum BagError {
    #[error("Failed to parse club bag: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown club in bag: {0}")]
    UnknownClub(String),

    #[error("Invalid distance {distance} for {club}")]
    InvalidDistance { club: String, distance: f64 },
}

/// One club as the golfer carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagClub {
    pub key: String,
    pub name: String,
    pub enabled: bool,
    /// The golfer's own carry with this club (yd).
    pub distance: f64,
    pub sort_order: usize,
}

#[derive(Debug, Deserialize)]
struct BagFile {
    #[serde(default)]
    clubs: Vec<BagFileClub>,
}

#[derive(Debug, Deserialize)]
struct BagFileClub {
    key: String,
    name: Option<String>,
    distance: Option<f64>,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubBag {
    clubs: Vec<BagClub>,
}

impl ClubBag {
    pub fn new(clubs: Vec<BagClub>) -> Self {
        Self { clubs }
    }

    /// Parse a bag from `[[clubs]]` tables:
    ///
    /// ```toml
    /// [[clubs]]
    /// key = "7i"
    /// distance = 172
    /// enabled = true
    /// ```
    ///
    /// `name` defaults to the built-in display name and `distance` to the
    /// built-in normal yardage.
    pub fn from_toml_str(content: &str) -> Result<Self, BagError> {
        let file: BagFile = toml::from_str(content)?;

        let mut clubs = Vec::with_capacity(file.clubs.len());
        for (sort_order, entry) in file.clubs.into_iter().enumerate() {
            let profile = normalize_club_name(&entry.key)
                .and_then(|key| CLUB_DATABASE.iter().find(|club| club.key == key))
                .ok_or_else(|| BagError::UnknownClub(entry.key.clone()))?;

            let distance = entry.distance.unwrap_or(profile.normal_yardage);
            validate_distance(&entry.key, distance)?;

            clubs.push(BagClub {
                key: profile.key.to_string(),
                name: entry.name.unwrap_or_else(|| profile.name.to_string()),
                enabled: entry.enabled,
                distance,
                sort_order,
            });
        }

        log::debug!("Loaded club bag with {} clubs", clubs.len());
        Ok(Self { clubs })
    }

    pub fn clubs(&self) -> &[BagClub] {
        &self.clubs
    }

    /// Change a club's distance and/or enabled flag. The bag is untouched on
    /// error.
    pub fn update_club(
        &mut self,
        key: &str,
        distance: Option<f64>,
        enabled: Option<bool>,
    ) -> Result<(), BagError> {
        let normalized = normalize_club_name(key).unwrap_or(key);
        let club = self
            .clubs
            .iter_mut()
            .find(|club| club.key == normalized)
            .ok_or_else(|| BagError::UnknownClub(key.to_string()))?;
        if let Some(distance) = distance {
            validate_distance(key, distance)?;
            club.distance = distance;
        }
        if let Some(enabled) = enabled {
            club.enabled = enabled;
        }
        Ok(())
    }

    /// Enabled clubs, longest first.
    pub fn enabled_clubs(&self) -> Vec<&BagClub> {
        let mut enabled: Vec<&BagClub> = self.clubs.iter().filter(|club| club.enabled).collect();
        enabled.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        enabled
    }

    /// The shortest enabled club that still reaches `yards`. When nothing
    /// reaches, the longest club in the bag.
    pub fn recommended_club(&self, yards: f64) -> Option<&BagClub> {
        let enabled = self.enabled_clubs();
        let longest = *enabled.first()?;
        let reaching = enabled
            .into_iter()
            .take_while(|club| club.distance >= yards)
            .last();
        Some(reaching.unwrap_or(longest))
    }
}

fn validate_distance(club: &str, distance: f64) -> Result<(), BagError> {
    if distance.is_finite() && distance > 0.0 {
        Ok(())
    } else {
        Err(BagError::InvalidDistance {
            club: club.to_string(),
            distance,
        })
    }
}

impl Default for ClubBag {
    fn default() -> Self {
        let clubs = CLUB_DATABASE
            .iter()
            .enumerate()
            .map(|(sort_order, club)| BagClub {
                key: club.key.to_string(),
                name: club.name.to_string(),
                enabled: true,
                distance: club.normal_yardage,
                sort_order,
            })
            .collect();
        Self { clubs }
    }
}

impl ClubRecommender for ClubBag {
    fn recommend(&self, yards: f64) -> Option<ClubRecommendation> {
        self.recommended_club(yards).map(|club| ClubRecommendation {
            key: club.key.clone(),
            name: club.name.clone(),
            normal_yardage: club.distance,
        })
    }
}
