//! Wire types for the GCWC backend API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A club in the user's bag. The identifier is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolfClub {
    pub id: i64,
    pub club_name: String,
    /// Baseline carry distance in yards.
    pub distance: u32,
}

/// Profile returned by `GET /profile/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub golf_clubs: Vec<GolfClub>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated requests.
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Create/update payload for a club.
#[derive(Debug, Clone, Serialize)]
pub struct ClubRequest<'a> {
    pub club_name: &'a str,
    pub distance: u32,
}

/// Weather fields submitted for distance adjustment, in the shape the
/// backend reads them. Wind speed strings ("8 to 12 mph") pass through
/// verbatim; the backend owns the parsing. Humidity is a string so an
/// absent sample can travel as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRequest {
    pub temperature: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    pub humidity: String,
}

/// One club's adjusted distances, one entry per compass direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedClub {
    pub club_name: String,
    pub original_distance: f64,
    pub adjusted_distance: BTreeMap<String, f64>,
}

impl AdjustedClub {
    /// Adjusted distance when facing the given direction.
    pub fn distance_for(&self, direction: CompassDirection) -> Option<f64> {
        self.adjusted_distance.get(direction.as_str()).copied()
    }
}

/// Body of `POST /GCWC/calculations/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationResponse {
    #[serde(default)]
    pub golf_clubs: Vec<AdjustedClub>,
}

/// The 16 compass points the backend keys adjusted distances by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassDirection {
    /// All directions in compass order.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::N,
        CompassDirection::NNE,
        CompassDirection::NE,
        CompassDirection::ENE,
        CompassDirection::E,
        CompassDirection::ESE,
        CompassDirection::SE,
        CompassDirection::SSE,
        CompassDirection::S,
        CompassDirection::SSW,
        CompassDirection::SW,
        CompassDirection::WSW,
        CompassDirection::W,
        CompassDirection::WNW,
        CompassDirection::NW,
        CompassDirection::NNW,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NNE => "NNE",
            CompassDirection::NE => "NE",
            CompassDirection::ENE => "ENE",
            CompassDirection::E => "E",
            CompassDirection::ESE => "ESE",
            CompassDirection::SE => "SE",
            CompassDirection::SSE => "SSE",
            CompassDirection::S => "S",
            CompassDirection::SSW => "SSW",
            CompassDirection::SW => "SW",
            CompassDirection::WSW => "WSW",
            CompassDirection::W => "W",
            CompassDirection::WNW => "WNW",
            CompassDirection::NW => "NW",
            CompassDirection::NNW => "NNW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompassDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(CompassDirection::N),
            "NNE" => Ok(CompassDirection::NNE),
            "NE" => Ok(CompassDirection::NE),
            "ENE" => Ok(CompassDirection::ENE),
            "E" => Ok(CompassDirection::E),
            "ESE" => Ok(CompassDirection::ESE),
            "SE" => Ok(CompassDirection::SE),
            "SSE" => Ok(CompassDirection::SSE),
            "S" => Ok(CompassDirection::S),
            "SSW" => Ok(CompassDirection::SSW),
            "SW" => Ok(CompassDirection::SW),
            "WSW" => Ok(CompassDirection::WSW),
            "W" => Ok(CompassDirection::W),
            "WNW" => Ok(CompassDirection::WNW),
            "NW" => Ok(CompassDirection::NW),
            "NNW" => Ok(CompassDirection::NNW),
            other => Err(format!("unknown compass direction: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sixteen_directions_in_compass_order() {
        assert_eq!(CompassDirection::ALL.len(), 16);
        assert_eq!(CompassDirection::ALL[0], CompassDirection::N);
        assert_eq!(CompassDirection::ALL[4], CompassDirection::E);
        assert_eq!(CompassDirection::ALL[8], CompassDirection::S);
        assert_eq!(CompassDirection::ALL[12], CompassDirection::W);
    }

    #[test]
    fn directions_parse_case_insensitively() {
        assert_eq!("ne".parse::<CompassDirection>(), Ok(CompassDirection::NE));
        assert_eq!(" NNW ".parse::<CompassDirection>(), Ok(CompassDirection::NNW));
        assert!("NORTH".parse::<CompassDirection>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for direction in CompassDirection::ALL {
            let parsed: CompassDirection = direction.as_str().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn calculation_request_uses_backend_field_names() {
        let request = CalculationRequest {
            temperature: 70.0,
            wind_speed: "5 to 10 mph".to_string(),
            wind_direction: "NE".to_string(),
            humidity: "40".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"windSpeed\":\"5 to 10 mph\""));
        assert!(json.contains("\"windDirection\":\"NE\""));
        assert!(json.contains("\"humidity\":\"40\""));
    }

    #[test]
    fn club_request_serialization() {
        let request = ClubRequest {
            club_name: "Driver",
            distance: 250,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"club_name":"Driver","distance":250}"#);
    }

    #[test]
    fn adjusted_club_selects_by_direction() {
        let club = AdjustedClub {
            club_name: "Driver".to_string(),
            original_distance: 250.0,
            adjusted_distance: BTreeMap::from([
                ("N".to_string(), 248.5),
                ("NE".to_string(), 255.0),
            ]),
        };

        assert_eq!(club.distance_for(CompassDirection::NE), Some(255.0));
        assert_eq!(club.distance_for(CompassDirection::SSW), None);
    }

    #[test]
    fn profile_defaults_to_empty_bag() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"username":"alice","email":"a@example.com"}"#).unwrap();
        assert!(profile.golf_clubs.is_empty());
    }
}
