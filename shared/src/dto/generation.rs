use crate::models::participant::Participant;
use crate::models::venue::Venue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Tournament format to generate fixtures for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TournamentType {
    RoundRobin,
    Knockout,
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentType::RoundRobin => write!(f, "round_robin"),
            TournamentType::Knockout => write!(f, "knockout"),
        }
    }
}

impl FromStr for TournamentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round_robin" | "round-robin" | "league" => Ok(TournamentType::RoundRobin),
            "knockout" | "single_elimination" | "cup" => Ok(TournamentType::Knockout),
            _ => Err(format!("Unknown tournament type: {}", s)),
        }
    }
}

/// How kick-off times are spread within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpacingMode {
    /// Fixed gaps: 2 hours between round-robin slots, 3 hours between knockout slots
    #[default]
    Fixed,
    /// Match duration plus break duration between slots
    Durations,
}

impl FromStr for SpacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(SpacingMode::Fixed),
            "durations" | "duration" => Ok(SpacingMode::Durations),
            _ => Err(format!("Unknown spacing mode: {}", s)),
        }
    }
}

fn default_match_duration() -> u32 {
    90
}

fn default_break_duration() -> u32 {
    30
}

/// Request to generate fixtures, as submitted by the event-management page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub tournament_type: TournamentType,

    /// ISO date, e.g. "2024-09-14"
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    /// Local kick-off time of the first slot, "HH:MM"
    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,

    /// Minutes per match
    #[serde(default = "default_match_duration")]
    #[validate(range(min = 1, max = 1440, message = "Match duration must be between 1 and 1440 minutes"))]
    pub match_duration: u32,

    /// Minutes between matches at the same venue
    #[serde(default = "default_break_duration")]
    #[validate(range(max = 1440, message = "Break duration must be at most 1440 minutes"))]
    pub break_duration: u32,

    #[serde(default)]
    pub selected_venues: Vec<Venue>,

    #[serde(default)]
    pub participants: Vec<Participant>,

    /// IANA timezone the start date and time are given in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingMode>,
}

impl GenerationRequest {
    /// Validates the request and every participant and venue in it
    pub fn validate_all(&self) -> crate::Result<()> {
        self.validate()?;
        for participant in &self.participants {
            participant.validate()?;
        }
        for venue in &self.selected_venues {
            venue.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn request_json() -> &'static str {
        r#"{
            "tournamentType": "round_robin",
            "startDate": "2024-09-14",
            "startTime": "10:00",
            "matchDuration": 60,
            "breakDuration": 15,
            "selectedVenues": [{"id": 1, "name": "Court 1", "address": "1 Park Ln"}],
            "participants": [{"id": "a", "name": "Alpha"}, {"id": "b", "name": "Beta"}]
        }"#
    }

    #[test]
    fn test_request_deserialization() {
        let request: GenerationRequest = serde_json::from_str(request_json()).unwrap();
        assert_eq!(request.tournament_type, TournamentType::RoundRobin);
        assert_eq!(request.start_date, "2024-09-14");
        assert_eq!(request.match_duration, 60);
        assert_eq!(request.break_duration, 15);
        assert_eq!(request.selected_venues.len(), 1);
        assert_eq!(request.participants.len(), 2);
        assert_eq!(request.timezone, None);
        assert_eq!(request.spacing, None);
        assert!(request.validate_all().is_ok());
    }

    #[test]
    fn test_request_defaults() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"tournamentType":"knockout","startDate":"2024-09-14","startTime":"09:30"}"#,
        )
        .unwrap();
        assert_eq!(request.match_duration, 90);
        assert_eq!(request.break_duration, 30);
        assert!(request.selected_venues.is_empty());
        assert!(request.participants.is_empty());
    }

    #[test]
    fn test_request_validation_zero_match_duration() {
        let mut request: GenerationRequest = serde_json::from_str(request_json()).unwrap();
        request.match_duration = 0;
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("match_duration") || fields.contains_key("matchDuration"));
    }

    #[test]
    fn test_request_validation_nested_participant() {
        let mut request: GenerationRequest = serde_json::from_str(request_json()).unwrap();
        request.participants[0].name = String::new();
        assert!(matches!(
            request.validate_all(),
            Err(crate::FixtureError::Validation(_))
        ));
    }

    #[rstest]
    #[case("round_robin", TournamentType::RoundRobin)]
    #[case("Round-Robin", TournamentType::RoundRobin)]
    #[case("knockout", TournamentType::Knockout)]
    #[case("single_elimination", TournamentType::Knockout)]
    fn test_tournament_type_from_str(#[case] input: &str, #[case] expected: TournamentType) {
        assert_eq!(input.parse::<TournamentType>().unwrap(), expected);
    }

    #[test]
    fn test_tournament_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TournamentType::RoundRobin).unwrap(),
            "\"round_robin\""
        );
        assert_eq!(TournamentType::Knockout.to_string(), "knockout");
        assert!("swiss".parse::<TournamentType>().is_err());
    }

    #[test]
    fn test_spacing_mode_parsing() {
        assert_eq!("fixed".parse::<SpacingMode>().unwrap(), SpacingMode::Fixed);
        assert_eq!("Durations".parse::<SpacingMode>().unwrap(), SpacingMode::Durations);
        assert!("random".parse::<SpacingMode>().is_err());
        assert_eq!(SpacingMode::default(), SpacingMode::Fixed);
    }
}
