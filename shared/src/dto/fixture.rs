use crate::models::fixture::{Fixture, FixtureSlot, FixtureStatus};
use crate::models::id::EntityId;
use crate::models::participant::Participant;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Data Transfer Object for Fixture, in the shape the events API stores.
/// Byes and undecided slots are both sent as `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FixtureDto {
    pub round: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<u32>,
    pub team_a: Option<Participant>,
    pub team_b: Option<Participant>,
    pub scheduled_at: DateTime<FixedOffset>,
    pub venue_id: EntityId,
    pub venue_name: String,
    pub status: FixtureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_knockout: Option<bool>,
}

fn slot_to_participant(slot: &FixtureSlot) -> Option<Participant> {
    slot.participant().cloned()
}

impl From<&Fixture> for FixtureDto {
    fn from(fixture: &Fixture) -> Self {
        Self {
            round: fixture.round,
            match_number: fixture.match_number,
            team_a: slot_to_participant(&fixture.team_a),
            team_b: slot_to_participant(&fixture.team_b),
            scheduled_at: fixture.scheduled_at,
            venue_id: fixture.venue.id.clone(),
            venue_name: fixture.venue.name.clone(),
            status: fixture.status,
            is_knockout: fixture.is_knockout.then_some(true),
        }
    }
}

impl FixtureDto {
    /// Converts a batch, keeping generation order
    pub fn from_fixtures(fixtures: &[Fixture]) -> Vec<FixtureDto> {
        fixtures.iter().map(FixtureDto::from).collect()
    }
}
