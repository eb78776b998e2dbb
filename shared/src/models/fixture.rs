use crate::models::participant::{Entrant, Participant};
use crate::models::venue::Venue;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a fixture. Generated fixtures always start as `Scheduled`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FixtureStatus::Scheduled => "SCHEDULED",
            FixtureStatus::InProgress => "IN_PROGRESS",
            FixtureStatus::Completed => "COMPLETED",
            FixtureStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{}", s)
    }
}

/// One side of a fixture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "participant", rename_all = "snake_case")]
pub enum FixtureSlot {
    Participant(Participant),
    /// Padding opponent in the opening knockout round; the other side walks over
    Bye,
    /// Decided by the result of an earlier knockout round
    Pending,
}

impl FixtureSlot {
    pub fn participant(&self) -> Option<&Participant> {
        match self {
            FixtureSlot::Participant(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, FixtureSlot::Bye)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FixtureSlot::Pending)
    }
}

impl From<&Entrant> for FixtureSlot {
    fn from(entrant: &Entrant) -> Self {
        match entrant {
            Entrant::Participant(p) => FixtureSlot::Participant(p.clone()),
            Entrant::Bye => FixtureSlot::Bye,
        }
    }
}

impl fmt::Display for FixtureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureSlot::Participant(p) => write!(f, "{}", p.name),
            FixtureSlot::Bye => write!(f, "BYE"),
            FixtureSlot::Pending => write!(f, "TBD"),
        }
    }
}

/// A scheduled match between two slots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    /// Round number, starting at 1
    pub round: u32,

    /// Position within the round, starting at 1 (knockout only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<u32>,

    pub team_a: FixtureSlot,
    pub team_b: FixtureSlot,

    /// Kick-off time
    pub scheduled_at: DateTime<FixedOffset>,

    pub venue: Venue,

    #[serde(default)]
    pub status: FixtureStatus,

    #[serde(default)]
    pub is_knockout: bool,
}

impl Fixture {
    /// True when one side is a bye and the other advances without playing
    pub fn is_walkover(&self) -> bool {
        self.team_a.is_bye() || self.team_b.is_bye()
    }

    /// True when both sides are byes; nobody plays and nobody advances
    pub fn is_bye_only(&self) -> bool {
        self.team_a.is_bye() && self.team_b.is_bye()
    }

    /// Both participants, when both sides are known
    pub fn participants(&self) -> Option<(&Participant, &Participant)> {
        match (self.team_a.participant(), self.team_b.participant()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn involves(&self, participant: &Participant) -> bool {
        self.team_a.participant() == Some(participant)
            || self.team_b.participant() == Some(participant)
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.match_number {
            Some(number) => write!(f, "R{} M{}: ", self.round, number)?,
            None => write!(f, "R{}: ", self.round)?,
        }
        write!(
            f,
            "{} vs {} @ {} ({})",
            self.team_a,
            self.team_b,
            self.venue.name,
            self.scheduled_at.to_rfc3339()
        )
    }
}
