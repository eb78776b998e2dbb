use crate::generator::check_preconditions;
use crate::spacing::Spacing;
use chrono::{DateTime, TimeZone};
use log::debug;
use shared::{
    Entrant, Fixture, FixtureError, FixtureSlot, FixtureStatus, Participant, Result, Venue,
};

/// A meeting of two participants within a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// 0-based round index
    pub round_index: usize,
    /// Position within the round, counted before bye pairings are dropped
    pub pairing_index: usize,
    pub home: Participant,
    pub away: Participant,
}

/// Pair every participant with every other exactly once.
///
/// An odd field is padded with a bye; pairings against it are dropped, so
/// every round leaves one participant idle.
pub fn circle_pairings(participants: &[Participant]) -> Vec<Pairing> {
    let size = participants.len() + participants.len() % 2;
    let mut entrants = Entrant::padded(participants, size);
    let n = entrants.len();
    if n < 2 {
        return Vec::new();
    }

    let mut pairings = Vec::with_capacity(n * (n - 1) / 2);
    for round_index in 0..n - 1 {
        for pairing_index in 0..n / 2 {
            let home = &entrants[pairing_index];
            let away = &entrants[n - 1 - pairing_index];
            if let (Entrant::Participant(home), Entrant::Participant(away)) = (home, away) {
                pairings.push(Pairing {
                    round_index,
                    pairing_index,
                    home: home.clone(),
                    away: away.clone(),
                });
            }
        }
        // Keep the first entrant fixed; the last one moves to index 1
        entrants[1..].rotate_right(1);
    }

    pairings
}

/// Generate round-robin fixtures with the default spacing.
///
/// Rounds are one calendar day apart in `start`'s timezone.
pub fn generate_round_robin<Tz: TimeZone>(
    start: DateTime<Tz>,
    participants: &[Participant],
    venues: &[Venue],
) -> Result<Vec<Fixture>> {
    check_preconditions(participants, venues)?;
    schedule_round_robin(&start, participants, venues, Spacing::Fixed)
}

// Callers guarantee at least one venue
pub(crate) fn schedule_round_robin<Tz: TimeZone>(
    start: &DateTime<Tz>,
    participants: &[Participant],
    venues: &[Venue],
    spacing: Spacing,
) -> Result<Vec<Fixture>> {
    let pairings = circle_pairings(participants);
    let mut fixtures = Vec::with_capacity(pairings.len());

    for pairing in pairings {
        let scheduled_at = spacing
            .round_robin_kickoff(start, pairing.round_index, pairing.pairing_index)
            .ok_or_else(|| {
                FixtureError::InvalidStartDate(format!(
                    "round {} does not fit in the calendar",
                    pairing.round_index + 1
                ))
            })?;

        fixtures.push(Fixture {
            round: pairing.round_index as u32 + 1,
            match_number: None,
            scheduled_at,
            venue: venues[pairing.pairing_index % venues.len()].clone(),
            team_a: FixtureSlot::Participant(pairing.home),
            team_b: FixtureSlot::Participant(pairing.away),
            status: FixtureStatus::Scheduled,
            is_knockout: false,
        });
    }

    debug!(
        "Round robin for {} participants: {} fixtures",
        participants.len(),
        fixtures.len()
    );
    Ok(fixtures)
}
