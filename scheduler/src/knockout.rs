use crate::generator::check_preconditions;
use crate::spacing::Spacing;
use chrono::{DateTime, TimeZone};
use log::{debug, warn};
use shared::{
    Entrant, Fixture, FixtureError, FixtureSlot, FixtureStatus, Participant, Result, Venue,
};

/// Number of rounds needed to reduce `participant_count` to one winner:
/// `ceil(log2(participant_count))`, or 0 for fewer than two participants.
pub fn bracket_rounds(participant_count: usize) -> u32 {
    if participant_count < 2 {
        return 0;
    }
    participant_count.next_power_of_two().trailing_zeros()
}

/// Generate a knockout bracket with the default spacing
pub fn generate_knockout<Tz: TimeZone>(
    start: DateTime<Tz>,
    participants: &[Participant],
    venues: &[Venue],
) -> Result<Vec<Fixture>> {
    check_preconditions(participants, venues)?;
    schedule_knockout(&start, participants, venues, Spacing::Fixed)
}

// Callers guarantee at least one venue
pub(crate) fn schedule_knockout<Tz: TimeZone>(
    start: &DateTime<Tz>,
    participants: &[Participant],
    venues: &[Venue],
    spacing: Spacing,
) -> Result<Vec<Fixture>> {
    let rounds = bracket_rounds(participants.len());
    if rounds == 0 {
        return Ok(Vec::new());
    }
    let bracket_size = 1usize << rounds;
    let draw = Entrant::padded(participants, bracket_size);

    let mut fixtures = Vec::with_capacity(bracket_size - 1);
    for round in 1..=rounds {
        let matches = 1usize << (rounds - round);
        for match_index in 0..matches {
            // Only the opening round has known entrants; the draw is paired in order
            let (team_a, team_b) = if round == 1 {
                (
                    FixtureSlot::from(&draw[2 * match_index]),
                    FixtureSlot::from(&draw[2 * match_index + 1]),
                )
            } else {
                (FixtureSlot::Pending, FixtureSlot::Pending)
            };

            let scheduled_at = spacing
                .knockout_kickoff(start, round, match_index)
                .ok_or_else(|| {
                    FixtureError::InvalidStartDate(format!(
                        "knockout round {} does not fit in the calendar",
                        round
                    ))
                })?;

            fixtures.push(Fixture {
                round,
                match_number: Some(match_index as u32 + 1),
                team_a,
                team_b,
                scheduled_at,
                venue: venues[match_index % venues.len()].clone(),
                status: FixtureStatus::Scheduled,
                is_knockout: true,
            });
        }
        debug!("Knockout round {} of {}: {} matches", round, rounds, matches);
    }

    let unplayed = fixtures.iter().filter(|f| f.is_bye_only()).count();
    if unplayed > 0 {
        warn!(
            "{} opening-round fixtures pair two byes and are never played; their venue slots need no booking",
            unplayed
        );
    }

    Ok(fixtures)
}
