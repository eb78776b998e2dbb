use crate::knockout::schedule_knockout;
use crate::round_robin::schedule_round_robin;
use crate::spacing::Spacing;
use chrono::{DateTime, TimeZone};
use log::info;
use shared::timezone::resolve_start;
use shared::{
    Fixture, FixtureError, GenerationRequest, Participant, Result, TournamentType, Venue,
};
use std::collections::HashSet;

/// Checks that hold for every tournament type, in reporting order
pub(crate) fn check_preconditions(participants: &[Participant], venues: &[Venue]) -> Result<()> {
    if participants.len() < 2 {
        return Err(FixtureError::InvalidParticipantCount {
            count: participants.len(),
        });
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(&participant.id) {
            return Err(FixtureError::DuplicateParticipant(participant.id.to_string()));
        }
    }

    if venues.is_empty() {
        return Err(FixtureError::NoVenuesSelected);
    }

    Ok(())
}

/// Stateless fixture generator; every call is a pure function of its inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureGenerator {
    spacing: Spacing,
}

impl FixtureGenerator {
    pub fn new(spacing: Spacing) -> Self {
        Self { spacing }
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Kick-off times follow `start`'s timezone; pass a `chrono_tz::Tz` start
    /// to keep local times across DST changes.
    pub fn generate<Tz: TimeZone>(
        &self,
        tournament_type: TournamentType,
        start: DateTime<Tz>,
        participants: &[Participant],
        venues: &[Venue],
    ) -> Result<Vec<Fixture>> {
        check_preconditions(participants, venues)?;
        self.schedule(tournament_type, &start, participants, venues, self.spacing)
    }

    /// Generate from a submitted request. The request's own timezone and
    /// spacing mode win over `default_timezone` and the generator's spacing.
    pub fn generate_from_request(
        &self,
        request: &GenerationRequest,
        default_timezone: &str,
    ) -> Result<Vec<Fixture>> {
        request.validate_all()?;
        check_preconditions(&request.participants, &request.selected_venues)?;

        let timezone = request.timezone.as_deref().unwrap_or(default_timezone);
        let start = resolve_start(&request.start_date, &request.start_time, timezone)?;

        let mode = request.spacing.unwrap_or_else(|| self.spacing.mode());
        let spacing = Spacing::from_mode(mode, request.match_duration, request.break_duration);

        self.schedule(
            request.tournament_type,
            &start,
            &request.participants,
            &request.selected_venues,
            spacing,
        )
    }

    fn schedule<Tz: TimeZone>(
        &self,
        tournament_type: TournamentType,
        start: &DateTime<Tz>,
        participants: &[Participant],
        venues: &[Venue],
        spacing: Spacing,
    ) -> Result<Vec<Fixture>> {
        let fixtures = match tournament_type {
            TournamentType::RoundRobin => schedule_round_robin(start, participants, venues, spacing)?,
            TournamentType::Knockout => schedule_knockout(start, participants, venues, spacing)?,
        };
        info!(
            "Generated {} {} fixtures for {} participants across {} venues starting {}",
            fixtures.len(),
            tournament_type,
            participants.len(),
            venues.len(),
            start.fixed_offset().to_rfc3339()
        );
        Ok(fixtures)
    }
}
