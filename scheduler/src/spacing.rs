use chrono::{DateTime, Days, Duration, FixedOffset, TimeZone};
use shared::SpacingMode;

const ROUND_ROBIN_SLOT_MINUTES: i64 = 2 * 60;
const KNOCKOUT_SLOT_MINUTES: i64 = 3 * 60;
const KNOCKOUT_ROUND_GAP_DAYS: u64 = 2;

/// Kick-off times of each fixture relative to the tournament start.
///
/// Round-robin rounds are one calendar day apart, knockout rounds two days
/// apart. Within a day, slots are a fixed number of hours apart or, with
/// `Durations`, one match plus one break apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    #[default]
    Fixed,
    Durations {
        match_minutes: u32,
        break_minutes: u32,
    },
}

impl Spacing {
    pub fn from_mode(mode: SpacingMode, match_minutes: u32, break_minutes: u32) -> Self {
        match mode {
            SpacingMode::Fixed => Spacing::Fixed,
            SpacingMode::Durations => Spacing::Durations {
                match_minutes,
                break_minutes,
            },
        }
    }

    pub fn mode(&self) -> SpacingMode {
        match self {
            Spacing::Fixed => SpacingMode::Fixed,
            Spacing::Durations { .. } => SpacingMode::Durations,
        }
    }

    fn slot(&self, fixed_minutes: i64, index: usize) -> Duration {
        let minutes = match self {
            Spacing::Fixed => fixed_minutes,
            Spacing::Durations {
                match_minutes,
                break_minutes,
            } => i64::from(*match_minutes) + i64::from(*break_minutes),
        };
        Duration::minutes(minutes * index as i64)
    }

    /// `round_index` is 0-based, `pairing_index` is the position in the round.
    /// `None` when the kick-off falls outside the representable range.
    pub fn round_robin_kickoff<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        round_index: usize,
        pairing_index: usize,
    ) -> Option<DateTime<FixedOffset>> {
        kickoff(
            start,
            round_index as u64,
            self.slot(ROUND_ROBIN_SLOT_MINUTES, pairing_index),
        )
    }

    /// `round` is 1-based, `match_index` is 0-based
    pub fn knockout_kickoff<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        round: u32,
        match_index: usize,
    ) -> Option<DateTime<FixedOffset>> {
        let days = u64::from(round.saturating_sub(1)) * KNOCKOUT_ROUND_GAP_DAYS;
        kickoff(start, days, self.slot(KNOCKOUT_SLOT_MINUTES, match_index))
    }
}

// Days are stepped on the local calendar so the first slot of every day keeps
// the start's wall-clock time in `start`'s zone. A wall-clock time skipped by
// a DST change falls back to whole elapsed days.
fn kickoff<Tz: TimeZone>(
    start: &DateTime<Tz>,
    days: u64,
    slot: Duration,
) -> Option<DateTime<FixedOffset>> {
    let local = start.naive_local().checked_add_days(Days::new(days))?;
    let day_start = match start.timezone().from_local_datetime(&local).earliest() {
        Some(day_start) => day_start,
        None => start.clone().checked_add_signed(Duration::days(days as i64))?,
    };
    day_start.checked_add_signed(slot).map(|kickoff| kickoff.fixed_offset())
}
