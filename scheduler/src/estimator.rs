use crate::knockout::bracket_rounds;
use serde::Serialize;
use shared::TournamentType;

/// Preview of a tournament's size, shown before fixtures are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TournamentEstimate {
    pub rounds: u32,
    /// Every fixture the generator will emit
    pub matches: usize,
    /// Fixtures actually contested; knockout walkovers excluded
    pub contested_matches: usize,
}

impl TournamentEstimate {
    const EMPTY: TournamentEstimate = TournamentEstimate {
        rounds: 0,
        matches: 0,
        contested_matches: 0,
    };
}

pub fn estimate(tournament_type: TournamentType, participant_count: usize) -> TournamentEstimate {
    if participant_count < 2 {
        return TournamentEstimate::EMPTY;
    }
    match tournament_type {
        TournamentType::RoundRobin => {
            let padded = participant_count + participant_count % 2;
            let matches = participant_count * (participant_count - 1) / 2;
            TournamentEstimate {
                rounds: (padded - 1) as u32,
                matches,
                contested_matches: matches,
            }
        }
        TournamentType::Knockout => {
            let rounds = bracket_rounds(participant_count);
            TournamentEstimate {
                rounds,
                matches: (1usize << rounds) - 1,
                contested_matches: participant_count - 1,
            }
        }
    }
}
