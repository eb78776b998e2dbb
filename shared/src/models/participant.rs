use crate::error::Result;
use crate::models::id::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A team or player entered into a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq, Hash)]
pub struct Participant {
    /// Participant's ID
    pub id: EntityId,

    /// Participant's display name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,
}

impl Participant {
    /// Creates a new participant with validation
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Result<Self> {
        let participant = Self {
            id: id.into(),
            name: name.into(),
        };
        participant.validate()?;
        Ok(participant)
    }
}

/// A position in a draw. Padding entries are a variant of their own, so no
/// participant id is reserved for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entrant {
    Participant(Participant),
    Bye,
}

impl Entrant {
    pub fn is_bye(&self) -> bool {
        matches!(self, Entrant::Bye)
    }

    /// Wraps `participants` in draw order and pads with byes up to `size`
    pub fn padded(participants: &[Participant], size: usize) -> Vec<Entrant> {
        let mut entrants: Vec<Entrant> = participants
            .iter()
            .cloned()
            .map(Entrant::Participant)
            .collect();
        while entrants.len() < size {
            entrants.push(Entrant::Bye);
        }
        entrants
    }
}

impl From<Participant> for Entrant {
    fn from(participant: Participant) -> Self {
        Entrant::Participant(participant)
    }
}
