pub mod models {
    pub mod id;
    pub mod participant;
    pub mod venue;
    pub mod fixture;
}

pub mod dto {
    pub mod fixture;
    pub mod generation;
}

pub mod error;
pub mod timezone;

// Re-export commonly used items
pub use error::{FixtureError, Result};

// Re-export models
pub use models::{
    id::EntityId,
    participant::{Entrant, Participant},
    venue::Venue,
    fixture::{Fixture, FixtureSlot, FixtureStatus},
};

// Re-export DTOs
pub use dto::{
    fixture::FixtureDto,
    generation::{GenerationRequest, SpacingMode, TournamentType},
};
