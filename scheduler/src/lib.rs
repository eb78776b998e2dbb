pub mod config;
pub mod estimator;
pub mod generator;
pub mod knockout;
pub mod round_robin;
pub mod service;
pub mod sink;
pub mod spacing;

pub use estimator::{estimate, TournamentEstimate};
pub use generator::FixtureGenerator;
pub use knockout::{bracket_rounds, generate_knockout};
pub use round_robin::{circle_pairings, generate_round_robin, Pairing};
pub use service::FixtureService;
pub use sink::{CallbackSink, FixtureSink, JsonFileSink, MemorySink, StdoutSink};
pub use spacing::Spacing;
