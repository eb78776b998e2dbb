use crate::config::Config;
use crate::generator::FixtureGenerator;
use crate::sink::FixtureSink;
use log::{error, info, warn};
use shared::{Fixture, GenerationRequest, Result};

/// Generates fixtures for a request and hands them to a sink
pub struct FixtureService<S: FixtureSink> {
    pub generator: FixtureGenerator,
    pub default_timezone: String,
    pub sink: S,
}

impl<S: FixtureSink> FixtureService<S> {
    pub fn new(generator: FixtureGenerator, default_timezone: impl Into<String>, sink: S) -> Self {
        Self {
            generator,
            default_timezone: default_timezone.into(),
            sink,
        }
    }

    pub fn from_config(config: &Config, sink: S) -> Self {
        Self::new(
            FixtureGenerator::new(config.scheduling.spacing()),
            config.scheduling.default_timezone.clone(),
            sink,
        )
    }

    /// Generation runs to completion before the sink is awaited; nothing is
    /// persisted when generation fails.
    pub async fn generate_and_persist(&self, request: &GenerationRequest) -> Result<Vec<Fixture>> {
        let fixtures = match self
            .generator
            .generate_from_request(request, &self.default_timezone)
        {
            Ok(fixtures) => fixtures,
            Err(e) if e.is_precondition() => {
                warn!("Request rejected before generation: {}", e);
                return Err(e);
            }
            Err(e) => {
                error!("Fixture generation failed: {}", e);
                return Err(e);
            }
        };

        if let Err(e) = self.sink.persist(&fixtures).await {
            error!("Failed to persist {} fixtures: {}", fixtures.len(), e);
            return Err(e);
        }

        info!(
            "Persisted {} {} fixtures",
            fixtures.len(),
            request.tournament_type
        );
        Ok(fixtures)
    }
}
