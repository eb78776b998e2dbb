use log::{debug, info};
use shared::{Fixture, FixtureDto, FixtureError, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::io::AsyncWriteExt;

/// Receives a freshly generated batch of fixtures.
///
/// Whatever the sink does with them (write a file, call the events API) is
/// opaque to generation; a failure is reported back once and never retried.
#[async_trait::async_trait]
pub trait FixtureSink: Send + Sync {
    async fn persist(&self, fixtures: &[Fixture]) -> Result<()>;
}

fn to_json(fixtures: &[Fixture]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&FixtureDto::from_fixtures(fixtures))?)
}

/// Writes the batch as a JSON array of fixture DTOs
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl FixtureSink for JsonFileSink {
    async fn persist(&self, fixtures: &[Fixture]) -> Result<()> {
        let json = to_json(fixtures)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FixtureError::Persistence(format!("{}: {}", parent.display(), e)))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| FixtureError::Persistence(format!("{}: {}", self.path.display(), e)))?;

        info!("Wrote {} fixtures to {}", fixtures.len(), self.path.display());
        Ok(())
    }
}

/// Prints the batch as JSON on standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[async_trait::async_trait]
impl FixtureSink for StdoutSink {
    async fn persist(&self, fixtures: &[Fixture]) -> Result<()> {
        let mut json = to_json(fixtures)?;
        json.push('\n');

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(json.as_bytes())
            .await
            .map_err(|e| FixtureError::Persistence(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| FixtureError::Persistence(e.to_string()))?;
        Ok(())
    }
}

/// Keeps the most recent batch in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    fixtures: Mutex<Vec<Fixture>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixtures(&self) -> Vec<Fixture> {
        match self.fixtures.lock() {
            Ok(stored) => stored.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait::async_trait]
impl FixtureSink for MemorySink {
    async fn persist(&self, fixtures: &[Fixture]) -> Result<()> {
        let mut stored = self
            .fixtures
            .lock()
            .map_err(|e| FixtureError::Persistence(e.to_string()))?;
        *stored = fixtures.to_vec();
        debug!("Stored {} fixtures in memory", stored.len());
        Ok(())
    }
}

/// Adapts a plain callback, for embedders that already own a persistence path
pub struct CallbackSink<F>
where
    F: Fn(&[Fixture]) -> Result<()> + Send + Sync,
{
    callback: F,
}

impl<F> CallbackSink<F>
where
    F: Fn(&[Fixture]) -> Result<()> + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

#[async_trait::async_trait]
impl<F> FixtureSink for CallbackSink<F>
where
    F: Fn(&[Fixture]) -> Result<()> + Send + Sync,
{
    async fn persist(&self, fixtures: &[Fixture]) -> Result<()> {
        (self.callback)(fixtures)
    }
}
