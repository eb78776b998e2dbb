use crate::spacing::Spacing;
use dotenv::dotenv;
use log::{info, warn};
use serde::Deserialize;
use shared::timezone::parse_timezone;
use shared::{FixtureError, Result, SpacingMode};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub scheduling: SchedulingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SchedulingConfig {
    /// Timezone for requests that do not name one
    pub default_timezone: String,
    pub spacing_mode: SpacingMode,
    pub match_minutes: u32,
    pub break_minutes: u32,
}

impl SchedulingConfig {
    pub fn spacing(&self) -> Spacing {
        Spacing::from_mode(self.spacing_mode, self.match_minutes, self.break_minutes)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Directory relative output paths are resolved against
    pub directory: Option<PathBuf>,
}

impl OutputConfig {
    pub fn resolve(&self, path: PathBuf) -> PathBuf {
        match &self.directory {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }
}

impl Config {
    /// Load `.env` files the same way for every binary, then read the config
    /// from the process environment.
    pub fn load() -> Result<Self> {
        // Check for ENV_FILE_PATH override
        match env::var("ENV_FILE_PATH") {
            Ok(env_file_path) if !env_file_path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
            }
            _ => {
                dotenv().ok();
                // .env.test / .env.production override the base file
                let environment_hint = env::var("RUST_ENV")
                    .unwrap_or_else(|_| "development".to_string())
                    .parse()
                    .unwrap_or(Environment::Development);
                let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
                if env_file != ".env.development" {
                    let _ = dotenv::from_filename(&env_file);
                }
            }
        }

        let environment = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        info!("Loading configuration for environment: {:?}", environment);

        let config = Self::from_lookup(environment, |key| env::var(key).ok());
        config.validate()?;
        config.log_configuration();

        Ok(config)
    }

    /// Build a config from any key lookup; unset or unparsable values fall
    /// back to the environment's defaults.
    pub fn from_lookup<F>(environment: Environment, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            scheduling: Self::load_scheduling_config(&environment, &lookup),
            output: Self::load_output_config(&environment, &lookup),
            environment,
        }
    }

    fn load_scheduling_config<F>(env: &Environment, lookup: &F) -> SchedulingConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let spacing_mode = match lookup("FIXTURES_SPACING") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, using fixed spacing", e);
                SpacingMode::Fixed
            }),
            None => SpacingMode::Fixed,
        };

        let (default_match, default_break) = match env {
            Environment::Development | Environment::Test => (90, 30),
            Environment::Production => (90, 15),
        };

        SchedulingConfig {
            default_timezone: lookup("FIXTURES_TIMEZONE").unwrap_or_else(|| "UTC".to_string()),
            spacing_mode,
            match_minutes: lookup("FIXTURES_MATCH_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default_match),
            break_minutes: lookup("FIXTURES_BREAK_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default_break),
        }
    }

    fn load_output_config<F>(env: &Environment, lookup: &F) -> OutputConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let directory = lookup("FIXTURES_OUTPUT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if directory.is_none() && *env == Environment::Production {
            warn!("FIXTURES_OUTPUT_DIR not set, relative output paths use the working directory");
        }

        OutputConfig { directory }
    }

    pub fn validate(&self) -> Result<()> {
        parse_timezone(&self.scheduling.default_timezone).map_err(|_| {
            FixtureError::Configuration(format!(
                "FIXTURES_TIMEZONE is not a known timezone: {}",
                self.scheduling.default_timezone
            ))
        })?;

        if self.scheduling.spacing_mode == SpacingMode::Durations
            && self.scheduling.match_minutes == 0
        {
            return Err(FixtureError::Configuration(
                "FIXTURES_MATCH_MINUTES cannot be 0 with duration spacing".to_string(),
            ));
        }

        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!(
            "Scheduling: timezone {}, spacing {:?} (match {}m, break {}m)",
            self.scheduling.default_timezone,
            self.scheduling.spacing_mode,
            self.scheduling.match_minutes,
            self.scheduling.break_minutes
        );
        match &self.output.directory {
            Some(dir) => info!("Output directory: {}", dir.display()),
            None => info!("Output directory: working directory"),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
