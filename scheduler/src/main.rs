use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use scheduler::config::Config;
use scheduler::{estimate, FixtureService, JsonFileSink, StdoutSink};
use shared::timezone::format_with_timezone;
use shared::{Fixture, GenerationRequest};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generation request JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Output fixtures file; standard output when omitted
    #[arg(short, long, env = "FIXTURES_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the round and match preview without generating fixtures
    #[arg(long, default_value_t = false)]
    estimate: bool,
}

fn log_schedule(fixtures: &[Fixture]) {
    for fixture in fixtures {
        info!(
            "{} | {}",
            fixture,
            format_with_timezone(fixture.scheduled_at, &fixture.venue.timezone)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let config = Config::load().context("Failed to load configuration")?;

    info!("Reading generation request from {}", args.input.display());
    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let request: GenerationRequest =
        serde_json::from_str(&raw).context("Failed to parse generation request")?;

    if args.estimate {
        let preview = estimate(request.tournament_type, request.participants.len());
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    let fixtures = match args.output {
        Some(path) => {
            let path = config.output.resolve(path);
            let service = FixtureService::from_config(&config, JsonFileSink::new(path));
            service.generate_and_persist(&request).await
        }
        None => {
            let service = FixtureService::from_config(&config, StdoutSink);
            service.generate_and_persist(&request).await
        }
    }
    .context("Fixture generation failed")?;

    let walkovers = fixtures.iter().filter(|f| f.is_walkover()).count();
    let bye_only = fixtures.iter().filter(|f| f.is_bye_only()).count();
    if walkovers > 0 {
        warn!(
            "Bracket contains {} walkover fixtures, {} of them between two byes",
            walkovers, bye_only
        );
    }
    log_schedule(&fixtures);

    Ok(())
}
