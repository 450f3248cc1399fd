//! hammer - Print the expected damage one unit deals to another

mod cli;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use hammer_core::dataset::load_faction;
use hammer_core::CombatResolver;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.resolve_config().context("loading configuration")?;
    let scenario = &config.scenario;

    let faction = load_faction(
        &config.dataset.path,
        &scenario.faction,
        config.dataset.ranged_profile_kind,
    )
    .with_context(|| {
        format!(
            "loading faction '{}' from {}",
            scenario.faction,
            config.dataset.path.display()
        )
    })?;

    let attacker = faction.unit(&scenario.attacker)?;
    let target = faction.unit(&scenario.target)?;

    let report = CombatResolver::new(attacker, target).resolve_phase(scenario.phase);
    info!("{}", report.summary());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_text(&report));
    }

    Ok(())
}
