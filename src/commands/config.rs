use colored::*;
use eyre::Result;

use super::emit_structured;
use crate::cli::{ConfigAction, OutputFormat};
use tech_agents::config::Config;

pub fn run(action: ConfigAction, format: OutputFormat, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => show(format, config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    if emit_structured(config, format)? {
        return Ok(());
    }

    let scoring = &config.scoring;

    println!("{}", "tech-agents Configuration".bold());
    println!();

    println!("{}: {}", "log_level".cyan(), config.log_level.as_filter());
    println!();

    println!("{}:", "paths".cyan());
    println!("  state: {}", config.paths.state.display());
    println!();

    println!("{}:", "scoring.maturity_weights".cyan());
    println!("  mature: {}", scoring.maturity_weights.mature);
    println!("  growth: {}", scoring.maturity_weights.growth);
    println!("  emerging: {}", scoring.maturity_weights.emerging);
    println!("  legacy: {}", scoring.maturity_weights.legacy);
    println!("  fallback: {}", scoring.maturity_weights.fallback);
    println!();

    println!("{}:", "scoring.fit".cyan());
    println!("  maturity_factor: {}", scoring.fit.maturity_factor);
    println!("  requirements_factor: {}", scoring.fit.requirements_factor);
    println!("  scale: {}", scoring.fit.scale);
    println!();

    println!("{}:", "scoring.bands".cyan());
    println!("  strong: {}", scoring.bands.strong);
    println!("  pilot: {}", scoring.bands.pilot);
    println!();

    println!("{}:", "scoring.decision".cyan());
    println!("  strategic_alignment: {}", scoring.decision.strategic_alignment);
    println!("  cost: {}", scoring.decision.cost);
    println!("  risk: {}", scoring.decision.risk);

    Ok(())
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    let scoring = &config.scoring;
    let value = match key {
        "log_level" | "log-level" => config.log_level.as_filter().to_string(),
        "paths.state" => config.paths.state.display().to_string(),
        "scoring.maturity_weights.mature" => scoring.maturity_weights.mature.to_string(),
        "scoring.maturity_weights.growth" => scoring.maturity_weights.growth.to_string(),
        "scoring.maturity_weights.emerging" => scoring.maturity_weights.emerging.to_string(),
        "scoring.maturity_weights.legacy" => scoring.maturity_weights.legacy.to_string(),
        "scoring.maturity_weights.fallback" => scoring.maturity_weights.fallback.to_string(),
        "scoring.fit.maturity_factor" => scoring.fit.maturity_factor.to_string(),
        "scoring.fit.requirements_factor" => scoring.fit.requirements_factor.to_string(),
        "scoring.fit.scale" => scoring.fit.scale.to_string(),
        "scoring.bands.strong" => scoring.bands.strong.to_string(),
        "scoring.bands.pilot" => scoring.bands.pilot.to_string(),
        "scoring.decision.strategic_alignment" => scoring.decision.strategic_alignment.to_string(),
        "scoring.decision.cost" => scoring.decision.cost.to_string(),
        "scoring.decision.risk" => scoring.decision.risk.to_string(),
        _ => return None,
    };
    Some(value)
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}
