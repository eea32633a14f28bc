//! Principal Engineer advisor commands

use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use super::{emit_structured, ensure_parent, read_input};
use crate::cli::{OutputFormat, PrincipalAction};
use tech_agents::agent::principal::{EvaluationContext, EvaluationOutcome, PrincipalEngineer};
use tech_agents::catalog::{NamedRecord, Technology};
use tech_agents::config::Config;
use tech_agents::design::{DesignRequirements, Scale};
use tech_agents::review::Severity;
use tech_agents::scoring::FitRecommendation;
use tech_agents::state::Persistent;

pub fn run(action: PrincipalAction, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    match action {
        PrincipalAction::Init {
            name,
            expertise,
            years,
            force,
        } => init(&name, expertise, years, force, path),
        PrincipalAction::AddTech { file } => add_technology(&file, path, config),
        PrincipalAction::Evaluate { name, requirements } => evaluate(&name, requirements, path, format, config),
        PrincipalAction::Review { file, language } => review(&file, &language, path, format, config),
        PrincipalAction::Design { name, scale, real_time } => design(&name, scale, real_time, path, format, config),
        PrincipalAction::Mentor { question } => mentor(&question, path, format, config),
        PrincipalAction::Radar => radar(path, format, config),
        PrincipalAction::Show => show(path, format, config),
    }
}

fn load(path: &Path, config: &Config) -> Result<PrincipalEngineer> {
    if !path.exists() {
        eyre::bail!(
            "No Principal Engineer state at {}. Run `tech-agents principal init` first",
            path.display()
        );
    }
    Ok(PrincipalEngineer::load_state(path)?.with_scoring(config.scoring.clone()))
}

fn save(agent: &PrincipalEngineer, path: &Path, announce: bool) -> Result<()> {
    ensure_parent(path)?;
    agent.save_state(path)?;
    if announce {
        println!("  {} Saved to {}", "✓".green(), path.display());
    }
    Ok(())
}

fn init(name: &str, expertise: Vec<String>, years: u32, force: bool, path: &Path) -> Result<()> {
    if path.exists() && !force {
        eyre::bail!("State already exists at {}. Use --force to overwrite", path.display());
    }

    let agent = PrincipalEngineer::new(name, expertise).with_experience(years);
    println!(
        "{} Principal Engineer {} ({} years)",
        "→".blue(),
        name.bold(),
        agent.experience_years
    );
    save(&agent, path, true)
}

fn add_technology(file: &Path, path: &Path, config: &Config) -> Result<()> {
    let record: NamedRecord<Technology> = read_input(file)?;
    let technology = record.into_entry();
    let mut agent = load(path, config)?;

    let verb = if agent.technologies.contains(&technology.name) { "Updated" } else { "Added" };
    println!("{} {} technology {}", "→".blue(), verb, technology.name.cyan());
    agent.add_technology(technology);
    save(&agent, path, true)
}

fn evaluate(
    name: &str,
    requirements: Vec<String>,
    path: &Path,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let agent = load(path, config)?;
    let outcome = agent.evaluate_technology(name, &EvaluationContext::with_requirements(requirements));

    if emit_structured(&outcome, format)? {
        return Ok(());
    }

    match outcome {
        EvaluationOutcome::Evaluated(evaluation) => {
            let recommendation = match evaluation.recommendation {
                FitRecommendation::StronglyRecommend => evaluation.recommendation.to_string().green(),
                FitRecommendation::ConsiderPilot => evaluation.recommendation.to_string().yellow(),
                FitRecommendation::NotRecommended => evaluation.recommendation.to_string().red(),
            };
            println!("{} {}", "Evaluation for".bold(), evaluation.technology.bold());
            println!("  Maturity: {}", evaluation.maturity);
            println!("  Adoption: {}", evaluation.adoption_level);
            println!("  Fit Score: {}/10", evaluation.fit_score);
            println!("  Recommendation: {}", recommendation);
            println!("  Rationale: {}", evaluation.rationale.dimmed());
        }
        EvaluationOutcome::NotFound { message } => {
            println!("{} {}", "?".yellow(), message);
        }
    }

    Ok(())
}

fn review(file: &Path, language: &str, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let code = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let agent = load(path, config)?;
    let findings = agent.review_code(&code, language);

    if emit_structured(&findings, format)? {
        return Ok(());
    }

    println!("Found {} issues in {}:", findings.len(), file.display());
    for (i, finding) in findings.iter().enumerate() {
        let severity = finding.severity.to_string().to_uppercase();
        let severity = match finding.severity {
            Severity::High => severity.red().bold(),
            Severity::Medium => severity.yellow(),
            Severity::Low => severity.normal(),
        };
        println!("{}. [{}] {}", i + 1, severity, finding.description);
        println!("   Recommendation: {}", finding.recommendation.dimmed());
    }

    Ok(())
}

fn design(
    name: &str,
    scale: Option<Scale>,
    real_time: bool,
    path: &Path,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let mut agent = load(path, config)?;
    let design = agent.design_system(&DesignRequirements {
        name: Some(name.to_string()),
        scale,
        real_time_processing: real_time,
        ..Default::default()
    });

    let structured = emit_structured(&serde_json::json!({ "name": &design.name, "design": &design }), format)?;
    if !structured {
        let patterns: Vec<&str> = design.patterns.iter().map(|p| p.as_str()).collect();
        println!("{} {}", "Designed system:".bold(), design.name.green().bold());
        println!("  {}", design.description);
        println!("  Architecture patterns: {}", patterns.join(", ").cyan());
    }

    save(&agent, path, !structured)
}

fn mentor(question: &str, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let agent = load(path, config)?;
    let answer = agent.mentor_junior_engineer(question);

    if emit_structured(&serde_json::json!({ "question": question, "answer": answer }), format)? {
        return Ok(());
    }

    println!("{} {}", "Question:".bold(), question);
    println!("{} {}", "Mentor:".bold(), answer);
    Ok(())
}

fn radar(path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let agent = load(path, config)?;
    let radar = agent.generate_tech_radar();

    if emit_structured(&radar, format)? {
        return Ok(());
    }

    for (ring, techs) in [
        ("ADOPT", &radar.adopt),
        ("TRIAL", &radar.trial),
        ("ASSESS", &radar.assess),
        ("HOLD", &radar.hold),
    ] {
        println!("{}", ring.bold());
        for tech in techs {
            println!("  - {}", tech);
        }
    }

    Ok(())
}

fn show(path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let agent = load(path, config)?;

    if emit_structured(&agent.to_snapshot(), format)? {
        return Ok(());
    }

    println!("{} {}", "Engineer:".bold(), agent.name.green().bold());
    println!("{} {}", "Experience:".bold(), format!("{} years", agent.experience_years));
    if !agent.expertise.is_empty() {
        println!("{} {}", "Expertise:".bold(), agent.expertise.join(", ").cyan());
    }

    println!();
    println!("{}", "Technologies:".bold());
    for tech in agent.technologies.iter() {
        println!(
            "  {} {} ({}, {}, {})",
            "●".green(),
            tech.name.bold(),
            tech.category,
            tech.maturity,
            tech.adoption_level
        );
    }

    println!();
    println!("{}", "System Designs:".bold());
    if agent.system_designs.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for design in agent.system_designs.iter() {
        let patterns: Vec<&str> = design.patterns.iter().map(|p| p.as_str()).collect();
        println!("  {} {} [{}]", "•".cyan(), design.name.bold(), patterns.join(", "));
    }

    Ok(())
}
