//! CTO advisor commands

use colored::*;
use eyre::Result;
use std::path::Path;

use super::{emit_structured, ensure_parent, read_input};
use crate::cli::{CtoAction, OutputFormat};
use tech_agents::agent::cto::{AssessmentOutcome, Audience, BusinessContext, CtoAgent, StrategicGoal};
use tech_agents::catalog::{NamedRecord, TechnologyTrend};
use tech_agents::config::Config;
use tech_agents::decision::DecisionContext;
use tech_agents::state::Persistent;

pub fn run(action: CtoAction, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    match action {
        CtoAction::Init {
            company,
            industry,
            force,
        } => init(&company, &industry, force, path),
        CtoAction::Goals { file } => set_goals(&file, path, config),
        CtoAction::AddTrend { file } => add_trend(&file, path, config),
        CtoAction::Assess { name, context } => assess(&name, &context, path, format, config),
        CtoAction::Decide { file } => decide(&file, path, format, config),
        CtoAction::Roadmap { timeframe } => roadmap(&timeframe, path, format, config),
        CtoAction::Strategy { audience } => strategy(audience, path, format, config),
        CtoAction::Show => show(path, format, config),
    }
}

fn load(path: &Path, config: &Config) -> Result<CtoAgent> {
    if !path.exists() {
        eyre::bail!(
            "No CTO state at {}. Run `tech-agents cto init` first",
            path.display()
        );
    }
    Ok(CtoAgent::load_state(path)?.with_scoring(config.scoring.clone()))
}

fn save(agent: &CtoAgent, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    agent.save_state(path)?;
    println!("  {} Saved to {}", "✓".green(), path.display());
    Ok(())
}

fn init(company: &str, industry: &str, force: bool, path: &Path) -> Result<()> {
    if path.exists() && !force {
        eyre::bail!("State already exists at {}. Use --force to overwrite", path.display());
    }

    let agent = CtoAgent::new(company, industry);
    println!(
        "{} CTO advisor for {} ({})",
        "→".blue(),
        company.bold(),
        industry.cyan()
    );
    save(&agent, path)
}

fn set_goals(file: &Path, path: &Path, config: &Config) -> Result<()> {
    let goals: Vec<StrategicGoal> = read_input(file)?;
    let mut agent = load(path, config)?;

    println!("{} Setting {} strategic goals", "→".blue(), goals.len());
    agent.set_strategic_goals(goals);
    save(&agent, path)
}

fn add_trend(file: &Path, path: &Path, config: &Config) -> Result<()> {
    let record: NamedRecord<TechnologyTrend> = read_input(file)?;
    let trend = record.into_entry();
    let mut agent = load(path, config)?;

    let verb = if agent.technology_portfolio.contains(&trend.name) { "Updated" } else { "Added" };
    println!("{} {} trend {}", "→".blue(), verb, trend.name.cyan());
    agent.add_trend(trend);
    save(&agent, path)
}

fn parse_context(entries: &[String]) -> Result<BusinessContext> {
    let mut context = BusinessContext::new();
    for entry in entries {
        let Some((key, value)) = entry.split_once('=') else {
            eyre::bail!("Invalid context entry '{}', expected KEY=VALUE", entry);
        };
        context.insert(key.trim().to_string(), serde_json::Value::String(value.trim().to_string()));
    }
    Ok(context)
}

fn assess(name: &str, context: &[String], path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let context = parse_context(context)?;
    let agent = load(path, config)?;
    let outcome = agent.assess_technology(name, &context);

    if emit_structured(&outcome, format)? {
        return Ok(());
    }

    match outcome {
        AssessmentOutcome::Assessed(assessment) => {
            println!("{} {}", "Assessment:".bold(), assessment.technology.green().bold());
            println!("  Maturity: {}", assessment.maturity);
            println!("  Potential impact: {}", assessment.potential_impact);
            println!("  Recommendation: {}", assessment.recommendation.to_string().cyan());
            println!("  Rationale: {}", assessment.rationale.dimmed());
        }
        AssessmentOutcome::Unknown { message } => {
            println!("{} {}", "?".yellow(), message);
        }
    }

    Ok(())
}

fn decide(file: &Path, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let context: DecisionContext = read_input(file)?;
    let agent = load(path, config)?;
    let result = agent.make_decision(&context);

    if emit_structured(&result, format)? {
        return Ok(());
    }

    match (&result.decision, result.score) {
        (Some(option), Some(score)) => {
            println!(
                "{} {} (Score: {:.2})",
                "Decision:".bold(),
                option.name().unwrap_or("<unnamed>").green().bold(),
                score
            );
        }
        _ => println!("{} {}", "Decision:".bold(), "none".dimmed()),
    }
    println!("{} {}", "Rationale:".bold(), result.rationale);

    if !result.all_options.is_empty() {
        println!();
        println!("{}", "Ranking:".bold());
        for (i, scored) in result.all_options.iter().enumerate() {
            println!(
                "  {}. {} {:.3}",
                i + 1,
                scored.option.name().unwrap_or("<unnamed>"),
                scored.score
            );
        }
    }

    Ok(())
}

fn roadmap(timeframe: &str, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let agent = load(path, config)?;
    let roadmap = agent.generate_roadmap(timeframe);

    if emit_structured(&roadmap, format)? {
        return Ok(());
    }

    println!("{} {}", "Technology Roadmap:".bold(), roadmap.timeframe.cyan());
    println!();
    for initiative in &roadmap.initiatives {
        println!(
            "  {} {} ({}) [{}]",
            "●".green(),
            initiative.name.bold(),
            initiative.priority,
            initiative.timeline
        );
        println!("    {}", initiative.description.dimmed());
    }
    println!();
    println!("{} {}", "Key technologies:".bold(), roadmap.key_technologies.join(", "));
    println!("{}", "Budget allocation:".bold());
    for (area, percent) in &roadmap.budget_allocation {
        println!("  {}: {}%", area, percent);
    }

    Ok(())
}

fn strategy(audience: Audience, path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let agent = load(path, config)?;
    let message = agent.communicate_strategy(audience);

    if emit_structured(&serde_json::json!({ "audience": audience, "message": message }), format)? {
        return Ok(());
    }

    println!("{}", message);
    Ok(())
}

fn show(path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let agent = load(path, config)?;

    if emit_structured(&agent.to_snapshot(), format)? {
        return Ok(());
    }

    println!("{} {}", "Company:".bold(), agent.company_name.green().bold());
    println!("{} {}", "Industry:".bold(), agent.industry);

    if !agent.tech_stack.is_empty() {
        println!();
        println!("{}", "Tech Stack:".bold());
        for (area, techs) in &agent.tech_stack {
            println!("  {}: {}", area.cyan(), techs.join(", "));
        }
    }

    println!();
    println!("{}", "Strategic Goals:".bold());
    if agent.strategic_goals.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for goal in &agent.strategic_goals {
        println!("  {} {} [{}] {}", "•".cyan(), goal.name.bold(), goal.priority, goal.timeframe.dimmed());
    }

    println!();
    println!("{}", "Technology Portfolio:".bold());
    for trend in agent.technology_portfolio.iter() {
        println!(
            "  {} {} ({}, {}, impact {})",
            "●".green(),
            trend.name.bold(),
            trend.category,
            trend.maturity,
            trend.potential_impact
        );
    }

    Ok(())
}
