//! Integration tests for the command-line front end
//!
//! These tests drive the built binary end to end:
//! - Creating agent state files
//! - Evaluating and assessing technologies
//! - Ranking decision options
//! - Drafting designs and reviewing code
//! - Reloading state from disk

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Helper to run the binary against an isolated home directory
fn run_agents(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tech-agents"))
        .env("TECH_AGENTS_DIR", home)
        .env_remove("TECH_AGENTS_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute tech-agents")
}

/// Helper to run a command that must succeed and parse its JSON output
fn run_json(home: &Path, args: &[&str]) -> Value {
    let mut full: Vec<&str> = args.to_vec();
    full.extend(["--format", "json"]);
    let output = run_agents(home, &full);
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn init_cto(home: &Path) {
    let output = run_agents(
        home,
        &["cto", "init", "--company", "FinTech Innovations Inc", "--industry", "Financial Technology"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

fn init_principal(home: &Path) {
    let output = run_agents(
        home,
        &["principal", "init", "--name", "Alex Johnson", "--expertise", "Cloud Architecture,DevOps", "--years", "15"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_principal_evaluates_default_docker() {
    let temp = TempDir::new().unwrap();
    init_principal(temp.path());

    let evaluation = run_json(temp.path(), &["principal", "evaluate", "Docker", "--require", "Microservices"]);

    assert_eq!(evaluation["status"], "evaluated");
    assert_eq!(evaluation["fit_score"], 10.0);
    assert_eq!(evaluation["recommendation"], "Strongly recommend adoption");
}

#[test]
fn test_principal_unknown_technology_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    init_principal(temp.path());

    let evaluation = run_json(temp.path(), &["principal", "evaluate", "Unknown"]);
    assert_eq!(evaluation["status"], "not_found");
}

#[test]
fn test_cto_decides_between_cloud_providers() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let decision_file = temp.path().join("decision.yaml");
    fs::write(
        &decision_file,
        r#"
options:
  - name: AWS
    description: Amazon Web Services
    strategic_alignment_score: 0.9
    cost_score: 0.7
    risk_score: 0.2
  - name: Azure
    description: Microsoft Azure
    strategic_alignment_score: 0.8
    cost_score: 0.6
    risk_score: 0.3
  - name: GCP
    description: Google Cloud Platform
    strategic_alignment_score: 0.7
    cost_score: 0.8
    risk_score: 0.4
criteria: [strategic_alignment, cost, risk]
"#,
    )
    .unwrap();

    let result = run_json(temp.path(), &["cto", "decide", decision_file.to_str().unwrap()]);

    assert_eq!(result["decision"]["name"], "AWS");
    let ranked: Vec<&str> = result["all_options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["option"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(ranked, vec!["AWS", "Azure", "GCP"]);
    assert!((result["score"].as_f64().unwrap() - 0.70).abs() < 1e-9);
}

#[test]
fn test_cto_decision_without_options() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let decision_file = temp.path().join("empty.json");
    fs::write(&decision_file, r#"{"options": [], "criteria": ["cost"]}"#).unwrap();

    let result = run_json(temp.path(), &["cto", "decide", decision_file.to_str().unwrap()]);
    assert!(result["decision"].is_null());
    assert!(!result["rationale"].as_str().unwrap().is_empty());
}

#[test]
fn test_cto_assess_added_trend() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let trend_file = temp.path().join("trend.yaml");
    fs::write(
        &trend_file,
        r#"
name: Quantum
category: Computing
maturity: emerging
potential_impact: High
description: Quantum computing
relevant_use_cases: [optimization]
"#,
    )
    .unwrap();
    let output = run_agents(temp.path(), &["cto", "add-trend", trend_file.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let assessment = run_json(temp.path(), &["cto", "assess", "Quantum", "--context", "business_unit=R&D"]);
    assert_eq!(assessment["status"], "assessed");
    assert_eq!(assessment["recommendation"], "Monitor and consider pilot projects");

    let unknown = run_json(temp.path(), &["cto", "assess", "Telepathy"]);
    assert_eq!(unknown["status"], "unknown");
}

#[test]
fn test_cto_goals_persist() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let goals_file = temp.path().join("goals.yaml");
    fs::write(
        &goals_file,
        r#"
- name: Cloud-First Strategy
  description: Migrate 100% of infrastructure to cloud-native solutions
  timeframe: 18 months
  priority: High
- name: Developer Experience
  description: Improve developer productivity and satisfaction
  timeframe: 12 months
  priority: Medium
"#,
    )
    .unwrap();
    let output = run_agents(temp.path(), &["cto", "goals", goals_file.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let state_file = temp.path().join("state").join("cto_agent_state.json");
    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&state_file).unwrap()).unwrap();
    assert_eq!(on_disk["strategic_goals"][0]["name"], "Cloud-First Strategy");
    assert_eq!(on_disk["strategic_goals"][1]["priority"], "Medium");

    let shown = run_json(temp.path(), &["cto", "show"]);
    assert_eq!(shown, on_disk);
}

#[test]
fn test_state_survives_reload_unchanged() {
    let temp = TempDir::new().unwrap();
    init_principal(temp.path());

    let output = run_agents(
        temp.path(),
        &["principal", "design", "--name", "E-commerce Platform", "--scale", "large", "--real-time"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let state_file = temp.path().join("state").join("principal_se_state.json");
    let first = fs::read_to_string(&state_file).unwrap();

    // A read-only command must not rewrite the file
    run_json(temp.path(), &["principal", "radar"]);
    assert_eq!(fs::read_to_string(&state_file).unwrap(), first);

    let shown = run_json(temp.path(), &["principal", "show"]);
    let on_disk: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(shown, on_disk);
    assert_eq!(
        on_disk["system_designs"]["E-commerce Platform"]["patterns"],
        serde_json::json!(["Microservices", "Event-Driven Architecture"])
    );
    assert_eq!(on_disk["experience_years"], 15);
}

#[test]
fn test_review_flags_hardcoded_password() {
    let temp = TempDir::new().unwrap();
    init_principal(temp.path());

    let source = temp.path().join("settings.py");
    fs::write(&source, "DB_PASSWORD = 'hunter2'\n").unwrap();

    let findings = run_json(temp.path(), &["principal", "review", source.to_str().unwrap()]);
    let findings = findings.as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["severity"], "high");
    assert_eq!(findings[0]["category"], "security");
}

#[test]
fn test_commands_require_init() {
    let temp = TempDir::new().unwrap();
    let output = run_agents(temp.path(), &["cto", "roadmap"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("init"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let again = run_agents(temp.path(), &["cto", "init", "--company", "Other", "--industry", "Retail"]);
    assert!(!again.status.success());

    let forced = run_agents(
        temp.path(),
        &["cto", "init", "--company", "Other", "--industry", "Retail", "--force"],
    );
    assert!(forced.status.success());

    let shown = run_json(temp.path(), &["cto", "show"]);
    assert_eq!(shown["company_name"], "Other");
}

#[test]
fn test_configured_bands_change_recommendation() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tech-agents.yaml"),
        "scoring:\n  bands:\n    strong: 3.0\n",
    )
    .unwrap();
    init_principal(temp.path());

    // Maturity-only score of 4.0 lands in the strong band with the lowered threshold
    let evaluation = run_json(temp.path(), &["principal", "evaluate", "Kubernetes"]);
    assert_eq!(evaluation["fit_score"], 4.0);
    assert_eq!(evaluation["recommendation"], "Strongly recommend adoption");
}

#[test]
fn test_roadmap_echoes_timeframe() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let roadmap = run_json(temp.path(), &["cto", "roadmap", "--timeframe", "3y"]);
    assert_eq!(roadmap["timeframe"], "3y");
    assert_eq!(roadmap["initiatives"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cto_decision_skips_unknown_criteria() {
    let temp = TempDir::new().unwrap();
    init_cto(temp.path());

    let decision_file = temp.path().join("decision.json");
    fs::write(
        &decision_file,
        r#"{"options": [{"name": "A", "cost_score": 0.2}], "criteria": ["cost", "speed"]}"#,
    )
    .unwrap();

    let result = run_json(temp.path(), &["cto", "decide", decision_file.to_str().unwrap()]);
    assert_eq!(result["decision"]["name"], "A");
    assert!((result["score"].as_f64().unwrap() - 0.24).abs() < 1e-9);
}

#[test]
fn test_help_names_both_log_locations() {
    let temp = TempDir::new().unwrap();
    let output = run_agents(temp.path(), &["--help"]);
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("$TECH_AGENTS_DIR/logs/tech-agents.log"));
    assert!(help.contains("~/.local/share/tech-agents/logs/tech-agents.log"));
}
