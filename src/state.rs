//! Agent state snapshots and their JSON files
//!
//! A snapshot is the complete persisted state of an agent. Saving overwrites
//! the whole file; loading rebuilds the agent from scratch. Optional fields
//! missing from a snapshot fall back to empty containers (or the current time
//! for timestamps). Scoring configuration is not part of the snapshot.

use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::agent::cto::{CtoAgent, StrategicGoal};
use crate::agent::principal::PrincipalEngineer;
use crate::catalog::{Catalog, Technology, TechnologyTrend};
use crate::design::SystemDesign;
use crate::scoring::ScoringConfig;

/// Experience assumed when a snapshot does not record it
pub const SNAPSHOT_EXPERIENCE_YEARS: u32 = 5;

/// Conversion between an agent and its persisted snapshot
pub trait Persistent: Sized {
    type Snapshot: Serialize + DeserializeOwned;

    fn to_snapshot(&self) -> Self::Snapshot;

    fn from_snapshot(snapshot: Self::Snapshot) -> Self;

    fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self.to_snapshot()).context("Failed to serialize agent state")
    }

    fn from_value(value: serde_json::Value) -> Result<Self> {
        let snapshot = serde_json::from_value(value).context("Failed to parse agent state")?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Pretty-printed JSON with two-space indentation
    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_snapshot()).context("Failed to serialize agent state")
    }

    fn from_json(json: &str) -> Result<Self> {
        let snapshot = serde_json::from_str(json).context("Failed to parse agent state")?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the full state to `path`, replacing any existing content
    fn save_state(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create state file: {}", path.display()))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;

        log::info!("Agent state saved to {}", path.display());
        Ok(())
    }

    fn load_state(path: &Path) -> Result<Self> {
        let json =
            fs::read_to_string(path).with_context(|| format!("Failed to read state file: {}", path.display()))?;
        let agent = Self::from_json(&json).with_context(|| format!("Invalid state file: {}", path.display()))?;

        log::info!("Agent state loaded from {}", path.display());
        Ok(agent)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CtoSnapshot {
    pub company_name: String,

    pub industry: String,

    #[serde(default)]
    pub tech_stack: IndexMap<String, Vec<String>>,

    #[serde(default)]
    pub strategic_goals: Vec<StrategicGoal>,

    #[serde(default)]
    pub technology_portfolio: Catalog<TechnologyTrend>,

    #[serde(default)]
    pub team_structure: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub budget_allocation: IndexMap<String, u32>,
}

impl Persistent for CtoAgent {
    type Snapshot = CtoSnapshot;

    fn to_snapshot(&self) -> CtoSnapshot {
        CtoSnapshot {
            company_name: self.company_name.clone(),
            industry: self.industry.clone(),
            tech_stack: self.tech_stack.clone(),
            strategic_goals: self.strategic_goals.clone(),
            technology_portfolio: self.technology_portfolio.clone(),
            team_structure: self.team_structure.clone(),
            budget_allocation: self.budget_allocation.clone(),
        }
    }

    fn from_snapshot(snapshot: CtoSnapshot) -> Self {
        CtoAgent {
            company_name: snapshot.company_name,
            industry: snapshot.industry,
            tech_stack: snapshot.tech_stack,
            technology_portfolio: snapshot.technology_portfolio,
            strategic_goals: snapshot.strategic_goals,
            team_structure: snapshot.team_structure,
            budget_allocation: snapshot.budget_allocation,
            scoring: ScoringConfig::default(),
        }
    }
}

fn snapshot_experience_years() -> u32 {
    SNAPSHOT_EXPERIENCE_YEARS
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PrincipalSnapshot {
    pub name: String,

    #[serde(default)]
    pub expertise: Vec<String>,

    #[serde(default = "snapshot_experience_years")]
    pub experience_years: u32,

    #[serde(default)]
    pub technologies: Catalog<Technology>,

    #[serde(default)]
    pub system_designs: Catalog<SystemDesign>,
}

impl Persistent for PrincipalEngineer {
    type Snapshot = PrincipalSnapshot;

    fn to_snapshot(&self) -> PrincipalSnapshot {
        PrincipalSnapshot {
            name: self.name.clone(),
            expertise: self.expertise.clone(),
            experience_years: self.experience_years,
            technologies: self.technologies.clone(),
            system_designs: self.system_designs.clone(),
        }
    }

    fn from_snapshot(snapshot: PrincipalSnapshot) -> Self {
        PrincipalEngineer {
            name: snapshot.name,
            expertise: snapshot.expertise,
            experience_years: snapshot.experience_years,
            technologies: snapshot.technologies,
            system_designs: snapshot.system_designs,
            scoring: ScoringConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Priority;
    use crate::catalog::{AdoptionLevel, Maturity, PotentialImpact};
    use crate::design::{DesignRequirements, Scale};
    use tempfile::TempDir;

    fn populated_cto() -> CtoAgent {
        let mut cto = CtoAgent::new("FinTech Innovations Inc", "Financial Technology").with_tech_stack(
            IndexMap::from([
                ("frontend".to_string(), vec!["React".to_string(), "TypeScript".to_string()]),
                ("infrastructure".to_string(), vec!["AWS".to_string(), "Docker".to_string()]),
            ]),
        );
        cto.set_strategic_goals(vec![
            StrategicGoal::new("Cloud-First Strategy", "Migrate everything", "18 months", Priority::High),
            StrategicGoal::new("Developer Experience", "Happier developers", "12 months", Priority::Medium),
        ]);
        cto.add_trend(
            TechnologyTrend::new(
                "Blockchain",
                "Distributed Ledger",
                Maturity::Declining,
                PotentialImpact::Low,
                "Ledgers",
            )
            .with_use_cases(["smart contracts", "cross-border payments"]),
        );
        cto.team_structure.insert("platform".to_string(), serde_json::json!({"size": 6}));
        cto.budget_allocation.insert("rnd".to_string(), 15);
        cto
    }

    fn populated_principal() -> PrincipalEngineer {
        let mut principal = PrincipalEngineer::new("Alex Johnson", ["Distributed Systems"]).with_experience(15);
        principal.add_technology(
            Technology::new("Rust", "Programming Language", Maturity::Growth, AdoptionLevel::Pilot, "Rust")
                .with_pros(["Performance"])
                .with_cons(["Compile times"])
                .with_use_cases(["WebAssembly"]),
        );
        principal.design_system(&DesignRequirements {
            name: Some("E-commerce Platform".to_string()),
            scale: Some(Scale::Large),
            real_time_processing: true,
            ..Default::default()
        });
        principal
    }

    #[test]
    fn test_cto_snapshot_round_trip() {
        let cto = populated_cto();
        let snapshot = cto.to_value().unwrap();
        let restored = CtoAgent::from_value(snapshot.clone()).unwrap();

        assert_eq!(restored.to_value().unwrap(), snapshot);
        assert_eq!(restored, cto);
    }

    #[test]
    fn test_principal_snapshot_round_trip() {
        let principal = populated_principal();
        let json = principal.to_json().unwrap();
        let restored = PrincipalEngineer::from_json(&json).unwrap();

        assert_eq!(restored.to_json().unwrap(), json);
        assert_eq!(restored, principal);
    }

    #[test]
    fn test_cto_snapshot_layout() {
        let value = populated_cto().to_value().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "company_name",
                "industry",
                "tech_stack",
                "strategic_goals",
                "technology_portfolio",
                "team_structure",
                "budget_allocation"
            ]
        );

        let blockchain = &value["technology_portfolio"]["Blockchain"];
        assert!(blockchain.get("name").is_none());
        assert_eq!(blockchain["maturity"], "declining");
        assert_eq!(blockchain["potential_impact"], "Low");
    }

    #[test]
    fn test_principal_snapshot_layout() {
        let value = populated_principal().to_value().unwrap();
        let design = &value["system_designs"]["E-commerce Platform"];
        assert_eq!(
            design["patterns"],
            serde_json::json!(["Microservices", "Event-Driven Architecture"])
        );
        assert_eq!(value["technologies"]["Rust"]["adoption_level"], "pilot");
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let json = populated_cto().to_json().unwrap();
        assert!(json.starts_with("{\n  \"company_name\""));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let cto = CtoAgent::from_json(r#"{"company_name": "Acme", "industry": "Retail"}"#).unwrap();
        assert!(cto.technology_portfolio.is_empty());
        assert!(cto.strategic_goals.is_empty());
        assert!(cto.tech_stack.is_empty());

        let principal = PrincipalEngineer::from_json(r#"{"name": "Sam"}"#).unwrap();
        assert_eq!(principal.experience_years, SNAPSHOT_EXPERIENCE_YEARS);
        assert!(principal.expertise.is_empty());
        assert!(principal.system_designs.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let json = r#"{
            "company_name": "Acme",
            "industry": "Retail",
            "schema_hint": 3,
            "technology_portfolio": {
                "Edge": {
                    "category": "Infra",
                    "maturity": "emerging",
                    "potential_impact": "High",
                    "description": "Edge compute",
                    "relevant_use_cases": [],
                    "last_updated": "2024-01-01T00:00:00",
                    "owner": "ops"
                }
            }
        }"#;
        let cto = CtoAgent::from_json(json).unwrap();
        assert_eq!(cto.technology_portfolio.get("Edge").unwrap().name, "Edge");
    }

    #[test]
    fn test_missing_identity_is_an_error() {
        assert!(CtoAgent::from_json(r#"{"industry": "Retail"}"#).is_err());
        assert!(CtoAgent::from_json("not json").is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("principal_se_state.json");

        let principal = populated_principal();
        principal.save_state(&path).unwrap();
        let loaded = PrincipalEngineer::load_state(&path).unwrap();

        assert_eq!(loaded, principal);
        assert_eq!(fs::read_to_string(&path).unwrap(), principal.to_json().unwrap());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cto_agent_state.json");
        fs::write(&path, "x".repeat(100_000)).unwrap();

        let cto = CtoAgent::new("Acme", "Retail");
        cto.save_state(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), cto.to_json().unwrap());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let result = CtoAgent::load_state(&temp.path().join("absent.json"));
        assert!(result.is_err());
    }
}
