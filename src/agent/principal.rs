//! Principal Software Engineer persona

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{AdoptionLevel, Catalog, Maturity, Technology};
use crate::design::{self, DesignRequirements, SystemDesign};
use crate::review::{self, CodeReviewFinding};
use crate::scoring::{self, FitRecommendation, ScoringConfig};

/// Requirements and constraints for a technology evaluation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvaluationContext {
    #[serde(default)]
    pub requirements: Vec<String>,

    #[serde(flatten)]
    pub constraints: IndexMap<String, serde_json::Value>,
}

impl EvaluationContext {
    pub fn with_requirements<I, S>(requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requirements: requirements.into_iter().map(Into::into).collect(),
            constraints: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TechnologyEvaluation {
    pub technology: String,
    pub maturity: Maturity,
    pub adoption_level: AdoptionLevel,
    /// 0 to 10, one decimal
    pub fit_score: f64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub recommendation: FitRecommendation,
    pub rationale: String,
}

/// Result of evaluating a technology by name
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Evaluated(TechnologyEvaluation),
    NotFound { message: String },
}

/// Adoption rings of the technology radar
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TechRadar {
    pub adopt: Vec<String>,
    pub trial: Vec<String>,
    pub assess: Vec<String>,
    pub hold: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

/// Principal engineer advisor holding the technology catalog and designs
#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalEngineer {
    pub name: String,
    pub expertise: Vec<String>,
    pub experience_years: u32,
    pub technologies: Catalog<Technology>,
    pub system_designs: Catalog<SystemDesign>,
    pub scoring: ScoringConfig,
}

pub const DEFAULT_EXPERIENCE_YEARS: u32 = 10;

impl PrincipalEngineer {
    /// Create an agent seeded with the default technologies
    pub fn new<I, S>(name: &str, expertise: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            expertise: expertise.into_iter().map(Into::into).collect(),
            experience_years: DEFAULT_EXPERIENCE_YEARS,
            technologies: default_technologies(),
            system_designs: Catalog::new(),
            scoring: ScoringConfig::default(),
        }
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Add a technology, replacing any technology with the same name
    pub fn add_technology(&mut self, technology: Technology) {
        log::info!("Cataloged technology: {}", technology.name);
        self.technologies.insert(technology);
    }

    /// Fit score of a technology for the given context
    pub fn fit_score(&self, technology: &Technology, context: &EvaluationContext) -> f64 {
        scoring::fit_score(technology, &context.requirements, &self.scoring)
    }

    /// Evaluate a cataloged technology against a context
    pub fn evaluate_technology(&self, name: &str, context: &EvaluationContext) -> EvaluationOutcome {
        let Some(tech) = self.technologies.get(name) else {
            return EvaluationOutcome::NotFound {
                message: format!("No data available for technology: {}", name),
            };
        };

        let fit_score = self.fit_score(tech, context);
        let recommendation = self.scoring.bands.classify(fit_score);
        log::debug!("{} fit score {} -> {}", tech.name, fit_score, recommendation);

        EvaluationOutcome::Evaluated(TechnologyEvaluation {
            technology: tech.name.clone(),
            maturity: tech.maturity,
            adoption_level: tech.adoption_level,
            fit_score,
            pros: tech.pros.clone(),
            cons: tech.cons.clone(),
            recommendation,
            rationale: recommendation.rationale().to_string(),
        })
    }

    pub fn review_code(&self, code: &str, language: &str) -> Vec<CodeReviewFinding> {
        review::review_code(code, language)
    }

    /// Draft a design and keep it under its name, replacing an earlier one
    pub fn design_system(&mut self, requirements: &DesignRequirements) -> SystemDesign {
        let design = design::design_system(requirements);
        log::info!(
            "Designed system '{}' with patterns {:?}",
            design.name,
            design.patterns.iter().map(|p| p.as_str()).collect::<Vec<_>>()
        );
        self.system_designs.insert(design.clone());
        design
    }

    pub fn mentor_junior_engineer(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();
        if question.contains("architecture") {
            "When designing system architecture, always start with the requirements. Consider \
             scalability, reliability, and maintainability. Would you like me to help you design a \
             specific component?"
        } else if question.contains("code review") {
            "A good code review should focus on both functional correctness and code quality. Look \
             for proper error handling, test coverage, and adherence to coding standards. Always \
             provide constructive feedback with specific examples."
        } else {
            "That's a great question! As a junior engineer, focus on understanding the fundamentals \
             deeply. Don't hesitate to ask for clarification when needed. Would you like me to \
             elaborate on any specific area?"
        }
    }

    pub fn generate_tech_radar(&self) -> TechRadar {
        let ring = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        TechRadar {
            adopt: ring(&["Docker", "Kubernetes", "React"]),
            trial: ring(&["Rust", "GraphQL", "Serverless"]),
            assess: ring(&["WebAssembly", "AI/ML Ops", "Edge Computing"]),
            hold: ring(&["MongoDB", "AngularJS", "jQuery"]),
            last_updated: Utc::now(),
        }
    }
}

fn default_technologies() -> Catalog<Technology> {
    [
        Technology::new(
            "Docker",
            "Containerization",
            Maturity::Mature,
            AdoptionLevel::Production,
            "Platform for developing, shipping, and running applications in containers",
        )
        .with_pros(["Lightweight", "Portable", "Ecosystem"])
        .with_cons(["Security concerns if not properly configured", "Learning curve"])
        .with_use_cases(["Microservices", "CI/CD", "Development environments"]),
        Technology::new(
            "Kubernetes",
            "Container Orchestration",
            Maturity::Mature,
            AdoptionLevel::Production,
            "Open-source container orchestration system",
        )
        .with_pros(["Scalability", "High availability", "Self-healing"])
        .with_cons(["Complexity", "Steep learning curve"])
        .with_use_cases(["Microservices orchestration", "Cloud-native applications"]),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{ArchitecturePattern, Scale};

    fn agent() -> PrincipalEngineer {
        PrincipalEngineer::new("Alex Johnson", ["Cloud Architecture", "Distributed Systems", "DevOps"])
            .with_experience(15)
    }

    fn evaluated(outcome: EvaluationOutcome) -> TechnologyEvaluation {
        match outcome {
            EvaluationOutcome::Evaluated(e) => e,
            other => panic!("expected an evaluation, got {:?}", other),
        }
    }

    #[test]
    fn test_docker_microservices_is_perfect_fit() {
        let evaluation = evaluated(agent().evaluate_technology(
            "Docker",
            &EvaluationContext::with_requirements(["Microservices"]),
        ));
        assert_eq!(evaluation.fit_score, 10.0);
        assert_eq!(evaluation.recommendation, FitRecommendation::StronglyRecommend);
        assert_eq!(evaluation.pros, vec!["Lightweight", "Portable", "Ecosystem"]);
    }

    #[test]
    fn test_evaluate_without_requirements() {
        let evaluation = evaluated(agent().evaluate_technology("Kubernetes", &EvaluationContext::default()));
        assert_eq!(evaluation.fit_score, 4.0);
        assert_eq!(evaluation.recommendation, FitRecommendation::NotRecommended);
    }

    #[test]
    fn test_evaluate_pilot_band() {
        // 0.4 + 0.6 * 1/3 = 0.6 -> 6.0
        let evaluation = evaluated(agent().evaluate_technology(
            "Kubernetes",
            &EvaluationContext::with_requirements(["orchestration", "mainframe", "batch"]),
        ));
        assert_eq!(evaluation.fit_score, 6.0);
        assert_eq!(evaluation.recommendation, FitRecommendation::ConsiderPilot);
    }

    #[test]
    fn test_evaluate_unknown_is_not_found() {
        let outcome = agent().evaluate_technology("Unknown", &EvaluationContext::default());
        assert!(matches!(outcome, EvaluationOutcome::NotFound { .. }));

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "not_found");
        assert_eq!(value["message"], "No data available for technology: Unknown");
    }

    #[test]
    fn test_evaluate_added_rust() {
        let mut principal = agent();
        principal.add_technology(
            Technology::new("Rust", "Programming Language", Maturity::Growth, AdoptionLevel::Pilot, "Rust")
                .with_use_cases(["System programming", "Performance-critical applications", "WebAssembly"]),
        );

        let evaluation = evaluated(principal.evaluate_technology(
            "Rust",
            &EvaluationContext::with_requirements(["performance-critical", "memory safety", "concurrency"]),
        ));
        assert_eq!(evaluation.fit_score, 5.2);
        assert_eq!(evaluation.recommendation, FitRecommendation::NotRecommended);
    }

    #[test]
    fn test_context_keeps_constraints() {
        let context: EvaluationContext =
            serde_json::from_str(r#"{"requirements": ["CI/CD"], "budget": "low"}"#).unwrap();
        assert_eq!(context.requirements, vec!["CI/CD"]);
        assert_eq!(context.constraints["budget"], "low");
    }

    #[test]
    fn test_design_system_is_stored() {
        let mut principal = agent();
        let design = principal.design_system(&DesignRequirements {
            name: Some("E-commerce Platform".to_string()),
            scale: Some(Scale::Large),
            ..Default::default()
        });

        assert_eq!(design.patterns, vec![ArchitecturePattern::Microservices]);
        assert_eq!(principal.system_designs.get("E-commerce Platform"), Some(&design));
    }

    #[test]
    fn test_redesign_replaces_existing() {
        let mut principal = agent();
        let mut req = DesignRequirements {
            name: Some("Feed".to_string()),
            ..Default::default()
        };
        principal.design_system(&req);
        req.real_time_processing = true;
        principal.design_system(&req);

        assert_eq!(principal.system_designs.len(), 1);
        assert_eq!(
            principal.system_designs.get("Feed").unwrap().patterns,
            vec![ArchitecturePattern::EventDriven]
        );
    }

    #[test]
    fn test_mentor_topics() {
        let principal = agent();
        assert!(principal.mentor_junior_engineer("Which ARCHITECTURE fits?").contains("requirements"));
        assert!(principal.mentor_junior_engineer("How do I do a code review?").contains("constructive"));
        assert!(
            principal
                .mentor_junior_engineer("How should I approach a notification service?")
                .contains("fundamentals")
        );
    }

    #[test]
    fn test_tech_radar_rings() {
        let radar = agent().generate_tech_radar();
        assert!(radar.adopt.contains(&"Docker".to_string()));
        assert!(radar.trial.contains(&"Rust".to_string()));
        assert_eq!(radar.hold.len(), 3);
    }
}
