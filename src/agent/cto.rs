//! Chief Technology Officer persona

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::catalog::{Catalog, Maturity, PotentialImpact, TechnologyTrend};
use crate::decision::{self, DecisionContext, DecisionResult};
use crate::scoring::{self, ScoringConfig, TrendRecommendation};

/// Free-form business context passed along with an assessment
pub type BusinessContext = IndexMap<String, serde_json::Value>;

/// A strategic goal of the organization
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StrategicGoal {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub timeframe: String,

    #[serde(default)]
    pub priority: Priority,

    /// Any additional keys supplied with the goal
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl StrategicGoal {
    pub fn new(name: &str, description: &str, timeframe: &str, priority: Priority) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            timeframe: timeframe.to_string(),
            priority,
            extra: IndexMap::new(),
        }
    }
}

/// Who a strategy message is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Executive,
    Technical,
    Board,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TechnologyAssessment {
    pub technology: String,
    pub maturity: Maturity,
    pub potential_impact: PotentialImpact,
    pub recommendation: TrendRecommendation,
    pub rationale: String,
}

/// Result of assessing a technology by name
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssessmentOutcome {
    Assessed(TechnologyAssessment),
    Unknown { message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Initiative {
    pub name: String,
    pub description: String,
    pub timeline: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Roadmap {
    pub timeframe: String,
    pub initiatives: Vec<Initiative>,
    pub key_technologies: Vec<String>,
    /// Percent of budget per area
    pub budget_allocation: IndexMap<String, u32>,
}

/// CTO advisor holding the technology portfolio and strategic goals
#[derive(Debug, Clone, PartialEq)]
pub struct CtoAgent {
    pub company_name: String,
    pub industry: String,
    /// Technology category to the technologies in use
    pub tech_stack: IndexMap<String, Vec<String>>,
    pub technology_portfolio: Catalog<TechnologyTrend>,
    pub strategic_goals: Vec<StrategicGoal>,
    pub team_structure: IndexMap<String, serde_json::Value>,
    pub budget_allocation: IndexMap<String, u32>,
    pub scoring: ScoringConfig,
}

impl CtoAgent {
    /// Create an agent seeded with the default technology trends
    pub fn new(company_name: &str, industry: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            industry: industry.to_string(),
            tech_stack: IndexMap::new(),
            technology_portfolio: default_trends(),
            strategic_goals: Vec::new(),
            team_structure: IndexMap::new(),
            budget_allocation: IndexMap::new(),
            scoring: ScoringConfig::default(),
        }
    }

    pub fn with_tech_stack(mut self, tech_stack: IndexMap<String, Vec<String>>) -> Self {
        self.tech_stack = tech_stack;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replace the strategic goals
    pub fn set_strategic_goals(&mut self, goals: Vec<StrategicGoal>) {
        let names: Vec<&str> = goals.iter().map(|g| g.name.as_str()).collect();
        log::info!("Updated strategic goals: {:?}", names);
        self.strategic_goals = goals;
    }

    /// Add a trend to the portfolio, replacing any trend with the same name
    pub fn add_trend(&mut self, trend: TechnologyTrend) {
        log::info!("Tracking technology trend: {}", trend.name);
        self.technology_portfolio.insert(trend);
    }

    /// Assess a trend from the portfolio.
    ///
    /// The business context is accepted for future rules but does not
    /// influence the outcome.
    pub fn assess_technology(&self, name: &str, _context: &BusinessContext) -> AssessmentOutcome {
        let Some(trend) = self.technology_portfolio.get(name) else {
            return AssessmentOutcome::Unknown {
                message: format!("No data on {}", name),
            };
        };

        let recommendation = scoring::assess_trend(trend);
        AssessmentOutcome::Assessed(TechnologyAssessment {
            technology: trend.name.clone(),
            maturity: trend.maturity,
            potential_impact: trend.potential_impact,
            recommendation,
            rationale: recommendation.rationale().to_string(),
        })
    }

    pub fn make_decision(&self, context: &DecisionContext) -> DecisionResult {
        decision::make_decision(context, &self.scoring.decision)
    }

    /// Draft the technology roadmap. The timeframe is echoed back; the
    /// content does not depend on it.
    pub fn generate_roadmap(&self, timeframe: &str) -> Roadmap {
        let initiative = |name: &str, description: &str, timeline: &str, priority| Initiative {
            name: name.to_string(),
            description: description.to_string(),
            timeline: timeline.to_string(),
            priority,
        };

        Roadmap {
            timeframe: timeframe.to_string(),
            initiatives: vec![
                initiative(
                    "Cloud Migration",
                    "Migrate on-premises infrastructure to cloud",
                    "Q1-Q2",
                    Priority::High,
                ),
                initiative(
                    "AI/ML Integration",
                    "Implement AI/ML capabilities for business processes",
                    "Q2-Q3",
                    Priority::High,
                ),
                initiative(
                    "DevOps Maturity",
                    "Enhance CI/CD pipelines and automation",
                    "Q3-Q4",
                    Priority::Medium,
                ),
            ],
            key_technologies: ["Cloud Services", "AI/ML Platforms", "Containerization", "IaC"]
                .into_iter()
                .map(String::from)
                .collect(),
            budget_allocation: IndexMap::from([
                ("cloud_infrastructure".to_string(), 40),
                ("talent_acquisition".to_string(), 30),
                ("training_development".to_string(), 15),
                ("rnd".to_string(), 15),
            ]),
        }
    }

    /// Summarize the technology strategy for an audience
    pub fn communicate_strategy(&self, audience: Audience) -> String {
        match audience {
            Audience::Executive => format!(
                "As the CTO of {}, our technology strategy is focused on driving business value \
                 through innovation in the {} sector. Our key priorities include digital \
                 transformation, cloud adoption, and leveraging AI/ML for competitive advantage.",
                self.company_name, self.industry
            ),
            Audience::Technical => "Our technical strategy emphasizes scalable architecture, developer \
                 productivity, and operational excellence. We're investing in modern practices like \
                 DevOps, cloud-native development, and continuous learning to build a future-ready \
                 technology organization."
                .to_string(),
            Audience::Board => format!(
                "The technology strategy for {} is designed to support our business objectives in \
                 the {} market. Through strategic investments in digital capabilities, we aim to \
                 drive innovation, operational efficiency, and sustainable growth.",
                self.company_name, self.industry
            ),
        }
    }
}

fn default_trends() -> Catalog<TechnologyTrend> {
    [
        TechnologyTrend::new(
            "AI/ML",
            "Artificial Intelligence",
            Maturity::Growth,
            PotentialImpact::High,
            "Advancements in machine learning and AI are transforming business operations.",
        )
        .with_use_cases(["automation", "predictive analytics", "personalization"]),
        TechnologyTrend::new(
            "Cloud Native",
            "Cloud Computing",
            Maturity::Mature,
            PotentialImpact::High,
            "Cloud-native technologies enable scalable and resilient applications.",
        )
        .with_use_cases(["microservices", "containers", "serverless"]),
    ]
    .into_iter()
    .collect()
}
