//! Scoring rules for technologies
//!
//! Every weight and threshold lives in [`ScoringConfig`] so it can be tuned
//! from the configuration file. The defaults are the reference tables.

use serde::{Deserialize, Serialize};

use crate::catalog::{Maturity, PotentialImpact, Technology, TechnologyTrend};

/// All scoring tables
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub maturity_weights: MaturityWeights,
    pub fit: FitWeights,
    pub bands: RecommendationBands,
    pub decision: DecisionWeights,
}

/// Weight of each maturity stage in the fit score
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MaturityWeights {
    pub mature: f64,
    pub growth: f64,
    pub emerging: f64,
    pub legacy: f64,
    /// Used for stages without their own weight
    pub fallback: f64,
}

impl Default for MaturityWeights {
    fn default() -> Self {
        Self {
            mature: 1.0,
            growth: 0.8,
            emerging: 0.6,
            legacy: 0.4,
            fallback: 0.5,
        }
    }
}

impl MaturityWeights {
    pub fn weight(&self, maturity: Maturity) -> f64 {
        match maturity {
            Maturity::Mature => self.mature,
            Maturity::Growth => self.growth,
            Maturity::Emerging => self.emerging,
            Maturity::Legacy => self.legacy,
            Maturity::Declining => self.fallback,
        }
    }
}

/// How maturity and requirement coverage combine into a fit score
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FitWeights {
    pub maturity_factor: f64,
    pub requirements_factor: f64,
    /// Multiplier taking the unit score to the reported range
    pub scale: f64,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            maturity_factor: 0.4,
            requirements_factor: 0.6,
            scale: 10.0,
        }
    }
}

/// Lower bounds of the recommendation bands (inclusive)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RecommendationBands {
    pub strong: f64,
    pub pilot: f64,
}

impl Default for RecommendationBands {
    fn default() -> Self {
        Self {
            strong: 8.0,
            pilot: 6.0,
        }
    }
}

impl RecommendationBands {
    pub fn classify(&self, fit_score: f64) -> FitRecommendation {
        if fit_score >= self.strong {
            FitRecommendation::StronglyRecommend
        } else if fit_score >= self.pilot {
            FitRecommendation::ConsiderPilot
        } else {
            FitRecommendation::NotRecommended
        }
    }
}

/// Per-criterion weights for decision scoring
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DecisionWeights {
    pub strategic_alignment: f64,
    pub cost: f64,
    pub risk: f64,
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            strategic_alignment: 0.5,
            cost: 0.3,
            risk: 0.2,
        }
    }
}

/// Adoption guidance derived from a fit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FitRecommendation {
    #[serde(rename = "Strongly recommend adoption")]
    StronglyRecommend,
    #[serde(rename = "Consider for pilot")]
    ConsiderPilot,
    #[serde(rename = "Not recommended at this time")]
    NotRecommended,
}

impl FitRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitRecommendation::StronglyRecommend => "Strongly recommend adoption",
            FitRecommendation::ConsiderPilot => "Consider for pilot",
            FitRecommendation::NotRecommended => "Not recommended at this time",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            FitRecommendation::StronglyRecommend => {
                "Excellent fit based on current requirements and technology maturity"
            }
            FitRecommendation::ConsiderPilot => {
                "Good potential fit, but evaluate further with a proof of concept"
            }
            FitRecommendation::NotRecommended => {
                "Does not align well with current requirements or technology maturity"
            }
        }
    }
}

impl std::fmt::Display for FitRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adoption guidance from the trend rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TrendRecommendation {
    #[serde(rename = "Monitor and consider pilot projects")]
    MonitorAndPilot,
    #[serde(rename = "Strong candidate for adoption")]
    StrongCandidate,
    #[serde(rename = "Evaluate case-by-case")]
    CaseByCase,
}

impl TrendRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendRecommendation::MonitorAndPilot => "Monitor and consider pilot projects",
            TrendRecommendation::StrongCandidate => "Strong candidate for adoption",
            TrendRecommendation::CaseByCase => "Evaluate case-by-case",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            TrendRecommendation::MonitorAndPilot => {
                "High potential impact warrants monitoring despite emerging status"
            }
            TrendRecommendation::StrongCandidate => "Mature technology with significant potential impact",
            TrendRecommendation::CaseByCase => "Needs further evaluation based on specific use cases",
        }
    }
}

impl std::fmt::Display for TrendRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fit of a technology against a list of requirements, rounded to one decimal.
///
/// A requirement matches when it is a case-insensitive substring of any use
/// case. An empty requirement list contributes nothing.
pub fn fit_score(tech: &Technology, requirements: &[String], config: &ScoringConfig) -> f64 {
    let mut score = config.maturity_weights.weight(tech.maturity) * config.fit.maturity_factor;

    if !requirements.is_empty() {
        let use_cases: Vec<String> = tech.use_cases.iter().map(|uc| uc.to_lowercase()).collect();
        let matched = requirements
            .iter()
            .filter(|req| {
                let req = req.to_lowercase();
                use_cases.iter().any(|uc| uc.contains(&req))
            })
            .count();

        log::debug!(
            "{}: {}/{} requirements matched use cases",
            tech.name,
            matched,
            requirements.len()
        );
        score += (matched as f64 / requirements.len() as f64) * config.fit.requirements_factor;
    }

    round_to_tenth(score * config.fit.scale)
}

/// Rule table for trend assessment; the first matching rule wins
pub fn assess_trend(trend: &TechnologyTrend) -> TrendRecommendation {
    match (trend.maturity, trend.potential_impact) {
        (Maturity::Emerging, PotentialImpact::High) => TrendRecommendation::MonitorAndPilot,
        (Maturity::Mature, PotentialImpact::High | PotentialImpact::Medium) => TrendRecommendation::StrongCandidate,
        _ => TrendRecommendation::CaseByCase,
    }
}

/// Round to one decimal place on the exact decimal value, ties to even
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
