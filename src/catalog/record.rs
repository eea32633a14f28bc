//! Technology records and their enumerated attributes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CatalogEntry;

/// Lifecycle stage of a technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Maturity {
    Emerging,
    Growth,
    Mature,
    Legacy,
    Declining,
}

impl Maturity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Maturity::Emerging => "emerging",
            Maturity::Growth => "growth",
            Maturity::Mature => "mature",
            Maturity::Legacy => "legacy",
            Maturity::Declining => "declining",
        }
    }
}

impl std::fmt::Display for Maturity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Maturity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emerging" => Ok(Maturity::Emerging),
            "growth" => Ok(Maturity::Growth),
            "mature" => Ok(Maturity::Mature),
            "legacy" => Ok(Maturity::Legacy),
            "declining" => Ok(Maturity::Declining),
            _ => Err(format!("Unknown maturity: {}", s)),
        }
    }
}

impl TryFrom<String> for Maturity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Expected business impact of a technology trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PotentialImpact {
    High,
    Medium,
    Low,
}

impl PotentialImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            PotentialImpact::High => "High",
            PotentialImpact::Medium => "Medium",
            PotentialImpact::Low => "Low",
        }
    }
}

impl std::fmt::Display for PotentialImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PotentialImpact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(PotentialImpact::High),
            "medium" => Ok(PotentialImpact::Medium),
            "low" => Ok(PotentialImpact::Low),
            _ => Err(format!("Unknown potential impact: {}", s)),
        }
    }
}

impl TryFrom<String> for PotentialImpact {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How far a technology has been taken up inside the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AdoptionLevel {
    Evaluating,
    Pilot,
    Production,
    Deprecated,
}

impl AdoptionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionLevel::Evaluating => "evaluating",
            AdoptionLevel::Pilot => "pilot",
            AdoptionLevel::Production => "production",
            AdoptionLevel::Deprecated => "deprecated",
        }
    }
}

impl std::fmt::Display for AdoptionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdoptionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "evaluating" => Ok(AdoptionLevel::Evaluating),
            "pilot" => Ok(AdoptionLevel::Pilot),
            "production" => Ok(AdoptionLevel::Production),
            "deprecated" => Ok(AdoptionLevel::Deprecated),
            _ => Err(format!("Unknown adoption level: {}", s)),
        }
    }
}

impl TryFrom<String> for AdoptionLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A technology trend tracked in the CTO's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyTrend {
    /// Catalog key, not repeated in the persisted record
    #[serde(skip)]
    pub name: String,

    pub category: String,

    pub maturity: Maturity,

    pub potential_impact: PotentialImpact,

    pub description: String,

    #[serde(default)]
    pub relevant_use_cases: Vec<String>,

    #[serde(default = "Utc::now", deserialize_with = "crate::timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,
}

impl TechnologyTrend {
    pub fn new(
        name: &str,
        category: &str,
        maturity: Maturity,
        potential_impact: PotentialImpact,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            maturity,
            potential_impact,
            description: description.to_string(),
            relevant_use_cases: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn with_use_cases<I, S>(mut self, use_cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relevant_use_cases = use_cases.into_iter().map(Into::into).collect();
        self
    }
}

impl CatalogEntry for TechnologyTrend {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A technology known to the principal engineer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    /// Catalog key, not repeated in the persisted record
    #[serde(skip)]
    pub name: String,

    pub category: String,

    pub maturity: Maturity,

    pub adoption_level: AdoptionLevel,

    pub description: String,

    #[serde(default)]
    pub pros: Vec<String>,

    #[serde(default)]
    pub cons: Vec<String>,

    #[serde(default)]
    pub use_cases: Vec<String>,

    #[serde(default = "Utc::now", deserialize_with = "crate::timestamp::deserialize")]
    pub last_evaluated: DateTime<Utc>,
}

impl Technology {
    pub fn new(
        name: &str,
        category: &str,
        maturity: Maturity,
        adoption_level: AdoptionLevel,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            maturity,
            adoption_level,
            description: description.to_string(),
            pros: Vec::new(),
            cons: Vec::new(),
            use_cases: Vec::new(),
            last_evaluated: Utc::now(),
        }
    }

    pub fn with_pros<I, S>(mut self, pros: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pros = pros.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cons<I, S>(mut self, cons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cons = cons.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_use_cases<I, S>(mut self, use_cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases = use_cases.into_iter().map(Into::into).collect();
        self
    }
}

impl CatalogEntry for Technology {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maturity_from_str_case_insensitive() {
        assert_eq!("Mature".parse::<Maturity>().unwrap(), Maturity::Mature);
        assert_eq!("EMERGING".parse::<Maturity>().unwrap(), Maturity::Emerging);
        assert_eq!("declining".parse::<Maturity>().unwrap(), Maturity::Declining);
        assert!("ancient".parse::<Maturity>().is_err());
    }

    #[test]
    fn test_maturity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Maturity::Growth).unwrap(), "\"growth\"");
        let parsed: Maturity = serde_json::from_str("\"Legacy\"").unwrap();
        assert_eq!(parsed, Maturity::Legacy);
    }

    #[test]
    fn test_potential_impact_keeps_capitalization() {
        assert_eq!(serde_json::to_string(&PotentialImpact::High).unwrap(), "\"High\"");
        let parsed: PotentialImpact = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, PotentialImpact::Medium);
    }

    #[test]
    fn test_unknown_adoption_level_rejected() {
        let parsed: Result<AdoptionLevel, _> = serde_json::from_str("\"someday\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_timestamp_defaults_to_now() {
        let before = Utc::now();
        let json = r#"{
            "category": "AI",
            "maturity": "growth",
            "potential_impact": "High",
            "description": "ML"
        }"#;
        let trend: TechnologyTrend = serde_json::from_str(json).unwrap();
        assert!(trend.last_updated >= before);
        assert!(trend.relevant_use_cases.is_empty());
    }
}
