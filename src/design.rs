//! System designs produced by the principal engineer

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ArchitecturePattern {
    #[serde(rename = "Microservices")]
    Microservices,
    #[serde(rename = "Event-Driven Architecture")]
    EventDriven,
    #[serde(rename = "Layered Architecture")]
    Layered,
    #[serde(rename = "Pipe-Filter")]
    PipeFilter,
    #[serde(rename = "Command Query Responsibility Segregation")]
    Cqrs,
    #[serde(rename = "Serverless")]
    Serverless,
    #[serde(rename = "Microkernel")]
    Microkernel,
}

impl ArchitecturePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchitecturePattern::Microservices => "Microservices",
            ArchitecturePattern::EventDriven => "Event-Driven Architecture",
            ArchitecturePattern::Layered => "Layered Architecture",
            ArchitecturePattern::PipeFilter => "Pipe-Filter",
            ArchitecturePattern::Cqrs => "Command Query Responsibility Segregation",
            ArchitecturePattern::Serverless => "Serverless",
            ArchitecturePattern::Microkernel => "Microkernel",
        }
    }
}

impl std::fmt::Display for ArchitecturePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected load on a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Small,
    #[default]
    Medium,
    Large,
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Scale::Small => "small",
            Scale::Medium => "medium",
            Scale::Large => "large",
        };
        f.write_str(s)
    }
}

/// What a system has to satisfy
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DesignRequirements {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scale: Option<Scale>,

    #[serde(default)]
    pub real_time_processing: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SystemDesign {
    /// Catalog key, not repeated in the persisted record
    #[serde(skip)]
    pub name: String,

    pub description: String,

    #[serde(default)]
    pub components: Vec<IndexMap<String, serde_json::Value>>,

    #[serde(default)]
    pub patterns: Vec<ArchitecturePattern>,

    #[serde(default)]
    pub technologies: Vec<IndexMap<String, String>>,

    #[serde(default)]
    pub scalability_considerations: Vec<String>,

    #[serde(default)]
    pub failure_modes: Vec<String>,

    #[serde(default = "Utc::now", deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl SystemDesign {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            components: Vec::new(),
            patterns: Vec::new(),
            technologies: Vec::new(),
            scalability_considerations: Vec::new(),
            failure_modes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a pattern unless it is already present
    pub fn add_pattern(&mut self, pattern: ArchitecturePattern) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}

impl CatalogEntry for SystemDesign {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Draft a design from requirements
pub fn design_system(requirements: &DesignRequirements) -> SystemDesign {
    let name = requirements.name.as_deref().unwrap_or("Unnamed System");
    let scale = requirements.scale.unwrap_or_default();
    let mut design = SystemDesign::new(name, &format!("System design for {} with {} scale", name, scale));

    if scale == Scale::Large {
        design.add_pattern(ArchitecturePattern::Microservices);
    }
    if requirements.real_time_processing {
        design.add_pattern(ArchitecturePattern::EventDriven);
    }
    if design.patterns.is_empty() {
        design.add_pattern(ArchitecturePattern::Layered);
    }

    design
}
