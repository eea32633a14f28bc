//! Weighted ranking of decision options

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::scoring::DecisionWeights;

/// A dimension used to weigh options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Criterion {
    StrategicAlignment,
    Cost,
    Risk,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::StrategicAlignment => "strategic_alignment",
            Criterion::Cost => "cost",
            Criterion::Risk => "risk",
        }
    }

    /// Criteria applied when a decision names none
    pub fn defaults() -> Vec<Criterion> {
        vec![Criterion::StrategicAlignment, Criterion::Cost, Criterion::Risk]
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "strategic_alignment" => Ok(Criterion::StrategicAlignment),
            "cost" => Ok(Criterion::Cost),
            "risk" => Ok(Criterion::Risk),
            _ => Err(format!("Unknown criterion: {}", s)),
        }
    }
}

impl TryFrom<String> for Criterion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Reads a criteria list, dropping names that are not recognised
fn deserialize_criteria<'de, D>(deserializer: D) -> Result<Option<Vec<Criterion>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let Some(names) = Option::<Vec<String>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let criteria = names
        .iter()
        .filter_map(|name| match name.parse::<Criterion>() {
            Ok(criterion) => Some(criterion),
            Err(e) => {
                log::warn!("{}, ignoring", e);
                None
            }
        })
        .collect();
    Ok(Some(criteria))
}

fn default_half() -> f64 {
    0.5
}

/// One candidate in a decision
///
/// Everything except the three scores is opaque identity (name, description,
/// whatever the caller attaches) and is carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionOption {
    #[serde(flatten)]
    pub identity: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub strategic_alignment_score: f64,

    #[serde(default = "default_half")]
    pub cost_score: f64,

    #[serde(default = "default_half")]
    pub risk_score: f64,
}

impl DecisionOption {
    pub fn new(name: &str) -> Self {
        let mut identity = IndexMap::new();
        identity.insert("name".to_string(), serde_json::Value::String(name.to_string()));
        Self {
            identity,
            strategic_alignment_score: 0.0,
            cost_score: 0.5,
            risk_score: 0.5,
        }
    }

    pub fn with_scores(mut self, strategic_alignment: f64, cost: f64, risk: f64) -> Self {
        self.strategic_alignment_score = strategic_alignment;
        self.cost_score = cost;
        self.risk_score = risk;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.get("name").and_then(|v| v.as_str())
    }
}

/// Input to [`make_decision`]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecisionContext {
    #[serde(default)]
    pub options: Vec<DecisionOption>,

    /// `None` means the default criteria; an empty list scores every option 0
    #[serde(default, deserialize_with = "deserialize_criteria", skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<Criterion>>,
}

impl DecisionContext {
    pub fn new(options: Vec<DecisionOption>) -> Self {
        Self { options, criteria: None }
    }

    pub fn with_criteria(mut self, criteria: Vec<Criterion>) -> Self {
        self.criteria = Some(criteria);
        self
    }

    pub fn effective_criteria(&self) -> Vec<Criterion> {
        self.criteria.clone().unwrap_or_else(Criterion::defaults)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoredOption {
    pub option: DecisionOption,
    pub score: f64,
}

/// Outcome of a decision; `decision` is `None` when there was nothing to choose from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionResult {
    pub decision: Option<DecisionOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    pub rationale: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_options: Vec<ScoredOption>,
}

/// Weighted score of a single option.
///
/// Cost and risk are clamped at 1 from above only, so a negative input
/// raises the contribution.
pub fn score_option(option: &DecisionOption, criteria: &[Criterion], weights: &DecisionWeights) -> f64 {
    let mut score = 0.0;
    if criteria.contains(&Criterion::StrategicAlignment) {
        score += option.strategic_alignment_score * weights.strategic_alignment;
    }
    if criteria.contains(&Criterion::Cost) {
        score += (1.0 - option.cost_score.min(1.0)) * weights.cost;
    }
    if criteria.contains(&Criterion::Risk) {
        score += (1.0 - option.risk_score.min(1.0)) * weights.risk;
    }
    score
}

/// Score every option and pick the best.
///
/// Ranking is a stable descending sort, so options with equal scores keep
/// their input order.
pub fn make_decision(context: &DecisionContext, weights: &DecisionWeights) -> DecisionResult {
    if context.options.is_empty() {
        return DecisionResult {
            decision: None,
            score: None,
            rationale: "No options provided for decision".to_string(),
            all_options: Vec::new(),
        };
    }

    let criteria = context.effective_criteria();

    let mut scored: Vec<ScoredOption> = context
        .options
        .iter()
        .map(|option| ScoredOption {
            option: option.clone(),
            score: score_option(option, &criteria, weights),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let best = &scored[0];
    log::debug!(
        "Decision over {} options picked {:?} with score {:.3}",
        scored.len(),
        best.option.name(),
        best.score
    );

    let names: Vec<&str> = criteria.iter().map(Criterion::as_str).collect();

    DecisionResult {
        decision: Some(best.option.clone()),
        score: Some(best.score),
        rationale: format!("Selected option based on criteria: {}", names.join(", ")),
        all_options: scored,
    }
}
