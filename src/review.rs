//! Heuristic code review
//!
//! Two substring rules, applied to the whole source text:
//! - "password" without "encrypt" (both case-insensitive) is a high severity
//!   security finding.
//! - "error" (case-insensitive) without any error-handling keyword
//!   (case-sensitive) is a medium severity finding.

use serde::{Deserialize, Serialize};

/// Keywords taken as evidence that errors are handled
const ERROR_HANDLING_KEYWORDS: &[&str] = &["try"];

const UNKNOWN_FILE: &str = "<unknown>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Security,
    Performance,
    Readability,
    BestPractice,
    ErrorHandling,
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FindingCategory::Security => "security",
            FindingCategory::Performance => "performance",
            FindingCategory::Readability => "readability",
            FindingCategory::BestPractice => "best_practice",
            FindingCategory::ErrorHandling => "error_handling",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CodeReviewFinding {
    pub file_path: String,
    pub line_number: u32,
    pub category: FindingCategory,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

/// Review source text. `language` does not change the rules.
pub fn review_code(code: &str, language: &str) -> Vec<CodeReviewFinding> {
    log::debug!("Reviewing {} bytes of {} code", code.len(), language);

    let lowered = code.to_lowercase();
    let mut findings = Vec::new();

    if lowered.contains("password") && !lowered.contains("encrypt") {
        findings.push(CodeReviewFinding {
            file_path: UNKNOWN_FILE.to_string(),
            line_number: 0,
            category: FindingCategory::Security,
            severity: Severity::High,
            description: "Hardcoded password detected".to_string(),
            recommendation: "Store sensitive data in environment variables or a secure vault".to_string(),
            rule_id: Some("hardcoded-password".to_string()),
        });
    }

    let handles_errors = ERROR_HANDLING_KEYWORDS.iter().any(|kw| code.contains(kw));
    if !handles_errors && lowered.contains("error") {
        findings.push(CodeReviewFinding {
            file_path: UNKNOWN_FILE.to_string(),
            line_number: 0,
            category: FindingCategory::ErrorHandling,
            severity: Severity::Medium,
            description: "Potential unhandled error case".to_string(),
            recommendation: "Add proper error handling with try/except blocks".to_string(),
            rule_id: Some("unhandled-error".to_string()),
        });
    }

    findings
}
