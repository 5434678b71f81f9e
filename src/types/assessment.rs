use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::classification::{ModelSource, PredictionSet, Severity};
use super::patient::PatientFactors;

/// Ordinal risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Mild => RiskLevel::Low,
            Severity::Moderate => RiskLevel::Medium,
            Severity::Severe => RiskLevel::High,
        }
    }

    /// One step up. High is the ceiling and Unknown has nothing to escalate.
    pub fn escalated(self) -> Self {
        match self {
            RiskLevel::Low => RiskLevel::Medium,
            RiskLevel::Medium => RiskLevel::High,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "Unknown",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the base level was derived from the two classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Basis {
    /// Both models agree, or one of them reports a severe finding
    Concordant,
    /// Both models answered differently; Model B is authoritative
    Discordant,
    /// Only one model produced a classification
    SingleModel(ModelSource),
    /// Neither model produced a classification
    Unavailable,
}

impl Basis {
    pub fn annotation(&self) -> Option<&'static str> {
        match self {
            Basis::Discordant => Some("Mixed Results - Using Model B"),
            Basis::SingleModel(ModelSource::A) => Some("Model A Result"),
            Basis::SingleModel(ModelSource::B) => Some("Model B Result"),
            Basis::Concordant | Basis::Unavailable => None,
        }
    }
}

/// Patient factor responsible for raising the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Escalation {
    Age,
    AgeAndLifestyle,
    Smoking,
    Alcohol,
}

impl Escalation {
    pub fn annotation(&self) -> &'static str {
        match self {
            Escalation::Age => "Age Factor",
            Escalation::AgeAndLifestyle => "Age + Lifestyle",
            Escalation::Smoking => "Smoking Factor",
            Escalation::Alcohol => "Alcohol Factor",
        }
    }
}

/// Result of a single risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub basis: Basis,
    pub escalation: Option<Escalation>,
    /// Display label, e.g. "High Risk (Age Factor)"
    pub label: String,
    /// Factor explanations in evaluation order (age, smoking, alcohol)
    pub notes: Vec<String>,
    pub classification_a: Option<Severity>,
    pub classification_b: Option<Severity>,
}

impl RiskAssessment {
    /// Notes joined the way the display and the report show them
    pub fn notes_text(&self) -> String {
        self.notes.join(", ")
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Everything a report generator needs for one patient visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub patient_id: String,
    pub generated_at: DateTime<Utc>,
    pub patient: PatientFactors,
    pub predictions_a: PredictionSet,
    pub predictions_b: PredictionSet,
    pub assessment: RiskAssessment,
}

impl AssessmentReport {
    pub fn new(
        patient: PatientFactors,
        predictions_a: PredictionSet,
        predictions_b: PredictionSet,
        assessment: RiskAssessment,
    ) -> Self {
        Self {
            patient_id: generate_patient_id(),
            generated_at: Utc::now(),
            patient,
            predictions_a,
            predictions_b,
            assessment,
        }
    }

    pub fn predictions(&self, source: ModelSource) -> &PredictionSet {
        match source {
            ModelSource::A => &self.predictions_a,
            ModelSource::B => &self.predictions_b,
        }
    }
}

/// Short random identifier used to label reports
fn generate_patient_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_escalation() {
        assert_eq!(RiskLevel::Low.escalated(), RiskLevel::Medium);
        assert_eq!(RiskLevel::Medium.escalated(), RiskLevel::High);
        assert_eq!(RiskLevel::High.escalated(), RiskLevel::High);
        assert_eq!(RiskLevel::Unknown.escalated(), RiskLevel::Unknown);
    }

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Unknown < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(RiskLevel::from_severity(Severity::Mild), RiskLevel::Low);
        assert_eq!(RiskLevel::from_severity(Severity::Moderate), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_severity(Severity::Severe), RiskLevel::High);
    }

    #[test]
    fn test_basis_annotations() {
        assert_eq!(Basis::Concordant.annotation(), None);
        assert_eq!(Basis::Unavailable.annotation(), None);
        assert_eq!(
            Basis::SingleModel(ModelSource::A).annotation(),
            Some("Model A Result")
        );
        assert_eq!(
            Basis::Discordant.annotation(),
            Some("Mixed Results - Using Model B")
        );
    }

    #[test]
    fn test_patient_id_shape() {
        let id = generate_patient_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
