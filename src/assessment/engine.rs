use tracing::{debug, warn};

use crate::config::AssessmentConfig;
use crate::error::{DysRiskError, Result};
use crate::types::{ModelSource, PatientFactors, RiskAssessment, Severity};

use super::base::base_state;
use super::modifiers::Modifier;

/// Risk assessor - combines two model classifications with patient factors.
///
/// Stateless apart from its rule parameters; safe to share between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAssessor {
    rules: AssessmentConfig,
}

impl RiskAssessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: AssessmentConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &AssessmentConfig {
        &self.rules
    }

    /// Validating entry point for raw caller input.
    ///
    /// Absent or blank classifications are allowed; unrecognised ones and
    /// out-of-range ages are rejected.
    pub fn assess(
        &self,
        classification_a: Option<&str>,
        classification_b: Option<&str>,
        age: i64,
        is_smoker: bool,
        is_alcoholic: bool,
    ) -> Result<RiskAssessment> {
        let patient = self.patient(age, is_smoker, is_alcoholic)?;
        self.assess_patient(classification_a, classification_b, &patient)
    }

    /// Validate caller-supplied patient factors against `max_age`
    pub fn patient(&self, age: i64, is_smoker: bool, is_alcoholic: bool) -> Result<PatientFactors> {
        PatientFactors::validated(age, is_smoker, is_alcoholic, self.rules.max_age)
            .map_err(rejected)
    }

    /// Assess raw classifications for an already validated patient
    pub fn assess_patient(
        &self,
        classification_a: Option<&str>,
        classification_b: Option<&str>,
        patient: &PatientFactors,
    ) -> Result<RiskAssessment> {
        let a = Severity::parse_optional(classification_a, ModelSource::A.field()).map_err(rejected)?;
        let b = Severity::parse_optional(classification_b, ModelSource::B.field()).map_err(rejected)?;
        Ok(self.assess_factors(a, b, patient))
    }

    /// Typed entry point
    ///
    /// Pipeline:
    /// 1. Base level from the two classifications
    /// 2. Age pass
    /// 3. Smoking pass
    /// 4. Alcohol pass
    /// 5. Render label once from the final state
    pub fn assess_factors(
        &self,
        classification_a: Option<Severity>,
        classification_b: Option<Severity>,
        patient: &PatientFactors,
    ) -> RiskAssessment {
        let mut state = base_state(classification_a, classification_b);
        debug!(
            "Base risk: {} ({:?}) from a={:?}, b={:?}",
            state.level, state.basis, classification_a, classification_b
        );

        let mut notes = Vec::new();
        for modifier in Modifier::ORDER {
            let (next, note) = modifier.apply(state, patient, self.rules.age_threshold);
            state = next;
            notes.extend(note);
        }

        let assessment = RiskAssessment {
            level: state.level,
            basis: state.basis,
            escalation: state.escalation,
            label: state.label(),
            notes,
            classification_a,
            classification_b,
        };

        debug!(
            "Final risk: {} ({} notes)",
            assessment.label,
            assessment.notes.len()
        );

        assessment
    }
}

fn rejected(e: DysRiskError) -> DysRiskError {
    warn!("Rejected assessment input: {}", e);
    e
}

/// Assess with the default rules
pub fn assess(
    classification_a: Option<&str>,
    classification_b: Option<&str>,
    age: i64,
    is_smoker: bool,
    is_alcoholic: bool,
) -> Result<RiskAssessment> {
    RiskAssessor::new().assess(classification_a, classification_b, age, is_smoker, is_alcoholic)
}
