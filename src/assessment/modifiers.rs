use tracing::debug;

use crate::types::{Escalation, PatientFactors, RiskLevel};

use super::state::RiskState;

/// Patient-factor pass applied after the base level is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Age,
    Smoking,
    Alcohol,
}

impl Modifier {
    /// Evaluation order. Notes follow it too.
    pub const ORDER: [Modifier; 3] = [Modifier::Age, Modifier::Smoking, Modifier::Alcohol];

    pub fn note(&self, age_threshold: u32) -> String {
        match self {
            Modifier::Age => format!(
                "Patient is over {}, which may indicate higher risk.",
                age_threshold
            ),
            Modifier::Smoking => "Patient is a smoker, which may indicate higher risk.".to_string(),
            Modifier::Alcohol => {
                "Patient consumes alcohol, which may indicate higher risk.".to_string()
            }
        }
    }

    pub fn is_triggered(&self, patient: &PatientFactors, age_threshold: u32) -> bool {
        match self {
            Modifier::Age => patient.age > age_threshold,
            Modifier::Smoking => patient.is_smoker,
            Modifier::Alcohol => patient.is_alcoholic,
        }
    }

    /// Escalation this pass would apply to `state`, if any
    fn escalation_for(&self, state: &RiskState, patient: &PatientFactors) -> Option<Escalation> {
        if !state.accepts_escalation() {
            return None;
        }

        match (self, state.level) {
            (Modifier::Age, RiskLevel::Medium) => Some(Escalation::Age),
            (Modifier::Age, RiskLevel::Low) if patient.has_lifestyle_risk() => {
                Some(Escalation::AgeAndLifestyle)
            }
            (Modifier::Age, _) => None,
            (Modifier::Smoking, _) => Some(Escalation::Smoking),
            (Modifier::Alcohol, _) => Some(Escalation::Alcohol),
        }
    }

    /// Run this pass: returns the (possibly escalated) state and the note to record
    pub fn apply(
        &self,
        state: RiskState,
        patient: &PatientFactors,
        age_threshold: u32,
    ) -> (RiskState, Option<String>) {
        if !self.is_triggered(patient, age_threshold) {
            return (state, None);
        }

        let next = match self.escalation_for(&state, patient) {
            Some(escalation) => {
                let next = state.escalate(escalation);
                debug!(
                    "{:?} pass escalated {} -> {}",
                    self, state.level, next.level
                );
                next
            }
            None => state,
        };

        (next, Some(self.note(age_threshold)))
    }
}
