use crate::types::{Basis, Escalation, RiskLevel};

/// Working state threaded through the modifier passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskState {
    pub level: RiskLevel,
    pub basis: Basis,
    pub escalation: Option<Escalation>,
}

impl RiskState {
    pub fn new(level: RiskLevel, basis: Basis) -> Self {
        Self {
            level,
            basis,
            escalation: None,
        }
    }

    pub fn unknown() -> Self {
        Self::new(RiskLevel::Unknown, Basis::Unavailable)
    }

    /// Only one factor may ever raise the level, and a Medium level only
    /// moves when both models agreed on it.
    pub fn accepts_escalation(&self) -> bool {
        if self.escalation.is_some() {
            return false;
        }

        match self.level {
            RiskLevel::Low => true,
            RiskLevel::Medium => self.basis == Basis::Concordant,
            RiskLevel::High | RiskLevel::Unknown => false,
        }
    }

    pub fn escalate(self, by: Escalation) -> Self {
        Self {
            level: self.level.escalated(),
            escalation: Some(by),
            ..self
        }
    }

    /// Render the display label, e.g. "Medium Risk (Smoking Factor; Model B Result)"
    pub fn label(&self) -> String {
        if self.level == RiskLevel::Unknown {
            return RiskLevel::Unknown.to_string();
        }

        let annotations: Vec<&str> = self
            .escalation
            .map(|e| e.annotation())
            .into_iter()
            .chain(self.basis.annotation())
            .collect();

        if annotations.is_empty() {
            self.level.to_string()
        } else {
            format!("{} ({})", self.level, annotations.join("; "))
        }
    }
}
