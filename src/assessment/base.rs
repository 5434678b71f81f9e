use crate::types::{Basis, ModelSource, RiskLevel, Severity};

use super::state::RiskState;

/// Derive the starting level from the two model classifications alone.
///
/// A severe finding from either model dominates. Otherwise agreement
/// gives the shared level, disagreement defers to Model B, and a lone
/// classification is used as-is.
pub fn base_state(a: Option<Severity>, b: Option<Severity>) -> RiskState {
    use Severity::*;

    match (a, b) {
        (Some(Severe), _) | (_, Some(Severe)) => RiskState::new(RiskLevel::High, Basis::Concordant),
        (Some(Moderate), Some(Moderate)) => RiskState::new(RiskLevel::Medium, Basis::Concordant),
        (Some(Mild), Some(Mild)) => RiskState::new(RiskLevel::Low, Basis::Concordant),
        (Some(_), Some(b)) => RiskState::new(RiskLevel::from_severity(b), Basis::Discordant),
        (None, Some(b)) => RiskState::new(
            RiskLevel::from_severity(b),
            Basis::SingleModel(ModelSource::B),
        ),
        (Some(a), None) => RiskState::new(
            RiskLevel::from_severity(a),
            Basis::SingleModel(ModelSource::A),
        ),
        (None, None) => RiskState::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Severity::*;

    const ALL: [Option<Severity>; 4] = [None, Some(Mild), Some(Moderate), Some(Severe)];

    #[test]
    fn test_severe_dominates_either_side() {
        for other in ALL {
            assert_eq!(base_state(Some(Severe), other).label(), "High Risk");
            assert_eq!(base_state(other, Some(Severe)).label(), "High Risk");
        }
    }

    #[test]
    fn test_agreement() {
        assert_eq!(base_state(Some(Moderate), Some(Moderate)).label(), "Medium Risk");
        assert_eq!(base_state(Some(Mild), Some(Mild)).label(), "Low Risk");
    }

    #[test]
    fn test_disagreement_uses_model_b() {
        let state = base_state(Some(Mild), Some(Moderate));
        assert_eq!(state.level, RiskLevel::Medium);
        assert_eq!(state.basis, Basis::Discordant);
        assert_eq!(state.label(), "Medium Risk (Mixed Results - Using Model B)");

        let state = base_state(Some(Moderate), Some(Mild));
        assert_eq!(state.label(), "Low Risk (Mixed Results - Using Model B)");
    }

    #[test]
    fn test_single_model() {
        assert_eq!(
            base_state(None, Some(Moderate)).label(),
            "Medium Risk (Model B Result)"
        );
        assert_eq!(base_state(Some(Mild), None).label(), "Low Risk (Model A Result)");
    }

    #[test]
    fn test_nothing_available() {
        let state = base_state(None, None);
        assert_eq!(state, RiskState::unknown());
        assert_eq!(state.label(), "Unknown");
    }
}
