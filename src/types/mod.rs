pub mod assessment;
pub mod classification;
pub mod patient;

// Re-export commonly used types
pub use assessment::{AssessmentReport, Basis, Escalation, RiskAssessment, RiskLevel};
pub use classification::{ModelSource, Prediction, PredictionSet, Severity};
pub use patient::PatientFactors;
