pub mod api;
pub mod assessment;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod types;

// Re-exports
pub use api::{create_router, ApiState};
pub use assessment::{assess, RiskAssessor};
pub use classifier::{Classifier, StaticClassifier};
pub use config::Config;
pub use error::{DysRiskError, Result};
pub use service::AssessmentService;
pub use types::{
    AssessmentReport, PatientFactors, PredictionSet, RiskAssessment, RiskLevel, Severity,
};
