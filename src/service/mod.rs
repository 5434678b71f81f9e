use tracing::info;

use crate::assessment::RiskAssessor;
use crate::classifier::Classifier;
use crate::config::Config;
use crate::error::Result;
use crate::types::{AssessmentReport, ModelSource, PatientFactors, PredictionSet, RiskAssessment};

/// Main assessment service
pub struct AssessmentService {
    assessor: RiskAssessor,
}

impl AssessmentService {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            assessor: RiskAssessor::with_rules(config.assessment),
        })
    }

    /// Validate caller-supplied patient factors against the configured limits
    pub fn patient(&self, age: i64, is_smoker: bool, is_alcoholic: bool) -> Result<PatientFactors> {
        self.assessor.patient(age, is_smoker, is_alcoholic)
    }

    /// Assess from raw classification strings
    pub fn assess(
        &self,
        classification_a: Option<&str>,
        classification_b: Option<&str>,
        patient: &PatientFactors,
    ) -> Result<RiskAssessment> {
        let assessment = self
            .assessor
            .assess_patient(classification_a, classification_b, patient)?;
        info!("Assessment: {}", assessment.label);
        Ok(assessment)
    }

    /// Assess from raw classifier output and assemble the report data
    pub fn assess_predictions(
        &self,
        predictions_a: PredictionSet,
        predictions_b: PredictionSet,
        patient: PatientFactors,
    ) -> Result<AssessmentReport> {
        let assessment = self.assess(predictions_a.top_class(), predictions_b.top_class(), &patient)?;

        let report = AssessmentReport::new(patient, predictions_a, predictions_b, assessment);
        info!(
            "Report {} ready: {}",
            report.patient_id, report.assessment.label
        );
        Ok(report)
    }

    /// Run both injected classifiers on their images, then assess
    pub async fn assess_images(
        &self,
        classifier_a: &dyn Classifier,
        image_a: &[u8],
        classifier_b: &dyn Classifier,
        image_b: &[u8],
        patient: PatientFactors,
    ) -> Result<AssessmentReport> {
        info!(
            "Classifying {} image with {} and {} image with {}",
            ModelSource::A.description(),
            classifier_a.model_id(),
            ModelSource::B.description(),
            classifier_b.model_id()
        );

        let (predictions_a, predictions_b) =
            tokio::try_join!(classifier_a.predict(image_a), classifier_b.predict(image_b))?;

        self.assess_predictions(predictions_a, predictions_b, patient)
    }

    pub fn assessor(&self) -> &RiskAssessor {
        &self.assessor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::StaticClassifier;
    use crate::error::DysRiskError;
    use crate::types::RiskLevel;

    fn service() -> AssessmentService {
        AssessmentService::new(Config::default()).unwrap()
    }

    #[test]
    fn test_service_creation() {
        let service = service();
        assert_eq!(service.assessor().rules().age_threshold, 50);
    }

    #[test]
    fn test_service_rejects_invalid_config() {
        let mut config = Config::default();
        config.assessment.max_age = 0;

        let service = AssessmentService::new(config);
        assert!(service.is_err());
    }

    #[test]
    fn test_patient_validation_uses_config_limit() {
        let mut config = Config::default();
        config.assessment.max_age = 120;
        let service = AssessmentService::new(config).unwrap();

        assert!(service.patient(120, false, false).is_ok());
        assert!(service.patient(121, false, false).is_err());
    }

    #[test]
    fn test_assess_agrees_with_assessor_on_rejections() {
        let service = service();
        let patient = PatientFactors::new(30);

        let err = service.assess(Some("normal"), None, &patient).unwrap_err();
        let direct = service
            .assessor()
            .assess(Some("normal"), None, 30, false, false)
            .unwrap_err();
        assert_eq!(err.to_string(), direct.to_string());
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_assess_predictions_uses_top_classes() {
        let service = service();
        let a = PredictionSet::empty()
            .with_prediction("Moderate", 0.81)
            .with_prediction("mild", 0.12);
        let b = PredictionSet::empty().with_prediction("moderate", 0.67);

        let report = service
            .assess_predictions(a.clone(), b, PatientFactors::new(55))
            .unwrap();

        assert_eq!(report.assessment.label, "High Risk (Age Factor)");
        assert_eq!(report.predictions(ModelSource::A), &a);
        assert_eq!(report.patient_id.len(), 8);
    }

    #[test]
    fn test_assess_predictions_without_predictions() {
        let report = service()
            .assess_predictions(PredictionSet::empty(), PredictionSet::empty(), PatientFactors::new(30))
            .unwrap();
        assert_eq!(report.assessment.level, RiskLevel::Unknown);
    }

    #[test]
    fn test_unrecognised_model_class_is_rejected() {
        let err = service()
            .assess_predictions(
                PredictionSet::empty().with_prediction("artifact", 0.9),
                PredictionSet::empty(),
                PatientFactors::new(30),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            DysRiskError::InvalidInput { field: "classification_a", .. }
        ));
    }

    #[tokio::test]
    async fn test_assess_images_with_injected_classifiers() {
        let service = service();
        let model_a = StaticClassifier::with_class("tb-stained-images/14", "mild");
        let model_b = StaticClassifier::with_class("confocal-microscopic-images/8", "mild");
        let patient = service.patient(45, true, false).unwrap();

        let report = service
            .assess_images(&model_a, b"tb", &model_b, b"confocal", patient)
            .await
            .unwrap();

        assert_eq!(report.assessment.label, "Medium Risk (Smoking Factor)");
        assert_eq!(report.patient, patient);
    }

    #[tokio::test]
    async fn test_assess_images_propagates_classifier_failure() {
        let service = service();
        let model = StaticClassifier::with_class("m", "mild");

        let result = service
            .assess_images(&model, b"tb", &model, &[], PatientFactors::new(30))
            .await;

        assert!(matches!(result, Err(DysRiskError::Classifier(_))));
    }
}
