use async_trait::async_trait;
use tracing::debug;

use crate::error::{DysRiskError, Result};
use crate::types::PredictionSet;

/// Image classification collaborator.
///
/// Implementations wrap a hosted model; callers inject one per model so
/// tests and offline runs can substitute fixed answers.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Identifier of the backing model, e.g. "confocal-microscopic-images/8"
    fn model_id(&self) -> &str;

    /// Classify one image, returning predictions ranked best first
    async fn predict(&self, image: &[u8]) -> Result<PredictionSet>;
}

/// Classifier that always answers with the same predictions
#[derive(Debug, Clone)]
pub struct StaticClassifier {
    model_id: String,
    predictions: PredictionSet,
}

impl StaticClassifier {
    pub fn new(model_id: impl Into<String>, predictions: PredictionSet) -> Self {
        Self {
            model_id: model_id.into(),
            predictions,
        }
    }

    /// Shorthand for a single top class with full confidence
    pub fn with_class(model_id: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(model_id, PredictionSet::empty().with_prediction(class, 1.0))
    }
}

#[async_trait]
impl Classifier for StaticClassifier {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn predict(&self, image: &[u8]) -> Result<PredictionSet> {
        if image.is_empty() {
            return Err(DysRiskError::classifier(format!(
                "{}: empty image",
                self.model_id
            )));
        }

        debug!(
            "{}: returning {} fixed predictions",
            self.model_id,
            self.predictions.predictions.len()
        );
        Ok(self.predictions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_classifier_returns_fixed_predictions() {
        let classifier = StaticClassifier::with_class("tb-stained-images/14", "moderate");
        let set = classifier.predict(b"image bytes").await.unwrap();
        assert_eq!(classifier.model_id(), "tb-stained-images/14");
        assert_eq!(set.top_class(), Some("moderate"));
    }

    #[tokio::test]
    async fn test_static_classifier_rejects_empty_image() {
        let classifier = StaticClassifier::with_class("m", "mild");
        let err = classifier.predict(&[]).await.unwrap_err();
        assert!(matches!(err, DysRiskError::Classifier(_)));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let classifier: Box<dyn Classifier> =
            Box::new(StaticClassifier::new("m", PredictionSet::empty()));
        let set = classifier.predict(b"x").await.unwrap();
        assert!(set.is_empty());
    }
}
