use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DysRiskError, Result};

/// Qualitative severity reported by a single image model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Parse an optional classification coming from a model or a caller.
    ///
    /// Missing, empty and whitespace-only values mean "no prediction" and
    /// yield `Ok(None)`. Anything that is not one of the three severities
    /// (case-insensitive) is rejected against `field`.
    pub fn parse_optional(raw: Option<&str>, field: &'static str) -> Result<Option<Self>> {
        let trimmed = match raw.map(str::trim) {
            None | Some("") => return Ok(None),
            Some(value) => value,
        };

        match trimmed.to_ascii_lowercase().as_str() {
            "mild" => Ok(Some(Severity::Mild)),
            "moderate" => Ok(Some(Severity::Moderate)),
            "severe" => Ok(Some(Severity::Severe)),
            _ => Err(DysRiskError::invalid_input(
                field,
                format!(
                    "unrecognised classification '{}' (expected mild, moderate or severe)",
                    trimmed
                ),
            )),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which upstream model produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSource {
    /// Toluidine blue stained tissue model
    A,
    /// Confocal microscopy model
    B,
}

impl ModelSource {
    pub fn name(&self) -> &'static str {
        match self {
            ModelSource::A => "Model A",
            ModelSource::B => "Model B",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelSource::A => "TB Stained",
            ModelSource::B => "Confocal",
        }
    }

    /// Request field carrying this model's classification
    pub fn field(&self) -> &'static str {
        match self {
            ModelSource::A => "classification_a",
            ModelSource::B => "classification_b",
        }
    }
}

/// One predicted class with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    #[serde(default)]
    pub confidence: f64,
}

impl Prediction {
    pub fn new(class: impl Into<String>, confidence: f64) -> Self {
        Self {
            class: class.into(),
            confidence,
        }
    }
}

/// Raw output of one classifier run, ranked best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionSet {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl PredictionSet {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self { predictions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_prediction(mut self, class: impl Into<String>, confidence: f64) -> Self {
        self.predictions.push(Prediction::new(class, confidence));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Class of the leading prediction, if it carries any text
    pub fn top_class(&self) -> Option<&str> {
        self.predictions
            .first()
            .map(|p| p.class.trim())
            .filter(|class| !class.is_empty())
    }
}
