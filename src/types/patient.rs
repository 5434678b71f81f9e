use serde::{Deserialize, Serialize};

use crate::error::{DysRiskError, Result};

/// Patient risk factors collected alongside the images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFactors {
    pub age: u32,
    pub is_smoker: bool,
    pub is_alcoholic: bool,
}

impl PatientFactors {
    pub fn new(age: u32) -> Self {
        Self {
            age,
            is_smoker: false,
            is_alcoholic: false,
        }
    }

    pub fn with_smoker(mut self, is_smoker: bool) -> Self {
        self.is_smoker = is_smoker;
        self
    }

    pub fn with_alcoholic(mut self, is_alcoholic: bool) -> Self {
        self.is_alcoholic = is_alcoholic;
        self
    }

    /// Build factors from caller-supplied values, rejecting impossible ages
    pub fn validated(age: i64, is_smoker: bool, is_alcoholic: bool, max_age: u32) -> Result<Self> {
        if age < 0 {
            return Err(DysRiskError::invalid_input(
                "age",
                format!("must not be negative (got {})", age),
            ));
        }

        if age > i64::from(max_age) {
            return Err(DysRiskError::invalid_input(
                "age",
                format!("must be at most {} (got {})", max_age, age),
            ));
        }

        Ok(Self {
            age: age as u32,
            is_smoker,
            is_alcoholic,
        })
    }

    pub fn has_lifestyle_risk(&self) -> bool {
        self.is_smoker || self.is_alcoholic
    }
}
