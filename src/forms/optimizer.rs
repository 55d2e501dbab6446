use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use pushkind_common::routes::empty_string_as_none;

use crate::domain::optimizer::{ModelType, OptimizerRequest, Tone};
use crate::forms::sanitize_multiline_text;

const GOAL_MAX_LEN_VALIDATOR: u64 = 2_000;
/// Creativity used when the slider value is missing.
pub const DEFAULT_CREATIVITY: f64 = 0.7;

/// Result type returned by the optimizer form helpers.
pub type OptimizerFormResult<T> = Result<T, OptimizerFormError>;

/// Errors that can occur while processing the optimizer form.
#[derive(Debug, Error)]
pub enum OptimizerFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The goal is empty after sanitization.
    #[error("goal cannot be empty")]
    EmptyGoal,
    #[error("unknown model type `{0}`")]
    UnknownModelType(String),
    #[error("unknown tone `{0}`")]
    UnknownTone(String),
}

/// Form payload emitted by the prompt optimizer.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OptimizerForm {
    /// What the visitor wants the prompt to achieve.
    #[serde(default)]
    #[validate(length(max = GOAL_MAX_LEN_VALIDATOR))]
    pub goal: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub model_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tone: Option<String>,
    /// Slider value between 0.0 and 1.0.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub creativity: Option<f64>,
}

impl OptimizerForm {
    /// Validates and sanitizes the payload into an [`OptimizerRequest`].
    pub fn into_request(self) -> OptimizerFormResult<OptimizerRequest> {
        let goal = sanitize_multiline_text(&self.goal);
        if goal.is_empty() {
            return Err(OptimizerFormError::EmptyGoal);
        }

        self.validate()?;

        let model_type = match self.model_type.as_deref().map(str::trim) {
            Some(value) => ModelType::ALL
                .into_iter()
                .find(|kind| kind.as_str() == value)
                .ok_or_else(|| OptimizerFormError::UnknownModelType(value.to_string()))?,
            None => ModelType::default(),
        };

        let tone = match self.tone.as_deref().map(str::trim) {
            Some(value) => Some(
                Tone::ALL
                    .into_iter()
                    .find(|tone| tone.as_str() == value)
                    .ok_or_else(|| OptimizerFormError::UnknownTone(value.to_string()))?,
            ),
            None => None,
        };

        Ok(OptimizerRequest {
            goal,
            model_type,
            tone,
            creativity: self.creativity.unwrap_or(DEFAULT_CREATIVITY),
        })
    }
}
