use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::sanitize_inline_text;

const MESSAGE_MAX_LEN_VALIDATOR: u64 = 1_000;

/// Errors that can occur while reading an assistant message.
#[derive(Debug, Error)]
pub enum AssistantFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("message cannot be empty")]
    EmptyMessage,
}

/// Message sent to the shopping assistant.
#[derive(Debug, Deserialize, Validate)]
pub struct AssistantForm {
    #[serde(default)]
    #[validate(length(max = MESSAGE_MAX_LEN_VALIDATOR))]
    pub message: String,
}

impl AssistantForm {
    /// Validate the payload and return the sanitized message text.
    pub fn into_message(self) -> Result<String, AssistantFormError> {
        self.validate()?;

        let message = sanitize_inline_text(&self.message);
        if message.is_empty() {
            return Err(AssistantFormError::EmptyMessage);
        }
        Ok(message)
    }
}

/// Query string of the search suggestions endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_sanitized() {
        let form = AssistantForm {
            message: "  show me   laptops ".to_string(),
        };

        assert_eq!(form.into_message().expect("message"), "show me laptops");
    }

    #[test]
    fn blank_message_is_rejected() {
        let form = AssistantForm {
            message: "   ".to_string(),
        };

        assert!(matches!(
            form.into_message(),
            Err(AssistantFormError::EmptyMessage)
        ));
    }
}
