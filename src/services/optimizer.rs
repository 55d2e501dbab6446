use std::time::Duration;

use serde::Serialize;

use crate::domain::optimizer::{ModelType, OptimizedPrompt, OptimizerRequest, Tone, optimize};
use crate::forms::optimizer::{OptimizerForm, OptimizerFormError};
use crate::services::{ServiceError, ServiceResult};
use crate::tasks::ScheduledTask;

/// Choice shown in the optimizer selectors.
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Data required to render the optimizer page.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizerPageData {
    pub model_types: Vec<Choice>,
    pub tones: Vec<Choice>,
    pub goal: String,
    pub model_type: ModelType,
    pub tone: Option<Tone>,
    pub creativity: f64,
    pub prompts: Vec<OptimizedPrompt>,
}

fn tone_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Professional",
        Tone::Creative => "Creative",
        Tone::Casual => "Casual",
        Tone::Technical => "Technical",
        Tone::Persuasive => "Persuasive",
    }
}

impl OptimizerPageData {
    /// Empty optimizer page.
    pub fn blank() -> Self {
        Self::with_results(
            OptimizerRequest {
                goal: String::new(),
                model_type: ModelType::default(),
                tone: None,
                creativity: crate::forms::optimizer::DEFAULT_CREATIVITY,
            },
            Vec::new(),
        )
    }

    fn with_results(request: OptimizerRequest, prompts: Vec<OptimizedPrompt>) -> Self {
        Self {
            model_types: ModelType::ALL
                .into_iter()
                .map(|kind| Choice {
                    value: kind.as_str(),
                    label: kind.label(),
                })
                .collect(),
            tones: Tone::ALL
                .into_iter()
                .map(|tone| Choice {
                    value: tone.as_str(),
                    label: tone_label(tone),
                })
                .collect(),
            goal: request.goal,
            model_type: request.model_type,
            tone: request.tone,
            creativity: request.creativity,
            prompts,
        }
    }
}

/// Validate the optimizer form and produce the prompt variants after `delay`.
pub async fn run_optimizer(
    form: OptimizerForm,
    delay: Duration,
) -> ServiceResult<OptimizerPageData> {
    let request = form.into_request().map_err(|err| match err {
        OptimizerFormError::EmptyGoal => ServiceError::Form("Please enter your goal".to_string()),
        other => ServiceError::Form(other.to_string()),
    })?;

    let job_request = request.clone();
    let task = ScheduledTask::schedule(delay, move || optimize(&job_request));

    let prompts = task.await.map_err(|err| {
        log::error!("Optimizer timer failed: {err}");
        ServiceError::from(err)
    })?;

    log::info!(
        "Generated {} {} prompts",
        prompts.len(),
        request.model_type.as_str()
    );

    Ok(OptimizerPageData::with_results(request, prompts))
}
