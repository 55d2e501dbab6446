use serde::{Deserialize, Serialize};

/// Kind of model the optimized prompt targets.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    Text,
    Image,
    Code,
}

impl ModelType {
    pub const ALL: [ModelType; 3] = [ModelType::Text, ModelType::Image, ModelType::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Text => "text",
            ModelType::Image => "image",
            ModelType::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelType::Text => "Text Generation",
            ModelType::Image => "Image Generation",
            ModelType::Code => "Code Generation",
        }
    }
}

/// Requested tone of voice.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Creative,
    Casual,
    Technical,
    Persuasive,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Creative,
        Tone::Casual,
        Tone::Technical,
        Tone::Persuasive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Creative => "creative",
            Tone::Casual => "casual",
            Tone::Technical => "technical",
            Tone::Persuasive => "persuasive",
        }
    }
}

/// Validated optimizer input.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerRequest {
    pub goal: String,
    pub model_type: ModelType,
    pub tone: Option<Tone>,
    /// Creativity between 0.0 (focused) and 1.0 (creative).
    pub creativity: f64,
}

/// One generated prompt variant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OptimizedPrompt {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub model_type: ModelType,
    /// Advertised quality score in percent.
    pub quality: u8,
}

/// Fill the three fixed prompt templates with the request goal.
pub fn optimize(request: &OptimizerRequest) -> Vec<OptimizedPrompt> {
    let goal = request.goal.as_str();
    let model_type = request.model_type;

    vec![
        OptimizedPrompt {
            id: 1,
            title: "Creative & Detailed Prompt".to_string(),
            content: format!(
                "{goal}. Please provide a comprehensive, creative response that explores multiple angles and perspectives. Consider the context deeply and offer detailed explanations with examples."
            ),
            model_type,
            quality: 95,
        },
        OptimizedPrompt {
            id: 2,
            title: "Professional & Structured".to_string(),
            content: format!(
                "Acting as an expert in this field, {goal}. Structure your response with clear headings, bullet points, and actionable insights. Maintain a professional tone throughout."
            ),
            model_type,
            quality: 88,
        },
        OptimizedPrompt {
            id: 3,
            title: "Concise & Direct".to_string(),
            content: format!(
                "{goal}. Provide a clear, concise response that gets straight to the point. Focus on the most important aspects and avoid unnecessary elaboration."
            ),
            model_type,
            quality: 82,
        },
    ]
}
