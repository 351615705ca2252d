//! Session configuration sent to the room runtime at start.
//!
//! These structs describe the full configuration surface of one agent session:
//! which speech-to-text, language-model, and text-to-speech engines to run,
//! the persona instructions, and the tool schemas advertised to the model.
//! None of the identifiers are validated here; an invalid model or voice id
//! surfaces only as a failure from the external service.

use serde::{Deserialize, Serialize};

/// A transcription-bias hint: boost recognition of a keyword by a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordBias {
    pub keyword: String,
    pub weight: f32,
}

impl KeywordBias {
    fn new(keyword: &str, weight: f32) -> Self {
        Self {
            keyword: keyword.to_string(),
            weight,
        }
    }
}

/// The biasing hints shipped with the construction-site persona. Tuned for
/// Hinglish callers asking about Riverwood projects.
pub fn default_keyword_bias() -> Vec<KeywordBias> {
    vec![
        KeywordBias::new("Riverwood", 2.5),
        KeywordBias::new("Namaste", 2.5),
        KeywordBias::new("chai", 2.0),
        KeywordBias::new("project", 2.0),
        KeywordBias::new("construction", 2.0),
        KeywordBias::new("update", 2.0),
        KeywordBias::new("foundation", 2.0),
        KeywordBias::new("brickwork", 2.0),
        KeywordBias::new("cement", 2.0),
        KeywordBias::new("brick", 2.0),
        KeywordBias::new("workers", 2.0),
        KeywordBias::new("masons", 2.0),
        KeywordBias::new("visit", 2.0),
        KeywordBias::new("plot", 2.0),
    ]
}

/// Speech-to-text engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SttConfig {
    pub model: String,
    pub language: String,
    /// Stream interim transcription results for faster turn detection.
    pub interim_results: bool,
    /// Let the engine apply punctuation and number formatting.
    pub smart_format: bool,
    pub keywords: Vec<KeywordBias>,
}

/// Language-model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f32,
}

/// Text-to-speech engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsConfig {
    pub voice_id: String,
}

/// One tool as advertised to the language model: name, description, and a
/// JSON schema for its single string parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Everything the room runtime needs to run one agent session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    pub llm: LlmConfig,
    pub stt: SttConfig,
    pub tts: TtsConfig,
    /// Persona instructions consumed by the language model at session start.
    pub instructions: String,
    pub tools: Vec<ToolDescriptor>,
    /// Whether the caller may interrupt the agent mid-utterance.
    pub allow_interruptions: bool,
}
