//! Session assembly: one fully configured agent session from config + persona.

pub mod events;
pub mod spec;

use crate::config::Config;
use riverwood_core::persona::PersonaConfig;
use spec::{LlmConfig, SessionSpec, SttConfig, ToolDescriptor, TtsConfig, default_keyword_bias};

/// Produces the session specification sent to the room runtime.
///
/// Model names come from the environment config, delivery tunables from the
/// persona, and the tool descriptors from the advertised tool router. No
/// validation happens here; bad identifiers fail at the external service.
pub fn assemble_session_spec(
    config: &Config,
    persona: &PersonaConfig,
    tools: Vec<ToolDescriptor>,
) -> SessionSpec {
    SessionSpec {
        llm: LlmConfig {
            model: config.llm_model.clone(),
            temperature: persona.temperature,
        },
        stt: SttConfig {
            model: config.stt_model.clone(),
            language: persona.language.clone(),
            interim_results: true,
            smart_format: true,
            keywords: default_keyword_bias(),
        },
        tts: TtsConfig {
            voice_id: persona.voice_id.clone(),
        },
        instructions: persona.instructions.clone(),
        tools,
        allow_interruptions: true,
    }
}
