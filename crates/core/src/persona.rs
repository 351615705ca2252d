//! Persona Configuration
//!
//! The agent's voice persona is pure data: a block of instruction text handed
//! to the language model at session start, plus the small set of tunables that
//! shape how it sounds. Loaded once at process start and never mutated.

use serde::{Deserialize, Serialize};

/// Default sampling temperature for the language model.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default text-to-speech voice (ElevenLabs "Adam", available on all accounts).
pub const DEFAULT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";
/// Default transcription language mode. "multi" is required for Hinglish.
pub const DEFAULT_LANGUAGE: &str = "multi";

/// The scripted opening line, spoken once after the session starts.
pub const GREETING: &str =
    "Namaste Sir! Rahul bol raha hoon Riverwood Projects se. Aapka din kaisa hai?";

/// Immutable persona: instruction text plus the tunables that shape delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// System instructions consumed by the language model at session start.
    pub instructions: String,
    /// LLM sampling temperature.
    pub temperature: f32,
    /// Text-to-speech voice identifier.
    pub voice_id: String,
    /// Transcription language mode ("multi" enables mixed Hindi/English).
    pub language: String,
}

impl PersonaConfig {
    /// Builds a persona from instruction text with the default tunables.
    pub fn new(instructions: String) -> Self {
        Self {
            instructions,
            temperature: DEFAULT_TEMPERATURE,
            voice_id: DEFAULT_VOICE_ID.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Overrides the text-to-speech voice.
    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    /// Overrides the transcription language mode.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipping_persona() {
        let persona = PersonaConfig::new("Be brief.".to_string());
        assert_eq!(persona.instructions, "Be brief.");
        assert_eq!(persona.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(persona.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(persona.language, "multi");
    }

    #[test]
    fn builder_overrides_apply() {
        let persona = PersonaConfig::new(String::new())
            .with_temperature(0.2)
            .with_voice_id("custom-voice")
            .with_language("en");
        assert_eq!(persona.temperature, 0.2);
        assert_eq!(persona.voice_id, "custom-voice");
        assert_eq!(persona.language, "en");
    }
}
