use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
///
/// The three room credentials are required and checked here, before any
/// connection attempt; everything else has a default matching the shipping
/// deployment.
#[derive(Clone, Debug)]
pub struct Config {
    pub room_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub agent_name: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub stt_model: String,
    pub stt_language: String,
    pub tts_voice_id: String,
    pub greeting_delay: Duration,
    pub log_level: Level,
    pub prompts_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let room_url = std::env::var("LIVEKIT_URL")
            .map_err(|_| ConfigError::MissingVar("LIVEKIT_URL".to_string()))?;
        let api_key = std::env::var("LIVEKIT_API_KEY")
            .map_err(|_| ConfigError::MissingVar("LIVEKIT_API_KEY".to_string()))?;
        let api_secret = std::env::var("LIVEKIT_API_SECRET")
            .map_err(|_| ConfigError::MissingVar("LIVEKIT_API_SECRET".to_string()))?;

        let agent_name =
            std::env::var("AGENT_NAME").unwrap_or_else(|_| "riverwood-agent".to_string());

        let llm_model =
            std::env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let llm_temperature_str =
            std::env::var("LLM_TEMPERATURE").unwrap_or_else(|_| "0.7".to_string());
        let llm_temperature = llm_temperature_str.parse::<f32>().map_err(|e| {
            ConfigError::InvalidValue("LLM_TEMPERATURE".to_string(), e.to_string())
        })?;

        let stt_model =
            std::env::var("STT_MODEL").unwrap_or_else(|_| "nova-2-general".to_string());
        let stt_language = std::env::var("STT_LANGUAGE").unwrap_or_else(|_| "multi".to_string());

        let tts_voice_id = std::env::var("TTS_VOICE_ID")
            .unwrap_or_else(|_| riverwood_core::persona::DEFAULT_VOICE_ID.to_string());

        let greeting_delay_str =
            std::env::var("GREETING_DELAY_MS").unwrap_or_else(|_| "1500".to_string());
        let greeting_delay_ms = greeting_delay_str.parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue("GREETING_DELAY_MS".to_string(), e.to_string())
        })?;
        let greeting_delay = Duration::from_millis(greeting_delay_ms);

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let prompts_path = std::env::var("PROMPTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./prompts"));

        Ok(Self {
            room_url,
            api_key,
            api_secret,
            agent_name,
            llm_model,
            llm_temperature,
            stt_model,
            stt_language,
            tts_voice_id,
            greeting_delay,
            log_level,
            prompts_path,
        })
    }
}
