//! Main Entrypoint for the Riverwood Agent Worker
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment (fails fast on missing
//!    credentials, before any connection attempt).
//! 2. Initializing logging.
//! 3. Loading the persona script from the prompts directory.
//! 4. Running the worker entrypoint until the room disconnects or the
//!    process is cancelled.

use anyhow::Context;
use riverwood_agent::{config::Config, entry};
use riverwood_core::{backend::CannedSiteBackend, persona::PersonaConfig};
use std::{collections::HashMap, fs, sync::Arc};
use tracing::{error, info};

/// A helper function to load prompts from a directory.
fn load_prompts(prompts_path: &std::path::Path) -> anyhow::Result<HashMap<String, String>> {
    let mut prompts = HashMap::new();
    for entry in std::fs::read_dir(prompts_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("md") {
            let prompt_key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .context("Could not get file stem")?
                .to_string();
            let content = fs::read_to_string(&path)?;
            prompts.insert(prompt_key, content);
        }
    }
    Ok(prompts)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!(agent_name = %config.agent_name, "Configuration loaded");

    // --- 3. Load the Persona ---
    let prompts = load_prompts(&config.prompts_path).with_context(|| {
        format!(
            "Failed to read prompts directory {}",
            config.prompts_path.display()
        )
    })?;
    let instructions = prompts
        .get("persona")
        .context("persona.md not found in prompts directory")?
        .clone();
    let persona = PersonaConfig::new(instructions)
        .with_temperature(config.llm_temperature)
        .with_voice_id(&config.tts_voice_id)
        .with_language(&config.stt_language);

    // --- 4. Run the Worker ---
    let backend = Arc::new(CannedSiteBackend);
    if let Err(e) = entry::run(config, persona, backend).await {
        error!(error = ?e, "Agent worker terminated with error");
        return Err(e);
    }

    info!("Agent worker has shut down.");
    Ok(())
}
