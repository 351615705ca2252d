//! Defines the wire protocol between the agent worker and the room runtime.
//!
//! The room runtime owns the audio transport, the speech/LLM/TTS engines, and
//! turn handling; this worker only configures a session, speaks scripted text,
//! answers tool calls, and observes lifecycle events.

use crate::session::events::ItemRole;
use crate::session::spec::SessionSpec;
use serde::{Deserialize, Serialize};

/// Messages sent from the agent worker to the room runtime.
#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Configures and starts the agent session. Must be the first message.
    SessionStart { spec: SessionSpec },
    /// Asks the runtime to synthesize and speak the given text.
    Say { text: String },
    /// Returns the output of a requested tool call.
    ToolResult { call_id: String, output: String },
}

/// Messages sent from the room runtime to the agent worker.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoomEvent {
    /// Acknowledges that the session is running.
    SessionStarted,
    /// A finalized transcription of the caller's speech.
    TranscriptFinal { text: String },
    /// A completed conversation item (caller or agent turn).
    ConversationItemAdded { role: ItemRole, text: String },
    /// The language model started generating a response.
    ResponseStarted,
    /// The response was fully rendered and spoken.
    ResponseFinished,
    /// The language model requested a tool call; the worker must answer with
    /// a `tool_result` before the runtime can finalize the turn.
    ToolCallRequested {
        call_id: String,
        name: String,
        arguments: serde_json::Value,
    },
    /// A runtime-side error report.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::spec::{LlmConfig, SttConfig, ToolDescriptor, TtsConfig};

    #[test]
    fn say_serializes_with_snake_case_tag() {
        let event = ClientEvent::Say {
            text: "Namaste Sir!".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(json["type"], "say");
        assert_eq!(json["text"], "Namaste Sir!");
    }

    #[test]
    fn session_start_carries_the_full_spec() {
        let event = ClientEvent::SessionStart {
            spec: SessionSpec {
                llm: LlmConfig {
                    model: "gemini-2.5-flash".to_string(),
                    temperature: 0.7,
                },
                stt: SttConfig {
                    model: "nova-2-general".to_string(),
                    language: "multi".to_string(),
                    interim_results: true,
                    smart_format: true,
                    keywords: vec![],
                },
                tts: TtsConfig {
                    voice_id: "adam".to_string(),
                },
                instructions: "You are Rahul.".to_string(),
                tools: vec![ToolDescriptor {
                    name: "get_team_update".to_string(),
                    description: "Crew updates.".to_string(),
                    parameters: serde_json::json!({"type": "object"}),
                }],
                allow_interruptions: true,
            },
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(json["type"], "session_start");
        assert_eq!(json["spec"]["llm"]["model"], "gemini-2.5-flash");
        assert_eq!(json["spec"]["tools"][0]["name"], "get_team_update");
        assert_eq!(json["spec"]["allow_interruptions"], true);
    }

    #[test]
    fn tool_call_requested_deserializes() {
        let event: RoomEvent = serde_json::from_str(
            r#"{
                "type": "tool_call_requested",
                "call_id": "call-7",
                "name": "check_material_status",
                "arguments": { "material_type": "Bricks" }
            }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            RoomEvent::ToolCallRequested {
                call_id: "call-7".to_string(),
                name: "check_material_status".to_string(),
                arguments: serde_json::json!({ "material_type": "Bricks" }),
            }
        );
    }

    #[test]
    fn conversation_item_role_accepts_unknown_values() {
        let event: RoomEvent = serde_json::from_str(
            r#"{ "type": "conversation_item_added", "role": "tool", "text": "done" }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            RoomEvent::ConversationItemAdded {
                role: ItemRole::Other,
                text: "done".to_string(),
            }
        );
    }
}
