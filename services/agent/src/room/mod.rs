//! The narrow interface to the external real-time room runtime.
//!
//! Session lifecycle, audio transport, speech engines, and interruption
//! handling are owned by the room service; this module only exposes the
//! connect / start / say / tool-result / event primitives the worker calls.

pub mod protocol;

mod live;

pub use live::LiveRoom;

use anyhow::Result;
use async_trait::async_trait;
use protocol::RoomEvent;

use crate::session::spec::SessionSpec;

/// One active connection to one real-time room.
///
/// The trait exists so the entrypoint state machine can be exercised against
/// a scripted room in tests; `LiveRoom` is the production implementation.
#[async_trait]
pub trait AgentRoom: Send {
    /// Configures and starts the agent session.
    async fn start(&mut self, spec: SessionSpec) -> Result<()>;

    /// Asks the runtime to speak the given text.
    async fn say(&mut self, text: &str) -> Result<()>;

    /// Answers a pending tool call.
    async fn send_tool_result(&mut self, call_id: &str, output: &str) -> Result<()>;

    /// Waits for the next runtime event. `None` means the room disconnected.
    async fn next_event(&mut self) -> Option<RoomEvent>;
}
