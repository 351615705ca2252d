//! The worker entrypoint: a linear state machine from connect to teardown.
//!
//! Connect, assemble, start, greet, then listen until the room disconnects or
//! the worker is cancelled. Every transition is a sequential await, so the
//! greeting cannot be spoken before session start has completed. There is no
//! retry at any step; a failure before the listening loop is fatal and the
//! host supervisor is expected to restart the process.

use crate::{
    config::Config,
    room::{
        AgentRoom, LiveRoom,
        protocol::RoomEvent,
    },
    session::{
        assemble_session_spec,
        events::{LogObserver, ObserverSet, SessionEvent},
        spec::ToolDescriptor,
    },
};
use anyhow::{Context, Result, bail};
use riverwood_core::{
    agent::SiteDeskService,
    backend::SiteBackend,
    persona::{GREETING, PersonaConfig},
};
use rmcp::{
    ServiceExt,
    model::{CallToolRequestParam, RawContent},
    service::{RoleClient, RunningService},
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info};
use uuid::Uuid;

/// Connects to the room and runs one agent session to completion.
///
/// This is the whole life of the worker process: at most one session per
/// invocation, torn down when the room disconnects or `ctrl_c` fires.
pub async fn run(
    config: Config,
    persona: PersonaConfig,
    backend: Arc<dyn SiteBackend>,
) -> Result<()> {
    let session_id = Uuid::new_v4();
    let span = tracing::info_span!("agent_session", %session_id, agent_name = %config.agent_name);

    async move {
        info!("Starting Riverwood agent worker");
        let mut room = LiveRoom::connect(&config.room_url, &config.api_key, &config.api_secret)
            .await
            .context("Failed to establish room connection")?;

        run_session(&mut room, &config, &persona, backend, shutdown_signal()).await
    }
    .instrument(span)
    .await
}

/// Listens for the `Ctrl+C` signal to cancel the session cleanly.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
    }
}

/// Drives one session against an already connected room.
///
/// Generic over [`AgentRoom`] so the state machine can be tested against a
/// scripted room.
pub async fn run_session<R: AgentRoom>(
    room: &mut R,
    config: &Config,
    persona: &PersonaConfig,
    backend: Arc<dyn SiteBackend>,
    shutdown: impl Future<Output = ()> + Send,
) -> Result<()> {
    // Serve the tool router over an in-process duplex transport and collect
    // the descriptors the language model will see.
    let (mcp_client, tool_handle) = spawn_tool_service(backend).await?;
    let tools = advertised_tools(&mcp_client).await?;

    let spec = assemble_session_spec(config, persona, tools);
    room.start(spec)
        .await
        .context("Failed to start agent session")?;
    await_session_started(room).await?;
    info!("Agent session started");

    // Short pause so the caller's audio path settles before the greeting.
    tokio::time::sleep(config.greeting_delay).await;
    room.say(GREETING).await.context("Failed to send greeting")?;
    info!("Agent ready and waiting for caller input");

    let observers = ObserverSet::new(vec![Box::new(LogObserver)]);
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Agent session cancelled");
                break;
            }
            event = room.next_event() => match event {
                Some(RoomEvent::ToolCallRequested { call_id, name, arguments }) => {
                    let output = match call_tool(&mcp_client, &name, arguments).await {
                        Ok(text) => text,
                        Err(e) => {
                            error!(tool = %name, error = ?e, "Tool call failed");
                            format!("Tool {} is unavailable right now.", name)
                        }
                    };
                    room.send_tool_result(&call_id, &output).await?;
                }
                Some(RoomEvent::Error { message }) => {
                    error!(%message, "Room runtime reported an error");
                }
                Some(other) => {
                    if let Some(session_event) = to_session_event(other) {
                        observers.dispatch(&session_event);
                    }
                }
                None => {
                    info!("Room disconnected; session over");
                    break;
                }
            }
        }
    }

    tool_handle.abort();
    info!("Agent session terminated");
    Ok(())
}

/// Spawns the site-desk tool service and returns a client connected to it.
async fn spawn_tool_service(
    backend: Arc<dyn SiteBackend>,
) -> Result<(RunningService<RoleClient, ()>, JoinHandle<()>)> {
    let service = SiteDeskService::new(backend);
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let tool_handle = tokio::spawn(async move {
        if let Ok(running) = service.serve(server_transport).await {
            let _ = running.waiting().await;
        }
    });
    let mcp_client = ().serve(client_transport).await?;
    Ok((mcp_client, tool_handle))
}

/// Collects the tool descriptors advertised to the language model.
async fn advertised_tools(
    mcp_client: &RunningService<RoleClient, ()>,
) -> Result<Vec<ToolDescriptor>> {
    mcp_client
        .list_all_tools()
        .await?
        .into_iter()
        .map(|t| {
            Ok(ToolDescriptor {
                name: t.name.to_string(),
                description: t.description.unwrap_or_default().to_string(),
                parameters: serde_json::to_value(&*t.input_schema)?,
            })
        })
        .collect()
}

/// Waits for the runtime's `session_started` acknowledgement.
async fn await_session_started<R: AgentRoom>(room: &mut R) -> Result<()> {
    loop {
        match room.next_event().await {
            Some(RoomEvent::SessionStarted) => return Ok(()),
            Some(RoomEvent::Error { message }) => {
                bail!("Room rejected session start: {}", message)
            }
            Some(other) => info!(?other, "Ignoring pre-start room event"),
            None => bail!("Room disconnected during session start"),
        }
    }
}

/// Executes one tool call through the MCP client and extracts the text result.
async fn call_tool(
    mcp_client: &RunningService<RoleClient, ()>,
    name: &str,
    arguments: serde_json::Value,
) -> Result<String> {
    let result = mcp_client
        .peer()
        .call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
        })
        .await?;

    let annotated_content = result
        .content
        .context("Tool call returned no content")?
        .pop()
        .context("Content list was empty")?;
    match annotated_content.raw {
        RawContent::Text(text_content) => Ok(text_content.text),
        _ => bail!("Unexpected content type from tool"),
    }
}

/// Maps observable room events onto the structured session event record.
fn to_session_event(event: RoomEvent) -> Option<SessionEvent> {
    match event {
        RoomEvent::TranscriptFinal { text } => Some(SessionEvent::TranscriptFinal { text }),
        RoomEvent::ConversationItemAdded { role, text } => {
            Some(SessionEvent::ConversationItem { role, text })
        }
        RoomEvent::ResponseStarted => Some(SessionEvent::ResponseStarted),
        RoomEvent::ResponseFinished => Some(SessionEvent::ResponseFinished),
        _ => None,
    }
}
