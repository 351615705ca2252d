//! WebSocket-backed implementation of [`AgentRoom`].

use super::{
    AgentRoom,
    protocol::{ClientEvent, RoomEvent},
};
use crate::session::spec::SessionSpec;
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{client::IntoClientRequest, protocol::Message as WsMessage},
};
use tracing::{error, info, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The production room connection over a secure WebSocket.
pub struct LiveRoom {
    tx: SplitSink<WsStream, WsMessage>,
    rx: SplitStream<WsStream>,
}

impl LiveRoom {
    /// Establishes the room connection with the given credentials.
    ///
    /// Credentials are presumed present; missing ones are rejected by config
    /// loading before this runs. Connection failures are fatal to the worker,
    /// there is no retry here.
    pub async fn connect(url: &str, api_key: &str, api_secret: &str) -> Result<Self> {
        let mut request = url
            .into_client_request()
            .context("Invalid room service URL")?;
        request.headers_mut().insert("X-Api-Key", api_key.parse()?);
        request
            .headers_mut()
            .insert("X-Api-Secret", api_secret.parse()?);

        let (ws_stream, _) = connect_async(request)
            .await
            .context("Failed to connect to the room service")?;
        info!("Connected to realtime room");

        let (tx, rx) = ws_stream.split();
        Ok(Self { tx, rx })
    }

    async fn send(&mut self, event: &ClientEvent) -> Result<()> {
        let serialized = serde_json::to_string(event)?;
        self.tx.send(WsMessage::Text(serialized.into())).await?;
        Ok(())
    }
}

#[async_trait]
impl AgentRoom for LiveRoom {
    async fn start(&mut self, spec: SessionSpec) -> Result<()> {
        self.send(&ClientEvent::SessionStart { spec }).await
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.send(&ClientEvent::Say {
            text: text.to_string(),
        })
        .await
    }

    async fn send_tool_result(&mut self, call_id: &str, output: &str) -> Result<()> {
        self.send(&ClientEvent::ToolResult {
            call_id: call_id.to_string(),
            output: output.to_string(),
        })
        .await
    }

    async fn next_event(&mut self) -> Option<RoomEvent> {
        while let Some(msg_result) = self.rx.next().await {
            match msg_result {
                Ok(WsMessage::Text(text)) => match serde_json::from_str::<RoomEvent>(&text) {
                    Ok(event) => return Some(event),
                    Err(e) => warn!(error = %e, "Ignoring unparseable room event"),
                },
                Ok(WsMessage::Close(_)) => {
                    info!("Room sent close frame");
                    return None;
                }
                Ok(WsMessage::Ping(_) | WsMessage::Pong(_)) => {}
                Ok(other) => warn!(?other, "Ignoring unexpected room frame"),
                Err(e) => {
                    error!(error = %e, "Error receiving from room socket");
                    return None;
                }
            }
        }
        None
    }
}
