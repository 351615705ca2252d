//! Session lifecycle events and the observer interface.
//!
//! Observers receive a structured event record rather than capturing an
//! ambient logger in closures. Dispatch swallows observer errors: a defect in
//! a logging hook must never break the conversation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Who produced a conversation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRole {
    User,
    Assistant,
    #[serde(other)]
    Other,
}

/// A structured record of one session lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A finalized transcription of the caller's speech.
    TranscriptFinal { text: String },
    /// A completed item was added to the conversation history.
    ConversationItem { role: ItemRole, text: String },
    /// The agent started generating a response.
    ResponseStarted,
    /// The agent finished its response.
    ResponseFinished,
}

/// A named callback interface for session lifecycle events.
///
/// Implementations observe only; they never alter control flow, and any error
/// they return is logged locally by the dispatcher.
pub trait SessionObserver: Send + Sync {
    fn on_event(&self, event: &SessionEvent) -> anyhow::Result<()>;
}

/// The set of observers registered on a session.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Box<dyn SessionObserver>>,
}

impl ObserverSet {
    pub fn new(observers: Vec<Box<dyn SessionObserver>>) -> Self {
        Self { observers }
    }

    /// Delivers an event to every observer. Observer errors are logged and
    /// dropped here, never propagated to the session loop.
    pub fn dispatch(&self, event: &SessionEvent) {
        for observer in &self.observers {
            if let Err(e) = observer.on_event(event) {
                warn!(error = ?e, ?event, "Session observer failed; ignoring");
            }
        }
    }
}

/// The production observer: mirrors session events into the tracing log.
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn on_event(&self, event: &SessionEvent) -> anyhow::Result<()> {
        match event {
            SessionEvent::TranscriptFinal { text } => info!(transcript = %text, "Caller said"),
            SessionEvent::ConversationItem { role, text } => match role {
                ItemRole::Assistant => info!(text = %text, "Agent said"),
                ItemRole::User => info!(text = %text, "Caller message"),
                ItemRole::Other => info!(text = %text, "Conversation item"),
            },
            SessionEvent::ResponseStarted => info!("Agent started processing response"),
            SessionEvent::ResponseFinished => info!("Agent finished response"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingObserver {
        seen: Arc<AtomicUsize>,
    }

    impl SessionObserver for CountingObserver {
        fn on_event(&self, _event: &SessionEvent) -> anyhow::Result<()> {
            self.seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingObserver;

    impl SessionObserver for FailingObserver {
        fn on_event(&self, _event: &SessionEvent) -> anyhow::Result<()> {
            anyhow::bail!("observer defect")
        }
    }

    #[test]
    fn dispatch_reaches_every_observer() {
        let seen = Arc::new(AtomicUsize::new(0));
        let set = ObserverSet::new(vec![
            Box::new(CountingObserver { seen: seen.clone() }),
            Box::new(CountingObserver { seen: seen.clone() }),
        ]);
        set.dispatch(&SessionEvent::ResponseStarted);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failing_observer_does_not_block_later_observers() {
        let seen = Arc::new(AtomicUsize::new(0));
        let set = ObserverSet::new(vec![
            Box::new(FailingObserver),
            Box::new(CountingObserver { seen: seen.clone() }),
        ]);
        set.dispatch(&SessionEvent::TranscriptFinal {
            text: "namaste".to_string(),
        });
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn log_observer_handles_every_variant() {
        let observer = LogObserver;
        for event in [
            SessionEvent::TranscriptFinal {
                text: "kab tak hoga".to_string(),
            },
            SessionEvent::ConversationItem {
                role: ItemRole::Assistant,
                text: "Sab on track hai Sir".to_string(),
            },
            SessionEvent::ConversationItem {
                role: ItemRole::User,
                text: "update chahiye".to_string(),
            },
            SessionEvent::ResponseStarted,
            SessionEvent::ResponseFinished,
        ] {
            observer.on_event(&event).unwrap();
        }
    }
}
