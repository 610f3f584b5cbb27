//! Port for structured conversation logging.
//!
//! Records dispatch events (commands, prompts, model responses, tool calls)
//! to a machine-readable transcript. This is separate from `tracing`, which
//! carries human-readable diagnostics.

use serde_json::Value;

/// A structured conversation event
pub struct ConversationEvent {
    /// Event type identifier (e.g., "dispatch_start", "model_response", "tool_call").
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible; write failures are dropped by the
/// adapter.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
