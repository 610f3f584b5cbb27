//! Progress notification port
//!
//! Callbacks fired while a chat message is dispatched. Implementations live
//! in the presentation layer (spinner, plain log lines, ...).

/// Callback for progress updates during a dispatch
///
/// Every method has a no-op default so implementations only override what
/// they display.
pub trait DispatchProgressNotifier: Send + Sync {
    /// A task flow (or the conversational fallback) has started
    fn on_task_start(&self, _task: &str) {}

    /// A request is about to be sent to the model; `turn` is 1-based
    fn on_model_turn(&self, _turn: usize) {}

    /// The model asked for a tool
    fn on_tool_call(&self, _tool_name: &str) {}

    /// A tool finished
    fn on_tool_result(&self, _tool_name: &str, _success: bool, _duration_ms: u64) {}

    /// The task flow finished
    fn on_task_complete(&self, _task: &str, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoDispatchProgress;

impl DispatchProgressNotifier for NoDispatchProgress {}
