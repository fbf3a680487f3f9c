//! Sinks for the `LOG` built-in.
//!
//! The host decides where logged values go:
//! - Tracing: an `info` event under the `rulang::log` target (default)
//! - Buffer: captured in memory for assertions
//! - Callback: forwarded to a host closure
//! - Silent: discarded
//!
//! Uses enum dispatch; the handler is shared through an `Arc`.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

/// Target of the events emitted by [`LogHandler::Tracing`].
pub const LOG_TARGET: &str = "rulang::log";

/// Log handler that captures values in memory.
#[derive(Default)]
pub struct BufferLogHandler {
    entries: Mutex<Vec<Value>>,
}

impl BufferLogHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, value: &Value) {
        self.entries.lock().push(value.clone());
    }

    /// Every value logged so far, oldest first.
    pub fn entries(&self) -> Vec<Value> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Host closure receiving each logged value.
pub type LogCallback = Box<dyn Fn(&Value) + Send + Sync>;

/// Log handler implementation using enum dispatch.
pub enum LogHandler {
    /// Emits a `tracing::info!` event per value.
    Tracing,
    /// Captures to a buffer.
    Buffer(BufferLogHandler),
    /// Calls back into the host.
    Callback(LogCallback),
    /// Discards everything.
    Silent,
}

impl LogHandler {
    pub fn log(&self, value: &Value) {
        match self {
            Self::Tracing => tracing::info!(target: LOG_TARGET, value = %value, "LOG"),
            Self::Buffer(h) => h.log(value),
            Self::Callback(f) => f(value),
            Self::Silent => {}
        }
    }

    /// Captured values.
    ///
    /// Empty for handlers that don't capture.
    pub fn entries(&self) -> Vec<Value> {
        match self {
            Self::Buffer(h) => h.entries(),
            Self::Tracing | Self::Callback(_) | Self::Silent => Vec::new(),
        }
    }

    /// Captured values rendered one per line.
    pub fn output(&self) -> String {
        self.entries()
            .iter()
            .map(|value| format!("{value}\n"))
            .collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

impl fmt::Debug for LogHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tracing => "Tracing",
            Self::Buffer(_) => "Buffer",
            Self::Callback(_) => "Callback",
            Self::Silent => "Silent",
        };
        f.write_str(name)
    }
}

/// Shared log handler that can be passed around.
pub type SharedLogHandler = Arc<LogHandler>;

/// Default handler: forwards to `tracing`.
pub fn tracing_handler() -> SharedLogHandler {
    Arc::new(LogHandler::Tracing)
}

/// Handler capturing values for later inspection.
pub fn buffer_handler() -> SharedLogHandler {
    Arc::new(LogHandler::Buffer(BufferLogHandler::new()))
}

/// Handler forwarding each value to `f`.
pub fn callback_handler(f: impl Fn(&Value) + Send + Sync + 'static) -> SharedLogHandler {
    Arc::new(LogHandler::Callback(Box::new(f)))
}

/// Handler that discards all values.
pub fn silent_handler() -> SharedLogHandler {
    Arc::new(LogHandler::Silent)
}
