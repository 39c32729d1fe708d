/// Structured fields attached to every attempt log entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AttemptContext<'a> {
    /// Zero-based attempt index.
    pub attempt: usize,
    /// Fully resolved request URL.
    pub endpoint: &'a str,
    /// JSON-encoded request payload.
    pub payload: &'a str,
}

impl AttemptContext<'_> {
    /// Renders `"Attempt {n}: {detail}. Endpoint: {url}, Payload: {json}"`.
    pub fn message(&self, detail: &str) -> String {
        format!(
            "Attempt {}: {detail}. Endpoint: {}, Payload: {}",
            self.attempt, self.endpoint, self.payload
        )
    }
}

/// Receives one entry per failed attempt.
pub trait AttemptLogger: Send + Sync {
    fn warning(&self, message: &str, context: &AttemptContext<'_>);
    fn error(&self, message: &str, context: &AttemptContext<'_>);
}

/// Emits attempt entries as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl AttemptLogger for TracingLogger {
    fn warning(&self, message: &str, context: &AttemptContext<'_>) {
        tracing::warn!(
            attempt = context.attempt,
            endpoint = context.endpoint,
            payload = context.payload,
            "{message}"
        );
    }

    fn error(&self, message: &str, context: &AttemptContext<'_>) {
        tracing::error!(
            attempt = context.attempt,
            endpoint = context.endpoint,
            payload = context.payload,
            "{message}"
        );
    }
}
