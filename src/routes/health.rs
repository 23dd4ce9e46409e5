//! Health check endpoint for orchestrator liveness checks.

/// Liveness check: always returns OK while the process is running.
pub async fn live() -> &'static str {
    "OK"
}
