//! Artificial response latency.

use std::time::Duration;

/// Waits for `delay` before a use case resolves. Zero returns immediately.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
