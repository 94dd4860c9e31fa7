//! Browser-level navigation helpers.

use std::time::Duration;

/// Wait without blocking the UI thread.
pub async fn delay(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Full page load of `href`, so the server-side gate runs again.
pub fn hard_navigate(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(%href, "navigation requested outside the browser");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delay_waits_at_least_the_duration() {
        let start = std::time::Instant::now();
        delay(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
