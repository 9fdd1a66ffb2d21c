//! Request pacing for the upstream rate limit.
//!
//! The common deployment allows one request per second; the pacer opens a
//! fixed window per request and sleeps only the part of the window the
//! request itself did not consume.

use std::time::Duration;

use tokio::time::Instant;

/// Paces detail requests to the upstream's rate limit.
#[derive(Debug)]
pub struct RequestPacer {
    window: Duration,
    last_request: Option<Instant>,
}

impl RequestPacer {
    /// ## Summary
    /// Creates a pacer with a window of `1 / rate_limit_per_sec` plus a
    /// buffer absorbing variation in the upstream's rate tracking.
    ///
    /// A zero rate is treated as one request per second.
    #[must_use]
    pub fn new(rate_limit_per_sec: u32, buffer_secs: u64) -> Self {
        Self {
            window: request_window(rate_limit_per_sec, buffer_secs),
            last_request: None,
        }
    }

    /// ## Summary
    /// Waits until the next request is allowed, then marks the window
    /// open.
    ///
    /// The first call waits a full window, in case a prior process made
    /// a request just before this one started.
    pub async fn pace(&mut self) {
        match self.last_request {
            None => tokio::time::sleep(self.window).await,
            Some(last) => {
                let elapsed = last.elapsed();
                if elapsed < self.window {
                    tokio::time::sleep(self.window - elapsed).await;
                }
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// Window length for one request at the given rate.
pub(crate) fn request_window(rate_limit_per_sec: u32, buffer_secs: u64) -> Duration {
    let rate = rate_limit_per_sec.max(1);
    Duration::from_secs(buffer_secs) + Duration::from_secs_f64(1.0 / f64::from(rate))
}
