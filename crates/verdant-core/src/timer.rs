//! Delay primitive for scheduled transitions.
//!
//! The page drives timers from the browser event loop, the CLI and tests
//! from tokio. Flows that wait take a [`Timer`] so both can run them.

use std::future::Future;
use std::time::Duration;

/// Something that can wait for a fixed delay
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Timer backed by `tokio::time`; honours a paused test clock.
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "tokio")]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
