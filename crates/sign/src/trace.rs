//! Optional structured events
//!
//! With the `trace` feature the macro forwards to `tracing::debug!`; without
//! it the invocation expands to nothing. Never pass secret material.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        {
            tracing::debug!(target: "edsig::ed25519", $($arg)*);
        }
    };
}
