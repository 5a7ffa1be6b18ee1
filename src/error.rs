// src/error.rs
// Error taxonomy for the relay. Frame-level parse failures are deliberately
// absent: a malformed frame is skipped by the decoder, never surfaced here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller asked for a persona key outside the catalog. Checked
    /// before any network I/O happens.
    #[error("unknown AI persona: {0}")]
    UnknownPersona(String),

    /// The completion endpoint could not be reached or rejected the request.
    #[error("completion endpoint unavailable: {0}")]
    UpstreamConnection(String),

    /// The byte stream failed mid-flight, or ended before the termination
    /// sentinel arrived.
    #[error("completion stream failed: {0}")]
    StreamIo(String),
}
