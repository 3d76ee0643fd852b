// The variant names *where* things went wrong; the payload carries the
// platform's own message. Both are fatal: there is no recovery path once
// the window is gone.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing the buffer to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),
}
