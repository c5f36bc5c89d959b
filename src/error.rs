use thiserror::Error;

/// Failures reported by an LLM backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Transport failure, timeout, non-2xx status or an unreadable payload
    #[error("connection error: {0}")]
    Connection(String),

    /// Safety block or an empty completion
    #[error("response blocked")]
    Blocked,
}

/// Refusals from the permission gate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    #[error("compute access requires network access")]
    NetworkRequired,

    #[error("compute control is not available yet")]
    ComputeLocked,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScareError {
    #[error("a scare sequence is already running")]
    AlreadyRunning,
}

/// Refusals from the session controller's non-submit operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Scare(#[from] ScareError),

    #[error("session is busy")]
    Busy,

    #[error("session has ended")]
    Ended,

    #[error("developer view is not available in this phase")]
    DevViewUnavailable,

    #[error("developer view is not active")]
    NotDebugging,

    #[error("fragment cannot be removed yet")]
    YellPending,
}
