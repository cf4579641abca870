// ─────────────────────────────────────────────────────────────────────
// MASS Takeover Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for the takeover kernel.
///
/// The decision path itself never errors: out-of-range inputs are
/// clamped and domain failures (not underway, cold start, zero margin)
/// are explicit result variants. Errors are reserved for configuration
/// problems surfaced at construction time.
#[derive(Error, Debug)]
pub enum TakeoverError {
    /// Configuration invalid or unparsable.
    #[error("config error: {0}")]
    Config(String),
}

pub type TakeoverResult<T> = Result<T, TakeoverError>;
