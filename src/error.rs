//! The two error universes the runtime distinguishes: [`JsValue`] for
//! user-observable JavaScript exceptions, and [`RuntimeError`] for the
//! host-fatal conditions the specification says the process must exit on.
//!
//! A `RuntimeError` is never caught by compiled `try`/`catch` scaffolding —
//! it can only originate from the handful of operations the specification
//! calls out as fatal (call-stack overflow, exception-stack overflow, GC
//! mark-stack overflow, and bootstrap I/O failure).

use thiserror::Error;

/// A condition that aborts the process rather than raising a catchable
/// exception.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("call stack overflow: {attempted} slots requested, {capacity} available")]
    CallStackOverflow { attempted: usize, capacity: usize },

    #[error("exception stack overflow: {capacity} nested try blocks already active")]
    ExceptionStackOverflow { capacity: usize },

    #[error("popped an exception frame from an empty exception stack")]
    ExceptionStackUnderflow,

    #[error("GC mark stack overflow: more than {depth} objects reachable from one root set")]
    GcMarkStackOverflow { depth: usize },

    #[error("failed to open built-in host resource {path:?}: {source}")]
    BootstrapIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The result type for runtime entry points that can fail fatally.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
