//! Runtime tuning constants, gathered into one `RuntimeConfig` instead of
//! being scattered `#define`s, mirroring how the teacher's `Context`
//! separates "how big to make things" from the rest of bootstrap.

/// The default call-stack capacity (`JS_CALL_STACK_SIZE` in the original).
pub const DEFAULT_CALL_STACK_CAPACITY: usize = 8192;

/// The default exception-stack capacity (`JS_EXCEPTION_STACK_SIZE`).
pub const DEFAULT_EXCEPTION_STACK_CAPACITY: usize = 1024;

/// The default GC mark-stack depth (`JS_GC_STACK_DEPTH`).
pub const DEFAULT_GC_MARK_STACK_DEPTH: usize = 4096;

/// The default object-count threshold below which the GC never triggers
/// itself (`JS_GC_THRESHOLD`).
pub const DEFAULT_GC_THRESHOLD: usize = 65536;

/// Tunables for one [`crate::context::Context`].
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Capacity of the variadic argument call stack (component D).
    pub call_stack_capacity: usize,
    /// Capacity of the exception-frame stack (component F).
    pub exception_stack_capacity: usize,
    /// Depth of the explicit mark stack used during GC tracing (component H).
    pub gc_mark_stack_depth: usize,
    /// `gc_should_run` never fires below this many live objects.
    pub gc_threshold: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            call_stack_capacity: DEFAULT_CALL_STACK_CAPACITY,
            exception_stack_capacity: DEFAULT_EXCEPTION_STACK_CAPACITY,
            gc_mark_stack_depth: DEFAULT_GC_MARK_STACK_DEPTH,
            gc_threshold: DEFAULT_GC_THRESHOLD,
        }
    }
}
