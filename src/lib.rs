//! `jsrt`: the runtime support library targeted by a JavaScript-to-native
//! compiler — tagged values, prototype objects, call dispatch, exception
//! unwinding, and a mark-and-sweep collector, threaded explicitly through
//! a [`Context`] rather than hidden behind process-wide statics.
//!
//! Compiled code issues calls against [`Context`]'s inherent methods
//! (component E's `call`/`call_method`/`invoke_constructor`, component
//! B's `get_property`/`set_property`, and so on); this crate supplies
//! their implementations and the built-in global object they operate on.

pub mod builtins;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod exception;
pub mod gc;
pub mod hash;
pub mod object;
pub mod profiler;
pub mod property;
pub mod stack;
pub mod string;
pub mod value;

pub use context::Context;
pub use error::{RuntimeError, RuntimeResult};
pub use gc::ObjectId;
pub use object::{FunctionData, FunctionKind, NativeFunction, ObjectClass};
pub use property::PropertyKey;
pub use string::JsString;
pub use value::{JsResult, JsValue};
