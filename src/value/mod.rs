//! The tagged value model (component C).
//!
//! `JsValue` is a cheap-to-copy discriminated union. `Function` and `Array`
//! are not tags of their own — per the specification, "is this a
//! function?" is "tag = Object ∧ reference ≠ null ∧ class = Function",
//! answered by consulting the heap rather than the tag.

pub mod conversions;
pub mod equality;
pub mod operations;

use crate::gc::ObjectId;
use crate::string::JsString;

/// A JavaScript exception propagated as a catchable Rust error, per the
/// specification's first error category. `RuntimeError` (the host-fatal
/// category) is a different type entirely; the two are never conflated.
pub type JsResult<T> = Result<T, JsValue>;

#[derive(Clone, Debug, PartialEq)]
pub enum JsValue {
    Undefined,
    Number(i32),
    String(JsString),
    Boolean(bool),
    /// `None` is the JavaScript `null` — an Object-tagged value with no
    /// reference, not the same value as `Undefined`.
    Object(Option<ObjectId>),
}

impl JsValue {
    pub fn null() -> Self {
        JsValue::Object(None)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Object(None))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            JsValue::Object(Some(id)) => Some(*id),
            _ => None,
        }
    }

    /// The name `typeof` would report, except for the `"function"`
    /// special case which needs a heap lookup and is handled by
    /// `operations::type_of`.
    pub(crate) fn tag_name(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Boolean(_) => "boolean",
            JsValue::Object(_) => "object",
        }
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(n)
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<JsString> for JsValue {
    fn from(s: JsString) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(JsString::from(s))
    }
}

impl From<ObjectId> for JsValue {
    fn from(id: ObjectId) -> Self {
        JsValue::Object(Some(id))
    }
}
