//! Implicit conversions: ToString, ToNumber, ToBoolean, ToObject.

use crate::context::Context;
use crate::property::PropertyKey;
use crate::string::JsString;
use crate::value::{JsResult, JsValue};

/// ToString. Calling an object's own `toString` method, if it resolves to
/// a function, takes priority over the class-based fallback.
pub fn to_string(ctx: &mut Context, value: &JsValue) -> JsResult<JsString> {
    match value {
        JsValue::Number(n) => Ok(JsString::from(n.to_string())),
        JsValue::Boolean(b) => Ok(JsString::from(if *b { "true" } else { "false" })),
        JsValue::String(s) => Ok(s.clone()),
        JsValue::Undefined => Ok(JsString::from("[undefined]")),
        JsValue::Object(None) => Ok(JsString::from("[object]")),
        JsValue::Object(Some(id)) => {
            let key = PropertyKey::from("toString");
            let method = ctx.get_property(value, &key)?;
            if let Some(callee) = method.as_object_id() {
                if ctx.heap().get(callee).is_callable() {
                    let result = ctx.call(callee, value.clone(), &[])?;
                    return to_string(ctx, &result);
                }
            }
            if ctx.heap().get(*id).is_callable() {
                Ok(JsString::from("[function]"))
            } else {
                Ok(JsString::from("[object]"))
            }
        }
    }
}

/// ToNumber. Not a full ECMAScript conversion: strings are never parsed
/// here, matching the specification's deliberately narrowed semantics.
pub fn to_number(ctx: &mut Context, value: &JsValue) -> JsResult<i32> {
    match value {
        JsValue::Number(n) => Ok(*n),
        JsValue::Boolean(b) => Ok(if *b { 1 } else { 0 }),
        _ => Err(ctx.type_error(format!(
            "cannot convert {} to a number",
            value.tag_name()
        ))),
    }
}

/// ToBoolean.
pub fn to_boolean(value: &JsValue) -> bool {
    match value {
        JsValue::Number(n) => *n != 0,
        JsValue::String(s) => !s.is_empty(),
        JsValue::Boolean(b) => *b,
        JsValue::Object(id) => id.is_some(),
        JsValue::Undefined => false,
    }
}

/// ToObject. Wraps a primitive by invoking the matching global
/// constructor, pushing the primitive as the constructor's sole argument
/// exactly as any other constructor call would receive it.
pub fn to_object(ctx: &mut Context, value: &JsValue) -> JsResult<JsValue> {
    match value {
        JsValue::Object(_) => Ok(value.clone()),
        JsValue::Number(_) => {
            let ctor = ctx.global_binding("Number").expect("Number is always bootstrapped");
            ctx.invoke_constructor(ctor, &[value.clone()])
        }
        JsValue::String(_) => {
            let ctor = ctx.global_binding("String").expect("String is always bootstrapped");
            ctx.invoke_constructor(ctor, &[value.clone()])
        }
        JsValue::Boolean(_) | JsValue::Undefined => Err(ctx.type_error(format!(
            "cannot convert {} to an object",
            value.tag_name()
        ))),
    }
}
