//! `TypeError` and `ReferenceError` — the only two exception kinds the
//! runtime itself raises (`spec.md` §7). Not in §4.I's enumerated install
//! order, but both must exist for `Context::type_error`/`reference_error`
//! to have anything to invoke; grounded on the teacher's
//! `builtins::error::{type, reference}` modules, narrowed to the one
//! `message` property this runtime's error values carry.

use crate::context::Context;
use crate::value::{JsResult, JsValue};

pub fn install(ctx: &mut Context, name: &'static str) {
    let native = match name {
        "TypeError" => type_error_constructor,
        "ReferenceError" => reference_error_constructor,
        other => unreachable!("no constructor registered for error kind {other}"),
    };
    let id = ctx.create_native_function(native);
    ctx.set_global_binding(name, JsValue::Object(Some(id)));
}

fn type_error_constructor(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    constructor(this, args, ctx, "TypeError")
}

fn reference_error_constructor(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    constructor(this, args, ctx, "ReferenceError")
}

fn constructor(this: &JsValue, args: &[JsValue], ctx: &mut Context, name: &'static str) -> JsResult<JsValue> {
    if let Some(id) = this.as_object_id() {
        let message = match args.first() {
            Some(value) if !value.is_undefined() => ctx.to_string(value)?,
            _ => crate::string::JsString::from(""),
        };
        let object = ctx.heap_mut().get_mut(id);
        object.set_own_str("name", JsValue::from(name));
        object.set_own_str("message", JsValue::String(message));
    }
    Ok(this.clone())
}
