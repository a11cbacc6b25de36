//! `console.{log, error}`, grounded on the teacher's `builtins::console`
//! (same responsibility, narrowed to the two methods `spec.md` §6 names).

use crate::context::Context;
use crate::value::{JsResult, JsValue};

pub fn install(ctx: &mut Context) {
    let console = ctx.object();
    let log_fn = ctx.create_native_function(log);
    let error_fn = ctx.create_native_function(error);
    if let Some(id) = console.as_object_id() {
        ctx.heap_mut().get_mut(id).add_own_str("log", JsValue::Object(Some(log_fn)));
        ctx.heap_mut()
            .get_mut(id)
            .add_own_str("error", JsValue::Object(Some(error_fn)));
    }
    ctx.set_global_binding("console", console);
}

/// `console.log(value)`: prints `ToString(value)` to stdout, with a
/// trailing newline.
pub fn log(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let text = ctx.to_string(args.first().unwrap_or(&JsValue::Undefined))?;
    println!("{}", text);
    Ok(JsValue::Undefined)
}

/// `console.error(value)`: the same, to stderr.
pub fn error(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let text = ctx.to_string(args.first().unwrap_or(&JsValue::Undefined))?;
    eprintln!("{}", text);
    Ok(JsValue::Undefined)
}
