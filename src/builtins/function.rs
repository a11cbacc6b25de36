//! `Function`, `Function.prototype.{call, apply}`.

use crate::context::Context;
use crate::property::PropertyKey;
use crate::value::{JsResult, JsValue};

/// `new Function(...)` / `Function(...)`: always throws, matching
/// `js_function_constructor`'s "cannot use Function constructor in
/// compiled code" — this runtime has no compiler front-end to hand a
/// function body to at run time.
pub fn constructor(_this: &JsValue, _args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    Err(ctx.type_error("Function constructor is not supported"))
}

/// `Function.prototype.call(thisArg, ...rest)`: re-dispatches `this`
/// (the function `.call` was invoked on) with `thisArg` as the receiver
/// and the remaining arguments forwarded.
pub fn prototype_call(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let this_arg = args.first().cloned().unwrap_or(JsValue::Undefined);
    let rest = if args.is_empty() { &[][..] } else { &args[1..] };
    ctx.call_value(this, this_arg, rest)
}

/// `Function.prototype.apply(thisArg, argsArray)`: reads `argsArray`'s
/// `length` and re-pushes its elements in forward order before
/// re-dispatching, matching `spec.md` §4.E.
pub fn prototype_apply(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let this_arg = args.first().cloned().unwrap_or(JsValue::Undefined);
    let array_like = args.get(1).cloned().unwrap_or(JsValue::Undefined);
    let spread = spread_array_like(ctx, &array_like)?;
    ctx.call_value(this, this_arg, &spread)
}

fn spread_array_like(ctx: &mut Context, value: &JsValue) -> JsResult<Vec<JsValue>> {
    if matches!(value, JsValue::Undefined | JsValue::Object(None)) {
        return Ok(Vec::new());
    }
    let length = match ctx.get_property(value, &PropertyKey::from("length"))? {
        JsValue::Number(n) => n.max(0) as usize,
        _ => 0,
    };
    // `length` comes from an arbitrary own property, not necessarily a real
    // Array's maintained length, so an attacker-controlled value must not
    // drive an unbounded allocation; cap it at the call stack's capacity,
    // the same bound `spec.md` §4.D names for marshalling an argument list.
    if length > ctx.call_stack().capacity() {
        return Err(ctx.type_error("apply's argument list length exceeds the call stack capacity"));
    }
    let mut elements = Vec::with_capacity(length);
    for index in 0..length {
        let key = PropertyKey::from(index.to_string().as_str());
        elements.push(ctx.get_property(value, &key)?);
    }
    Ok(elements)
}
