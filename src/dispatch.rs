//! Function call, method call, and constructor invocation (component E).

use crate::context::Context;
use crate::gc::ObjectId;
use crate::object::{FunctionKind, Object, ObjectClass};
use crate::property::PropertyKey;
use crate::value::conversions::to_object;
use crate::value::operations::type_of;
use crate::value::{JsResult, JsValue};

/// `call(fn, this, args)`. Throws a `TypeError` embedding `typeof fn` when
/// `fn` is not callable, otherwise forwards to the native function
/// pointer.
pub fn call(ctx: &mut Context, callee: &JsValue, this: JsValue, args: &[JsValue]) -> JsResult<JsValue> {
    let id = callable_id(ctx, callee)?;
    let function = ctx
        .heap()
        .get(id)
        .function()
        .cloned()
        .expect("callable_id only returns ids of Function-classed objects");
    match function.kind {
        FunctionKind::Native(native) => native(&this, args, ctx),
        FunctionKind::Compiled(_) => Err(ctx.type_error(
            "dispatch of a compiled function body is the embedding compiler's responsibility",
        )),
    }
}

/// `call_method(obj, key, args)`: ToObject-coerce `obj`, resolve `key`,
/// then call with `obj` as the receiver.
pub fn call_method(
    ctx: &mut Context,
    obj: &JsValue,
    key: &PropertyKey,
    args: &[JsValue],
) -> JsResult<JsValue> {
    let receiver = to_object(ctx, obj)?;
    let method = ctx.get_property(&receiver, key)?;
    match &method {
        JsValue::Undefined => {
            let described = crate::value::conversions::to_string(ctx, obj)?;
            Err(ctx.type_error(format!(
                "Object {} has no method '{}'",
                described, key.name()
            )))
        }
        JsValue::Object(Some(candidate)) if ctx.heap().get(*candidate).is_callable() => {
            call(ctx, &method, receiver, args)
        }
        _ => {
            let described = crate::value::conversions::to_string(ctx, obj)?;
            Err(ctx.type_error(format!(
                "Property '{}' of object {} is not a function",
                key.name(),
                described
            )))
        }
    }
}

/// `invoke_constructor(fn, args)`: allocate a fresh object whose prototype
/// is `fn.prototype` (falling back to the base `Object.prototype`), call
/// `fn` with it as the receiver, and return the call's result if it is an
/// object, the freshly allocated object otherwise.
pub fn invoke_constructor(ctx: &mut Context, callee: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
    let id = callable_id(ctx, callee)?;
    let prototype_key = PropertyKey::from("prototype");
    let proto = match ctx.heap().get(id).get_own(&prototype_key) {
        Some(JsValue::Object(Some(proto_id))) => *proto_id,
        _ => ctx.object_prototype_id(),
    };
    let new_object = ctx
        .heap_mut()
        .allocate(Object::new(ObjectClass::Plain, Some(proto)));
    let this = JsValue::Object(Some(new_object));
    let result = call(ctx, callee, this.clone(), args)?;
    match result {
        JsValue::Object(Some(_)) => Ok(result),
        _ => Ok(this),
    }
}

fn callable_id(ctx: &Context, value: &JsValue) -> JsResult<ObjectId> {
    match value {
        JsValue::Object(Some(id)) if ctx.heap().get(*id).is_callable() => Ok(*id),
        other => {
            let message = format!("{} is not a function", type_of(ctx, other));
            Err(ctx.type_error(message))
        }
    }
}
