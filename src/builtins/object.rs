//! `Object`, `Object.prototype.{isPrototypeOf, hasOwnProperty, toString}`.

use crate::context::Context;
use crate::property::PropertyKey;
use crate::value::{JsResult, JsValue};

/// `new Object()` (and a bare `Object()` call) both return the receiver
/// `invoke_constructor` already allocated with `Object.prototype` linked
/// in; there is nothing else for the constructor body to do.
pub fn constructor(this: &JsValue, _args: &[JsValue], _ctx: &mut Context) -> JsResult<JsValue> {
    Ok(this.clone())
}

/// `Object.prototype.isPrototypeOf(object)`: does `this` appear anywhere
/// in `object`'s prototype chain.
pub fn is_prototype_of(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let target = match this.as_object_id() {
        Some(id) => id,
        None => return Ok(JsValue::Boolean(false)),
    };
    let mut current = match args.first() {
        Some(JsValue::Object(Some(id))) => ctx.heap().get(*id).prototype(),
        _ => None,
    };
    while let Some(id) = current {
        if id == target {
            return Ok(JsValue::Boolean(true));
        }
        current = ctx.heap().get(id).prototype();
    }
    Ok(JsValue::Boolean(false))
}

/// `Object.prototype.hasOwnProperty(key)`.
pub fn has_own_property(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let key_string = ctx.to_string(args.first().unwrap_or(&JsValue::Undefined))?;
    let key = PropertyKey::from(key_string);
    let found = match this.as_object_id() {
        Some(id) => ctx.heap().get(id).get_own(&key).is_some(),
        None => false,
    };
    Ok(JsValue::Boolean(found))
}

/// `Object.prototype.toString()`: `"[function]"` for a `Function`-classed
/// receiver, `"[object]"` otherwise — this is the fallback
/// `value::conversions::to_string` calls through to once it resolves this
/// very property, per `spec.md` §4.C.
pub fn to_string(this: &JsValue, _args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    match this.as_object_id() {
        Some(id) if ctx.heap().get(id).is_callable() => Ok(JsValue::from("[function]")),
        Some(_) => Ok(JsValue::from("[object]")),
        None => Ok(JsValue::from("[object]")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_own_property_is_true_only_for_own_keys() {
        let mut ctx = Context::default();
        let obj = ctx.object();
        ctx.set_property(&obj, PropertyKey::from("x"), JsValue::Number(1))
            .unwrap();
        let has_x = has_own_property(&obj, &[JsValue::from("x")], &mut ctx).unwrap();
        let has_y = has_own_property(&obj, &[JsValue::from("y")], &mut ctx).unwrap();
        assert!(matches!(has_x, JsValue::Boolean(true)));
        assert!(matches!(has_y, JsValue::Boolean(false)));
    }

    #[test]
    fn is_prototype_of_walks_the_chain() {
        let mut ctx = Context::default();
        let object_prototype_id = ctx.object_prototype_id();
        let proto = JsValue::Object(Some(object_prototype_id));
        let child = ctx.object();
        let result = is_prototype_of(&proto, &[child], &mut ctx).unwrap();
        assert!(matches!(result, JsValue::Boolean(true)));
    }
}
