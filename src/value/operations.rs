//! Arithmetic, relational, bitwise, `typeof` and `instanceof` (component C).

use crate::context::Context;
use crate::property::PropertyKey;
use crate::value::conversions::{to_number, to_string};
use crate::value::equality::strict_eq;
use crate::value::{JsResult, JsValue};

/// Binary `+`: string concatenation if either side is a string, numeric
/// addition (wrapping, matching host `i32` semantics) otherwise.
pub fn add(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    if matches!(a, JsValue::String(_)) || matches!(b, JsValue::String(_)) {
        let left = to_string(ctx, a)?;
        let right = to_string(ctx, b)?;
        Ok(JsValue::String(left.concat(&right)))
    } else {
        let left = to_number(ctx, a)?;
        let right = to_number(ctx, b)?;
        Ok(JsValue::Number(left.wrapping_add(right)))
    }
}

pub fn sub(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Number(to_number(ctx, a)?.wrapping_sub(to_number(ctx, b)?)))
}

pub fn mult(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Number(to_number(ctx, a)?.wrapping_mul(to_number(ctx, b)?)))
}

pub fn lt(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Boolean(to_number(ctx, a)? < to_number(ctx, b)?))
}

pub fn gt(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Boolean(to_number(ctx, a)? > to_number(ctx, b)?))
}

pub fn eq(a: &JsValue, b: &JsValue) -> JsValue {
    JsValue::Boolean(strict_eq(a, b))
}

pub fn neq(a: &JsValue, b: &JsValue) -> JsValue {
    JsValue::Boolean(!strict_eq(a, b))
}

pub fn bitwise_and(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Number(to_number(ctx, a)? & to_number(ctx, b)?))
}

pub fn bitwise_or(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Number(to_number(ctx, a)? | to_number(ctx, b)?))
}

pub fn bitwise_xor(ctx: &mut Context, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
    Ok(JsValue::Number(to_number(ctx, a)? ^ to_number(ctx, b)?))
}

/// `typeof`, with the `"function"` special case resolved by a heap lookup
/// on the object's class rather than by the tag alone.
pub fn type_of(ctx: &Context, value: &JsValue) -> &'static str {
    match value {
        JsValue::Object(Some(id)) if ctx.heap().get(*id).is_callable() => "function",
        other => other.tag_name(),
    }
}

/// `instanceof`. The right operand must be a callable object; its own
/// `prototype` property is walked against the left operand's prototype
/// chain.
pub fn instance_of(ctx: &mut Context, left: &JsValue, right: &JsValue) -> JsResult<JsValue> {
    let ctor_id = match right {
        JsValue::Object(Some(id)) if ctx.heap().get(*id).is_callable() => *id,
        _ => return Err(ctx.type_error("right-hand side of instanceof is not callable")),
    };
    let prototype_key = PropertyKey::from("prototype");
    let target = match ctx.heap().get(ctor_id).get_own(&prototype_key) {
        Some(JsValue::Object(Some(id))) => *id,
        _ => return Ok(JsValue::Boolean(false)),
    };

    let mut current = match left {
        JsValue::Object(Some(id)) => ctx.heap().get(*id).prototype(),
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
