//! `String`, `String.prototype.{valueOf, toString, charAt, substring,
//! indexOf, slice}`. `length` on a `String` primitive is serviced
//! directly by `object::get_property`, per `spec.md` §4.B, not here.

use crate::context::Context;
use crate::string::JsString;
use crate::value::{JsResult, JsValue};

pub fn constructor(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let s = match args.first() {
        Some(value) => ctx.to_string(value)?,
        None => JsString::from(""),
    };
    if let Some(id) = this.as_object_id() {
        let len = s.len() as i32;
        let object = ctx.heap_mut().get_mut(id);
        object.set_primitive(JsValue::String(s));
        object.set_own_str("length", JsValue::Number(len));
    }
    Ok(this.clone())
}

pub fn value_of(this: &JsValue, _args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    wrapped_primitive(this, ctx).map(JsValue::String)
}

pub fn to_string(this: &JsValue, _args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    wrapped_primitive(this, ctx).map(JsValue::String)
}

/// `charAt(index)`: `Undefined` for an out-of-range index, per `spec.md`
/// §8's boundary scenario.
pub fn char_at(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let s = wrapped_primitive(this, ctx)?;
    let index = match args.first() {
        Some(value) => ctx.to_number(value)?,
        None => 0,
    };
    if index < 0 {
        return Ok(JsValue::Undefined);
    }
    Ok(match s.char_at(index as usize) {
        Some(ch) => JsValue::String(ch),
        None => JsValue::Undefined,
    })
}

/// `substring(from, to)`: `to` clamps to the string's length, defaulting
/// to it when omitted.
pub fn substring(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let s = wrapped_primitive(this, ctx)?;
    let from = match args.first() {
        Some(value) => ctx.to_number(value)?.max(0) as usize,
        None => 0,
    };
    let to = match args.get(1) {
        Some(value) => ctx.to_number(value)?.max(0) as usize,
        None => s.len(),
    };
    Ok(JsValue::String(s.substring(from, to)))
}

/// `slice(from, to)`: like `substring`, negative bounds clamp to `0`
/// rather than indexing from the end — this runtime has no notion of a
/// "from the end" index outside this one clamp, per `spec.md`'s narrowed
/// string surface.
pub fn slice(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    substring(this, args, ctx)
}

/// `indexOf(substr, start)`: an empty substring with no `start` returns
/// `0`, per `spec.md` §8's boundary scenario.
pub fn index_of(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let s = wrapped_primitive(this, ctx)?;
    let needle = match args.first() {
        Some(value) => ctx.to_string(value)?,
        None => JsString::from(""),
    };
    let start = match args.get(1) {
        Some(value) => ctx.to_number(value)?.max(0) as usize,
        None => 0,
    };
    Ok(match s.index_of(&needle, start) {
        Some(index) => JsValue::Number(index as i32),
        None => JsValue::Number(-1),
    })
}

fn wrapped_primitive(this: &JsValue, ctx: &mut Context) -> JsResult<JsString> {
    match this.as_object_id().and_then(|id| ctx.heap().get(id).primitive().cloned()) {
        Some(JsValue::String(s)) => Ok(s),
        _ => Err(ctx.type_error("String.prototype method called on a receiver with no wrapped primitive")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(ctx: &mut Context, s: &str) -> JsValue {
        let string_ctor = ctx.global_binding("String").unwrap();
        ctx.invoke_constructor(string_ctor, &[JsValue::from(s)]).unwrap()
    }

    #[test]
    fn char_at_out_of_range_is_undefined() {
        let mut ctx = Context::default();
        let s = wrap(&mut ctx, "hi");
        let result = char_at(&s, &[JsValue::Number(5)], &mut ctx).unwrap();
        assert!(matches!(result, JsValue::Undefined));
    }

    #[test]
    fn substring_clamps_to_length() {
        let mut ctx = Context::default();
        let s = wrap(&mut ctx, "hello");
        let result = substring(&s, &[JsValue::Number(2), JsValue::Number(100)], &mut ctx).unwrap();
        match result {
            JsValue::String(s) => assert_eq!(s.as_bytes(), b"llo"),
            other => panic!("expected a string, got {:?}", other),
        }
    }

    #[test]
    fn index_of_empty_needle_with_no_start_is_zero() {
        let mut ctx = Context::default();
        let s = wrap(&mut ctx, "hello");
        let result = index_of(&s, &[JsValue::from("")], &mut ctx).unwrap();
        assert!(matches!(result, JsValue::Number(0)));
    }

    #[test]
    fn index_of_missing_substring_is_negative_one() {
        let mut ctx = Context::default();
        let s = wrap(&mut ctx, "hello");
        let result = index_of(&s, &[JsValue::from("zz")], &mut ctx).unwrap();
        assert!(matches!(result, JsValue::Number(-1)));
    }
}
