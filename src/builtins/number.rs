//! `Number`, `Number.prototype.{valueOf, toString}`.

use crate::context::Context;
use crate::value::{JsResult, JsValue};

pub fn constructor(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let n = match args.first() {
        Some(value) => ctx.to_number(value)?,
        None => 0,
    };
    if let Some(id) = this.as_object_id() {
        ctx.heap_mut().get_mut(id).set_primitive(JsValue::Number(n));
    }
    Ok(this.clone())
}

pub fn value_of(this: &JsValue, _args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    wrapped_primitive(this, ctx)
}

pub fn to_string(this: &JsValue, _args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let primitive = wrapped_primitive(this, ctx)?;
    ctx.to_string(&primitive).map(JsValue::from)
}

fn wrapped_primitive(this: &JsValue, ctx: &mut Context) -> JsResult<JsValue> {
    match this.as_object_id().and_then(|id| ctx.heap().get(id).primitive().cloned()) {
        Some(value) => Ok(value),
        None => Err(ctx.type_error("Number.prototype method called on a receiver with no wrapped primitive")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructing_wraps_the_primitive() {
        let mut ctx = Context::default();
        let number_ctor = ctx.global_binding("Number").unwrap();
        let wrapped = ctx.invoke_constructor(number_ctor, &[JsValue::Number(7)]).unwrap();
        let value = value_of(&wrapped, &[], &mut ctx).unwrap();
        assert!(matches!(value, JsValue::Number(7)));
    }

    #[test]
    fn to_string_stringifies_the_wrapped_number() {
        let mut ctx = Context::default();
        let number_ctor = ctx.global_binding("Number").unwrap();
        let wrapped = ctx.invoke_constructor(number_ctor, &[JsValue::Number(42)]).unwrap();
        let result = to_string(&wrapped, &[], &mut ctx).unwrap();
        match result {
            JsValue::String(s) => assert_eq!(s.to_string(), "42"),
            other => panic!("expected a string, got {:?}", other),
        }
    }
}
