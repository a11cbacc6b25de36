//! `Array` — variadic: the receiver's numeric properties are set to the
//! positional arguments, `length` is set, and the receiver's class
//! becomes `Array`.

use crate::context::Context;
use crate::object::ObjectClass;
use crate::value::{JsResult, JsValue};

pub fn constructor(this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let id = match this.as_object_id() {
        Some(id) => id,
        None => return Ok(this.clone()),
    };
    for (index, value) in args.iter().enumerate() {
        ctx.heap_mut()
            .get_mut(id)
            .set_own_str(&index.to_string(), value.clone());
    }
    let object = ctx.heap_mut().get_mut(id);
    object.set_own_str("length", JsValue::Number(args.len() as i32));
    object.set_class(ObjectClass::Array);
    Ok(this.clone())
}
