//! Lexical variable binding (component G).
//!
//! A binding is not a distinct kind of value — it is a plain object whose
//! prototype link points to the *static* parent scope rather than to a
//! user-facing prototype. Walking "inherited properties" and walking
//! "enclosing scopes" are therefore the same traversal, reusing the
//! object store's own prototype walk.

use crate::context::Context;
use crate::property::PropertyKey;
use crate::value::{JsResult, JsValue};
use crate::gc::ObjectId;

/// Writes `name` at the first binding in the chain that already owns it;
/// falls back to the global object (sloppy-mode assignment-creates-global
/// semantics) if no binding in the chain does.
pub fn assign(ctx: &mut Context, binding: ObjectId, name: &PropertyKey, value: JsValue) {
    let mut current = Some(binding);
    while let Some(id) = current {
        if ctx.heap().get(id).get_own(name).is_some() {
            ctx.heap_mut().get_mut(id).set_own(name.clone(), value);
            return;
        }
        current = ctx.heap().get(id).prototype();
    }
    let global = ctx.global_object_id();
    ctx.heap_mut().get_mut(global).set_own(name.clone(), value);
}

/// Reads `name` by the same walk as [`assign`], falling back to the global
/// object, and raising a `ReferenceError` if it is bound nowhere at all.
pub fn read(ctx: &mut Context, binding: ObjectId, name: &PropertyKey) -> JsResult<JsValue> {
    let mut current = Some(binding);
    while let Some(id) = current {
        if let Some(value) = ctx.heap().get(id).get_own(name) {
            return Ok(value.clone());
        }
        current = ctx.heap().get(id).prototype();
    }
    let global = ctx.global_object_id();
    if let Some(value) = ctx.heap().get(global).get_own(name) {
        return Ok(value.clone());
    }
    Err(ctx.reference_error(format!("{} is not defined.", name.name())))
}

/// Allocates a fresh activation-record object whose prototype is the
/// enclosing binding, i.e. the static parent scope.
pub fn new_binding(ctx: &mut Context, parent: Option<ObjectId>) -> ObjectId {
    use crate::object::{Object, ObjectClass};
    ctx.heap_mut().allocate(Object::new(ObjectClass::Plain, parent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    #[test]
    fn assign_then_read_round_trips_in_same_binding() {
        let mut ctx = Context::default();
        let scope = new_binding(&mut ctx, None);
        let key = PropertyKey::from("x");
        assign(&mut ctx, scope, &key, JsValue::Number(7));
        assert_eq!(read(&mut ctx, scope, &key).unwrap(), JsValue::Number(7));
    }

    #[test]
    fn read_walks_out_to_enclosing_scope() {
        let mut ctx = Context::default();
        let outer = new_binding(&mut ctx, None);
        let inner = new_binding(&mut ctx, Some(outer));
        let key = PropertyKey::from("x");
        assign(&mut ctx, outer, &key, JsValue::Number(1));
        assert_eq!(read(&mut ctx, inner, &key).unwrap(), JsValue::Number(1));
    }

    #[test]
    fn assign_in_inner_scope_writes_through_to_existing_outer_binding() {
        let mut ctx = Context::default();
        let outer = new_binding(&mut ctx, None);
        let inner = new_binding(&mut ctx, Some(outer));
        let key = PropertyKey::from("x");
        assign(&mut ctx, outer, &key, JsValue::Number(1));
        assign(&mut ctx, inner, &key, JsValue::Number(2));
        assert_eq!(read(&mut ctx, outer, &key).unwrap(), JsValue::Number(2));
    }

    #[test]
    fn unbound_read_is_a_reference_error() {
        let mut ctx = Context::default();
        let scope = new_binding(&mut ctx, None);
        let err = read(&mut ctx, scope, &PropertyKey::from("missing")).unwrap_err();
        let id = err.as_object_id().expect("a thrown error is an object");
        let message = ctx
            .heap()
            .get(id)
            .get_own(&PropertyKey::from("message"))
            .cloned()
            .expect("error objects carry a message property");
        match message {
            JsValue::String(s) => assert!(s.to_string().contains("is not defined")),
            other => panic!("expected a string message, got {:?}", other),
        }
    }

    #[test]
    fn assign_with_no_matching_binding_falls_back_to_global() {
        let mut ctx = Context::default();
        let scope = new_binding(&mut ctx, None);
        let key = PropertyKey::from("leaked");
        assign(&mut ctx, scope, &key, JsValue::Number(9));
        let global = ctx.global_object_id();
        assert_eq!(
            ctx.heap().get(global).get_own(&key).cloned(),
            Some(JsValue::Number(9))
        );
    }
}
