//! Built-in installation (component I).
//!
//! `install` wires `Object`, `Function`, `Array`, `Number`, `String`,
//! `console`, the two error constructors compiled code's `throw` paths
//! depend on, and the host I/O bindings onto a freshly constructed
//! `Context`'s global object, in the exact order `spec.md` §4.I requires
//! because of the mutual dependencies between them: `Object.prototype`
//! before anything can hang off it, `Function.prototype` before any other
//! function object can point to it as its own prototype.

mod array;
mod console;
mod error;
mod function;
mod host;
mod number;
mod object;
mod string;

use crate::context::Context;
use crate::object::{FunctionData, FunctionKind, ObjectClass};
use crate::value::JsValue;

pub(crate) fn install(ctx: &mut Context) {
    // 1. Object.prototype and Object, constructed by hand: nothing else
    // exists yet for `create_native_function`'s usual cycle to hang off.
    let object_prototype = ctx
        .heap_mut()
        .allocate(crate::object::Object::new(ObjectClass::Plain, None));
    let object_constructor = ctx.heap_mut().allocate(crate::object::Object::new(
        ObjectClass::Function(FunctionData {
            kind: FunctionKind::Native(object::constructor),
            binding: None,
        }),
        None,
    ));
    ctx.object_prototype = object_prototype;
    ctx.heap_mut()
        .get_mut(object_constructor)
        .add_own_str("prototype", JsValue::Object(Some(object_prototype)));
    ctx.heap_mut()
        .get_mut(object_prototype)
        .add_own_str("constructor", JsValue::Object(Some(object_constructor)));
    ctx.set_global_binding("Object", JsValue::Object(Some(object_constructor)));
    ctx.set_global_binding("global", ctx.global_object());

    // 2. Function.prototype, by hand for the same reason, then Function
    // itself (which, now that `function_prototype` exists, can use the
    // usual helper).
    let function_prototype = ctx
        .heap_mut()
        .allocate(crate::object::Object::new(ObjectClass::Plain, Some(object_prototype)));
    ctx.function_prototype = function_prototype;
    let function_constructor = ctx.create_native_function(function::constructor);
    ctx.heap_mut()
        .get_mut(function_prototype)
        .add_own_str("constructor", JsValue::Object(Some(function_constructor)));
    ctx.set_global_binding("Function", JsValue::Object(Some(function_constructor)));

    install_method(ctx, function_prototype, "call", function::prototype_call);
    install_method(ctx, function_prototype, "apply", function::prototype_apply);

    install_method(ctx, object_prototype, "isPrototypeOf", object::is_prototype_of);
    install_method(ctx, object_prototype, "hasOwnProperty", object::has_own_property);
    install_method(ctx, object_prototype, "toString", object::to_string);

    // 3. Array, Number, String.
    let array_constructor = ctx.create_native_function(array::constructor);
    ctx.set_global_binding("Array", JsValue::Object(Some(array_constructor)));

    let number_constructor = ctx.create_native_function(number::constructor);
    let number_prototype = prototype_of(ctx, number_constructor);
    ctx.set_global_binding("Number", JsValue::Object(Some(number_constructor)));
    install_method(ctx, number_prototype, "valueOf", number::value_of);
    install_method(ctx, number_prototype, "toString", number::to_string);

    let string_constructor = ctx.create_native_function(string::constructor);
    let string_prototype = prototype_of(ctx, string_constructor);
    ctx.set_global_binding("String", JsValue::Object(Some(string_constructor)));
    install_method(ctx, string_prototype, "valueOf", string::value_of);
    install_method(ctx, string_prototype, "toString", string::to_string);
    install_method(ctx, string_prototype, "charAt", string::char_at);
    install_method(ctx, string_prototype, "substring", string::substring);
    install_method(ctx, string_prototype, "indexOf", string::index_of);
    install_method(ctx, string_prototype, "slice", string::slice);

    // TypeError/ReferenceError are not in spec.md's enumerated install
    // order, but §7 requires both to be constructed by invoking their
    // global constructor with a message string, so both must exist by the
    // time anything can throw; installed here, grounded the same way as
    // every other constructor above.
    error::install(ctx, "TypeError");
    error::install(ctx, "ReferenceError");

    // 4. console.
    console::install(ctx);

    // 5. Host bindings.
    host::install(ctx);
}

/// Wires the host's command-line arguments into a global `argv` array,
/// the way `js_create_argv` does immediately after
/// `js_create_native_objects` in the original this spec was distilled
/// from. Not part of `spec.md`'s Built-in surface, but small and load
/// bearing enough to supplement.
pub fn install_argv(ctx: &mut Context, args: &[&str]) {
    for arg in args {
        ctx.push(JsValue::from(*arg))
            .expect("argv is always far smaller than the call stack capacity");
    }
    let array_ctor = ctx
        .global_binding("Array")
        .expect("Array is always bootstrapped");
    let values: Vec<JsValue> = (0..args.len())
        .map(|_| ctx.pop().expect("just pushed this many values"))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let argv = ctx
        .invoke_constructor(array_ctor, &values)
        .expect("constructing an Array cannot itself throw");
    ctx.set_global_binding("argv", argv);
}

fn prototype_of(ctx: &mut Context, constructor: crate::gc::ObjectId) -> crate::gc::ObjectId {
    match ctx
        .heap()
        .get(constructor)
        .get_own(&crate::property::PropertyKey::from("prototype"))
    {
        Some(JsValue::Object(Some(id))) => *id,
        _ => unreachable!("create_native_function always installs an own `prototype`"),
    }
}

fn install_method(
    ctx: &mut Context,
    target: crate::gc::ObjectId,
    name: &str,
    native: crate::object::NativeFunction,
) {
    let method = ctx.create_native_function(native);
    ctx.heap_mut()
        .get_mut(target)
        .add_own_str(name, JsValue::Object(Some(method)));
}
