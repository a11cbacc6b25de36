//! Objects (component B).
//!
//! Every object is a property table plus an optional prototype link plus a
//! class-specific payload. The payload distinguishes a plain object from a
//! function (native or compiled, with its closure environment) from an
//! array (which is otherwise an ordinary object — indices are just string
//! property keys, per the specification).
//!
//! `marked`, the GC's own bookkeeping bit, lives on [`crate::gc::Heap`]'s
//! internal slot wrapper rather than here: an `Object` describes JavaScript
//! state, not collector state.

pub mod property_map;

use crate::gc::ObjectId;
use crate::property::PropertyKey;
use crate::string::JsString;
use crate::value::JsValue;
use property_map::PropertyMap;

/// A native function pointer: the callee's `this`, the argument slice
/// popped off the call stack, and the context, returning a `JsResult`.
pub type NativeFunction =
    fn(&JsValue, &[JsValue], &mut crate::context::Context) -> crate::value::JsResult<JsValue>;

/// The compiled-code or native payload hung off a `Function`-class object.
#[derive(Clone)]
pub struct FunctionData {
    pub kind: FunctionKind,
    /// The lexical environment this function closed over, itself an
    /// object whose prototype chain is the static parent binding. `None`
    /// for functions created before any scope could be captured.
    pub binding: Option<ObjectId>,
}

#[derive(Clone, Copy)]
pub enum FunctionKind {
    Native(NativeFunction),
    /// An index into the compiled program's function table, resolved by
    /// the embedding compiler's generated dispatch code rather than by
    /// this crate.
    Compiled(u32),
}

/// What distinguishes one object from another beyond its own properties.
pub enum ObjectClass {
    Plain,
    Function(FunctionData),
    Array,
}

pub struct Object {
    class: ObjectClass,
    properties: PropertyMap,
    prototype: Option<ObjectId>,
    /// The wrapped primitive for a `String`/`Number`/`Boolean` wrapper
    /// object, e.g. what `new String("x")` produces.
    primitive: Option<JsValue>,
}

impl Object {
    pub fn new(class: ObjectClass, prototype: Option<ObjectId>) -> Self {
        Self {
            class,
            properties: PropertyMap::new(),
            prototype,
            primitive: None,
        }
    }

    pub fn prototype(&self) -> Option<ObjectId> {
        self.prototype
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    pub fn primitive(&self) -> Option<&JsValue> {
        self.primitive.as_ref()
    }

    pub fn function(&self) -> Option<&FunctionData> {
        match &self.class {
            ObjectClass::Function(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.class, ObjectClass::Array)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.class, ObjectClass::Function(_))
    }

    /// `Array`'s constructor switches its receiver's class after filling in
    /// its numeric properties and `length` (`spec.md` §4.C).
    pub fn set_class(&mut self, class: ObjectClass) {
        self.class = class;
    }

    /// `Number`/`String`'s constructors set the receiver's
    /// `[[PrimitiveValue]]` after `Object::new` has already allocated it
    /// without one.
    pub fn set_primitive(&mut self, value: JsValue) {
        self.primitive = Some(value);
    }

    /// Convenience for setting an own property without constructing a
    /// `PropertyKey` at call sites that only have a borrowed string.
    pub fn set_own(&mut self, key: PropertyKey, value: JsValue) {
        self.properties.set(key, value);
    }

    pub fn get_own(&self, key: &PropertyKey) -> Option<&JsValue> {
        self.properties.find_own(key)
    }

    pub fn set_own_str(&mut self, name: &str, value: JsValue) {
        self.set_own(PropertyKey::from(JsString::from(name)), value);
    }

    /// Appends a known-absent own property without the existence check
    /// `set_own` pays for — for bootstrap call sites naming a fresh
    /// property on an object they just allocated (`spec.md` §4.B's `add`).
    pub fn add_own_str(&mut self, name: &str, value: JsValue) {
        self.properties
            .add(PropertyKey::from(JsString::from(name)), value);
    }
}

/// `get_property`: own-then-prototype walk for objects; direct servicing
/// from the string primitive for numeric indices and `length` on strings;
/// ToObject-then-retry for every other primitive tag.
pub fn get_property(
    ctx: &mut crate::context::Context,
    value: &JsValue,
    key: &PropertyKey,
) -> crate::value::JsResult<JsValue> {
    match value {
        JsValue::String(s) => {
            if let Some(index) = non_negative_index(key) {
                return Ok(match s.char_at(index) {
                    Some(ch) => JsValue::String(ch),
                    None => JsValue::Undefined,
                });
            }
            if key.name().as_bytes() == b"length" {
                return Ok(JsValue::Number(s.len() as i32));
            }
            let wrapped = crate::value::conversions::to_object(ctx, value)?;
            get_property(ctx, &wrapped, key)
        }
        JsValue::Object(Some(id)) => {
            let mut current = Some(*id);
            while let Some(obj_id) = current {
                if let Some(found) = ctx.heap().get(obj_id).get_own(key) {
                    return Ok(found.clone());
                }
                current = ctx.heap().get(obj_id).prototype();
            }
            Ok(JsValue::Undefined)
        }
        JsValue::Object(None) => Err(ctx.type_error(format!(
            "cannot read property '{}' of null",
            key.name()
        ))),
        _ => {
            let wrapped = crate::value::conversions::to_object(ctx, value)?;
            get_property(ctx, &wrapped, key)
        }
    }
}

/// `set_property`: writes are only observable on objects. Writing past an
/// array's current `length` with a non-negative numeric key raises
/// `length`; arrays never auto-shrink. Writes to a primitive are silently
/// dropped, matching sloppy-mode semantics for property assignment on a
/// temporary wrapper.
pub fn set_property(
    ctx: &mut crate::context::Context,
    value: &JsValue,
    key: PropertyKey,
    new_value: JsValue,
) -> crate::value::JsResult<()> {
    match value {
        JsValue::Object(Some(id)) => {
            let id = *id;
            if ctx.heap().get(id).is_array() {
                if let Some(index) = non_negative_index(&key) {
                    let length_key = PropertyKey::from("length");
                    let current_length = match ctx.heap().get(id).get_own(&length_key) {
                        Some(JsValue::Number(n)) => *n,
                        _ => 0,
                    };
                    if index as i32 >= current_length {
                        ctx.heap_mut()
                            .get_mut(id)
                            .set_own(length_key, JsValue::Number(index as i32 + 1));
                    }
                }
            }
            ctx.heap_mut().get_mut(id).set_own(key, new_value);
            Ok(())
        }
        JsValue::Object(None) => Err(ctx.type_error(format!(
            "cannot set property '{}' of null",
            key.name()
        ))),
        _ => Ok(()),
    }
}

fn non_negative_index(key: &PropertyKey) -> Option<usize> {
    key.name().parse_i32().filter(|n| *n >= 0).map(|n| n as usize)
}
