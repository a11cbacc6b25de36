//! Equality (component C).
//!
//! `==` is implemented as strict equality in this runtime — a documented
//! deviation from full ECMAScript, tracked as an Open Question rather than
//! guessed at: if a compiled program ever depends on loose-equality type
//! coercion, this is the function to revisit.

use crate::string::JsString;
use crate::value::JsValue;

/// Tags must match; within a tag, values compare structurally. `Object`
/// compares by reference (`ObjectId` identity), including both sides being
/// `null`.
pub fn strict_eq(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Undefined, JsValue::Undefined) => true,
        (JsValue::Number(x), JsValue::Number(y)) => x == y,
        (JsValue::Boolean(x), JsValue::Boolean(y)) => x == y,
        (JsValue::String(x), JsValue::String(y)) => byte_exact(x, y),
        (JsValue::Object(x), JsValue::Object(y)) => x == y,
        _ => false,
    }
}

fn byte_exact(a: &JsString, b: &JsString) -> bool {
    a == b
}

/// `==`: identical to [`strict_eq`] in this runtime.
pub fn loose_eq(a: &JsValue, b: &JsValue) -> bool {
    strict_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gc::Heap;
    use crate::object::{Object, ObjectClass};

    #[test]
    fn numbers_compare_by_value() {
        assert!(strict_eq(&JsValue::Number(3), &JsValue::Number(3)));
        assert!(!strict_eq(&JsValue::Number(3), &JsValue::Number(4)));
    }

    #[test]
    fn different_tags_are_never_equal() {
        assert!(!strict_eq(&JsValue::Number(0), &JsValue::Boolean(false)));
        assert!(!strict_eq(&JsValue::Undefined, &JsValue::Object(None)));
    }

    #[test]
    fn objects_compare_by_reference_not_structure() {
        let mut heap = Heap::new();
        let a = heap.allocate(Object::new(ObjectClass::Plain, None));
        let b = heap.allocate(Object::new(ObjectClass::Plain, None));
        assert!(strict_eq(&JsValue::Object(Some(a)), &JsValue::Object(Some(a))));
        assert!(!strict_eq(&JsValue::Object(Some(a)), &JsValue::Object(Some(b))));
    }

    #[test]
    fn null_equals_null_but_not_undefined() {
        assert!(strict_eq(&JsValue::null(), &JsValue::null()));
        assert!(!strict_eq(&JsValue::null(), &JsValue::Undefined));
    }
}
