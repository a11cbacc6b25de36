//! The mark-and-sweep collector (component H).
//!
//! The hand-rolled heap of object records the specification describes —
//! objects linked by raw pointers for prototypes, closure bindings, and
//! property values — maps onto a growable arena of slots addressed by a
//! stable [`ObjectId`], per the specification's own design notes. Sweep
//! reclaims a dead slot by setting it to `None` and returning its index to
//! a free list for the next allocation to reuse, rather than shifting live
//! entries down to compact the array in place: every reference into the
//! heap is itself an `ObjectId`, so shifting would mean rewriting every
//! live reference to a moved object. Reusing freed slots bounds memory
//! the same way without that hazard.

use crate::error::{RuntimeError, RuntimeResult};
use crate::object::Object;
use crate::value::JsValue;

/// A stable reference to a heap-allocated [`Object`].
///
/// `ObjectId` is never itself the JavaScript `null` — `null` is represented
/// by `JsValue::Object(None)`. An `ObjectId` is only ever handed out for a
/// live object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ObjectId(u32);

struct Slot {
    object: Object,
    marked: bool,
}

/// The object registry: every reachable object is registered here exactly
/// once, per the specification's invariant.
pub struct Heap {
    slots: Vec<Option<Slot>>,
    free_list: Vec<u32>,
    live_count: usize,
    objects_at_last_sweep: usize,
}

impl Heap {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live_count: 0,
            objects_at_last_sweep: 0,
        }
    }

    /// Registers a new object with the GC and returns a stable handle to
    /// it. Every internal allocation, bootstrap included, must register
    /// before any further allocation that could trigger a collection.
    pub fn allocate(&mut self, object: Object) -> ObjectId {
        let slot = Slot {
            object,
            marked: false,
        };
        self.live_count += 1;
        if let Some(index) = self.free_list.pop() {
            self.slots[index as usize] = Some(slot);
            ObjectId(index)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Some(slot));
            ObjectId(index)
        }
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, id: ObjectId) -> &Object {
        &self
            .slots
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .expect("ObjectId referred to a swept or out-of-range slot")
            .object
    }

    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self
            .slots
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .expect("ObjectId referred to a swept or out-of-range slot")
            .object
    }

    /// Number of currently-live (not-yet-swept) objects.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// `gc_should_run`: triggers between top-level statements (or between
    /// allocations, at the caller's discretion) once the live set has both
    /// passed `threshold` and more than doubled since the last sweep.
    pub fn should_run(&self, threshold: usize) -> bool {
        self.live_count > threshold && self.live_count > 2 * self.objects_at_last_sweep
    }

    /// Runs one mark-sweep pass. `roots` is the full root set for this
    /// pass: the live call-stack prefix, any caller-supplied extra roots,
    /// and the global object, all resolved to `ObjectId`s by the caller.
    ///
    /// Tracing visits property-table values, the prototype link, and (for
    /// `Function` objects) the closure binding. The explicit mark stack is
    /// bounded by `mark_stack_depth`; exceeding it is the one fatal
    /// condition this function can report, matching the specification's
    /// "GC mark-stack overflow" fatal condition.
    pub fn run(&mut self, roots: &[ObjectId], mark_stack_depth: usize) -> RuntimeResult<()> {
        for slot in self.slots.iter_mut().flatten() {
            slot.marked = false;
        }

        let mut stack: Vec<ObjectId> = Vec::new();
        for &root in roots {
            self.push_if_unmarked(&mut stack, root, mark_stack_depth)?;
        }

        while let Some(id) = stack.pop() {
            let mut children: Vec<ObjectId> = Vec::new();
            {
                let object = self.get(id);
                for value in object.properties().values() {
                    if let JsValue::Object(Some(child)) = value {
                        children.push(*child);
                    }
                }
                if let Some(proto) = object.prototype() {
                    children.push(proto);
                }
                if let Some(function) = object.function() {
                    if let Some(binding) = function.binding {
                        children.push(binding);
                    }
                }
            }
            for child in children {
                self.push_if_unmarked(&mut stack, child, mark_stack_depth)?;
            }
        }

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(s) = slot {
                if !s.marked {
                    *slot = None;
                    self.free_list.push(index as u32);
                    self.live_count -= 1;
                }
            }
        }
        self.objects_at_last_sweep = self.live_count;
        Ok(())
    }

    fn push_if_unmarked(
        &mut self,
        stack: &mut Vec<ObjectId>,
        id: ObjectId,
        depth_limit: usize,
    ) -> RuntimeResult<()> {
        let slot = self
            .slots
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .expect("ObjectId referred to a swept or out-of-range slot");
        if slot.marked {
            return Ok(());
        }
        if stack.len() >= depth_limit {
            return Err(RuntimeError::GcMarkStackOverflow { depth: depth_limit });
        }
        slot.marked = true;
        stack.push(id);
        Ok(())
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
