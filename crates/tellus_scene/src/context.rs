//! The frame context: everything one traversal pass reads and fills in.
//!
//! A `RenderContext` comes in two flavors selected at construction — a
//! normal color pass ([`RenderContext::new`]) and a pick pass
//! ([`RenderContext::pick`]).  Shapes never learn which flavor they are in
//! except through [`is_pick_mode`]; the decision sequence is otherwise
//! identical.
//!
//! The context owns the only mutable state shared across shapes in a frame:
//! the drawable queue (whose length doubles as the monotonic drawable
//! counter), the pick-id allocator, and the picked-object sink.  One
//! traversal thread fills it; thread-safety across traversals is the
//! caller's concern, not this type's.
//!
//! [`is_pick_mode`]: RenderContext::is_pick_mode

use log::{trace, warn};

use crate::culling::Frustum;
use crate::drawable::Drawable;
use crate::layer::LayerId;
use crate::pick::{PickedObject, PickedObjectList, MAX_PICK_ID};

/// Per-frame view/pick state plus the drawable-submission queue.
pub struct RenderContext {
    frustum: Frustum,
    pick_mode: bool,
    current_layer: LayerId,
    drawables: Vec<Box<dyn Drawable>>,
    picked_objects: PickedObjectList,
    /// Last id handed out; 0 means none yet.
    pick_id_counter: u32,
}

impl RenderContext {
    /// Context for a normal color pass.
    pub fn new(frustum: Frustum, current_layer: LayerId) -> Self {
        Self {
            frustum,
            pick_mode: false,
            current_layer,
            drawables: Vec::new(),
            picked_objects: PickedObjectList::new(),
            pick_id_counter: 0,
        }
    }

    /// Context for a pick pass.
    pub fn pick(frustum: Frustum, current_layer: LayerId) -> Self {
        Self {
            pick_mode: true,
            ..Self::new(frustum, current_layer)
        }
    }

    // ── Frame state ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_pick_mode(&self) -> bool {
        self.pick_mode
    }

    #[inline]
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Layer the traversal is currently inside.  Passed through unmodified
    /// into picked-object records.
    #[inline]
    pub fn current_layer(&self) -> LayerId {
        self.current_layer
    }

    /// Updated by the traversal as it enters each layer.
    pub fn set_current_layer(&mut self, layer: LayerId) {
        self.current_layer = layer;
    }

    // ── Drawable queue ──────────────────────────────────────────────────────

    /// Number of drawables enqueued so far this frame.  Monotonic within a
    /// frame; shapes snapshot it around geometry production to learn whether
    /// they actually emitted anything.
    #[inline]
    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }

    /// Enqueues one unit of draw work for the external executor.
    pub fn offer_drawable(&mut self, drawable: Box<dyn Drawable>) {
        self.drawables.push(drawable);
    }

    /// Hands the frame's drawables to the executor, leaving the queue empty.
    pub fn drain_drawables(&mut self) -> Vec<Box<dyn Drawable>> {
        std::mem::take(&mut self.drawables)
    }

    // ── Picking ─────────────────────────────────────────────────────────────

    /// Allocates a fresh pick identifier.
    ///
    /// Ids start at 1 (0 is reserved for "nothing picked") and wrap back to
    /// 1 past [`MAX_PICK_ID`], the largest value the 24-bit color encoding
    /// can carry.  Consumption need not be contiguous: an id allocated for a
    /// shape that then produces no drawables is simply discarded.
    pub fn next_picked_object_id(&mut self) -> u32 {
        if self.pick_id_counter >= MAX_PICK_ID {
            warn!("pick id space exhausted, wrapping to 1");
            self.pick_id_counter = 0;
        }
        self.pick_id_counter += 1;
        self.pick_id_counter
    }

    /// Records which shape/layer owns a pick identifier this frame.
    pub fn offer_picked_object(&mut self, object: PickedObject) {
        self.picked_objects.offer(object);
    }

    #[inline]
    pub fn picked_objects(&self) -> &PickedObjectList {
        &self.picked_objects
    }

    // ── Recycling ───────────────────────────────────────────────────────────

    /// Prepares the context for the next frame: clears both queues, resets
    /// the pick-id allocator, and installs the new frustum and pass flavor.
    pub fn reset(&mut self, frustum: Frustum, pick_mode: bool) {
        trace!(
            "recycling frame context ({} drawables, {} picked objects)",
            self.drawables.len(),
            self.picked_objects.len()
        );
        self.frustum = frustum;
        self.pick_mode = pick_mode;
        self.drawables.clear();
        self.picked_objects.clear();
        self.pick_id_counter = 0;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeId;
    use glam::Mat4;
    use std::any::Any;

    struct Stub;

    impl Drawable for Stub {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn ctx(pick: bool) -> RenderContext {
        let frustum = Frustum::from_view_proj(&Mat4::IDENTITY);
        if pick {
            RenderContext::pick(frustum, LayerId(1))
        } else {
            RenderContext::new(frustum, LayerId(1))
        }
    }

    #[test]
    fn drawable_count_tracks_the_queue() {
        let mut rc = ctx(false);
        assert_eq!(rc.drawable_count(), 0);
        rc.offer_drawable(Box::new(Stub));
        rc.offer_drawable(Box::new(Stub));
        assert_eq!(rc.drawable_count(), 2);
        let drained = rc.drain_drawables();
        assert_eq!(drained.len(), 2);
        assert_eq!(rc.drawable_count(), 0);
    }

    #[test]
    fn pick_ids_are_fresh_and_start_at_one() {
        let mut rc = ctx(true);
        assert_eq!(rc.next_picked_object_id(), 1);
        assert_eq!(rc.next_picked_object_id(), 2);
        assert_eq!(rc.next_picked_object_id(), 3);
    }

    #[test]
    fn pick_ids_wrap_after_the_24_bit_limit() {
        let mut rc = ctx(true);
        rc.pick_id_counter = MAX_PICK_ID - 1;
        assert_eq!(rc.next_picked_object_id(), MAX_PICK_ID);
        assert_eq!(rc.next_picked_object_id(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut rc = ctx(true);
        rc.offer_drawable(Box::new(Stub));
        rc.next_picked_object_id();
        rc.offer_picked_object(PickedObject::new(1, ShapeId(1), LayerId(1)));

        rc.reset(Frustum::from_view_proj(&Mat4::IDENTITY), false);
        assert_eq!(rc.drawable_count(), 0);
        assert!(rc.picked_objects().is_empty());
        assert!(!rc.is_pick_mode());
        assert_eq!(rc.next_picked_object_id(), 1);
    }

    #[test]
    fn current_layer_follows_the_traversal() {
        let mut rc = ctx(false);
        assert_eq!(rc.current_layer(), LayerId(1));
        rc.set_current_layer(LayerId(9));
        assert_eq!(rc.current_layer(), LayerId(9));
    }
}
