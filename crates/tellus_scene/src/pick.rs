//! GPU picking support: unique-color encoding and picked-object records.
//!
//! During a pick pass shapes render into an off-screen buffer using a color
//! that *is* their pick identifier: the low 24 bits of the id become the
//! R/G/B bytes, alpha is fully opaque.  Reading a pixel back and decoding
//! the bytes yields the id, and the frame's [`PickedObjectList`] maps that
//! id to the shape and layer that produced it.
//!
//! Both directions of the encoding are byte-exact (see
//! `tellus_core::Color::to_rgba8`), so an id survives the round trip
//! through a color buffer unchanged.

use tellus_core::Color;

use crate::layer::LayerId;
use crate::shape::ShapeId;

/// Largest identifier that fits the 24-bit RGB encoding.
pub const MAX_PICK_ID: u32 = 0x00FF_FFFF;

/// Encodes a pick identifier into a unique opaque color.
///
/// Only the low 24 bits participate; callers must allocate ids from
/// [`crate::RenderContext::next_picked_object_id`], which stays in range.
pub fn pick_color(id: u32) -> Color {
    Color::from_rgba8(
        ((id >> 16) & 0xFF) as u8,
        ((id >> 8) & 0xFF) as u8,
        (id & 0xFF) as u8,
        0xFF,
    )
}

/// Decodes a color produced by [`pick_color`] back into the identifier.
pub fn pick_id(color: Color) -> u32 {
    let [r, g, b, _] = color.to_rgba8();
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

// ── PickedObject ─────────────────────────────────────────────────────────────

/// Association between a pick identifier and the shape/layer that enqueued
/// drawables under it.  Valid only for the frame that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedObject {
    pub pick_id: u32,
    pub shape: ShapeId,
    pub layer: LayerId,
}

impl PickedObject {
    pub fn new(pick_id: u32, shape: ShapeId, layer: LayerId) -> Self {
        Self {
            pick_id,
            shape,
            layer,
        }
    }
}

// ── PickedObjectList ─────────────────────────────────────────────────────────

/// Push-only per-frame sink for [`PickedObject`] records.
#[derive(Debug, Default)]
pub struct PickedObjectList {
    entries: Vec<PickedObject>,
}

impl PickedObjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.  No de-duplication: one shape submits at most one
    /// record per frame by construction.
    pub fn offer(&mut self, object: PickedObject) {
        self.entries.push(object);
    }

    /// Resolves a decoded pixel id back to its record.
    pub fn by_pick_id(&self, pick_id: u32) -> Option<&PickedObject> {
        self.entries.iter().find(|po| po.pick_id == pick_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickedObject> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all records; called when the frame context is recycled.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_color_roundtrip_is_exact() {
        for id in [0, 1, 0x0000_00FF, 0x0000_FF00, 0x00FF_0000, MAX_PICK_ID] {
            assert_eq!(pick_id(pick_color(id)), id);
        }
    }

    #[test]
    fn encoded_colors_are_opaque() {
        assert_eq!(pick_color(42).to_rgba8()[3], 255);
    }

    #[test]
    fn lookup_by_id() {
        let mut list = PickedObjectList::new();
        list.offer(PickedObject::new(7, ShapeId(1), LayerId(1)));
        list.offer(PickedObject::new(9, ShapeId(2), LayerId(1)));
        assert_eq!(list.len(), 2);
        assert_eq!(list.by_pick_id(9).unwrap().shape, ShapeId(2));
        assert!(list.by_pick_id(8).is_none());
        list.clear();
        assert!(list.is_empty());
    }
}
