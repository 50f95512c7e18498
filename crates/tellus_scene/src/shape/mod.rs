//! The shape controller — one per drawable scene node.
//!
//! `Shape` owns the per-shape decision state (attribute references,
//! highlight flag, altitude/path modes, cached pick identity, bounding
//! volume) and runs the per-frame sequence in [`Shape::render`]:
//!
//! 1. cull against the bounding volume,
//! 2. resolve the active attribute bundle (highlight vs. normal),
//! 3. delegate geometry production to the injected [`GeometryProducer`],
//! 4. in pick passes, register a picked object iff drawables were enqueued.
//!
//! Geometry knowledge lives entirely in the producer: the controller never
//! tessellates, never executes draw work, and never writes the bounding
//! volume.  Every "nothing to do" outcome — disabled, culled, attributeless,
//! zero drawables — is silent; there is no error channel on this path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tellus_core::{AltitudeMode, Color, PathType, ShapeAttributes};

use crate::context::RenderContext;
use crate::culling::BoundingVolume;
use crate::pick::{self, PickedObject};

// ── ShapeId ──────────────────────────────────────────────────────────────────

static SHAPE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable handle identifying a [`Shape`] for the life of the process.
///
/// Picked-object records carry this back to whoever resolves hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

// ── GeometryProducer ─────────────────────────────────────────────────────────

/// Per-shape-kind strategy that turns attributes + context into draw work.
///
/// Supplied at [`Shape`] construction; both hooks default to no-ops so a
/// bare shape is valid (it simply renders nothing).  Producers are the only
/// code allowed to write the shape's bounding volume, via
/// [`ShapeView::bounds`].
pub trait GeometryProducer: Send + 'static {
    /// Invalidate any cached geometry.  Fired by the controller whenever an
    /// altitude-mode or path-type setter runs — unconditionally, even when
    /// the stored value did not change, so owners can force a rebuild by
    /// re-assigning the current mode.
    fn reset(&mut self) {}

    /// Enqueue zero or more drawables into `rc` and update `shape.bounds`
    /// to the extent of the generated geometry.
    #[allow(unused_variables)]
    fn make_drawables(&mut self, rc: &mut RenderContext, shape: ShapeView<'_>) {}
}

/// Producer for shapes that have no geometry (group/placeholder nodes).
#[derive(Debug, Default)]
pub struct NoGeometry;

impl GeometryProducer for NoGeometry {}

// ── ShapeView ────────────────────────────────────────────────────────────────

/// The slice of shape state a [`GeometryProducer`] sees during production.
pub struct ShapeView<'a> {
    /// The attribute bundle resolved for *this* frame (highlight or normal).
    pub attributes: &'a ShapeAttributes,
    pub altitude_mode: AltitudeMode,
    pub path_type: PathType,
    /// Unique color for per-vertex pick attributes.  Only meaningful in a
    /// pick pass; stale otherwise.
    pub pick_color: Color,
    /// The shape's cached extent.  Producers overwrite this when geometry
    /// changes; the controller culls against it next frame.
    pub bounds: &'a mut BoundingVolume,
}

// ── Shape ────────────────────────────────────────────────────────────────────

/// A drawable scene node.
///
/// Owners assign attributes and modes at any time between frames; `render`
/// is a complete, independent decision each frame with no cross-frame state
/// beyond the stored fields and the lazily refreshed bounding volume.
pub struct Shape {
    id: ShapeId,
    display_name: String,
    enabled: bool,

    attributes: Option<Arc<ShapeAttributes>>,
    highlight_attributes: Option<Arc<ShapeAttributes>>,
    highlighted: bool,

    altitude_mode: AltitudeMode,
    path_type: PathType,

    // Frame-scoped pick identity; valid only while this frame's pick pass
    // is being assembled.
    picked_object_id: u32,
    pick_color: Color,

    bounds: BoundingVolume,
    producer: Box<dyn GeometryProducer>,
}

impl Shape {
    /// Creates an enabled shape with default attributes and no extent.
    pub fn new(display_name: impl Into<String>, producer: Box<dyn GeometryProducer>) -> Self {
        Self {
            id: ShapeId(SHAPE_ID.fetch_add(1, Ordering::Relaxed)),
            display_name: display_name.into(),
            enabled: true,
            attributes: Some(Arc::new(ShapeAttributes::default())),
            highlight_attributes: None,
            highlighted: false,
            altitude_mode: AltitudeMode::default(),
            path_type: PathType::default(),
            picked_object_id: 0,
            pick_color: Color::TRANSPARENT,
            bounds: BoundingVolume::Unbounded,
            producer,
        }
    }

    // ── Identity ────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled shapes skip the entire per-frame sequence.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ── Attributes ──────────────────────────────────────────────────────────

    pub fn attributes(&self) -> Option<&Arc<ShapeAttributes>> {
        self.attributes.as_ref()
    }

    /// Replaces the normal attribute reference.  No validation, no side
    /// effects; the active bundle is re-resolved next frame.
    pub fn set_attributes(&mut self, attributes: Option<Arc<ShapeAttributes>>) {
        self.attributes = attributes;
    }

    pub fn highlight_attributes(&self) -> Option<&Arc<ShapeAttributes>> {
        self.highlight_attributes.as_ref()
    }

    /// Replaces the highlight attribute reference.
    pub fn set_highlight_attributes(&mut self, attributes: Option<Arc<ShapeAttributes>>) {
        self.highlight_attributes = attributes;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Flips the highlight flag.  Takes effect on the next `render`; nothing
    /// is recomputed eagerly.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    // ── Modes ───────────────────────────────────────────────────────────────

    pub fn altitude_mode(&self) -> AltitudeMode {
        self.altitude_mode
    }

    /// Assigns the altitude mode and fires the producer's reset hook —
    /// always, even when `mode` equals the stored value.  Re-assigning the
    /// current mode is the supported way to force a geometry rebuild.
    pub fn set_altitude_mode(&mut self, mode: AltitudeMode) {
        self.altitude_mode = mode;
        self.producer.reset();
    }

    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    /// Assigns the path type; same unconditional reset as
    /// [`set_altitude_mode`](Self::set_altitude_mode).
    pub fn set_path_type(&mut self, path_type: PathType) {
        self.path_type = path_type;
        self.producer.reset();
    }

    // ── Geometry ────────────────────────────────────────────────────────────

    /// Current cached extent.  [`BoundingVolume::Unbounded`] until the
    /// producer computes one.
    pub fn bounds(&self) -> &BoundingVolume {
        &self.bounds
    }

    /// Access to the injected producer, for kind-specific mutation between
    /// frames (e.g. replacing a path's positions).
    pub fn producer_mut(&mut self) -> &mut dyn GeometryProducer {
        &mut *self.producer
    }

    // ── Per-frame entry point ───────────────────────────────────────────────

    /// Runs this shape's decision sequence for the current frame.
    pub fn render(&mut self, rc: &mut RenderContext) {
        if !self.enabled {
            return;
        }

        // Cull. Unbounded means "no extent known, treat as visible".
        if !self.bounds.intersects_frustum(rc.frustum()) {
            return;
        }

        // Resolve the active attribute bundle; an attributeless shape
        // renders nothing, which is not an error.
        let Some(active) = self.active_attributes().cloned() else {
            return;
        };

        // Snapshot the queue length so we can tell whether production below
        // actually emitted anything.
        let drawable_count = rc.drawable_count();

        // The pick identity must exist before production: producers bake the
        // color into per-vertex pick attributes.
        if rc.is_pick_mode() {
            self.picked_object_id = rc.next_picked_object_id();
            self.pick_color = pick::pick_color(self.picked_object_id);
        }

        self.producer.make_drawables(
            rc,
            ShapeView {
                attributes: &*active,
                altitude_mode: self.altitude_mode,
                path_type: self.path_type,
                pick_color: self.pick_color,
                bounds: &mut self.bounds,
            },
        );

        // Register the picked object only if the queue actually grew; an
        // unused pre-allocated id is discarded, never rolled back.
        if rc.is_pick_mode() && rc.drawable_count() > drawable_count {
            rc.offer_picked_object(PickedObject::new(
                self.picked_object_id,
                self.id,
                rc.current_layer(),
            ));
        }
    }

    /// Highlight bundle when highlighted and present, normal bundle
    /// otherwise.  Recomputed every frame; never persisted.
    fn active_attributes(&self) -> Option<&Arc<ShapeAttributes>> {
        if self.highlighted {
            if let Some(h) = self.highlight_attributes.as_ref() {
                return Some(h);
            }
        }
        self.attributes.as_ref()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
