//! `tellus_scene` — the per-frame render/pick pipeline for scene shapes.
//!
//! Every drawable shape runs the same decision sequence once per frame:
//! cull against the view frustum, resolve the active attribute bundle,
//! delegate geometry production, and — in pick passes — register a picked
//! object when (and only when) drawables were actually enqueued.
//!
//! | Module     | Responsibility                                         |
//! |------------|--------------------------------------------------------|
//! | `culling`  | `Aabb`, `Frustum`, `BoundingVolume` visibility tests   |
//! | `drawable` | The queued unit of draw work                           |
//! | `layer`    | `Layer` / `LayerId` handles threaded through picking   |
//! | `pick`     | Pick-id ↔ color encoding, `PickedObject` records       |
//! | `context`  | `RenderContext` — one frame's queues and allocators    |
//! | `shape`    | The `Shape` controller + `GeometryProducer` strategy   |
//!
//! Nothing in this crate executes draw work: drawables are *enqueued* during
//! the scene traversal and drained later by an external executor, which is
//! what allows the traversal itself to run without stalls.

pub mod context;
pub mod culling;
pub mod drawable;
pub mod layer;
pub mod pick;
pub mod shape;

pub use context::RenderContext;
pub use culling::{Aabb, BoundingVolume, Frustum};
pub use drawable::Drawable;
pub use layer::{Layer, LayerId};
pub use pick::{PickedObject, PickedObjectList};
pub use shape::{GeometryProducer, Shape, ShapeId, ShapeView};

// Math types producers will need — re-exported so downstream shape crates
// don't have to depend on glam directly.
pub use glam::{Mat4, Vec3, Vec4};
