//! The queued unit of draw work.
//!
//! Geometry producers push `Box<dyn Drawable>`s into the frame context
//! during the scene traversal; a separate executor drains and runs them
//! after the traversal completes.  This crate never executes them — keeping
//! the traversal free of GPU work is the whole point of the split.

use std::any::Any;

/// One deferred piece of draw work.
///
/// The core treats drawables as opaque; executors downcast via [`as_any`]
/// to reach the concrete payload a shape kind enqueued.
///
/// [`as_any`]: Drawable::as_any
pub trait Drawable: Send + 'static {
    /// Short human-readable label for frame dumps and debugging.
    fn name(&self) -> &'static str;

    /// Downcast hook for the draw executor.
    fn as_any(&self) -> &dyn Any;
}
