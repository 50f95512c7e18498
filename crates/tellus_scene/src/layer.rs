//! Layers group shapes for traversal and hit-test resolution.
//!
//! The render core only threads the *current* layer handle through to
//! picked-object records; it never walks layers itself (traversal above a
//! single shape is the owner's job).

use std::sync::atomic::{AtomicU64, Ordering};

static LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, stable handle identifying a [`Layer`].
///
/// Handles stay valid for the life of the process; picked-object records
/// carry them back to whoever resolves hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// A named group of shapes.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    display_name: String,
    /// Disabled layers are skipped by the traversal entirely.
    pub enabled: bool,
    /// Layers can opt out of pick passes while staying visible.
    pub pick_enabled: bool,
}

impl Layer {
    /// Creates an enabled, pickable layer with a fresh id.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: LayerId(LAYER_ID.fetch_add(1, Ordering::Relaxed)),
            display_name: display_name.into(),
            enabled: true,
            pick_enabled: true,
        }
    }

    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Layer::new("base");
        let b = Layer::new("overlay");
        assert_ne!(a.id(), b.id());
        assert!(a.enabled && a.pick_enabled);
    }
}
