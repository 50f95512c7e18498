//! CPU-side visibility tests: axis-aligned boxes against the view frustum.
//!
//! The six frustum planes are extracted analytically from the combined
//! `view_proj` matrix (Gribb-Hartmann row combinations) and stored in world
//! space.  Testing a box is O(6) per shape — cheap enough to run for every
//! shape, every frame, before any geometry work happens.
//!
//! A shape's spatial extent is a [`BoundingVolume`], which is either a real
//! box or the `Unbounded` sentinel.  `Unbounded` means "skip the frustum
//! test, always visible" — the state every shape starts in until its
//! geometry producer computes a real extent.

use glam::{Mat4, Vec3, Vec4};

// ── Aabb ─────────────────────────────────────────────────────────────────────

/// World-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box from `min`/`max` corners.
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tightest box enclosing `points`, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Self::new(first, first);
        for p in it {
            b.min = b.min.min(p);
            b.max = b.max.max(p);
        }
        Some(b)
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extent(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

// ── Frustum ──────────────────────────────────────────────────────────────────

/// Six world-space clip planes extracted from a `view_proj` matrix.
///
/// Each plane is a `Vec4(nx, ny, nz, d)`; a point is on the visible side
/// when `dot(normal, point) + d >= 0`.
#[derive(Debug, Clone)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    /// Extracts the six planes from `view_proj` (Gribb-Hartmann).
    ///
    /// Assumes a `[0, 1]` clip-space depth range (wgpu / Vulkan style), which
    /// is what `glam`'s `perspective_rh` / `orthographic_rh` produce.
    pub fn from_view_proj(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        // left, right, bottom, top, near, far
        let mut planes = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r2, r3 - r2];

        for p in &mut planes {
            let len = p.truncate().length();
            if len > 1e-6 {
                *p /= len;
            }
        }

        Self { planes }
    }

    /// Conservative box-vs-frustum test: `true` means *possibly* visible —
    /// never a false negative.
    ///
    /// For each plane, only the box corner farthest along the plane normal
    /// (the "positive vertex") is tested; if even that corner is behind the
    /// plane, the whole box is outside.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            let v = Vec3::new(
                if plane.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if plane.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if plane.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );
            if plane.truncate().dot(v) + plane.w < 0.0 {
                return false;
            }
        }
        true
    }
}

// ── BoundingVolume ───────────────────────────────────────────────────────────

/// A shape's cached spatial extent.
///
/// `Unbounded` is the explicit always-visible sentinel: a fresh shape has no
/// geometry yet and therefore no extent, and some shapes (screen-space
/// annotations, for instance) never acquire one.  The controller never
/// writes this value — only the shape's geometry producer does, once it
/// knows where its vertices landed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundingVolume {
    /// No extent known; the frustum test is skipped and the shape is
    /// treated as visible unconditionally.
    #[default]
    Unbounded,
    /// A concrete extent, re-tested against the frustum every frame.
    Bounded(Aabb),
}

impl BoundingVolume {
    /// Visibility decision for this frame.
    #[inline]
    pub fn intersects_frustum(&self, frustum: &Frustum) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded(aabb) => frustum.intersects_aabb(aabb),
        }
    }

    /// `true` for the always-visible sentinel.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::new(center - Vec3::splat(0.5), center + Vec3::splat(0.5))
    }

    fn looking_down_neg_z() -> Frustum {
        let proj = Mat4::perspective_rh(60f32.to_radians(), 1.0, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        Frustum::from_view_proj(&(proj * view))
    }

    #[test]
    fn box_in_front_is_visible() {
        let f = looking_down_neg_z();
        assert!(f.intersects_aabb(&unit_box_at(Vec3::new(0.0, 0.0, -5.0))));
    }

    #[test]
    fn box_behind_camera_is_rejected() {
        let f = looking_down_neg_z();
        assert!(!f.intersects_aabb(&unit_box_at(Vec3::new(0.0, 0.0, 5.0))));
    }

    #[test]
    fn box_far_to_the_side_is_rejected() {
        let f = looking_down_neg_z();
        assert!(!f.intersects_aabb(&unit_box_at(Vec3::new(100.0, 0.0, -5.0))));
    }

    #[test]
    fn straddling_box_is_visible() {
        // Crosses the left plane: partially inside, must not be culled.
        let f = looking_down_neg_z();
        let b = Aabb::new(Vec3::new(-20.0, -0.5, -5.5), Vec3::new(0.0, 0.5, -4.5));
        assert!(f.intersects_aabb(&b));
    }

    #[test]
    fn orthographic_frustum_culls_outside_boxes() {
        let proj = Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0);
        let f = Frustum::from_view_proj(&proj);
        assert!(f.intersects_aabb(&unit_box_at(Vec3::new(0.0, 0.0, -5.0))));
        assert!(!f.intersects_aabb(&unit_box_at(Vec3::new(5.0, 0.0, -5.0))));
    }

    #[test]
    fn unbounded_bypasses_the_frustum_test() {
        let f = looking_down_neg_z();
        assert!(BoundingVolume::Unbounded.intersects_frustum(&f));
        // The same extent as a bounded volume would be rejected.
        let behind = BoundingVolume::Bounded(unit_box_at(Vec3::new(0.0, 0.0, 5.0)));
        assert!(!behind.intersects_frustum(&f));
    }

    #[test]
    fn from_points_and_union() {
        assert_eq!(Aabb::from_points(std::iter::empty()), None);
        let a = Aabb::from_points([Vec3::ZERO, Vec3::new(2.0, -1.0, 3.0)]).unwrap();
        assert_eq!(a.min, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(a.max, Vec3::new(2.0, 0.0, 3.0));

        let b = unit_box_at(Vec3::splat(10.0));
        let u = a.union(&b);
        assert_eq!(u.min, a.min);
        assert_eq!(u.max, b.max);

        assert_eq!(b.center(), Vec3::splat(10.0));
        assert_eq!(b.half_extent(), Vec3::splat(0.5));
    }
}
