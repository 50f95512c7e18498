//! Closed enumerations controlling how a shape's geometry is generated.
//!
//! Both modes change the *shape* of generated geometry, so the controller
//! fires its reset hook whenever either is assigned (see
//! `tellus_scene::shape`).  Consumption sites match exhaustively; adding a
//! variant is a deliberate, compiler-enforced change.

/// How a shape's vertical coordinates are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AltitudeMode {
    /// Altitudes are absolute heights above the reference ellipsoid.
    #[default]
    Absolute,
    /// Altitudes are ignored; geometry is draped onto the terrain surface.
    ClampToGround,
    /// Altitudes are offsets above the terrain surface directly below.
    RelativeToGround,
}

/// How intermediate positions along a path segment are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathType {
    /// Shortest arc on the globe between two positions.
    #[default]
    GreatCircle,
    /// Straight line in model coordinates.
    Linear,
    /// Constant-bearing (loxodrome) arc between two positions.
    RhumbLine,
}
