//! `tellus_core` — value types shared by every Tellus crate.
//!
//! Nothing in here knows about frames, frustums or drawables; these are the
//! plain data objects that shape owners assign and geometry producers read.
//!
//! | Module       | Responsibility                                      |
//! |--------------|-----------------------------------------------------|
//! | `color`      | Linear RGBA color + hex parsing                     |
//! | `modes`      | `AltitudeMode` / `PathType` closed enumerations     |
//! | `attributes` | `ShapeAttributes` visual style value object         |

pub mod attributes;
pub mod color;
pub mod modes;

pub use attributes::ShapeAttributes;
pub use color::{Color, ColorParseError};
pub use modes::{AltitudeMode, PathType};
