//! Sector geometry and rendering projection.
//!
//! Everything here is a pure function of `(entry count, index)` and is
//! recomputed on every render. The density thresholds (label
//! suppression, stroke width, font size, truncation) are part of the
//! engine's performance contract with the presentation layer, not
//! cosmetics, and are fixed constants rather than configuration.

mod color;
mod geometry;
mod scene;

pub use color::{segment_color, SegmentColor, GOLDEN_ANGLE_DEGREES};
pub use geometry::{
    font_size, sector_label, sector_shape, segment_angle, stroke_width, truncate_label, Point,
    SectorLabel, SectorShape, INNER_RADIUS, LABEL_RADIUS, LABEL_VISIBILITY_LIMIT, OUTER_RADIUS,
    WHEEL_CENTER,
};
pub use scene::{project, HubPrimitive, SectorPrimitive, WheelScene};
