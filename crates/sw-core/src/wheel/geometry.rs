use crate::entries::EntryName;

/// Wheel center in drawing coordinates.
pub const WHEEL_CENTER: Point = Point { x: 250.0, y: 250.0 };
/// Outer radius of the sector annulus.
pub const OUTER_RADIUS: f64 = 220.0;
/// Inner radius; the hole leaves room for the center hub.
pub const INNER_RADIUS: f64 = 60.0;
/// Radius at which sector labels are anchored.
pub const LABEL_RADIUS: f64 = 140.0;
/// Above this entry count no label text is drawn on the wheel at all.
pub const LABEL_VISIBILITY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Drawable outline of one sector: an annulus slice between
/// [`INNER_RADIUS`] and [`OUTER_RADIUS`].
#[derive(Debug, Clone, PartialEq)]
pub struct SectorShape {
    pub index: usize,
    /// Degrees; sector 0 starts at 12 o'clock, hence the −90 shift.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Arc sweep exceeds 180°, only possible for a single-entry wheel.
    pub large_arc: bool,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
    pub stroke_width: f64,
}

/// Label placement for one sector, rotated to sit along the sector's
/// center line.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorLabel {
    pub text: String,
    pub position: Point,
    /// Degrees, same convention as the sector angles.
    pub rotation: f64,
    pub font_size: f64,
}

/// Angular span of one sector, degrees.
pub fn segment_angle(entry_count: usize) -> f64 {
    360.0 / entry_count as f64
}

/// Stroke width between sectors; shrinks as the wheel gets denser so
/// strokes do not swallow the slices.
pub fn stroke_width(entry_count: usize) -> f64 {
    if entry_count <= 200 {
        3.0
    } else if entry_count <= 500 {
        2.0
    } else {
        1.0
    }
}

/// Label font size: 18 up to 50 entries, then a linear shrink to 8 at
/// 100 entries, then a gentler shrink toward a floor of 6.
pub fn font_size(entry_count: usize) -> f64 {
    let n = entry_count as f64;
    if entry_count <= 50 {
        18.0
    } else if entry_count <= 100 {
        (18.0 - (n - 50.0) * 0.2).max(8.0)
    } else {
        (8.0 - (n - 100.0) * 0.04).max(6.0)
    }
}

/// Truncate a label for dense wheels: 8 characters past 50 entries,
/// 5 characters past 200, with a trailing ellipsis.
pub fn truncate_label(text: &str, entry_count: usize) -> String {
    let limit = if entry_count > 200 {
        5
    } else if entry_count > 50 {
        8
    } else {
        return text.to_string();
    };
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push('…');
    truncated
}

fn polar(radius: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point {
        x: WHEEL_CENTER.x + radius * radians.cos(),
        y: WHEEL_CENTER.y + radius * radians.sin(),
    }
}

/// Geometry for sector `index` on a wheel of `entry_count` sectors.
/// `None` when the index is out of range (including the empty wheel).
pub fn sector_shape(entry_count: usize, index: usize) -> Option<SectorShape> {
    if index >= entry_count {
        return None;
    }
    let span = segment_angle(entry_count);
    let start_angle = index as f64 * span - 90.0;
    let end_angle = start_angle + span;
    Some(SectorShape {
        index,
        start_angle,
        end_angle,
        large_arc: span > 180.0,
        outer_start: polar(OUTER_RADIUS, start_angle),
        outer_end: polar(OUTER_RADIUS, end_angle),
        inner_end: polar(INNER_RADIUS, end_angle),
        inner_start: polar(INNER_RADIUS, start_angle),
        stroke_width: stroke_width(entry_count),
    })
}

/// Label for sector `index`, or `None` when labels are suppressed for
/// density or the index is out of range.
pub fn sector_label(name: &EntryName, entry_count: usize, index: usize) -> Option<SectorLabel> {
    if index >= entry_count || entry_count > LABEL_VISIBILITY_LIMIT {
        return None;
    }
    let span = segment_angle(entry_count);
    let rotation = index as f64 * span - 90.0 + span / 2.0;
    Some(SectorLabel {
        text: truncate_label(name.as_str(), entry_count),
        position: polar(LABEL_RADIUS, rotation),
        rotation,
        font_size: font_size(entry_count),
    })
}
