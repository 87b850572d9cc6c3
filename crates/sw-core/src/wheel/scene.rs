use crate::snapshot::WheelSnapshot;
use crate::wheel::{
    color::{segment_color, SegmentColor},
    geometry::{sector_label, sector_shape, Point, SectorLabel, SectorShape, INNER_RADIUS,
        WHEEL_CENTER},
};

/// One drawable sector: outline, fill, optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPrimitive {
    pub shape: SectorShape,
    pub color: SegmentColor,
    pub label: Option<SectorLabel>,
}

/// The center hub covering the annulus hole.
#[derive(Debug, Clone, PartialEq)]
pub struct HubPrimitive {
    pub center: Point,
    pub radius: f64,
}

/// Drawable projection of a snapshot; the rendering collaborator
/// applies `rotation` as the wheel transform and draws the primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelScene {
    pub rotation: f64,
    pub spinning: bool,
    pub sectors: Vec<SectorPrimitive>,
    pub hub: HubPrimitive,
}

/// Pure projection from session snapshot to drawable primitives.
pub fn project(snapshot: &WheelSnapshot) -> WheelScene {
    let n = snapshot.entries.len();
    let sectors = snapshot
        .entries
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let shape = sector_shape(n, index)?;
            Some(SectorPrimitive {
                shape,
                color: segment_color(index),
                label: sector_label(name, n, index),
            })
        })
        .collect();
    WheelScene {
        rotation: snapshot.rotation,
        spinning: snapshot.spinning,
        sectors,
        hub: HubPrimitive {
            center: WHEEL_CENTER,
            radius: INNER_RADIUS,
        },
    }
}
