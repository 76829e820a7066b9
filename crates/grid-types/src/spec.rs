use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_UNIT, DEFAULT_WALL_THICKNESS, DEFAULT_XY_TOLERANCE};
use crate::geom::Point3;

/// Input parameters for one lip build. Immutable for the duration of the
/// build; all derived dimensions are computed from it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LipSpec {
    /// Placement reference: the bin's bottom-front-left corner.
    pub origin: Point3,
    /// Footprint of one grid cell along X.
    pub base_width: f64,
    /// Footprint of one grid cell along Y.
    pub base_length: f64,
    /// Grid units the bin spans along X.
    pub bin_width: u32,
    /// Grid units the bin spans along Y.
    pub bin_length: u32,
    /// Bin wall thickness. Must stay below the corner fillet radius for
    /// the notched variant.
    pub wall_thickness: f64,
    /// Clearance subtracted twice from each planar dimension.
    pub xy_tolerance: f64,
    /// Selects the per-unit notch cutout branch.
    pub has_lip_notches: bool,
}

impl LipSpec {
    /// A spec with standard Gridfinity dimensions for the given unit counts.
    pub fn standard(bin_width: u32, bin_length: u32) -> Self {
        Self {
            origin: Point3::origin(),
            base_width: DEFAULT_GRID_UNIT,
            base_length: DEFAULT_GRID_UNIT,
            bin_width,
            bin_length,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            xy_tolerance: DEFAULT_XY_TOLERANCE,
            has_lip_notches: false,
        }
    }
}
