//! Gridfinity dimensional constants, in millimetres.

/// Corner rounding radius shared by every body in the bin family.
pub const BIN_CORNER_FILLET_RADIUS: f64 = 3.75;

/// Height of the stacking lip added above the bin body.
pub const BIN_LIP_EXTRA_HEIGHT: f64 = 4.4;

/// Depth of the shallow recess carved into the top rim.
pub const BIN_LIP_TOP_RECESS_HEIGHT: f64 = 1.2;

/// Height of the bin base (peg/socket) profile. Cutout bodies are lifted
/// by this amount so their tops land flush with the lip interior.
pub const BIN_BASE_HEIGHT: f64 = 4.75;

/// Footprint of one grid cell.
pub const DEFAULT_GRID_UNIT: f64 = 42.0;

/// Clearance subtracted twice from each planar dimension.
pub const DEFAULT_XY_TOLERANCE: f64 = 0.25;

/// Default bin wall thickness.
pub const DEFAULT_WALL_THICKNESS: f64 = 1.2;
