use grid_types::{LipSpec, BIN_CORNER_FILLET_RADIUS, BIN_LIP_EXTRA_HEIGHT};

use crate::types::BuildError;

/// Derived dimensions for one lip build. Computed exactly once per build;
/// `derive` is a pure function of the spec.
#[derive(Debug, Clone, PartialEq)]
pub struct LipDimensions {
    /// Planar lip size: grid footprint minus clearance on both sides.
    pub width: f64,
    pub length: f64,
    /// Lip height above the bin body.
    pub height: f64,
    /// Corner rounding radius of the outer shell.
    pub corner_fillet_radius: f64,
    /// Which cutout set the build constructs.
    pub plan: CutoutPlan,
}

/// The data-dependent branch of the build pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CutoutPlan {
    /// Per-unit socket cutouts plus a mid-span clearance channel.
    Notched {
        mid_width: f64,
        mid_length: f64,
        mid_fillet_radius: f64,
    },
    /// One full-span socket cutout.
    FullSpan,
}

impl LipDimensions {
    pub fn derive(spec: &LipSpec) -> Result<Self, BuildError> {
        check_positive("base_width", spec.base_width)?;
        check_positive("base_length", spec.base_length)?;
        if spec.bin_width == 0 {
            return Err(BuildError::InvalidDimension {
                dimension: "bin_width",
                value: 0.0,
            });
        }
        if spec.bin_length == 0 {
            return Err(BuildError::InvalidDimension {
                dimension: "bin_length",
                value: 0.0,
            });
        }
        if spec.xy_tolerance < 0.0 {
            return Err(BuildError::InvalidDimension {
                dimension: "xy_tolerance",
                value: spec.xy_tolerance,
            });
        }
        let width = spec.base_width * f64::from(spec.bin_width) - 2.0 * spec.xy_tolerance;
        let length = spec.base_length * f64::from(spec.bin_length) - 2.0 * spec.xy_tolerance;
        check_positive("lip width", width)?;
        check_positive("lip length", length)?;

        if 2.0 * BIN_CORNER_FILLET_RADIUS > width.min(length) {
            return Err(BuildError::DegenerateFillet {
                radius: BIN_CORNER_FILLET_RADIUS,
                context: format!(
                    "corner radius exceeds half the {:.3} lip footprint",
                    width.min(length)
                ),
            });
        }

        let plan = if spec.has_lip_notches {
            // The wall only matters when the mid channel is cut from it.
            check_positive("wall_thickness", spec.wall_thickness)?;
            let mid_fillet_radius = BIN_CORNER_FILLET_RADIUS - spec.wall_thickness;
            if mid_fillet_radius <= 0.0 {
                return Err(BuildError::DegenerateFillet {
                    radius: mid_fillet_radius,
                    context: format!(
                        "wall thickness {:.3} leaves no mid-cutout corner radius",
                        spec.wall_thickness
                    ),
                });
            }
            let mid_width = width - 2.0 * spec.wall_thickness;
            let mid_length = length - 2.0 * spec.wall_thickness;
            check_positive("mid cutout width", mid_width)?;
            check_positive("mid cutout length", mid_length)?;
            CutoutPlan::Notched {
                mid_width,
                mid_length,
                mid_fillet_radius,
            }
        } else {
            CutoutPlan::FullSpan
        };

        Ok(Self {
            width,
            length,
            height: BIN_LIP_EXTRA_HEIGHT,
            corner_fillet_radius: BIN_CORNER_FILLET_RADIUS,
            plan,
        })
    }
}

fn check_positive(dimension: &'static str, value: f64) -> Result<(), BuildError> {
    if value <= 0.0 {
        Err(BuildError::InvalidDimension { dimension, value })
    } else {
        Ok(())
    }
}
