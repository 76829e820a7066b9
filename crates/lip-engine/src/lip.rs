//! The lip build pipeline: shell, cutout set, top recess, alignment, cut.

use grid_kernel::{ExtentDirection, KernelBundle, KernelError, KernelSolidHandle, PatternAxis};
use grid_types::{LipSpec, BIN_BASE_HEIGHT, BIN_LIP_TOP_RECESS_HEIGHT};

use crate::base::{BaseCutoutRequest, BaseGenerator};
use crate::dims::{CutoutPlan, LipDimensions};
use crate::faces::top_face;
use crate::session::BuildSession;
use crate::types::{BuildError, BuildOutput, CutoutSummary, Diagnostics};

/// Below this wall thickness the per-unit notch cutouts reach into the
/// shell's rounded-corner region; the build still runs but flags it.
const MIN_NOTCH_WALL: f64 = 0.5;

/// Build the lip body for `spec`.
///
/// One logical transaction: any kernel failure aborts the whole build and
/// nothing is committed. On success exactly one body, named "lip body",
/// is designated durable; every other solid and construction plane created
/// along the way is transient.
pub fn build_lip(
    spec: &LipSpec,
    kernel: &mut dyn KernelBundle,
    base: &mut dyn BaseGenerator,
) -> Result<BuildOutput, BuildError> {
    let dims = LipDimensions::derive(spec)?;

    let mut diagnostics = Diagnostics::default();
    if spec.has_lip_notches && spec.wall_thickness < MIN_NOTCH_WALL {
        diagnostics.warnings.push(format!(
            "wall thickness {:.3} lets the notch pattern reach the rounded corners",
            spec.wall_thickness
        ));
    }

    let mut session = BuildSession::new(kernel);

    // Shell: rounded-corner box of lip height at the base elevation.
    let base_plane = session.kernel().offset_plane_from_xy(spec.origin.z)?;
    let shell = session.kernel().box_on_plane(
        base_plane,
        dims.width,
        dims.length,
        dims.height,
        [spec.origin.x, spec.origin.y],
    )?;
    session.track("lip shell", &shell);
    session.kernel().name_body(&shell, "lip body")?;
    let shell =
        session
            .kernel()
            .fillet_edges_by_length(&shell, dims.corner_fillet_radius, dims.height)?;

    // Sketch plane for the top recess, flush with the shell's top face.
    let shell_top = top_face(session.kernel().as_introspect(), &shell).ok_or_else(|| {
        KernelError::Other {
            message: "lip shell has no upward face".to_string(),
        }
    })?;
    let top_plane = session.kernel().offset_plane_from_face(shell_top, 0.0)?;

    // Cutout set: per-unit sockets + mid channel, or one full-span socket.
    let mut unit_cutouts: Vec<KernelSolidHandle> = Vec::new();
    let mut bodies_to_subtract: Vec<KernelSolidHandle> = Vec::new();

    match &dims.plan {
        CutoutPlan::Notched {
            mid_width,
            mid_length,
            mid_fillet_radius,
        } => {
            let request = BaseCutoutRequest {
                base_width: spec.base_width,
                base_length: spec.base_length,
                xy_tolerance: spec.xy_tolerance,
                has_bottom_chamfer: false,
            };
            let seed = base.create_base_with_clearance(session.kernel(), &request)?;
            session.track("lip cutout", &seed);

            let instances = session.kernel().rectangular_pattern(
                &seed,
                PatternAxis::new(spec.bin_width, spec.base_width),
                PatternAxis::new(spec.bin_length, spec.base_length),
            )?;
            for instance in &instances {
                session.track("lip cutout", instance);
            }
            unit_cutouts.push(seed);
            unit_cutouts.extend(instances);

            let mid = session.kernel().box_at_point(
                *mid_width,
                *mid_length,
                dims.height,
                [
                    spec.origin.x + spec.wall_thickness,
                    spec.origin.y + spec.wall_thickness,
                    spec.origin.z,
                ],
            )?;
            session.track("lip mid cutout", &mid);
            let mid =
                session
                    .kernel()
                    .fillet_edges_by_length(&mid, *mid_fillet_radius, dims.height)?;
            bodies_to_subtract.push(mid);
        }
        CutoutPlan::FullSpan => {
            let request = BaseCutoutRequest {
                base_width: spec.base_width * f64::from(spec.bin_width),
                base_length: spec.base_length * f64::from(spec.bin_length),
                xy_tolerance: spec.xy_tolerance,
                has_bottom_chamfer: false,
            };
            let cutout = base.create_base_with_clearance(session.kernel(), &request)?;
            session.track("lip cutout", &cutout);
            unit_cutouts.push(cutout);
        }
    }

    // Top recess: a thin slab carved downward from the rim.
    let recess_profile = session.kernel().sketch_rectangle(
        top_plane,
        [spec.origin.x, spec.origin.y],
        dims.width,
        dims.length,
    )?;
    let recess = session.kernel().extrude_profile(
        recess_profile,
        ExtentDirection::Negative,
        BIN_LIP_TOP_RECESS_HEIGHT,
    )?;
    session.track("top recess", &recess);
    bodies_to_subtract.push(recess);

    // Lift the socket cutouts to the lip elevation.
    session.kernel().translate_bodies(
        &unit_cutouts,
        [0.0, 0.0, spec.origin.z + BIN_BASE_HEIGHT],
    )?;
    let unit_cutout_count = unit_cutouts.len();
    bodies_to_subtract.extend(unit_cutouts);

    // One cut with the whole tool set.
    let result = session.kernel().subtract_many(&shell, &bodies_to_subtract)?;
    let pieces = session.kernel().as_introspect().piece_count(&result);
    if pieces != 1 {
        return Err(BuildError::NonManifoldResult { pieces });
    }

    let body = session.commit(result, "lip body")?;
    Ok(BuildOutput {
        body,
        summary: CutoutSummary {
            unit_cutouts: unit_cutout_count,
            has_mid_cutout: spec.has_lip_notches,
            has_top_recess: true,
        },
        diagnostics,
    })
}
