//! Assertion helpers with diagnostic output.
//!
//! Every failure reports expected vs actual so a failing scenario can be
//! diagnosed from the message alone.

use grid_kernel::{KernelIntrospect, KernelSolidHandle};

use crate::helpers::HarnessError;

/// Assert a solid's bounding-box size matches expected values within tolerance.
pub fn assert_bounding_box_size(
    introspect: &dyn KernelIntrospect,
    solid: &KernelSolidHandle,
    expected: [f64; 3],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let bbox = introspect
        .solid_bounding_box(solid)
        .ok_or_else(|| HarnessError::AssertionFailed {
            detail: format!("[{}] solid has no bounding box", ctx),
        })?;
    let actual = bbox.size();
    for axis in 0..3 {
        if (actual[axis] - expected[axis]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box size[{}]: expected {:.3}, got {:.3} (tol={})",
                    ctx, axis, expected[axis], actual[axis], tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert a solid is one connected body.
pub fn assert_single_piece(
    introspect: &dyn KernelIntrospect,
    solid: &KernelSolidHandle,
    ctx: &str,
) -> Result<(), HarnessError> {
    let pieces = introspect.piece_count(solid);
    if pieces == 1 {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected 1 connected piece, got {}", ctx, pieces),
        })
    }
}

/// Assert solid `a` has strictly less material volume than solid `b`.
pub fn assert_volume_lt(
    introspect: &dyn KernelIntrospect,
    a: &KernelSolidHandle,
    b: &KernelSolidHandle,
    ctx: &str,
) -> Result<(), HarnessError> {
    let va = introspect
        .solid_volume(a)
        .ok_or_else(|| HarnessError::AssertionFailed {
            detail: format!("[{}] first solid has no volume", ctx),
        })?;
    let vb = introspect
        .solid_volume(b)
        .ok_or_else(|| HarnessError::AssertionFailed {
            detail: format!("[{}] second solid has no volume", ctx),
        })?;
    if va < vb {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected volume {:.3} < {:.3}", ctx, va, vb),
        })
    }
}
