//! Face-selection helpers over the introspection trait.

use grid_kernel::{KernelId, KernelIntrospect, KernelSolidHandle};

const NORMAL_TOL: f64 = 1e-9;

fn is_y_normal(normal: [f64; 3]) -> bool {
    normal[0].abs() < NORMAL_TOL && (normal[1].abs() - 1.0).abs() < NORMAL_TOL
        && normal[2].abs() < NORMAL_TOL
}

/// Select the scoop face of an inner cutout body: among its Y-normal faces,
/// the one nearest the front (minimum bounding-box Y), paired with its
/// opposite (maximum Y).
///
/// Not used by the lip pipeline itself; the front-access scoop feature
/// selects its sweep faces with this.
pub fn inner_cutout_scoop_face(
    introspect: &dyn KernelIntrospect,
    body: &KernelSolidHandle,
) -> Option<(KernelId, KernelId)> {
    let mut y_faces: Vec<(KernelId, f64)> = introspect
        .list_faces(body)
        .into_iter()
        .filter(|&f| introspect.face_normal(f).map(is_y_normal).unwrap_or(false))
        .filter_map(|f| introspect.face_bounding_box(f).map(|b| (f, b.min[1])))
        .collect();
    if y_faces.is_empty() {
        return None;
    }
    y_faces.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let scoop = y_faces.first()?.0;
    let opposite = y_faces.last()?.0;
    Some((scoop, opposite))
}

/// The face of a body with outward normal +Z at the highest elevation.
pub fn top_face(introspect: &dyn KernelIntrospect, body: &KernelSolidHandle) -> Option<KernelId> {
    introspect
        .list_faces(body)
        .into_iter()
        .filter(|&f| {
            introspect
                .face_normal(f)
                .map(|n| (n[2] - 1.0).abs() < NORMAL_TOL)
                .unwrap_or(false)
        })
        .filter_map(|f| introspect.face_bounding_box(f).map(|b| (f, b.max[2])))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(f, _)| f)
}
