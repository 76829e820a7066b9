use grid_types::Aabb;

use crate::types::*;

/// Core geometry kernel trait: the minimum capability set the lip build
/// pipeline needs from a B-rep/CSG kernel. Implemented by MockKernel
/// (deterministic test double); a production kernel adapter implements the
/// same surface.
pub trait Kernel {
    /// Construction plane parallel to XY, offset along Z.
    fn offset_plane_from_xy(&mut self, offset: f64) -> Result<PlaneId, KernelError>;

    /// Construction plane offset from an existing planar face.
    fn offset_plane_from_face(&mut self, face: KernelId, offset: f64)
        -> Result<PlaneId, KernelError>;

    /// Extrude a rectangular box upward from a construction plane.
    /// `corner_xy` is the box's minimum-X/minimum-Y corner on the plane.
    fn box_on_plane(
        &mut self,
        plane: PlaneId,
        width: f64,
        length: f64,
        height: f64,
        corner_xy: [f64; 2],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Extrude a rectangular box upward from an absolute corner point.
    fn box_at_point(
        &mut self,
        width: f64,
        length: f64,
        height: f64,
        corner: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Sketch a rectangle on a construction plane and evaluate its profile.
    fn sketch_rectangle(
        &mut self,
        plane: PlaneId,
        corner_xy: [f64; 2],
        width: f64,
        length: f64,
    ) -> Result<ProfileId, KernelError>;

    /// Extrude an evaluated profile into a new body, signed direction.
    fn extrude_profile(
        &mut self,
        profile: ProfileId,
        direction: ExtentDirection,
        depth: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Round every edge of the solid whose length matches `edge_length`.
    /// Called with the body height this rounds exactly the vertical corner
    /// edges. Fails when the radius is degenerate for the body footprint.
    fn fillet_edges_by_length(
        &mut self,
        solid: &KernelSolidHandle,
        radius: f64,
        edge_length: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Two-axis spacing-based rectangular pattern of a seed body.
    /// Returns only the new instances; the seed stays in place, so the
    /// total count is `x.count * y.count` including the seed.
    fn rectangular_pattern(
        &mut self,
        seed: &KernelSolidHandle,
        x: PatternAxis,
        y: PatternAxis,
    ) -> Result<Vec<KernelSolidHandle>, KernelError>;

    /// Rigidly translate a set of bodies in place.
    fn translate_bodies(
        &mut self,
        bodies: &[KernelSolidHandle],
        offset: [f64; 3],
    ) -> Result<(), KernelError>;

    /// Boolean join: merge all tool bodies into the target.
    /// Tool bodies are consumed by the operation.
    fn union_many(
        &mut self,
        target: &KernelSolidHandle,
        tools: &[KernelSolidHandle],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// One boolean cut: subtract all tool bodies from the target.
    /// Tool bodies are consumed by the operation.
    fn subtract_many(
        &mut self,
        target: &KernelSolidHandle,
        tools: &[KernelSolidHandle],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Tag a body with a user-visible name.
    fn name_body(&mut self, solid: &KernelSolidHandle, name: &str) -> Result<(), KernelError>;
}

/// Read-only topology and measurement queries.
pub trait KernelIntrospect {
    /// All faces of a solid.
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// Outward normal of a face, if planar.
    fn face_normal(&self, face: KernelId) -> Option<[f64; 3]>;

    /// Bounding box of a face.
    fn face_bounding_box(&self, face: KernelId) -> Option<Aabb>;

    /// Bounding box of a solid.
    fn solid_bounding_box(&self, solid: &KernelSolidHandle) -> Option<Aabb>;

    /// Material volume of a solid.
    fn solid_volume(&self, solid: &KernelSolidHandle) -> Option<f64>;

    /// Number of disjoint connected pieces the solid consists of.
    fn piece_count(&self, solid: &KernelSolidHandle) -> usize;

    /// Name assigned via `Kernel::name_body`, if any.
    fn body_name(&self, solid: &KernelSolidHandle) -> Option<String>;
}

/// Both kernel surfaces on one object.
///
/// A build pipeline holds a single `&mut dyn KernelBundle` for its modeling
/// calls and takes a read-only introspection view from it between mutating
/// operations (face selection, piece counting).
pub trait KernelBundle: Kernel + KernelIntrospect {
    fn as_introspect(&self) -> &dyn KernelIntrospect;
}

impl<T: Kernel + KernelIntrospect> KernelBundle for T {
    fn as_introspect(&self) -> &dyn KernelIntrospect {
        self
    }
}
