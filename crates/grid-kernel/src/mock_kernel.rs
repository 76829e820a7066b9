//! MockKernel — deterministic test double implementing Kernel + KernelIntrospect.
//!
//! Solids are compounds of axis-aligned boxes with six synthetic boundary
//! faces, so normal/bounding-box queries behave like a real kernel's.
//! Boolean subtraction is evaluated analytically with a coordinate sweep
//! (see `sweep`), which keeps volumes and piece counts exact for box
//! geometry and lets tests assert real material-removal properties.

use std::collections::HashMap;

use grid_types::Aabb;

use crate::sweep;
use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;

/// A synthetic planar face with known normal and bounds.
#[derive(Debug, Clone)]
struct MockFace {
    id: KernelId,
    normal: [f64; 3],
    bbox: Aabb,
}

/// A solid tracked as a compound of boxes.
#[derive(Debug, Clone)]
struct MockSolid {
    name: Option<String>,
    parts: Vec<Aabb>,
    volume: f64,
    piece_count: usize,
    faces: Vec<MockFace>,
}

impl MockSolid {
    // Parts are non-empty by construction.
    fn bbox(&self) -> Aabb {
        self.parts
            .iter()
            .skip(1)
            .fold(self.parts[0], |acc, p| acc.union(p))
    }
}

#[derive(Debug, Clone, Copy)]
struct MockPlane {
    z: f64,
}

#[derive(Debug, Clone, Copy)]
struct MockProfile {
    plane_z: f64,
    corner: [f64; 2],
    width: f64,
    length: f64,
}

/// Count of kernel operations executed, for tests that assert which
/// operations a pipeline did (or did not) invoke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub planes: usize,
    pub boxes: usize,
    pub profiles: usize,
    pub extrudes: usize,
    pub fillets: usize,
    pub patterns: usize,
    pub unions: usize,
    pub moves: usize,
    pub booleans: usize,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_id: u64,
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    planes: HashMap<u64, MockPlane>,
    profiles: HashMap<u64, MockProfile>,
    ops: OpCounts,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            next_handle: 1,
            solids: HashMap::new(),
            planes: HashMap::new(),
            profiles: HashMap::new(),
            ops: OpCounts::default(),
        }
    }

    /// Operation trace accumulated so far.
    pub fn op_counts(&self) -> OpCounts {
        self.ops
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    /// Six boundary faces from an overall bounding box.
    fn boundary_faces(&mut self, bbox: &Aabb) -> Vec<MockFace> {
        let [x0, y0, z0] = bbox.min;
        let [x1, y1, z1] = bbox.max;
        let defs: [([f64; 3], Aabb); 6] = [
            ([0.0, 0.0, -1.0], Aabb::new([x0, y0, z0], [x1, y1, z0])),
            ([0.0, 0.0, 1.0], Aabb::new([x0, y0, z1], [x1, y1, z1])),
            ([0.0, -1.0, 0.0], Aabb::new([x0, y0, z0], [x1, y0, z1])),
            ([0.0, 1.0, 0.0], Aabb::new([x0, y1, z0], [x1, y1, z1])),
            ([-1.0, 0.0, 0.0], Aabb::new([x0, y0, z0], [x0, y1, z1])),
            ([1.0, 0.0, 0.0], Aabb::new([x1, y0, z0], [x1, y1, z1])),
        ];
        defs.into_iter()
            .map(|(normal, bbox)| MockFace {
                id: self.alloc_id(),
                normal,
                bbox,
            })
            .collect()
    }

    fn create_solid(&mut self, parts: Vec<Aabb>) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        let bbox = parts.iter().skip(1).fold(parts[0], |acc, p| acc.union(p));
        let volume = sweep::union_volume(&bbox, &parts);
        let faces = self.boundary_faces(&bbox);
        self.solids.insert(
            handle.id(),
            MockSolid {
                name: None,
                parts,
                volume,
                piece_count: 1,
                faces,
            },
        );
        handle
    }

    fn solid(&self, handle: &KernelSolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound {
                handle: handle.id(),
            })
    }

    fn make_box(
        &mut self,
        width: f64,
        length: f64,
        height: f64,
        corner: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        if width <= 0.0 || length <= 0.0 || height <= 0.0 {
            return Err(KernelError::ExtrudeFailed {
                reason: format!(
                    "degenerate box dimensions {:.3} x {:.3} x {:.3}",
                    width, length, height
                ),
            });
        }
        self.ops.boxes += 1;
        Ok(self.create_solid(vec![Aabb::new(
            corner,
            [corner[0] + width, corner[1] + length, corner[2] + height],
        )]))
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn offset_plane_from_xy(&mut self, offset: f64) -> Result<PlaneId, KernelError> {
        self.ops.planes += 1;
        let id = self.alloc_id();
        self.planes.insert(id.0, MockPlane { z: offset });
        Ok(PlaneId(id.0))
    }

    fn offset_plane_from_face(
        &mut self,
        face: KernelId,
        offset: f64,
    ) -> Result<PlaneId, KernelError> {
        let face_z = self
            .solids
            .values()
            .flat_map(|s| s.faces.iter())
            .find(|f| f.id == face)
            .map(|f| f.bbox.max[2])
            .ok_or(KernelError::EntityNotFound { id: face })?;
        self.ops.planes += 1;
        let id = self.alloc_id();
        self.planes.insert(id.0, MockPlane { z: face_z + offset });
        Ok(PlaneId(id.0))
    }

    fn box_on_plane(
        &mut self,
        plane: PlaneId,
        width: f64,
        length: f64,
        height: f64,
        corner_xy: [f64; 2],
    ) -> Result<KernelSolidHandle, KernelError> {
        let z = self
            .planes
            .get(&plane.0)
            .ok_or(KernelError::PlaneFailed {
                reason: format!("unknown construction plane {}", plane.0),
            })?
            .z;
        self.make_box(width, length, height, [corner_xy[0], corner_xy[1], z])
    }

    fn box_at_point(
        &mut self,
        width: f64,
        length: f64,
        height: f64,
        corner: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        self.make_box(width, length, height, corner)
    }

    fn sketch_rectangle(
        &mut self,
        plane: PlaneId,
        corner_xy: [f64; 2],
        width: f64,
        length: f64,
    ) -> Result<ProfileId, KernelError> {
        if width <= 0.0 || length <= 0.0 {
            return Err(KernelError::ProfileFailed {
                reason: format!("zero-area rectangle {:.3} x {:.3}", width, length),
            });
        }
        let z = self
            .planes
            .get(&plane.0)
            .ok_or(KernelError::PlaneFailed {
                reason: format!("unknown construction plane {}", plane.0),
            })?
            .z;
        self.ops.profiles += 1;
        let id = self.alloc_id();
        self.profiles.insert(
            id.0,
            MockProfile {
                plane_z: z,
                corner: corner_xy,
                width,
                length,
            },
        );
        Ok(ProfileId(id.0))
    }

    fn extrude_profile(
        &mut self,
        profile: ProfileId,
        direction: ExtentDirection,
        depth: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        if depth <= 0.0 {
            return Err(KernelError::ExtrudeFailed {
                reason: format!("non-positive extrude depth {:.3}", depth),
            });
        }
        let p = *self
            .profiles
            .get(&profile.0)
            .ok_or(KernelError::ProfileFailed {
                reason: format!("unknown profile {}", profile.0),
            })?;
        let z0 = match direction {
            ExtentDirection::Positive => p.plane_z,
            ExtentDirection::Negative => p.plane_z - depth,
        };
        self.ops.extrudes += 1;
        Ok(self.create_solid(vec![Aabb::new(
            [p.corner[0], p.corner[1], z0],
            [p.corner[0] + p.width, p.corner[1] + p.length, z0 + depth],
        )]))
    }

    fn fillet_edges_by_length(
        &mut self,
        solid: &KernelSolidHandle,
        radius: f64,
        edge_length: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let src = self.solid(solid)?.clone();
        let size = src.bbox().size();
        if radius <= 0.0 {
            return Err(KernelError::FilletFailed {
                reason: format!("non-positive fillet radius {:.3}", radius),
            });
        }
        if (size[2] - edge_length).abs() > 1e-9 {
            return Err(KernelError::FilletFailed {
                reason: format!(
                    "no edges of length {:.3} on body of height {:.3}",
                    edge_length, size[2]
                ),
            });
        }
        if 2.0 * radius > size[0].min(size[1]) {
            return Err(KernelError::FilletFailed {
                reason: format!(
                    "radius {:.3} exceeds half the smaller footprint side {:.3}",
                    radius,
                    size[0].min(size[1])
                ),
            });
        }
        self.ops.fillets += 1;
        // Four rounded vertical corners remove (4 - pi) r^2 per unit height.
        let removed = (4.0 - std::f64::consts::PI) * radius * radius * edge_length;
        let bbox = src.bbox();
        let faces = self.boundary_faces(&bbox);
        let handle = self.alloc_handle();
        let mut out = src;
        out.volume = (out.volume - removed).max(0.0);
        out.faces = faces;
        self.solids.insert(handle.id(), out);
        Ok(handle)
    }

    fn rectangular_pattern(
        &mut self,
        seed: &KernelSolidHandle,
        x: PatternAxis,
        y: PatternAxis,
    ) -> Result<Vec<KernelSolidHandle>, KernelError> {
        if x.count == 0 || y.count == 0 {
            return Err(KernelError::PatternFailed {
                reason: "pattern count must be at least 1".to_string(),
            });
        }
        let src = self.solid(seed)?.clone();
        self.ops.patterns += 1;
        let mut instances = Vec::new();
        for j in 0..y.count {
            for i in 0..x.count {
                if i == 0 && j == 0 {
                    continue;
                }
                let offset = [f64::from(i) * x.spacing, f64::from(j) * y.spacing, 0.0];
                let parts: Vec<Aabb> = src.parts.iter().map(|p| p.translated(offset)).collect();
                instances.push(self.create_solid(parts));
            }
        }
        Ok(instances)
    }

    fn translate_bodies(
        &mut self,
        bodies: &[KernelSolidHandle],
        offset: [f64; 3],
    ) -> Result<(), KernelError> {
        for handle in bodies {
            if !self.solids.contains_key(&handle.id()) {
                return Err(KernelError::MoveFailed {
                    reason: format!("unknown body {}", handle.id()),
                });
            }
        }
        self.ops.moves += 1;
        for handle in bodies {
            if let Some(solid) = self.solids.get_mut(&handle.id()) {
                for p in &mut solid.parts {
                    *p = p.translated(offset);
                }
                for f in &mut solid.faces {
                    f.bbox = f.bbox.translated(offset);
                }
            }
        }
        Ok(())
    }

    fn union_many(
        &mut self,
        target: &KernelSolidHandle,
        tools: &[KernelSolidHandle],
    ) -> Result<KernelSolidHandle, KernelError> {
        let tgt = self.solid(target)?.clone();
        let mut parts = tgt.parts.clone();
        for t in tools {
            parts.extend(self.solid(t)?.parts.iter().copied());
        }
        self.ops.unions += 1;

        let bbox = parts.iter().skip(1).fold(parts[0], |acc, p| acc.union(p));
        let pieces = sweep::union_pieces(&bbox, &parts);
        if pieces > 1 {
            return Err(KernelError::BooleanFailed {
                reason: format!("union produced {} disjoint pieces", pieces),
            });
        }

        for t in tools {
            self.solids.remove(&t.id());
        }
        self.solids.remove(&target.id());

        let volume = sweep::union_volume(&bbox, &parts);
        let faces = self.boundary_faces(&bbox);
        let handle = self.alloc_handle();
        self.solids.insert(
            handle.id(),
            MockSolid {
                name: tgt.name,
                parts,
                volume,
                piece_count: 1,
                faces,
            },
        );
        Ok(handle)
    }

    fn subtract_many(
        &mut self,
        target: &KernelSolidHandle,
        tools: &[KernelSolidHandle],
    ) -> Result<KernelSolidHandle, KernelError> {
        if tools.is_empty() {
            return Err(KernelError::BooleanFailed {
                reason: "no tool bodies".to_string(),
            });
        }
        let tgt = self.solid(target)?.clone();
        let mut tool_parts = Vec::new();
        for t in tools {
            tool_parts.extend(self.solid(t)?.parts.iter().copied());
        }
        self.ops.booleans += 1;

        let region = tgt.bbox();
        let removed = sweep::union_volume(&region, &tool_parts);
        let volume = tgt.volume - removed;
        if volume <= 0.0 {
            return Err(KernelError::BooleanFailed {
                reason: "tool bodies consume the entire target".to_string(),
            });
        }
        let pieces = sweep::complement_pieces(&region, &tool_parts);

        // Tool bodies are consumed by the cut.
        for t in tools {
            self.solids.remove(&t.id());
        }
        self.solids.remove(&target.id());

        let handle = self.alloc_handle();
        let faces = self.boundary_faces(&region);
        self.solids.insert(
            handle.id(),
            MockSolid {
                name: tgt.name,
                parts: tgt.parts,
                volume,
                piece_count: pieces,
                faces,
            },
        );
        Ok(handle)
    }

    fn name_body(&mut self, solid: &KernelSolidHandle, name: &str) -> Result<(), KernelError> {
        let s = self
            .solids
            .get_mut(&solid.id())
            .ok_or(KernelError::SolidNotFound {
                handle: solid.id(),
            })?;
        s.name = Some(name.to_string());
        Ok(())
    }
}

impl KernelIntrospect for MockKernel {
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.faces.iter().map(|f| f.id).collect())
            .unwrap_or_default()
    }

    fn face_normal(&self, face: KernelId) -> Option<[f64; 3]> {
        self.solids
            .values()
            .flat_map(|s| s.faces.iter())
            .find(|f| f.id == face)
            .map(|f| f.normal)
    }

    fn face_bounding_box(&self, face: KernelId) -> Option<Aabb> {
        self.solids
            .values()
            .flat_map(|s| s.faces.iter())
            .find(|f| f.id == face)
            .map(|f| f.bbox)
    }

    fn solid_bounding_box(&self, solid: &KernelSolidHandle) -> Option<Aabb> {
        self.solids.get(&solid.id()).map(|s| s.bbox())
    }

    fn solid_volume(&self, solid: &KernelSolidHandle) -> Option<f64> {
        self.solids.get(&solid.id()).map(|s| s.volume)
    }

    fn piece_count(&self, solid: &KernelSolidHandle) -> usize {
        self.solids
            .get(&solid.id())
            .map(|s| s.piece_count)
            .unwrap_or(0)
    }

    fn body_name(&self, solid: &KernelSolidHandle) -> Option<String> {
        self.solids.get(&solid.id()).and_then(|s| s.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_six_faces_and_exact_volume() {
        let mut k = MockKernel::new();
        let b = k.box_at_point(2.0, 3.0, 4.0, [0.0, 0.0, 0.0]).unwrap();
        assert_eq!(k.list_faces(&b).len(), 6);
        assert!((k.solid_volume(&b).unwrap() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn fillet_rejects_degenerate_radius() {
        let mut k = MockKernel::new();
        let b = k.box_at_point(4.0, 4.0, 10.0, [0.0, 0.0, 0.0]).unwrap();
        let err = k.fillet_edges_by_length(&b, 2.5, 10.0).unwrap_err();
        assert!(matches!(err, KernelError::FilletFailed { .. }));
    }

    #[test]
    fn fillet_removes_corner_volume() {
        let mut k = MockKernel::new();
        let b = k.box_at_point(10.0, 10.0, 2.0, [0.0, 0.0, 0.0]).unwrap();
        let f = k.fillet_edges_by_length(&b, 1.0, 2.0).unwrap();
        let expected = 200.0 - (4.0 - std::f64::consts::PI) * 2.0;
        assert!((k.solid_volume(&f).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn pattern_returns_new_instances_without_seed() {
        let mut k = MockKernel::new();
        let seed = k.box_at_point(1.0, 1.0, 1.0, [0.0, 0.0, 0.0]).unwrap();
        let instances = k
            .rectangular_pattern(&seed, PatternAxis::new(3, 2.0), PatternAxis::new(2, 2.0))
            .unwrap();
        assert_eq!(instances.len(), 5);
        let last = k.solid_bounding_box(&instances[4]).unwrap();
        assert!((last.min[0] - 4.0).abs() < 1e-12);
        assert!((last.min[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn subtract_consumes_tools_and_reports_pieces() {
        let mut k = MockKernel::new();
        let target = k.box_at_point(10.0, 10.0, 10.0, [0.0, 0.0, 0.0]).unwrap();
        let tool = k.box_at_point(4.0, 4.0, 4.0, [3.0, 3.0, 3.0]).unwrap();
        let result = k.subtract_many(&target, &[tool.clone()]).unwrap();
        assert!((k.solid_volume(&result).unwrap() - (1000.0 - 64.0)).abs() < 1e-9);
        assert_eq!(k.piece_count(&result), 1);
        assert!(k.solid_volume(&tool).is_none(), "tool consumed");
    }

    #[test]
    fn union_merges_touching_boxes_into_one_body() {
        let mut k = MockKernel::new();
        let a = k.box_at_point(2.0, 2.0, 2.0, [0.0, 0.0, 0.0]).unwrap();
        let b = k.box_at_point(2.0, 2.0, 2.0, [0.0, 0.0, 2.0]).unwrap();
        let joined = k.union_many(&a, &[b.clone()]).unwrap();
        assert!((k.solid_volume(&joined).unwrap() - 16.0).abs() < 1e-9);
        assert_eq!(k.piece_count(&joined), 1);
        assert!(k.solid_volume(&b).is_none(), "tool consumed");
    }

    #[test]
    fn union_rejects_disjoint_bodies() {
        let mut k = MockKernel::new();
        let a = k.box_at_point(1.0, 1.0, 1.0, [0.0, 0.0, 0.0]).unwrap();
        let b = k.box_at_point(1.0, 1.0, 1.0, [5.0, 5.0, 5.0]).unwrap();
        let err = k.union_many(&a, &[b]).unwrap_err();
        assert!(matches!(err, KernelError::BooleanFailed { .. }));
    }

    #[test]
    fn subtract_detects_severed_target() {
        let mut k = MockKernel::new();
        let target = k.box_at_point(10.0, 10.0, 10.0, [0.0, 0.0, 0.0]).unwrap();
        let slab = k
            .box_at_point(2.0, 12.0, 12.0, [4.0, -1.0, -1.0])
            .unwrap();
        let result = k.subtract_many(&target, &[slab]).unwrap();
        assert_eq!(k.piece_count(&result), 2);
    }

    #[test]
    fn plane_from_top_face_sits_at_body_top() {
        let mut k = MockKernel::new();
        let b = k.box_at_point(2.0, 2.0, 5.0, [0.0, 0.0, 1.0]).unwrap();
        let top = k
            .list_faces(&b)
            .into_iter()
            .find(|f| k.face_normal(*f) == Some([0.0, 0.0, 1.0]))
            .unwrap();
        let plane = k.offset_plane_from_face(top, 0.0).unwrap();
        let profile = k.sketch_rectangle(plane, [0.0, 0.0], 1.0, 1.0).unwrap();
        let slab = k
            .extrude_profile(profile, ExtentDirection::Negative, 1.0)
            .unwrap();
        let bbox = k.solid_bounding_box(&slab).unwrap();
        assert!((bbox.max[2] - 6.0).abs() < 1e-12);
        assert!((bbox.min[2] - 5.0).abs() < 1e-12);
    }
}
