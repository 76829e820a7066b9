//! Coordinate-compression sweep over axis-aligned boxes.
//!
//! Used by MockKernel to evaluate boolean subtraction analytically: the
//! removed volume is the union of all tool boxes clipped to the target
//! region (overlapping tools are not double counted), and the remaining
//! material's connectivity comes from a flood fill over the compressed
//! cell grid.

use grid_types::Aabb;

const COORD_EPS: f64 = 1e-9;

/// Volume of the union of `boxes`, clipped to `region`.
pub fn union_volume(region: &Aabb, boxes: &[Aabb]) -> f64 {
    let grid = Grid::build(region, boxes);
    let mut volume = 0.0;
    grid.for_each_cell(|covered, cell_volume| {
        if covered {
            volume += cell_volume;
        }
    });
    volume
}

/// Number of connected components of `region` minus the union of `boxes`.
/// Components are connected through shared cell faces.
pub fn complement_pieces(region: &Aabb, boxes: &[Aabb]) -> usize {
    let grid = Grid::build(region, boxes);
    grid.components(false)
}

/// Number of connected components of the union of `boxes` within `region`.
pub fn union_pieces(region: &Aabb, boxes: &[Aabb]) -> usize {
    let grid = Grid::build(region, boxes);
    grid.components(true)
}

struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    /// Row-major coverage flags, one per cell.
    covered: Vec<bool>,
}

impl Grid {
    fn build(region: &Aabb, boxes: &[Aabb]) -> Grid {
        let clipped: Vec<Aabb> = boxes
            .iter()
            .filter_map(|b| b.intersection(region))
            .collect();

        let mut xs = vec![region.min[0], region.max[0]];
        let mut ys = vec![region.min[1], region.max[1]];
        let mut zs = vec![region.min[2], region.max[2]];
        for b in &clipped {
            xs.push(b.min[0]);
            xs.push(b.max[0]);
            ys.push(b.min[1]);
            ys.push(b.max[1]);
            zs.push(b.min[2]);
            zs.push(b.max[2]);
        }
        dedup_sorted(&mut xs);
        dedup_sorted(&mut ys);
        dedup_sorted(&mut zs);

        let nx = xs.len() - 1;
        let ny = ys.len() - 1;
        let nz = zs.len() - 1;
        let mut covered = vec![false; nx * ny * nz];

        for (ix, iy, iz) in cell_indices(nx, ny, nz) {
            let cx = 0.5 * (xs[ix] + xs[ix + 1]);
            let cy = 0.5 * (ys[iy] + ys[iy + 1]);
            let cz = 0.5 * (zs[iz] + zs[iz + 1]);
            let hit = clipped.iter().any(|b| {
                cx > b.min[0]
                    && cx < b.max[0]
                    && cy > b.min[1]
                    && cy < b.max[1]
                    && cz > b.min[2]
                    && cz < b.max[2]
            });
            covered[cell_index(nx, ny, ix, iy, iz)] = hit;
        }

        Grid {
            xs,
            ys,
            zs,
            covered,
        }
    }

    fn dims(&self) -> (usize, usize, usize) {
        (self.xs.len() - 1, self.ys.len() - 1, self.zs.len() - 1)
    }

    fn for_each_cell(&self, mut f: impl FnMut(bool, f64)) {
        let (nx, ny, nz) = self.dims();
        for (ix, iy, iz) in cell_indices(nx, ny, nz) {
            let dv = (self.xs[ix + 1] - self.xs[ix])
                * (self.ys[iy + 1] - self.ys[iy])
                * (self.zs[iz + 1] - self.zs[iz]);
            f(self.covered[cell_index(nx, ny, ix, iy, iz)], dv);
        }
    }

    /// Flood-fill count of cell components (6-connectivity) whose coverage
    /// flag equals `target_coverage`.
    fn components(&self, target_coverage: bool) -> usize {
        let (nx, ny, nz) = self.dims();
        let total = nx * ny * nz;
        let mut visited = vec![false; total];
        let mut components = 0;

        for start in 0..total {
            if visited[start] || self.covered[start] != target_coverage {
                continue;
            }
            components += 1;
            let mut stack = vec![start];
            visited[start] = true;
            while let Some(cell) = stack.pop() {
                let iz = cell / (nx * ny);
                let iy = (cell / nx) % ny;
                let ix = cell % nx;
                let mut push = |nix: usize, niy: usize, niz: usize| {
                    let n = cell_index(nx, ny, nix, niy, niz);
                    if !visited[n] && self.covered[n] == target_coverage {
                        visited[n] = true;
                        stack.push(n);
                    }
                };
                if ix > 0 {
                    push(ix - 1, iy, iz);
                }
                if ix + 1 < nx {
                    push(ix + 1, iy, iz);
                }
                if iy > 0 {
                    push(ix, iy - 1, iz);
                }
                if iy + 1 < ny {
                    push(ix, iy + 1, iz);
                }
                if iz > 0 {
                    push(ix, iy, iz - 1);
                }
                if iz + 1 < nz {
                    push(ix, iy, iz + 1);
                }
            }
        }

        components
    }
}

fn dedup_sorted(coords: &mut Vec<f64>) {
    coords.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    coords.dedup_by(|a, b| (*a - *b).abs() < COORD_EPS);
}

fn cell_index(nx: usize, ny: usize, ix: usize, iy: usize, iz: usize) -> usize {
    iz * nx * ny + iy * nx + ix
}

fn cell_indices(
    nx: usize,
    ny: usize,
    nz: usize,
) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..nz).flat_map(move |iz| (0..ny).flat_map(move |iy| (0..nx).map(move |ix| (ix, iy, iz))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_region() -> Aabb {
        Aabb::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0])
    }

    #[test]
    fn union_volume_single_box() {
        let v = union_volume(
            &unit_region(),
            &[Aabb::new([0.0, 0.0, 0.0], [5.0, 10.0, 10.0])],
        );
        assert!((v - 500.0).abs() < 1e-9);
    }

    #[test]
    fn union_volume_overlapping_boxes_not_double_counted() {
        let tools = [
            Aabb::new([0.0, 0.0, 0.0], [6.0, 10.0, 10.0]),
            Aabb::new([4.0, 0.0, 0.0], [10.0, 10.0, 10.0]),
        ];
        let v = union_volume(&unit_region(), &tools);
        assert!((v - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn union_volume_clips_to_region() {
        let v = union_volume(
            &unit_region(),
            &[Aabb::new([-5.0, -5.0, -5.0], [5.0, 5.0, 5.0])],
        );
        assert!((v - 125.0).abs() < 1e-9);
    }

    #[test]
    fn complement_is_one_piece_for_partial_cut() {
        let pieces = complement_pieces(
            &unit_region(),
            &[Aabb::new([2.0, 2.0, 2.0], [8.0, 8.0, 8.0])],
        );
        assert_eq!(pieces, 1);
    }

    #[test]
    fn complement_splits_when_slab_severs_region() {
        // A full-height, full-depth slab through the middle.
        let pieces = complement_pieces(
            &unit_region(),
            &[Aabb::new([4.0, -1.0, -1.0], [6.0, 11.0, 11.0])],
        );
        assert_eq!(pieces, 2);
    }

    #[test]
    fn union_pieces_counts_disjoint_and_touching_boxes() {
        let touching = [
            Aabb::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
            Aabb::new([2.0, 0.0, 0.0], [4.0, 2.0, 2.0]),
        ];
        assert_eq!(union_pieces(&unit_region(), &touching), 1);

        let disjoint = [
            Aabb::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
            Aabb::new([5.0, 5.0, 5.0], [7.0, 7.0, 7.0]),
        ];
        assert_eq!(union_pieces(&unit_region(), &disjoint), 2);
    }

    #[test]
    fn complement_zero_pieces_when_fully_covered() {
        let pieces = complement_pieces(
            &unit_region(),
            &[Aabb::new([-1.0, -1.0, -1.0], [11.0, 11.0, 11.0])],
        );
        assert_eq!(pieces, 0);
    }
}
