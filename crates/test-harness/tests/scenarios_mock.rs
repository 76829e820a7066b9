//! End-to-end lip build scenarios against MockKernel.

use grid_kernel::KernelIntrospect;
use grid_types::{LipSpec, BIN_LIP_EXTRA_HEIGHT};
use lip_engine::BuildError;
use test_harness::{assert_bounding_box_size, assert_single_piece, assert_volume_lt, LipFixture};

fn two_by_one(notched: bool) -> LipSpec {
    let mut spec = LipSpec::standard(2, 1);
    spec.has_lip_notches = notched;
    spec
}

// ── Scenario 1: 2x1 bin, notched lip ────────────────────────────────────

#[test]
fn two_by_one_notched_end_to_end() {
    let mut f = LipFixture::new();
    let out = f.build(&two_by_one(true)).unwrap();

    // 2 per-unit cutouts + 1 mid cutout + 1 top recess subtracted.
    assert_eq!(out.summary.unit_cutouts, 2);
    assert!(out.summary.has_mid_cutout);
    assert!(out.summary.has_top_recess);

    assert_eq!(f.kernel.body_name(&out.body).as_deref(), Some("lip body"));
    assert_single_piece(&f.kernel, &out.body, "notched 2x1").unwrap();
    assert_bounding_box_size(
        &f.kernel,
        &out.body,
        [83.5, 41.5, BIN_LIP_EXTRA_HEIGHT],
        1e-9,
        "notched 2x1",
    )
    .unwrap();
}

// ── Scenario 2: 2x1 bin, plain lip ──────────────────────────────────────

#[test]
fn two_by_one_non_notched_end_to_end() {
    let mut f = LipFixture::new();
    let out = f.build(&two_by_one(false)).unwrap();

    // 1 full-span cutout + 1 top recess, no pattern operation.
    assert_eq!(out.summary.unit_cutouts, 1);
    assert!(!out.summary.has_mid_cutout);
    assert!(out.summary.has_top_recess);
    assert_eq!(f.kernel.op_counts().patterns, 0);

    assert_single_piece(&f.kernel, &out.body, "plain 2x1").unwrap();
    assert_bounding_box_size(
        &f.kernel,
        &out.body,
        [83.5, 41.5, BIN_LIP_EXTRA_HEIGHT],
        1e-9,
        "plain 2x1",
    )
    .unwrap();
}

// ── Scenario 3: notches remove material ─────────────────────────────────

#[test]
fn notched_lip_has_strictly_less_material() {
    let mut f = LipFixture::new();
    let notched = f.build(&two_by_one(true)).unwrap();
    let plain = f.build(&two_by_one(false)).unwrap();

    assert_volume_lt(&f.kernel, &notched.body, &plain.body, "notched vs plain").unwrap();
}

// ── Scenario 4: single-unit bin ─────────────────────────────────────────

#[test]
fn single_unit_bin_footprint() {
    let mut f = LipFixture::new();
    let mut spec = LipSpec::standard(1, 1);
    spec.has_lip_notches = true;
    let out = f.build(&spec).unwrap();

    assert_eq!(out.summary.unit_cutouts, 1);
    assert_bounding_box_size(
        &f.kernel,
        &out.body,
        [41.5, 41.5, BIN_LIP_EXTRA_HEIGHT],
        1e-9,
        "notched 1x1",
    )
    .unwrap();
}

// ── Scenario 5: spec loaded from a saved fixture ────────────────────────

#[test]
fn spec_json_fixture_builds() {
    let json = r#"{
        "origin": { "x": 0.0, "y": 0.0, "z": 0.0 },
        "base_width": 42.0,
        "base_length": 42.0,
        "bin_width": 2,
        "bin_length": 1,
        "wall_thickness": 1.2,
        "xy_tolerance": 0.25,
        "has_lip_notches": true
    }"#;
    let spec: LipSpec = serde_json::from_str(json).unwrap();

    let mut f = LipFixture::new();
    let out = f.build(&spec).unwrap();
    assert_eq!(out.summary.unit_cutouts, 2);
}

// ── Scenario 6: degenerate specs are rejected up front ──────────────────

#[test]
fn degenerate_specs_are_rejected_before_modeling() {
    let mut f = LipFixture::new();

    let mut thick_wall = two_by_one(true);
    thick_wall.wall_thickness = 3.75;
    assert!(matches!(
        f.build(&thick_wall).unwrap_err(),
        BuildError::DegenerateFillet { .. }
    ));

    let mut wide_tolerance = LipSpec::standard(1, 1);
    wide_tolerance.xy_tolerance = 21.0;
    assert!(matches!(
        f.build(&wide_tolerance).unwrap_err(),
        BuildError::InvalidDimension { .. }
    ));

    // Nothing reached the kernel.
    assert_eq!(
        f.kernel.op_counts(),
        grid_kernel::mock_kernel::OpCounts::default()
    );
}
