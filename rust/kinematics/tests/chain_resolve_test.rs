// Resolution over multi-level assembly snapshots, end to end.

use approx::assert_relative_eq;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use toolframe_core::{Assembly, RigidTransform};
use toolframe_kinematics::{
    AmbiguityPolicy, Error, ResolverConfig, TransformResolver, MAX_CHAIN_DEPTH,
};
use std::f64::consts::FRAC_PI_2;

fn rot_z(angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(0.0, 0.0, angle)
}

#[test]
fn direct_child_of_identity_root_returns_exactly_its_local() {
    let mut asm = Assembly::new("Root");
    let local = RigidTransform::from_parts(Vector3::new(4.0, -1.0, 2.5), rot_z(0.8));
    asm.add_component("TCP", asm.root(), local).unwrap();

    let t = TransformResolver::new().resolve(&asm, "TCP").unwrap();

    assert_eq!(t.translation, local.translation);
    assert_eq!(t.rotation, local.rotation);
}

#[test]
fn three_level_chain_composes_in_order() {
    // Root -> Arm (T1) -> TCP (T2): result must be T1 ∘ T2,
    // i.e. map TCP-local coordinates through T2 first, then T1.
    let t1 = RigidTransform::from_parts(Vector3::new(1.0, 0.0, 0.0), rot_z(FRAC_PI_2));
    let t2 = RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0));

    let mut asm = Assembly::new("Root");
    let arm = asm.add_component("Arm", asm.root(), t1).unwrap();
    asm.add_component("TCP", arm, t2).unwrap();

    let t = TransformResolver::new().resolve(&asm, "TCP").unwrap();

    // T1's rotation turns T2's x-offset onto +Y
    assert_relative_eq!(t.translation, Vector3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    assert!(t.rotation.angle_to(&rot_z(FRAC_PI_2)) < 1e-12);

    let expected = t1 * t2;
    let probe = Point3::new(0.3, -0.4, 0.9);
    assert_relative_eq!(
        t.transform_point(&probe),
        expected.transform_point(&probe),
        epsilon = 1e-12
    );
}

#[test]
fn resolve_composed_with_inverse_is_identity() {
    let mut asm = Assembly::new("Root");
    let a = asm
        .add_component(
            "Shoulder",
            asm.root(),
            RigidTransform::from_parts(
                Vector3::new(3.0, 1.0, -2.0),
                UnitQuaternion::from_euler_angles(0.5, -0.3, 1.7),
            ),
        )
        .unwrap();
    let b = asm
        .add_component(
            "Wrist",
            a,
            RigidTransform::from_parts(
                Vector3::new(0.0, 4.2, 0.1),
                UnitQuaternion::from_euler_angles(-1.1, 0.2, 0.4),
            ),
        )
        .unwrap();
    asm.add_component(
        "TCP",
        b,
        RigidTransform::from_translation(Vector3::new(0.0, 0.0, 1.5)),
    )
    .unwrap();

    let t = TransformResolver::new().resolve(&asm, "TCP").unwrap();
    let round_trip = t * t.inverse();

    assert_relative_eq!(round_trip.translation, Vector3::zeros(), epsilon = 1e-9);
    assert!(round_trip.rotation.angle() < 1e-9);
}

#[test]
fn renaming_off_path_components_does_not_change_result() {
    let build = |side_name: &str| {
        let mut asm = Assembly::new("Root");
        let arm = asm
            .add_component(
                "Arm",
                asm.root(),
                RigidTransform::from_parts(Vector3::new(1.0, 2.0, 3.0), rot_z(0.6)),
            )
            .unwrap();
        // Sibling branch, not on the Root -> Arm -> TCP path
        let side = asm
            .add_component(
                side_name,
                asm.root(),
                RigidTransform::from_translation(Vector3::new(-9.0, 0.0, 0.0)),
            )
            .unwrap();
        asm.add_component(
            "Camera",
            side,
            RigidTransform::from_translation(Vector3::new(0.5, 0.5, 0.5)),
        )
        .unwrap();
        asm.add_component(
            "TCP",
            arm,
            RigidTransform::from_translation(Vector3::new(0.0, 0.0, 2.0)),
        )
        .unwrap();
        asm
    };

    let resolver = TransformResolver::new();
    let before = resolver.resolve(&build("Bracket"), "TCP").unwrap();
    let after = resolver.resolve(&build("BracketRenamed"), "TCP").unwrap();

    assert_eq!(before.translation, after.translation);
    assert_eq!(before.rotation, after.rotation);
}

#[test]
fn absent_name_fails_with_component_not_found() {
    let mut asm = Assembly::new("Root");
    asm.add_component("Arm", asm.root(), RigidTransform::identity())
        .unwrap();

    let err = TransformResolver::new().resolve(&asm, "TCP");
    assert!(matches!(err, Err(Error::ComponentNotFound { .. })));
}

#[test]
fn parent_cycle_fails_with_cycle_detected_instead_of_hanging() {
    let mut asm = Assembly::new("Root");
    let a = asm
        .add_component("A", asm.root(), RigidTransform::identity())
        .unwrap();
    let b = asm.add_component("B", a, RigidTransform::identity()).unwrap();
    let tcp = asm
        .add_component("TCP", b, RigidTransform::identity())
        .unwrap();
    // Break the graph: A's parent becomes TCP, closing a loop
    asm.set_parent_unchecked(a, Some(tcp));

    match TransformResolver::new().resolve(&asm, "TCP") {
        Err(Error::CycleDetected { depth, .. }) => assert_eq!(depth, MAX_CHAIN_DEPTH),
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn ambiguous_name_is_rejected_by_default() {
    let mut asm = Assembly::new("Root");
    let left = asm
        .add_component(
            "Left",
            asm.root(),
            RigidTransform::from_translation(Vector3::new(-1.0, 0.0, 0.0)),
        )
        .unwrap();
    let right = asm
        .add_component(
            "Right",
            asm.root(),
            RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0)),
        )
        .unwrap();
    asm.add_component("TCP", left, RigidTransform::identity())
        .unwrap();
    asm.add_component("TCP", right, RigidTransform::identity())
        .unwrap();

    match TransformResolver::new().resolve(&asm, "TCP") {
        Err(Error::AmbiguousComponent { paths, .. }) => {
            assert_eq!(paths, vec!["Root/Left/TCP", "Root/Right/TCP"]);
        }
        other => panic!("expected AmbiguousComponent, got {other:?}"),
    }
}

#[test]
fn first_match_policy_uses_the_first_occurrence() {
    let mut asm = Assembly::new("Root");
    let left = asm
        .add_component(
            "Left",
            asm.root(),
            RigidTransform::from_translation(Vector3::new(-1.0, 0.0, 0.0)),
        )
        .unwrap();
    let right = asm
        .add_component(
            "Right",
            asm.root(),
            RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0)),
        )
        .unwrap();
    asm.add_component("TCP", left, RigidTransform::identity())
        .unwrap();
    asm.add_component("TCP", right, RigidTransform::identity())
        .unwrap();

    let resolver = TransformResolver::with_config(ResolverConfig {
        ambiguity: AmbiguityPolicy::FirstMatch,
        ..ResolverConfig::default()
    });
    let frame = resolver.resolve_frame(&asm, "TCP").unwrap();

    assert_eq!(frame.path, "Root/Left/TCP");
    assert_eq!(frame.transform.translation, Vector3::new(-1.0, 0.0, 0.0));
}

#[test]
fn fallback_matching_finds_decorated_names() {
    let mut asm = Assembly::new("Root");
    asm.add_component(
        "tcp_gripper_v2",
        asm.root(),
        RigidTransform::from_translation(Vector3::new(0.0, 7.0, 0.0)),
    )
    .unwrap();

    let frame = TransformResolver::new().resolve_frame(&asm, "TCP").unwrap();
    assert_eq!(frame.path, "Root/tcp_gripper_v2");
    assert_eq!(frame.transform.translation, Vector3::new(0.0, 7.0, 0.0));
}

#[test]
fn exact_match_wins_over_fallback_candidates() {
    let mut asm = Assembly::new("Root");
    asm.add_component(
        "tcp_gripper",
        asm.root(),
        RigidTransform::from_translation(Vector3::new(9.0, 9.0, 9.0)),
    )
    .unwrap();
    asm.add_component(
        "TCP",
        asm.root(),
        RigidTransform::from_translation(Vector3::new(1.0, 1.0, 1.0)),
    )
    .unwrap();

    let frame = TransformResolver::new().resolve_frame(&asm, "TCP").unwrap();
    assert_eq!(frame.path, "Root/TCP");
}

#[test]
fn deep_but_valid_chain_resolves_with_raised_bound() {
    let mut asm = Assembly::new("Root");
    let mut parent = asm.root();
    for i in 0..400 {
        parent = asm
            .add_component(
                format!("Link{i}"),
                parent,
                RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();
    }
    asm.add_component("TCP", parent, RigidTransform::identity())
        .unwrap();

    // Past the default bound it reads as malformed
    let err = TransformResolver::new().resolve(&asm, "TCP");
    assert!(matches!(err, Err(Error::CycleDetected { .. })));

    // With a raised bound the chain is legitimate
    let resolver = TransformResolver::with_config(ResolverConfig {
        max_depth: 1024,
        ..ResolverConfig::default()
    });
    let t = resolver.resolve(&asm, "TCP").unwrap();
    assert_relative_eq!(t.translation, Vector3::new(400.0, 0.0, 0.0), epsilon = 1e-9);
}
