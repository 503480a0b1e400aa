// The resolver only needs the ComponentSource capability, so an adapter over
// a live CAD document can be swapped in for the in-memory snapshot. This
// stub plays the role of such an adapter.

use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use toolframe_core::{ComponentId, ComponentSource, IdList, NameMatches, RigidTransform};
use toolframe_kinematics::TransformResolver;

/// Fixed three-level document: Station (#0) -> Spindle (#1) -> Probe (#2)
struct StubDocument {
    locals: [RigidTransform; 3],
}

impl StubDocument {
    fn new() -> Self {
        Self {
            locals: [
                RigidTransform::identity(),
                RigidTransform::from_parts(
                    Vector3::new(0.0, 0.0, 30.0),
                    UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2),
                ),
                RigidTransform::from_translation(Vector3::new(5.0, 0.0, 0.0)),
            ],
        }
    }
}

impl ComponentSource for StubDocument {
    fn lookup(&self, name: &str) -> NameMatches {
        let exact = match name {
            "Station" => IdList::from_slice(&[ComponentId(0)]),
            "Spindle" => IdList::from_slice(&[ComponentId(1)]),
            "Probe" => IdList::from_slice(&[ComponentId(2)]),
            _ => IdList::new(),
        };
        NameMatches {
            exact,
            partial: IdList::new(),
        }
    }

    fn local_transform(&self, id: ComponentId) -> Option<RigidTransform> {
        self.locals.get(id.index()).copied()
    }

    fn parent_of(&self, id: ComponentId) -> Option<ComponentId> {
        match id.index() {
            1 | 2 => Some(ComponentId(id.0 - 1)),
            _ => None,
        }
    }

    fn path(&self, id: ComponentId) -> String {
        ["Station", "Station/Spindle", "Station/Spindle/Probe"]
            .get(id.index())
            .unwrap_or(&"")
            .to_string()
    }
}

#[test]
fn resolver_works_against_a_non_assembly_source() {
    let doc = StubDocument::new();
    let frame = TransformResolver::new()
        .resolve_frame(&doc, "Probe")
        .unwrap();

    assert_eq!(frame.path, "Station/Spindle/Probe");
    assert_eq!(frame.depth, 2);

    // Spindle's 90° about Z turns the probe's x-offset onto +Y
    assert_relative_eq!(
        frame.transform.translation,
        Vector3::new(0.0, 5.0, 30.0),
        epsilon = 1e-12
    );
}

#[test]
fn unknown_name_in_stub_source_is_not_found() {
    let doc = StubDocument::new();
    let err = TransformResolver::new().resolve(&doc, "TCP");
    assert!(err.is_err());
}
