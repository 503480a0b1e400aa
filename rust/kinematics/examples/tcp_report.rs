// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builds a small gripper assembly and prints the TCP pose report,
//! the same summary a commissioning engineer pastes into a robot program.

use nalgebra::{Point3, UnitQuaternion, Vector3};
use toolframe_core::{Assembly, LengthUnit, RigidTransform};
use toolframe_kinematics::{PoseReport, TransformResolver};

fn main() {
    // Root -> Adapter -> Gripper -> TCP, dimensions in centimeters
    let mut assembly = Assembly::new("WeldCell");

    let adapter = assembly
        .add_component(
            "FlangeAdapter",
            assembly.root(),
            RigidTransform::from_translation(Vector3::new(0.0, 0.0, 1.2)),
        )
        .expect("root exists");

    let gripper = assembly
        .add_component(
            "Gripper",
            adapter,
            RigidTransform::from_axes(
                Point3::new(0.0, 0.0, 8.6),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(0.0, 1.0, 0.0),
            )
            .expect("orthonormal frame"),
        )
        .expect("adapter exists");

    assembly
        .add_component(
            "TCP",
            gripper,
            RigidTransform::from_parts(
                Vector3::new(0.0, 14.5, 0.0),
                UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_4),
            ),
        )
        .expect("gripper exists");

    let resolver = TransformResolver::new();
    let frame = resolver
        .resolve_frame(&assembly, "TCP")
        .expect("TCP present and unambiguous");

    println!("Top-level -> {} transform", frame.path);
    println!("{}", PoseReport::new(&frame, LengthUnit::Centimeters));

    // The inverse maps root coordinates into the tool frame
    let inverse = frame.transform.inverse();
    println!(
        "\nRoot origin seen from the tool frame: {:?}",
        inverse.transform_point(&Point3::origin())
    );
}
