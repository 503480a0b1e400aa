// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pose reporting
//!
//! Formats a resolved tool frame the way robot commissioning wants it:
//! millimeter translation, an (x, y, z, w) quaternion, Euler ZYX in degrees,
//! and the ABB controller pose literal. Pure formatting; where the text ends
//! up (dialog, log, file) is the caller's concern.

use crate::euler::EulerZyx;
use crate::resolver::ResolvedFrame;
use std::fmt;
use toolframe_core::LengthUnit;

/// Formatted pose summary for a resolved tool frame
#[derive(Debug, Clone)]
pub struct PoseReport {
    /// Target position in millimeters
    pub position_mm: [f64; 3],
    /// Orientation quaternion, (x, y, z, w) order
    pub quaternion: [f64; 4],
    /// Orientation as intrinsic ZYX Euler angles, degrees
    pub euler_deg: EulerZyx,
    /// Occurrence path of the resolved component
    pub path: String,
}

impl PoseReport {
    /// Build a report from a resolved frame, converting out of `unit`
    pub fn new(frame: &ResolvedFrame, unit: LengthUnit) -> Self {
        let scale = unit.to_millimeters_scale();
        let t = frame.transform.translation;

        Self {
            position_mm: [t.x * scale, t.y * scale, t.z * scale],
            quaternion: frame.transform.quaternion_xyzw(),
            euler_deg: EulerZyx::from_rotation(&frame.transform.rotation).to_degrees(),
            path: frame.path.clone(),
        }
    }

    /// ABB controller pose literal: `[[x, y, z], [qw, qx, qy, qz]]`
    ///
    /// Millimeters with 3 decimals, quaternion w-first with 9 decimals.
    pub fn abb_pose(&self) -> String {
        let [x, y, z] = self.position_mm;
        let [qx, qy, qz, qw] = self.quaternion;
        format!("[[{x:.3}, {y:.3}, {z:.3}], [{qw:.9}, {qx:.9}, {qy:.9}, {qz:.9}]]")
    }
}

impl fmt::Display for PoseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position_mm;
        let [qx, qy, qz, qw] = self.quaternion;
        let e = self.euler_deg;

        writeln!(f, "Position (mm): [{x:.3}, {y:.3}, {z:.3}]")?;
        writeln!(
            f,
            "Quaternion (x,y,z,w): [{qx:.9}, {qy:.9}, {qz:.9}, {qw:.9}]"
        )?;
        writeln!(
            f,
            "Euler ZYX (deg): X={:.3}, Y={:.3}, Z={:.3}",
            e.roll, e.pitch, e.yaw
        )?;
        writeln!(f, "ABB pose: {}", self.abb_pose())?;
        write!(f, "Occurrence: {}", self.path)
    }
}
