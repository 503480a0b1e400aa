// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Euler angle extraction
//!
//! Robot controllers commonly take orientation as intrinsic Z-Y'-X'' Euler
//! angles. Extraction is from the rotation matrix with an explicit
//! gimbal-lock branch: at pitch = ±90° the yaw is pinned to zero and the
//! remaining freedom folds into roll.

use nalgebra::UnitQuaternion;
use std::f64::consts::FRAC_PI_2;

/// How close `|sin(pitch)|` must be to 1 before the lock branch is taken
const LOCK_EPS: f64 = 1e-12;

/// Intrinsic Z-Y'-X'' Euler angles, `R = Rz(yaw) · Ry(pitch) · Rx(roll)`
///
/// Angles are radians until [`to_degrees`](Self::to_degrees) is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerZyx {
    /// Rotation about X
    pub roll: f64,
    /// Rotation about Y
    pub pitch: f64,
    /// Rotation about Z
    pub yaw: f64,
}

impl EulerZyx {
    /// Extract Euler angles from a rotation
    pub fn from_rotation(rotation: &UnitQuaternion<f64>) -> Self {
        let r = rotation.to_rotation_matrix();
        let m = r.matrix();

        // Clamp for safety against rounding just outside [-1, 1]
        let m20 = m[(2, 0)].clamp(-1.0, 1.0);

        if m20.abs() < 1.0 - LOCK_EPS {
            Self {
                roll: m[(2, 1)].atan2(m[(2, 2)]),
                pitch: -m20.asin(),
                yaw: m[(1, 0)].atan2(m[(0, 0)]),
            }
        } else if m20 < 0.0 {
            // Gimbal lock at pitch = +90°: yaw and roll share an axis, pin yaw
            Self {
                roll: m[(0, 1)].atan2(m[(1, 1)]),
                pitch: FRAC_PI_2,
                yaw: 0.0,
            }
        } else {
            // Gimbal lock at pitch = -90°
            Self {
                roll: (-m[(0, 1)]).atan2(m[(1, 1)]),
                pitch: -FRAC_PI_2,
                yaw: 0.0,
            }
        }
    }

    /// Convert all three angles to degrees
    #[inline]
    pub fn to_degrees(self) -> Self {
        Self {
            roll: self.roll.to_degrees(),
            pitch: self.pitch.to_degrees(),
            yaw: self.yaw.to_degrees(),
        }
    }
}
