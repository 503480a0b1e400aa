// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rigid transform value type
//!
//! Rotation is stored as a unit quaternion and translation as a vector, so
//! values are rigid by construction (no scale or shear). Frames read out of a
//! CAD document as origin + axes go through [`RigidTransform::from_axes`],
//! which re-orthonormalizes the basis before accepting it.

use crate::error::{Error, Result};
use nalgebra::{Isometry3, Matrix3, Matrix4, Point3, Rotation3, UnitQuaternion, Vector3};
use std::ops::Mul;

/// Minimum axis length accepted when building a frame from raw axes
const AXIS_NORM_EPS: f64 = 1e-9;

/// Threshold below which X is considered parallel to Z
const ORTHO_EPS: f64 = 1e-6;

/// Rigid transform between two coordinate frames
///
/// `a * b` maps b-local coordinates through `b`, then through `a`.
/// Composition is associative but not commutative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RigidTransform {
    /// Rotation part (orthonormal)
    pub rotation: UnitQuaternion<f64>,
    /// Translation part, in document length units
    pub translation: Vector3<f64>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Identity transform (no rotation, no translation)
    #[inline]
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Create from translation and rotation parts
    #[inline]
    pub fn from_parts(translation: Vector3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure translation (identity rotation)
    #[inline]
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation,
        }
    }

    /// Build a transform from a CAD coordinate-system readout
    ///
    /// `origin` is the frame origin in parent coordinates; `x_axis`, `y_axis`
    /// and `z_axis` are the frame's basis vectors expressed in the parent
    /// frame. The basis is re-orthonormalized: Z is normalized, X is projected
    /// onto the plane perpendicular to Z, and Y is recomputed as Z × X.
    ///
    /// Fails with [`Error::NonRigidFrame`] when the input is non-finite, an
    /// axis has (near-)zero length, X is parallel to Z, or the supplied basis
    /// is left-handed.
    pub fn from_axes(
        origin: Point3<f64>,
        x_axis: Vector3<f64>,
        y_axis: Vector3<f64>,
        z_axis: Vector3<f64>,
    ) -> Result<Self> {
        let finite = origin.coords.iter().all(|v| v.is_finite())
            && x_axis.iter().all(|v| v.is_finite())
            && y_axis.iter().all(|v| v.is_finite())
            && z_axis.iter().all(|v| v.is_finite());
        if !finite {
            return Err(Error::NonRigidFrame("non-finite origin or axis".into()));
        }

        if z_axis.norm() < AXIS_NORM_EPS || x_axis.norm() < AXIS_NORM_EPS {
            return Err(Error::NonRigidFrame("zero-length axis".into()));
        }

        let z = z_axis.normalize();
        let x_normalized = x_axis.normalize();

        // Project X onto the plane perpendicular to Z
        let x_orthogonal = x_normalized - z * x_normalized.dot(&z);
        if x_orthogonal.norm() < ORTHO_EPS {
            return Err(Error::NonRigidFrame("X axis is parallel to Z axis".into()));
        }
        let x = x_orthogonal.normalize();

        // Right-hand rule: Y = Z × X
        let y = z.cross(&x);

        // A supplied Y pointing the other way means a mirrored basis
        if y_axis.norm() >= AXIS_NORM_EPS && y_axis.dot(&y) < 0.0 {
            return Err(Error::NonRigidFrame("left-handed basis".into()));
        }

        let matrix = Matrix3::from_columns(&[x, y, z]);
        let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(matrix));

        Ok(Self {
            rotation,
            translation: origin.coords,
        })
    }

    /// Rigid inverse: transpose the rotation, rotate and negate the translation
    #[inline]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// Transform a point from the local frame into the parent frame
    #[inline]
    pub fn transform_point(&self, local: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation * local.coords + self.translation)
    }

    /// Transform a direction (rotation only, translation ignored)
    #[inline]
    pub fn transform_vector(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * local
    }

    /// Rotation as a 3x3 matrix
    #[inline]
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        self.rotation.to_rotation_matrix().into_inner()
    }

    /// Quaternion components in (x, y, z, w) order
    #[inline]
    pub fn quaternion_xyzw(&self) -> [f64; 4] {
        let q = self.rotation.quaternion();
        [q.i, q.j, q.k, q.w]
    }

    /// Homogeneous 4x4 matrix (column-major)
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        Isometry3::from_parts(self.translation.into(), self.rotation).to_homogeneous()
    }
}

impl Mul for RigidTransform {
    type Output = RigidTransform;

    #[inline]
    fn mul(self, rhs: RigidTransform) -> RigidTransform {
        RigidTransform {
            rotation: self.rotation * rhs.rotation,
            translation: self.rotation * rhs.translation + self.translation,
        }
    }
}
