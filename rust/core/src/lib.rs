// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Toolframe Core
//!
//! Host-independent assembly model for robot tool frame extraction,
//! built on [nalgebra](https://docs.rs/nalgebra) rigid transforms.
//!
//! ## Overview
//!
//! This crate provides the data layer for Toolframe:
//!
//! - **Assembly snapshots**: read-only component trees captured from a CAD
//!   document (name, parent link, local rigid transform per component)
//! - **Rigid transforms**: quaternion + translation values that stay rigid
//!   under composition and inversion
//! - **Name lookup**: exact matching with a case-insensitive substring
//!   fallback, because hosts do not enforce unique component names
//! - **Length units**: document-unit bookkeeping for the report boundary
//! - **Host abstraction**: the [`ComponentSource`] trait, so adapters can
//!   serve a live document where tests use the in-memory snapshot
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use toolframe_core::{Assembly, RigidTransform, Vector3};
//!
//! let mut assembly = Assembly::new("Root");
//! let flange = assembly.add_component(
//!     "Flange",
//!     assembly.root(),
//!     RigidTransform::from_translation(Vector3::new(0.0, 0.0, 12.5)),
//! )?;
//! let tcp = assembly.add_component("TCP", flange, RigidTransform::identity())?;
//!
//! assert_eq!(assembly.path(tcp), "Root/Flange/TCP");
//! ```
//!
//! Transform resolution over these snapshots lives in
//! `toolframe-kinematics`.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the value types

pub mod assembly;
pub mod error;
pub mod pose;
pub mod units;

pub use assembly::{Assembly, Component, ComponentId, ComponentSource, IdList, NameMatches};
pub use error::{Error, Result};
pub use pose::RigidTransform;
pub use units::LengthUnit;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Matrix4, Point3, UnitQuaternion, Vector3};
