//! Toolframe Kinematics
//!
//! Resolves the rigid transform from a CAD assembly's root component to a
//! named tool center point, and formats the result for robot commissioning.
//!
//! ```rust,ignore
//! use toolframe_core::{Assembly, LengthUnit, RigidTransform, Vector3};
//! use toolframe_kinematics::{PoseReport, TransformResolver};
//!
//! let mut assembly = Assembly::new("Root");
//! let flange = assembly.add_component(
//!     "Flange",
//!     assembly.root(),
//!     RigidTransform::from_translation(Vector3::new(0.0, 0.0, 12.5)),
//! )?;
//! assembly.add_component("TCP", flange, RigidTransform::identity())?;
//!
//! let frame = TransformResolver::new().resolve_frame(&assembly, "TCP")?;
//! println!("{}", PoseReport::new(&frame, LengthUnit::Centimeters));
//! ```

pub mod error;
pub mod euler;
pub mod report;
pub mod resolver;

pub use error::{Error, Result};
pub use euler::EulerZyx;
pub use report::PoseReport;
pub use resolver::{
    AmbiguityPolicy, ResolvedFrame, ResolverConfig, TransformResolver, MAX_CHAIN_DEPTH,
};
