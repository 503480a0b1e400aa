// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document length units
//!
//! Assembly snapshots keep translations in whatever unit the host document
//! uses; robot controllers want millimeters. Conversion happens once, at the
//! reporting boundary.

/// Length unit of a host CAD document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    /// Millimeters
    Millimeters,
    /// Centimeters - the Fusion-style document default
    #[default]
    Centimeters,
    /// Meters
    Meters,
}

impl LengthUnit {
    /// Multiplier converting this unit to millimeters
    #[inline]
    pub fn to_millimeters_scale(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Centimeters => 10.0,  // Most common: Fusion documents
            LengthUnit::Meters => 1000.0,
        }
    }
}
