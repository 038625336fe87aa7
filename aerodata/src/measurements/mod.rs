// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unit normalization.
//!
//! Vertical distances are normalized to feet and runway dimensions to meters.
//! Units are the AIXM 4.5 codes (`M`, `FT`, `FL`, `KM`). An absent unit means
//! the value is already in the canonical unit.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod constants;

/// Converts a vertical distance to feet.
///
/// Meters are converted and rounded to whole feet, anything else is returned
/// unchanged.
///
/// ```
/// use aerodata::measurements::convert_vertical_distance;
///
/// assert_eq!(convert_vertical_distance(100.0, Some("M")), 328.0);
/// assert_eq!(convert_vertical_distance(1500.0, Some("FT")), 1500.0);
/// ```
pub fn convert_vertical_distance(value: f64, unit: Option<&str>) -> f64 {
    match unit.map(str::trim) {
        Some(u) if u.eq_ignore_ascii_case("M") => (value * constants::METER_IN_FEET).round(),
        _ => value,
    }
}

/// Converts an altitude to feet.
///
/// Behaves like [`convert_vertical_distance`] and additionally expands a
/// flight level to hundreds of feet.
///
/// ```
/// use aerodata::measurements::convert_altitude;
///
/// assert_eq!(convert_altitude(50.0, Some("FL")), 5000.0);
/// ```
pub fn convert_altitude(value: f64, unit: Option<&str>) -> f64 {
    match unit.map(str::trim) {
        Some(u) if u.eq_ignore_ascii_case("FL") => value * constants::FEET_PER_FLIGHT_LEVEL,
        _ => convert_vertical_distance(value, unit),
    }
}

/// Converts a horizontal length (runway dimensions, declared distances) to
/// meters.
pub fn convert_length(value: f64, unit: Option<&str>) -> f64 {
    match unit.map(|u| u.trim().to_ascii_uppercase()).as_deref() {
        Some("FT") => value * constants::FEET_IN_METER,
        Some("KM") => value * 1000.0,
        Some("NM") => value * constants::NAUTICAL_MILE_IN_METER,
        _ => value,
    }
}

/// The datum a vertical distance refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum AltitudeReference {
    /// Above mean sea level.
    Amsl,
    /// Above ground level.
    Agl,
    /// Standard pressure, i.e. a flight level.
    Std,
    /// Surface.
    Sfc,
    /// Ground.
    Gnd,
    /// Unlimited.
    Unl,
    #[default]
    Undefined,
}

impl fmt::Display for AltitudeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Amsl => "AMSL",
            Self::Agl => "AGL",
            Self::Std => "STD",
            Self::Sfc => "SFC",
            Self::Gnd => "GND",
            Self::Unl => "UNL",
            Self::Undefined => "UNDEFINED",
        };
        f.write_str(s)
    }
}

/// Maps an altitude datum code onto its [`AltitudeReference`].
///
/// Unknown and absent codes map to [`AltitudeReference::Undefined`].
pub fn map_altitude_reference(code: Option<&str>) -> AltitudeReference {
    let Some(code) = code else {
        return AltitudeReference::Undefined;
    };

    match code.trim().to_ascii_uppercase().as_str() {
        "ALT" | "AMSL" => AltitudeReference::Amsl,
        "HEI" | "AGL" => AltitudeReference::Agl,
        "STD" | "FL" => AltitudeReference::Std,
        "SFC" => AltitudeReference::Sfc,
        "GND" => AltitudeReference::Gnd,
        "UNL" | "UNLIM" => AltitudeReference::Unl,
        _ => AltitudeReference::Undefined,
    }
}
