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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Position;

/// A physical runway of an aerodrome.
///
/// Dimensions are in meters.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    /// Designation of both ends (`"09/27"`) or of the only end.
    pub designation: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    /// Surface composition code (`ASPH`, `CONC`, `GRASS`, …).
    pub surface: Option<String>,
    /// Pavement strength.
    pub strength: Option<String>,
    pub strip_length: Option<f64>,
    pub strip_width: Option<f64>,
    pub directions: Vec<RunwayDirection>,
}

impl Runway {
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            ..Default::default()
        }
    }

    /// Returns the direction with the `designator`.
    pub fn direction(&self, designator: &str) -> Option<&RunwayDirection> {
        self.directions.iter().find(|d| d.designator == designator)
    }

    pub(crate) fn direction_mut(&mut self, designator: &str) -> Option<&mut RunwayDirection> {
        self.directions
            .iter_mut()
            .find(|d| d.designator == designator)
    }

    /// Splits the runway into one direction per end of its designation.
    ///
    /// The directions follow the order of the designation. Ends without any
    /// published direction data get an empty direction, directions that
    /// don't match an end are kept after them.
    pub(crate) fn split(&mut self) {
        let mut published = std::mem::take(&mut self.directions);
        let mut directions = Vec::with_capacity(published.len().max(2));

        for end in split_designation(&self.designation) {
            match published.iter().position(|d| d.designator == end) {
                Some(i) => directions.push(published.remove(i)),
                None => directions.push(RunwayDirection::new(end)),
            }
        }

        directions.append(&mut published);
        self.directions = directions;
    }
}

/// Splits a runway designation into the designators of its ends.
///
/// ```
/// use aerodata::nd::split_designation;
///
/// assert_eq!(split_designation("09/27"), vec!["09", "27"]);
/// assert_eq!(split_designation("05L / 23R"), vec!["05L", "23R"]);
/// assert_eq!(split_designation("H1"), vec!["H1"]);
/// ```
pub fn split_designation(designation: &str) -> Vec<&str> {
    designation
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// One end of a runway with the data that applies when landing or taking
/// off in its direction.
///
/// Vertical distances are in feet, declared distances in meters.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayDirection {
    pub designator: String,
    pub true_bearing: Option<f64>,
    /// Magnetic bearing (QFU).
    pub magnetic_bearing: Option<f64>,
    pub threshold: Option<Position>,
    pub tdz_elevation: Option<f64>,
    /// Visual approach slope indicator (e.g. `PAPI`).
    pub vasis: Option<String>,
    /// Approach slope in degrees.
    pub slope_angle: Option<f64>,
    /// Minimum eye height over threshold.
    pub meht: Option<f64>,
    pub declared_distances: DeclaredDistances,
    pub ils: Option<Ils>,
}

impl RunwayDirection {
    pub fn new(designator: impl Into<String>) -> Self {
        Self {
            designator: designator.into(),
            ..Default::default()
        }
    }
}

/// Declared distances of a runway direction in meters.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclaredDistances {
    /// Take-off run available.
    pub tora: Option<f64>,
    /// Take-off distance available.
    pub toda: Option<f64>,
    /// Accelerate-stop distance available.
    pub asda: Option<f64>,
    /// Landing distance available.
    pub lda: Option<f64>,
}

impl DeclaredDistances {
    /// Sets the distance of the `kind`, replacing a previous value.
    ///
    /// Returns `false` if the kind isn't one of TORA, TODA, ASDA or LDA.
    pub fn set(&mut self, kind: &str, value: f64) -> bool {
        let slot = match kind.trim().to_ascii_uppercase().as_str() {
            "TORA" => &mut self.tora,
            "TODA" => &mut self.toda,
            "ASDA" => &mut self.asda,
            "LDA" => &mut self.lda,
            _ => return false,
        };

        *slot = Some(value);
        true
    }
}

/// Instrument landing system of a runway direction.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ils {
    pub category: Option<String>,
    pub localizer_ident: Option<String>,
    /// Localizer frequency in MHz.
    pub localizer_frequency: Option<f64>,
    pub glide_path_frequency: Option<f64>,
    /// Glide path angle in degrees.
    pub glide_path_slope: Option<f64>,
    /// Reference datum height in feet.
    pub rdh: Option<f64>,
}
