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

//! Aeronautical data model.
//!
//! [`AeronauticalData`] is assembled by the [`AeronauticalDataBuilder`] from
//! an AIXM 4.5 snapshot and, optionally, the SIA export of the same cycle.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod aerodrome;
mod airspace;
mod builder;
mod convert;
pub mod crossref;
mod frequency;
mod navaid;
mod obstacle;
mod point;
mod runway;

pub use aerodrome::*;
pub use airspace::*;
pub use builder::AeronauticalDataBuilder;
pub use frequency::*;
pub use navaid::*;
pub use obstacle::Obstacle;
pub use point::*;
pub use runway::*;

/// Merged aeronautical data of one cycle.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AeronauticalData {
    /// Ordered by code.
    pub(crate) aerodromes: Vec<Aerodrome>,
    pub(crate) navaids: Vec<Navaid>,
    pub(crate) designated_points: Vec<DesignatedPoint>,
    pub(crate) airspaces: Vec<Airspace>,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) cycle: Option<NaiveDate>,
}

impl AeronauticalData {
    pub fn builder() -> AeronauticalDataBuilder {
        AeronauticalDataBuilder::new()
    }

    /// Merges an AIXM 4.5 snapshot with an optional SIA export.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aerodata::nd::AeronauticalData;
    ///
    /// let aixm = std::fs::read("AIXM4.5_all_FR_OM_2025-01-23.xml").unwrap();
    /// let data = AeronauticalData::try_from_sources(&aixm, None).unwrap();
    ///
    /// if let Some(ad) = data.aerodrome("LFST") {
    ///     println!("{} has {} runways", ad.code, ad.runways.len());
    /// }
    /// ```
    pub fn try_from_sources(aixm: &[u8], sia: Option<&[u8]>) -> Result<Self, Error> {
        let mut builder = Self::builder();
        builder.read_aixm(aixm)?;
        if let Some(sia) = sia {
            builder.read_sia(sia)?;
        }
        builder.build()
    }

    pub fn aerodromes(&self) -> &[Aerodrome] {
        &self.aerodromes
    }

    /// Returns the aerodrome with the `code`, ignoring case.
    pub fn aerodrome(&self, code: &str) -> Option<&Aerodrome> {
        let code = code.trim().to_ascii_uppercase();
        self.aerodromes
            .binary_search_by(|ad| ad.code.as_str().cmp(code.as_str()))
            .ok()
            .map(|i| &self.aerodromes[i])
    }

    /// Returns the aerodromes whose code, name or city contain the `query`.
    pub fn search(&self, query: &str) -> Vec<&Aerodrome> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.aerodromes.iter().filter(|ad| ad.matches(query)).collect()
    }

    pub fn navaids(&self) -> &[Navaid] {
        &self.navaids
    }

    pub fn designated_points(&self) -> &[DesignatedPoint] {
        &self.designated_points
    }

    pub fn airspaces(&self) -> &[Airspace] {
        &self.airspaces
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Effective date of the cycle the data was published for.
    pub fn cycle(&self) -> Option<NaiveDate> {
        self.cycle
    }

    pub(crate) fn aerodromes_mut(&mut self) -> &mut [Aerodrome] {
        &mut self.aerodromes
    }
}
