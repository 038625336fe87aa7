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

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::geom::Coordinate;
use crate::measurements::AltitudeReference;

/// ICAO airspace classification (ICAO Annex 11, Chapter 2).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "UNDEFINED"))]
    Undefined,
}

impl AirspaceClass {
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_ascii_uppercase()).as_deref() {
            Some("A") => Self::A,
            Some("B") => Self::B,
            Some("C") => Self::C,
            Some("D") => Self::D,
            Some("E") => Self::E,
            Some("F") => Self::F,
            Some("G") => Self::G,
            _ => Self::Undefined,
        }
    }
}

/// Special-use designation of an airspace.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SpecialType {
    /// Prohibited area.
    P,
    /// Restricted area.
    R,
    /// Danger area.
    D,
    /// Transponder mandatory zone.
    Tmz,
    /// Radio mandatory zone.
    Rmz,
    /// Temporary segregated area.
    Tsa,
    /// Temporary reserved area.
    Tra,
    /// Cross-border area.
    Cba,
    Other,
}

impl SpecialType {
    /// Classifies an airspace type code, `None` if there is no code.
    pub fn from_code(code: Option<&str>) -> Option<Self> {
        let code = code?.trim().to_ascii_uppercase();

        Some(match code.as_str() {
            "P" => Self::P,
            "R" => Self::R,
            "D" => Self::D,
            "TMZ" => Self::Tmz,
            "RMZ" => Self::Rmz,
            "TSA" => Self::Tsa,
            "TRA" => Self::Tra,
            "CBA" => Self::Cba,
            _ => Self::Other,
        })
    }
}

/// Upper or lower limit of an airspace.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerticalLimit {
    /// The limit in feet, `None` for limits such as `GND` or `UNL`.
    pub value: Option<f64>,
    pub reference: AltitudeReference,
    /// The limit as published (`"FL 115"`, `"GND"`).
    pub raw: Option<String>,
}

impl Display for VerticalLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match (&self.raw, self.value) {
            (Some(raw), _) => write!(f, "{raw}"),
            (None, Some(value)) => write!(f, "{value} ft {}", self.reference),
            (None, None) => write!(f, "{}", self.reference),
        }
    }
}

/// Horizontal extent of an airspace.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceGeometry {
    Polygon(Polygon<f64>),
    /// An airspace made of independent parts.
    MultiPolygon(MultiPolygon<f64>),
}

impl AirspaceGeometry {
    /// Builds the geometry from vertex rings.
    ///
    /// Open rings are closed and empty rings are dropped. A single ring
    /// results in a polygon, more rings in a multipolygon with one polygon
    /// per ring. Returns `None` if no ring remains.
    pub fn from_rings(rings: Vec<Vec<Coordinate>>) -> Option<Self> {
        let mut polygons: Vec<Polygon<f64>> = rings
            .into_iter()
            .filter(|ring| !ring.is_empty())
            .map(|mut ring| {
                if ring.first() != ring.last() {
                    ring.push(ring[0]);
                }

                let exterior: Vec<Coord<f64>> = ring.into_iter().map(Coord::from).collect();
                Polygon::new(LineString::new(exterior), vec![])
            })
            .collect();

        match polygons.len() {
            0 => None,
            1 => polygons.pop().map(Self::Polygon),
            _ => Some(Self::MultiPolygon(MultiPolygon::new(polygons))),
        }
    }

    /// Returns the number of rings.
    pub fn rings(&self) -> usize {
        match self {
            Self::Polygon(_) => 1,
            Self::MultiPolygon(mp) => mp.0.len(),
        }
    }
}

/// An airspace volume.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub ident: String,
    /// Type code (`CTR`, `TMA`, `R`, …).
    pub kind: Option<String>,
    pub name: Option<String>,
    pub class: AirspaceClass,
    pub special: Option<SpecialType>,
    pub activity: Option<String>,
    pub upper: VerticalLimit,
    pub lower: VerticalLimit,
    pub schedule: Option<String>,
    pub remarks: Option<String>,
    pub geometry: AirspaceGeometry,
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: {} | {}/{}",
            self.ident,
            self.name.as_deref().unwrap_or_default(),
            self.upper,
            self.lower
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Coordinate> {
        points
            .iter()
            .map(|&(lat, lon)| Coordinate::new(lat, lon))
            .collect()
    }

    #[test]
    fn open_ring_is_closed() {
        let geometry =
            AirspaceGeometry::from_rings(vec![ring(&[(48.0, 7.0), (48.5, 7.0), (48.5, 7.5)])])
                .unwrap();

        let AirspaceGeometry::Polygon(polygon) = geometry else {
            panic!("expected a polygon");
        };
        let exterior = polygon.exterior();
        assert_eq!(exterior.0.len(), 4);
        assert_eq!(exterior.0.first(), exterior.0.last());
    }

    #[test]
    fn several_rings_become_a_multipolygon() {
        let geometry = AirspaceGeometry::from_rings(vec![
            ring(&[(48.0, 7.0), (48.5, 7.0), (48.5, 7.5), (48.0, 7.0)]),
            vec![],
            ring(&[(49.0, 7.0), (49.5, 7.0), (49.5, 7.5)]),
        ])
        .unwrap();

        assert!(matches!(geometry, AirspaceGeometry::MultiPolygon(_)));
        assert_eq!(geometry.rings(), 2);
    }

    #[test]
    fn no_ring_no_geometry() {
        assert_eq!(AirspaceGeometry::from_rings(vec![]), None);
        assert_eq!(AirspaceGeometry::from_rings(vec![vec![], vec![]]), None);
    }

    #[test]
    fn special_types() {
        assert_eq!(SpecialType::from_code(Some("R")), Some(SpecialType::R));
        assert_eq!(SpecialType::from_code(Some("tmz")), Some(SpecialType::Tmz));
        assert_eq!(SpecialType::from_code(Some("CTR")), Some(SpecialType::Other));
        assert_eq!(SpecialType::from_code(None), None);
    }

    #[test]
    fn classes() {
        assert_eq!(AirspaceClass::from_code(Some("d")), AirspaceClass::D);
        assert_eq!(AirspaceClass::from_code(Some("CTR")), AirspaceClass::Undefined);
        assert_eq!(AirspaceClass::from_code(None), AirspaceClass::Undefined);
    }
}
