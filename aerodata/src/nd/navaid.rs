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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Position;

/// Type of a radio navigation aid.
///
/// Co-located stations published under the same identifier are combined
/// into the compound types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidType {
    #[cfg_attr(feature = "serde", serde(rename = "VOR"))]
    Vor,
    #[cfg_attr(feature = "serde", serde(rename = "DME"))]
    Dme,
    #[cfg_attr(feature = "serde", serde(rename = "NDB"))]
    Ndb,
    #[cfg_attr(feature = "serde", serde(rename = "TACAN"))]
    Tacan,
    #[cfg_attr(feature = "serde", serde(rename = "VOR-DME"))]
    VorDme,
    #[cfg_attr(feature = "serde", serde(rename = "VORTAC"))]
    Vortac,
}

impl NavaidType {
    /// Returns the type of a station that combines `self` and `other`.
    ///
    /// ```
    /// use aerodata::nd::NavaidType;
    ///
    /// assert_eq!(NavaidType::Vor.combine(NavaidType::Dme), Some(NavaidType::VorDme));
    /// assert_eq!(NavaidType::Tacan.combine(NavaidType::Vor), Some(NavaidType::Vortac));
    /// assert_eq!(NavaidType::Ndb.combine(NavaidType::Dme), None);
    /// ```
    pub fn combine(self, other: NavaidType) -> Option<NavaidType> {
        use NavaidType::*;

        match (self, other) {
            (a, b) if a == b => Some(a),
            (Vor, Dme) | (Dme, Vor) => Some(VorDme),
            (VorDme, Vor | Dme) | (Vor | Dme, VorDme) => Some(VorDme),
            (Vor, Tacan) | (Tacan, Vor) => Some(Vortac),
            (Vortac, Vor | Dme | Tacan) | (Vor | Dme | Tacan, Vortac) => Some(Vortac),
            (VorDme, Tacan) | (Tacan, VorDme) => Some(Vortac),
            _ => None,
        }
    }
}

impl From<aixm::NavaidKind> for NavaidType {
    fn from(kind: aixm::NavaidKind) -> Self {
        match kind {
            aixm::NavaidKind::Vor => Self::Vor,
            aixm::NavaidKind::Dme => Self::Dme,
            aixm::NavaidKind::Ndb => Self::Ndb,
            aixm::NavaidKind::Tacan => Self::Tacan,
        }
    }
}

impl fmt::Display for NavaidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Vor => "VOR",
            Self::Dme => "DME",
            Self::Ndb => "NDB",
            Self::Tacan => "TACAN",
            Self::VorDme => "VOR-DME",
            Self::Vortac => "VORTAC",
        };
        f.write_str(s)
    }
}

/// A radio navigation aid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub ident: String,
    pub name: Option<String>,
    pub kind: NavaidType,
    pub position: Position,
    /// Elevation in feet.
    pub elevation: Option<f64>,
    pub frequency: Option<f64>,
    pub frequency_uom: Option<String>,
    /// DME or TACAN channel.
    pub channel: Option<String>,
    /// Coverage radius in nautical miles.
    pub range: Option<f64>,
    pub mag_var: Option<f64>,
    pub hours: Option<String>,
}

impl Navaid {
    /// Merges a co-located station published under the same identifier.
    ///
    /// The VOR frequency is preferred over the DME or TACAN one. Returns
    /// `false` and leaves `self` untouched if the types can't be combined.
    pub(crate) fn merge(&mut self, other: Navaid) -> bool {
        let Some(kind) = self.kind.combine(other.kind) else {
            return false;
        };

        if other.kind == NavaidType::Vor && self.kind != NavaidType::Vor {
            self.frequency = other.frequency.or(self.frequency);
            self.frequency_uom = other.frequency_uom.or(self.frequency_uom.take());
        } else if self.frequency.is_none() {
            self.frequency = other.frequency;
            self.frequency_uom = other.frequency_uom;
        }

        self.kind = kind;
        self.name = self.name.take().or(other.name);
        self.elevation = self.elevation.or(other.elevation);
        self.channel = self.channel.take().or(other.channel);
        self.range = match (self.range, other.range) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.mag_var = self.mag_var.or(other.mag_var);
        self.hours = self.hours.take().or(other.hours);
        true
    }
}

/// A navaid near an aerodrome.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavaidAssociation {
    pub ident: String,
    pub kind: NavaidType,
    pub frequency: Option<f64>,
    /// Distance from the aerodrome in nautical miles, rounded to 0.1.
    pub distance: f64,
    /// True bearing from the aerodrome to the navaid, rounded to degrees.
    pub bearing: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navaid(kind: NavaidType, frequency: Option<f64>) -> Navaid {
        Navaid {
            ident: "STR".to_string(),
            name: None,
            kind,
            position: Position::default(),
            elevation: None,
            frequency,
            frequency_uom: frequency.map(|_| "MHZ".to_string()),
            channel: None,
            range: None,
            mag_var: None,
            hours: None,
        }
    }

    #[test]
    fn dme_merges_into_vor() {
        let mut dme = navaid(NavaidType::Dme, None);
        dme.channel = Some("113X".to_string());

        let mut vor = navaid(NavaidType::Vor, Some(115.6));
        assert!(vor.merge(dme));

        assert_eq!(vor.kind, NavaidType::VorDme);
        assert_eq!(vor.frequency, Some(115.6));
        assert_eq!(vor.channel.as_deref(), Some("113X"));
    }

    #[test]
    fn vor_frequency_wins_over_tacan() {
        let mut tacan = navaid(NavaidType::Tacan, Some(1100.0));
        assert!(tacan.merge(navaid(NavaidType::Vor, Some(113.0))));

        assert_eq!(tacan.kind, NavaidType::Vortac);
        assert_eq!(tacan.frequency, Some(113.0));
    }

    #[test]
    fn ndb_does_not_merge() {
        let mut ndb = navaid(NavaidType::Ndb, Some(380.0));
        assert!(!ndb.merge(navaid(NavaidType::Vor, Some(113.0))));
        assert_eq!(ndb.kind, NavaidType::Ndb);
        assert_eq!(ndb.frequency, Some(380.0));
    }
}
