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

/// Usage of a designated point.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING-KEBAB-CASE"))]
pub enum PointType {
    /// Visual reporting point.
    VfrRp,
    /// Compulsory visual reporting point.
    VfrCompulsory,
    /// Optional visual reporting point.
    VfrOptional,
    Ifr,
    Rnav,
    Other,
}

impl PointType {
    /// Classifies an AIXM point type code.
    ///
    /// ```
    /// use aerodata::nd::PointType;
    ///
    /// assert_eq!(PointType::from_code(Some("VFR-MRP")), PointType::VfrCompulsory);
    /// assert_eq!(PointType::from_code(Some("VFR-RP")), PointType::VfrRp);
    /// assert_eq!(PointType::from_code(Some("ICAO")), PointType::Other);
    /// ```
    pub fn from_code(code: Option<&str>) -> Self {
        let code = code.map(str::to_ascii_uppercase).unwrap_or_default();

        if code.contains("VFR") {
            if code.contains("COMPULSORY") || code.contains("MRP") {
                Self::VfrCompulsory
            } else if code.contains("OPTIONAL") {
                Self::VfrOptional
            } else {
                Self::VfrRp
            }
        } else if code.contains("IFR") {
            Self::Ifr
        } else if code.contains("RNAV") {
            Self::Rnav
        } else {
            Self::Other
        }
    }
}

/// Returns whether reporting over a point of the type code is mandatory.
pub fn is_mandatory(code: Option<&str>) -> bool {
    matches!(
        code.map(|c| c.trim().to_ascii_uppercase()).as_deref(),
        Some("COMPULSORY-REP" | "VFR-MRP")
    )
}

/// A designated point such as a visual reporting point.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignatedPoint {
    pub ident: String,
    pub name: Option<String>,
    pub kind: PointType,
    pub position: Position,
    pub mandatory: bool,
    /// Code of the aerodrome the point belongs to, if it is known.
    pub aerodrome: Option<String>,
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_point_types() {
        assert_eq!(PointType::from_code(Some("VFR-COMPULSORY")), PointType::VfrCompulsory);
        assert_eq!(PointType::from_code(Some("vfr-optional")), PointType::VfrOptional);
        assert_eq!(PointType::from_code(Some("IFR")), PointType::Ifr);
        assert_eq!(PointType::from_code(Some("RNAV")), PointType::Rnav);
        assert_eq!(PointType::from_code(None), PointType::Other);
    }

    #[test]
    fn mandatory_reporting() {
        assert!(is_mandatory(Some("COMPULSORY-REP")));
        assert!(is_mandatory(Some("VFR-MRP")));
        assert!(!is_mandatory(Some("VFR-RP")));
        assert!(!is_mandatory(None));
    }
}
