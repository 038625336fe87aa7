// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Owner-identifier chains.
//!
//! AIXM 4.5 never references an owner through a plain attribute. Instead each
//! feature carries a `…Uid` element which nests the `…Uid` of its owner, e.g.
//! a declared distance points to its aerodrome through
//! `<RddUid><RdnUid><RwyUid><AhpUid><codeId>`. The structs in this module
//! mirror those chains and each one resolves to an optional key. A missing or
//! empty link anywhere along the path yields `None`.

use serde::Deserialize;

/// Identifies a physical runway by its aerodrome and designator (`"09/27"`).
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct RunwayKey {
    /// Code of the owning aerodrome (e.g. `"LFST"`).
    pub aerodrome: String,
    /// Designator of the physical runway (e.g. `"05/23"`).
    pub designator: String,
}

/// Identifies one direction of a runway (`"09"` of `"09/27"`).
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct DirectionKey {
    pub runway: RunwayKey,
    /// Designator of this direction (e.g. `"05"`).
    pub designator: String,
}

/// Identifies an airspace by its type code and identifier.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct AirspaceKey {
    /// Type code (e.g. `"CTR"`, `"R"`).
    pub kind: Option<String>,
    /// Identifier (e.g. `"LFR45A"`).
    pub ident: String,
}

/// Trims the text and drops it if nothing remains.
pub(crate) fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AhpUid {
    #[serde(rename = "codeId", default)]
    pub code_id: Option<String>,
}

impl AhpUid {
    pub fn resolve(&self) -> Option<String> {
        non_empty(self.code_id.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RwyUid {
    #[serde(rename = "AhpUid", default)]
    pub ahp_uid: Option<AhpUid>,
    #[serde(rename = "txtDesig", default)]
    pub designator: Option<String>,
}

impl RwyUid {
    pub fn resolve(&self) -> Option<RunwayKey> {
        let aerodrome = self.ahp_uid.as_ref()?.resolve()?;
        let designator = non_empty(self.designator.as_deref())?;
        Some(RunwayKey {
            aerodrome,
            designator,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RdnUid {
    #[serde(rename = "RwyUid", default)]
    pub rwy_uid: Option<RwyUid>,
    #[serde(rename = "txtDesig", default)]
    pub designator: Option<String>,
}

impl RdnUid {
    pub fn resolve(&self) -> Option<DirectionKey> {
        let runway = self.rwy_uid.as_ref()?.resolve()?;
        let designator = non_empty(self.designator.as_deref())?;
        Some(DirectionKey { runway, designator })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RddUid {
    #[serde(rename = "RdnUid", default)]
    pub rdn_uid: Option<RdnUid>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
}

impl RddUid {
    /// Resolves the runway direction and the distance type (`"TORA"`, …).
    pub fn resolve(&self) -> Option<(DirectionKey, String)> {
        let direction = self.rdn_uid.as_ref()?.resolve()?;
        let kind = non_empty(self.code_type.as_deref())?;
        Some((direction, kind))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct IlsUid {
    #[serde(rename = "RdnUid", default)]
    pub rdn_uid: Option<RdnUid>,
}

impl IlsUid {
    pub fn resolve(&self) -> Option<DirectionKey> {
        self.rdn_uid.as_ref()?.resolve()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AhsUid {
    #[serde(rename = "AhpUid", default)]
    pub ahp_uid: Option<AhpUid>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
}

impl AhsUid {
    pub fn resolve(&self) -> Option<String> {
        self.ahp_uid.as_ref()?.resolve()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UniUid {
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
}

impl UniUid {
    /// Resolves the aerodrome code that leads the unit name, as in
    /// `"LFST STRASBOURG"`.
    pub fn resolve(&self) -> Option<String> {
        let name = self.name.as_deref()?.trim();
        let (code, rest) = name.split_once(char::is_whitespace)?;

        let is_code = code.len() == 4 && code.bytes().all(|b| b.is_ascii_uppercase());
        if is_code && !rest.trim().is_empty() {
            Some(code.to_string())
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SerUid {
    #[serde(rename = "UniUid", default)]
    pub uni_uid: Option<UniUid>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
}

impl SerUid {
    pub fn resolve(&self) -> Option<String> {
        self.uni_uid.as_ref()?.resolve()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AseUid {
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
    #[serde(rename = "codeId", default)]
    pub code_id: Option<String>,
}

impl AseUid {
    pub fn resolve(&self) -> Option<AirspaceKey> {
        let ident = non_empty(self.code_id.as_deref())?;
        Some(AirspaceKey {
            kind: non_empty(self.code_type.as_deref()),
            ident,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AbdUid {
    #[serde(rename = "AseUid", default)]
    pub ase_uid: Option<AseUid>,
}

impl AbdUid {
    pub fn resolve(&self) -> Option<AirspaceKey> {
        self.ase_uid.as_ref()?.resolve()
    }
}

/// The `…Uid` of a point feature (navaid, designated point, obstacle) which
/// carries the position next to the identifier.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PointUid {
    #[serde(rename = "codeId", default)]
    pub code_id: Option<String>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
}

impl PointUid {
    pub fn resolve(&self) -> Option<String> {
        non_empty(self.code_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de<T: for<'de> Deserialize<'de>>(xml: &str) -> T {
        quick_xml::de::from_str(xml).unwrap()
    }

    #[test]
    fn resolves_full_direction_chain() {
        let uid: RdnUid = de(r#"
            <RdnUid mid="1">
              <RwyUid mid="2">
                <AhpUid mid="3"><codeId>LFST</codeId></AhpUid>
                <txtDesig>05/23</txtDesig>
              </RwyUid>
              <txtDesig>05</txtDesig>
            </RdnUid>"#);

        let key = uid.resolve().unwrap();
        assert_eq!(key.runway.aerodrome, "LFST");
        assert_eq!(key.runway.designator, "05/23");
        assert_eq!(key.designator, "05");
    }

    #[test]
    fn missing_aerodrome_link_breaks_chain() {
        let uid: RdnUid = de(r#"
            <RdnUid>
              <RwyUid><txtDesig>05/23</txtDesig></RwyUid>
              <txtDesig>05</txtDesig>
            </RdnUid>"#);
        assert_eq!(uid.resolve(), None);
    }

    #[test]
    fn empty_code_breaks_chain() {
        let uid: RwyUid = de(r#"
            <RwyUid>
              <AhpUid><codeId>  </codeId></AhpUid>
              <txtDesig>05/23</txtDesig>
            </RwyUid>"#);
        assert_eq!(uid.resolve(), None);
    }

    #[test]
    fn declared_distance_needs_type() {
        let uid: RddUid = de(r#"
            <RddUid>
              <RdnUid>
                <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
                <txtDesig>23</txtDesig>
              </RdnUid>
            </RddUid>"#);
        assert_eq!(uid.resolve(), None);

        let uid: RddUid = de(r#"
            <RddUid>
              <RdnUid>
                <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
                <txtDesig>23</txtDesig>
              </RdnUid>
              <codeType>LDA</codeType>
            </RddUid>"#);
        let (direction, kind) = uid.resolve().unwrap();
        assert_eq!(direction.designator, "23");
        assert_eq!(kind, "LDA");
    }

    #[test]
    fn unit_name_leads_with_aerodrome_code() {
        let uid: UniUid = de("<UniUid><txtName>LFBD BORDEAUX MERIGNAC</txtName></UniUid>");
        assert_eq!(uid.resolve().as_deref(), Some("LFBD"));

        let uid: UniUid = de("<UniUid><txtName>BORDEAUX ACC</txtName></UniUid>");
        assert_eq!(uid.resolve(), None);

        let uid: UniUid = de("<UniUid><txtName>LFBD</txtName></UniUid>");
        assert_eq!(uid.resolve(), None);
    }

    #[test]
    fn airspace_key_keeps_type() {
        let uid: AbdUid = de(r#"
            <AbdUid><AseUid><codeType>R</codeType><codeId>LFR45A</codeId></AseUid></AbdUid>"#);
        assert_eq!(
            uid.resolve(),
            Some(AirspaceKey {
                kind: Some("R".to_string()),
                ident: "LFR45A".to_string()
            })
        );
    }
}
