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

//! Reads AIXM 4.5 snapshots.
//!
//! Features stream in document order. Records that reference an owner keep
//! the owner's key and are attached when the data is built, so owners may
//! be published after the records they own.

use aixm::Feature;

use super::service;
use crate::error::Error;
use crate::measurements::convert_length;
use crate::nd::*;

mod fields;
mod records;

impl AeronauticalDataBuilder {
    /// Reads an AIXM 4.5 snapshot.
    ///
    /// Elements that can't be read or whose owner can't be resolved are
    /// skipped with a warning. A document that isn't well-formed and
    /// aerodromes, navaids or designated points without a position abort
    /// the read.
    ///
    /// # Examples
    ///
    /// ```
    /// use aerodata::nd::AeronauticalData;
    ///
    /// let aixm = br#"
    ///   <AIXM-Snapshot>
    ///     <Ahp>
    ///       <AhpUid><codeId>LFST</codeId></AhpUid>
    ///       <txtName>STRASBOURG ENTZHEIM</txtName>
    ///       <geoLat>483218.00N</geoLat>
    ///       <geoLong>0073742.00E</geoLong>
    ///     </Ahp>
    ///   </AIXM-Snapshot>"#;
    ///
    /// let mut builder = AeronauticalData::builder();
    /// builder.read_aixm(aixm).unwrap();
    ///
    /// let data = builder.build().unwrap();
    /// assert!(data.aerodrome("LFST").is_some());
    /// ```
    pub fn read_aixm(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut count = 0;

        for feature in aixm::Features::new(data) {
            match feature {
                Ok(feature) => {
                    self.add_feature(feature)?;
                    count += 1;
                }
                Err(e) if e.is_fatal() => {
                    return Err(Error::InvalidXml {
                        source: "AIXM",
                        reason: e.to_string(),
                    })
                }
                Err(e) => log::warn!("skipping AIXM element: {e}"),
            }
        }

        log::info!("read {count} AIXM features");
        Ok(())
    }

    fn add_feature(&mut self, feature: Feature) -> Result<(), Error> {
        match feature {
            Feature::AirportHeliport(ahp) => {
                let Some(code) = ahp.code.as_deref() else {
                    log::warn!("skipping aerodrome without code");
                    return Ok(());
                };

                if !self.accepts(code) {
                    log::debug!("skipping aerodrome {code} outside of the prefix");
                    return Ok(());
                }

                self.add_aerodrome(Aerodrome::try_from(&ahp)?);
            }

            Feature::Runway(rwy) => match rwy.key.clone() {
                Some(key) => self.add_runway(key, Runway::from(&rwy)),
                None => log::warn!("skipping runway with unresolved aerodrome"),
            },

            Feature::RunwayDirection(rdn) => match rdn.key.clone() {
                Some(key) => self.add_runway_direction(key, RunwayDirection::from(&rdn)),
                None => log::warn!("skipping runway direction with unresolved runway"),
            },

            Feature::DeclaredDistance(rdd) => match (rdd.direction, rdd.kind, rdd.distance) {
                (Some(key), Some(kind), Some(distance)) => {
                    let distance = convert_length(distance, rdd.uom.as_deref());
                    self.add_declared_distance(key, kind, distance);
                }
                _ => log::warn!("skipping incomplete declared distance"),
            },

            Feature::Ils(ils) => match ils.direction.clone() {
                Some(key) => self.add_ils(key, Ils::from(&ils)),
                None => log::warn!("skipping ILS with unresolved runway direction"),
            },

            Feature::Navaid(nav) => {
                if nav.ident.is_none() {
                    log::warn!("skipping {:?} without identifier", nav.kind);
                    return Ok(());
                }

                self.add_navaid(Navaid::try_from(&nav)?);
            }

            Feature::DesignatedPoint(dpn) => {
                if dpn.ident.is_none() {
                    log::warn!("skipping designated point without identifier");
                    return Ok(());
                }

                self.add_designated_point(DesignatedPoint::try_from(&dpn)?);
            }

            Feature::Airspace(ase) => match &ase.key {
                Some(key) => self.add_airspace(records::airspace(&ase, key)),
                None => log::warn!("skipping airspace without identifier"),
            },

            Feature::AirspaceBorder(abd) => match abd.airspace {
                Some(key) => {
                    let ring = fields::ring(&abd.vertices, &key.ident);
                    self.add_airspace_border(key, ring);
                }
                None => log::warn!("skipping border with unresolved airspace"),
            },

            Feature::Obstacle(obs) => match records::obstacle(&obs) {
                Some(obstacle) => self.add_obstacle(obstacle),
                None => log::warn!(
                    "skipping obstacle {} without position",
                    obs.name.as_deref().unwrap_or("?")
                ),
            },

            Feature::Frequency(fqy) => self.add_aixm_frequency(fqy),

            Feature::AirportService(ahs) => match (ahs.aerodrome, ahs.kind) {
                (Some(code), Some(kind)) => self.add_service(
                    code,
                    ServiceDetail {
                        kind,
                        description: ahs.description,
                        hours: ahs.hours,
                    },
                ),
                _ => log::warn!("skipping aerodrome service with unresolved owner"),
            },
        }

        Ok(())
    }

    fn add_aixm_frequency(&mut self, fqy: aixm::Frequency) {
        let (Some(code), Some(value)) = (fqy.aerodrome, fqy.value) else {
            log::warn!("skipping frequency with unresolved service");
            return;
        };

        let label = match (&fqy.service, &fqy.call_sign) {
            (Some(s), Some(c)) => format!("{s} {c}"),
            (Some(s), None) => s.clone(),
            (None, Some(c)) => c.clone(),
            (None, None) => String::new(),
        };

        let Some(service) = service::resolve(&label) else {
            log::debug!("skipping frequency {value} of {code} with unknown service {label:?}");
            return;
        };

        self.add_frequency(
            code,
            Frequency {
                service,
                value,
                uom: fqy.uom,
                call_sign: fqy.call_sign,
                schedule: fqy.hours,
                remarks: None,
            },
        );
    }
}
