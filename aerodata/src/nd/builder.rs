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

use std::collections::{BTreeMap, HashMap};

use aixm::{AirspaceKey, DirectionKey, RunwayKey};
use chrono::NaiveDate;

use super::crossref::{nearby_navaids, DEFAULT_RADIUS_NM};
use super::*;
use crate::geom::Coordinate;

/// An airspace whose borders may still be completed by top-level `Abd`
/// elements.
pub(crate) struct AirspaceDraft {
    pub key: Option<AirspaceKey>,
    pub ident: String,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub class: AirspaceClass,
    pub special: Option<SpecialType>,
    pub activity: Option<String>,
    pub upper: VerticalLimit,
    pub lower: VerticalLimit,
    pub schedule: Option<String>,
    pub remarks: Option<String>,
    pub rings: Vec<Vec<Coordinate>>,
}

impl AirspaceDraft {
    fn finish(self) -> Option<Airspace> {
        let geometry = AirspaceGeometry::from_rings(self.rings)?;

        Some(Airspace {
            ident: self.ident,
            kind: self.kind,
            name: self.name,
            class: self.class,
            special: self.special,
            activity: self.activity,
            upper: self.upper,
            lower: self.lower,
            schedule: self.schedule,
            remarks: self.remarks,
            geometry,
        })
    }
}

/// Aeronautical data factory, which is used to build [aeronautical data].
///
/// Records can be added in any order. Everything that references an owner
/// is kept aside and attached in [`build`](Self::build), where records
/// whose owner is unknown are skipped.
///
/// [aeronautical data]: super::AeronauticalData
pub struct AeronauticalDataBuilder {
    aerodromes: BTreeMap<String, Aerodrome>,
    runways: BTreeMap<RunwayKey, Runway>,
    directions: Vec<(DirectionKey, RunwayDirection)>,
    declared_distances: Vec<(DirectionKey, String, f64)>,
    ils: Vec<(DirectionKey, Ils)>,
    navaids: Vec<Navaid>,
    navaid_index: HashMap<String, usize>,
    designated_points: Vec<DesignatedPoint>,
    airspaces: Vec<AirspaceDraft>,
    borders: Vec<(AirspaceKey, Vec<Coordinate>)>,
    obstacles: Vec<Obstacle>,
    frequencies: Vec<(String, Frequency)>,
    services: Vec<(String, ServiceDetail)>,
    admin: Vec<(String, AdminInfo)>,
    prefix: Option<String>,
    radius_nm: f64,
    cycle: Option<NaiveDate>,
}

impl Default for AeronauticalDataBuilder {
    fn default() -> Self {
        Self {
            aerodromes: BTreeMap::new(),
            runways: BTreeMap::new(),
            directions: Vec::new(),
            declared_distances: Vec::new(),
            ils: Vec::new(),
            navaids: Vec::new(),
            navaid_index: HashMap::new(),
            designated_points: Vec::new(),
            airspaces: Vec::new(),
            borders: Vec::new(),
            obstacles: Vec::new(),
            frequencies: Vec::new(),
            services: Vec::new(),
            admin: Vec::new(),
            prefix: None,
            radius_nm: DEFAULT_RADIUS_NM,
            cycle: None,
        }
    }
}

impl AeronauticalDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts aerodromes and the records they own to codes starting with
    /// the `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into().to_ascii_uppercase());
        self
    }

    /// Sets the radius in which navaids are associated with an aerodrome.
    pub fn with_radius(mut self, radius_nm: f64) -> Self {
        self.radius_nm = radius_nm;
        self
    }

    pub fn with_cycle(mut self, cycle: NaiveDate) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Returns whether records owned by the aerodrome `code` are kept.
    pub fn accepts(&self, code: &str) -> bool {
        self.prefix
            .as_deref()
            .map_or(true, |prefix| code.starts_with(prefix))
    }

    /// Adds an aerodrome.
    ///
    /// If the code is known already, the first aerodrome is kept.
    pub fn add_aerodrome(&mut self, ad: Aerodrome) {
        if !self.accepts(&ad.code) {
            log::debug!("skipping aerodrome {} outside of the prefix", ad.code);
            return;
        }

        if self.aerodromes.contains_key(&ad.code) {
            log::warn!("duplicate aerodrome {}, keeping the first", ad.code);
            return;
        }

        self.aerodromes.insert(ad.code.clone(), ad);
    }

    pub fn add_runway(&mut self, key: RunwayKey, rwy: Runway) {
        if self.runways.contains_key(&key) {
            log::warn!(
                "duplicate runway {} at {}, keeping the first",
                key.designator,
                key.aerodrome
            );
            return;
        }

        self.runways.insert(key, rwy);
    }

    pub fn add_runway_direction(&mut self, key: DirectionKey, direction: RunwayDirection) {
        self.directions.push((key, direction));
    }

    /// Adds a declared distance in meters.
    ///
    /// A later distance of the same kind replaces an earlier one.
    pub fn add_declared_distance(&mut self, key: DirectionKey, kind: String, distance: f64) {
        self.declared_distances.push((key, kind, distance));
    }

    pub fn add_ils(&mut self, key: DirectionKey, ils: Ils) {
        self.ils.push((key, ils));
    }

    /// Adds a navaid.
    ///
    /// A navaid with an identifier that is known already is combined with
    /// the known one if it is co-located and the types can be combined.
    /// Otherwise the first is kept.
    pub fn add_navaid(&mut self, navaid: Navaid) {
        let Some(&i) = self.navaid_index.get(&navaid.ident) else {
            self.navaid_index
                .insert(navaid.ident.clone(), self.navaids.len());
            self.navaids.push(navaid);
            return;
        };

        let known = &mut self.navaids[i];
        let ident = navaid.ident.clone();
        let kind = navaid.kind;

        let distance = known
            .position
            .coordinate
            .dist_nm(&navaid.position.coordinate);

        if distance > COLOCATION_NM || !known.merge(navaid) {
            log::warn!(
                "navaid {} {} conflicts with {} {}, keeping the first",
                kind,
                ident,
                known.kind,
                known.ident
            );
        }
    }

    pub fn add_designated_point(&mut self, point: DesignatedPoint) {
        self.designated_points.push(point);
    }

    pub(crate) fn add_airspace(&mut self, airspace: AirspaceDraft) {
        self.airspaces.push(airspace);
    }

    /// Adds a border ring to the airspace with the `key`.
    pub fn add_airspace_border(&mut self, key: AirspaceKey, ring: Vec<Coordinate>) {
        self.borders.push((key, ring));
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn add_frequency(&mut self, aerodrome: String, frequency: Frequency) {
        self.frequencies.push((aerodrome, frequency));
    }

    pub fn add_service(&mut self, aerodrome: String, service: ServiceDetail) {
        self.services.push((aerodrome, service));
    }

    pub fn add_admin(&mut self, aerodrome: String, admin: AdminInfo) {
        self.admin.push((aerodrome, admin));
    }

    /// Combines everything that was added into aeronautical data.
    pub fn build(mut self) -> Result<AeronauticalData, Error> {
        log::info!("combining {} aerodromes", self.aerodromes.len());

        self.assemble_runways();

        for (code, frequency) in std::mem::take(&mut self.frequencies) {
            if let Some(ad) = self.owner(&code, "frequency") {
                ad.add_frequency(frequency);
            }
        }

        for (code, service) in std::mem::take(&mut self.services) {
            if let Some(ad) = self.owner(&code, "service") {
                ad.services.add(service);
            }
        }

        for (code, admin) in std::mem::take(&mut self.admin) {
            if let Some(ad) = self.owner(&code, "administration") {
                ad.admin = Some(match ad.admin.take() {
                    Some(known) => merge_admin(known, admin),
                    None => admin,
                });
            }
        }

        let mut designated_points = std::mem::take(&mut self.designated_points);
        for point in &mut designated_points {
            let Some(code) = point.aerodrome.clone() else {
                continue;
            };

            match self.aerodromes.get_mut(&code) {
                Some(ad) => ad.designated_points.push(point.clone()),
                None => point.aerodrome = None,
            }
        }

        let airspaces = self.assemble_airspaces();

        let navaids = self.navaids;
        let aerodromes: Vec<Aerodrome> = self
            .aerodromes
            .into_values()
            .map(|mut ad| {
                ad.navaids = nearby_navaids(&ad.position.coordinate, &navaids, self.radius_nm);
                ad
            })
            .collect();

        Ok(AeronauticalData {
            aerodromes,
            navaids,
            designated_points,
            airspaces,
            obstacles: self.obstacles,
            cycle: self.cycle,
        })
    }

    /// Attaches directions to their runways, splits every runway into its
    /// ends and merges declared distances and ILS into the ends.
    fn assemble_runways(&mut self) {
        for (key, direction) in std::mem::take(&mut self.directions) {
            let Some(rwy) = self.runways.get_mut(&key.runway) else {
                log::warn!(
                    "skipping direction {} of unknown runway {} at {}",
                    key.designator,
                    key.runway.designator,
                    key.runway.aerodrome
                );
                continue;
            };

            match rwy.direction_mut(&direction.designator) {
                Some(known) => *known = direction,
                None => rwy.directions.push(direction),
            }
        }

        self.runways.values_mut().for_each(Runway::split);

        for (key, kind, distance) in std::mem::take(&mut self.declared_distances) {
            match self.direction_mut(&key) {
                Some(direction) => {
                    if !direction.declared_distances.set(&kind, distance) {
                        log::debug!("skipping declared distance {kind} of {}", key.designator);
                    }
                }
                None => log::warn!(
                    "skipping declared distance of unknown direction {} at {}",
                    key.designator,
                    key.runway.aerodrome
                ),
            }
        }

        for (key, ils) in std::mem::take(&mut self.ils) {
            match self.direction_mut(&key) {
                Some(direction) => direction.ils = Some(ils),
                None => log::warn!(
                    "skipping ILS of unknown direction {} at {}",
                    key.designator,
                    key.runway.aerodrome
                ),
            }
        }

        for (key, rwy) in std::mem::take(&mut self.runways) {
            if let Some(ad) = self.owner(&key.aerodrome, "runway") {
                ad.runways.push(rwy);
            }
        }
    }

    fn direction_mut(&mut self, key: &DirectionKey) -> Option<&mut RunwayDirection> {
        self.runways
            .get_mut(&key.runway)?
            .direction_mut(&key.designator)
    }

    /// Combines the airspaces with their top-level borders and drops those
    /// that end up without any border.
    fn assemble_airspaces(&mut self) -> Vec<Airspace> {
        let mut drafts = std::mem::take(&mut self.airspaces);

        for (key, ring) in std::mem::take(&mut self.borders) {
            match drafts.iter_mut().find(|a| a.key.as_ref() == Some(&key)) {
                Some(draft) => draft.rings.push(ring),
                None => log::warn!("skipping border of unknown airspace {}", key.ident),
            }
        }

        drafts
            .into_iter()
            .filter_map(|draft| {
                let ident = draft.ident.clone();
                let airspace = draft.finish();
                if airspace.is_none() {
                    log::warn!("discarding airspace {ident} without geometry");
                }
                airspace
            })
            .collect()
    }

    /// Returns the aerodrome that owns a record of the `what` kind.
    fn owner(&mut self, code: &str, what: &str) -> Option<&mut Aerodrome> {
        if !self.accepts(code) {
            log::debug!("skipping {what} of {code} outside of the prefix");
            return None;
        }

        let ad = self.aerodromes.get_mut(code);
        if ad.is_none() {
            log::warn!("skipping {what} of unknown aerodrome {code}");
        }
        ad
    }
}

/// Maximum distance of two stations that are published under the same
/// identifier to be considered one navaid.
const COLOCATION_NM: f64 = 1.0;

fn merge_admin(known: AdminInfo, other: AdminInfo) -> AdminInfo {
    AdminInfo {
        operator: known.operator.or(other.operator),
        address: known.address.or(other.address),
        phone: known.phone.or(other.phone),
        fax: known.fax.or(other.fax),
        email: known.email.or(other.email),
        website: known.website.or(other.website),
        special_instructions: known.special_instructions.or(other.special_instructions),
        restrictions: known.restrictions.or(other.restrictions),
        fire_category: known.fire_category.or(other.fire_category),
        fire_aircraft: known.fire_aircraft.or(other.fire_aircraft),
        fire_remarks: known.fire_remarks.or(other.fire_remarks),
        fire_facilities: known.fire_facilities.or(other.fire_facilities),
        snow_priority: known.snow_priority.or(other.snow_priority),
        snow_equipment: known.snow_equipment.or(other.snow_equipment),
        passenger_remarks: known.passenger_remarks.or(other.passenger_remarks),
        additional_remarks: if known.additional_remarks.is_empty() {
            other.additional_remarks
        } else {
            known.additional_remarks
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Position;

    fn position(latitude: f64, longitude: f64) -> Position {
        Position {
            coordinate: Coordinate::new(latitude, longitude),
            ..Default::default()
        }
    }

    fn direction_key(aerodrome: &str, runway: &str, designator: &str) -> DirectionKey {
        DirectionKey {
            runway: RunwayKey {
                aerodrome: aerodrome.to_string(),
                designator: runway.to_string(),
            },
            designator: designator.to_string(),
        }
    }

    fn navaid(ident: &str, kind: NavaidType, latitude: f64) -> Navaid {
        Navaid {
            ident: ident.to_string(),
            name: None,
            kind,
            position: position(latitude, 7.0),
            elevation: None,
            frequency: None,
            frequency_uom: None,
            channel: None,
            range: None,
            mag_var: None,
            hours: None,
        }
    }

    #[test]
    fn duplicate_aerodrome_keeps_the_first() {
        let mut builder = AeronauticalDataBuilder::new();
        let mut first = Aerodrome::new("LFST", position(48.5, 7.6));
        first.name = Some("STRASBOURG ENTZHEIM".to_string());
        builder.add_aerodrome(first);
        builder.add_aerodrome(Aerodrome::new("LFST", position(0.0, 0.0)));

        let data = builder.build().unwrap();
        assert_eq!(data.aerodromes().len(), 1);
        assert_eq!(
            data.aerodrome("lfst").unwrap().name.as_deref(),
            Some("STRASBOURG ENTZHEIM")
        );
    }

    #[test]
    fn prefix_filters_aerodromes_and_children() {
        let mut builder = AeronauticalDataBuilder::new().with_prefix("lf");
        builder.add_aerodrome(Aerodrome::new("LFST", position(48.5, 7.6)));
        builder.add_aerodrome(Aerodrome::new("EDFM", position(49.5, 8.5)));
        builder.add_service(
            "EDFM".to_string(),
            ServiceDetail {
                kind: "FUEL".to_string(),
                description: None,
                hours: None,
            },
        );

        let data = builder.build().unwrap();
        assert!(data.aerodrome("LFST").is_some());
        assert!(data.aerodrome("EDFM").is_none());
    }

    #[test]
    fn runway_assembly() {
        let mut builder = AeronauticalDataBuilder::new();
        builder.add_aerodrome(Aerodrome::new("LFST", position(48.5, 7.6)));
        builder.add_runway(
            RunwayKey {
                aerodrome: "LFST".to_string(),
                designator: "05/23".to_string(),
            },
            Runway::new("05/23"),
        );

        let mut rdn = RunwayDirection::new("23");
        rdn.true_bearing = Some(228.0);
        builder.add_runway_direction(direction_key("LFST", "05/23", "23"), rdn);

        // declared distances of the end without an `Rdn` still attach
        builder.add_declared_distance(direction_key("LFST", "05/23", "05"), "LDA".into(), 2400.0);
        builder.add_declared_distance(direction_key("LFST", "05/23", "23"), "TORA".into(), 2400.0);
        builder.add_declared_distance(direction_key("LFST", "05/23", "23"), "TORA".into(), 2200.0);
        builder.add_ils(direction_key("LFST", "05/23", "23"), Ils::default());
        builder.add_ils(direction_key("LFST", "05/23", "18"), Ils::default());

        let data = builder.build().unwrap();
        let rwy = data.aerodrome("LFST").unwrap().runway("05/23").unwrap();

        assert_eq!(rwy.directions.len(), 2);
        let rdn05 = rwy.direction("05").unwrap();
        let rdn23 = rwy.direction("23").unwrap();

        assert_eq!(rdn05.true_bearing, None);
        assert_eq!(rdn05.declared_distances.lda, Some(2400.0));
        assert_eq!(rdn05.declared_distances.tora, None);
        assert!(rdn05.ils.is_none());

        assert_eq!(rdn23.true_bearing, Some(228.0));
        assert_eq!(rdn23.declared_distances.tora, Some(2200.0));
        assert!(rdn23.ils.is_some());
    }

    #[test]
    fn colocated_navaids_are_combined() {
        let mut builder = AeronauticalDataBuilder::new();
        builder.add_navaid(navaid("STR", NavaidType::Vor, 48.5));
        builder.add_navaid(navaid("STR", NavaidType::Dme, 48.5));
        builder.add_navaid(navaid("NDB", NavaidType::Ndb, 48.0));
        // same identifier, far away
        builder.add_navaid(navaid("NDB", NavaidType::Ndb, 45.0));

        let data = builder.build().unwrap();
        assert_eq!(data.navaids().len(), 2);
        assert_eq!(data.navaids()[0].kind, NavaidType::VorDme);
        assert_eq!(data.navaids()[1].position.coordinate.latitude, 48.0);
    }

    #[test]
    fn unknown_point_owner_is_cleared() {
        let mut builder = AeronauticalDataBuilder::new();
        builder.add_aerodrome(Aerodrome::new("LFST", position(48.5, 7.6)));

        for (ident, owner) in [("NE", "LFST"), ("SW", "LFXX")] {
            builder.add_designated_point(DesignatedPoint {
                ident: ident.to_string(),
                name: None,
                kind: PointType::VfrRp,
                position: position(48.6, 7.7),
                mandatory: false,
                aerodrome: Some(owner.to_string()),
                remarks: None,
            });
        }

        let data = builder.build().unwrap();
        assert_eq!(data.designated_points()[0].aerodrome.as_deref(), Some("LFST"));
        assert_eq!(data.designated_points()[1].aerodrome, None);
        assert_eq!(data.aerodrome("LFST").unwrap().designated_points.len(), 1);
    }

    #[test]
    fn repeated_admin_fills_gaps() {
        let mut builder = AeronauticalDataBuilder::new();
        builder.add_aerodrome(Aerodrome::new("LFSB", position(47.6, 7.5)));
        builder.add_admin(
            "LFSB".to_string(),
            AdminInfo {
                fire_category: Some("9".to_string()),
                snow_priority: Some("RWY 15/33".to_string()),
                ..Default::default()
            },
        );
        builder.add_admin(
            "LFSB".to_string(),
            AdminInfo {
                fire_category: Some("7".to_string()),
                fire_aircraft: Some("B747".to_string()),
                additional_remarks: vec!["Douane sur demande.".to_string()],
                ..Default::default()
            },
        );

        let data = builder.build().unwrap();
        let admin = data.aerodrome("LFSB").unwrap().admin.as_ref().unwrap();
        assert_eq!(admin.fire_category.as_deref(), Some("9"));
        assert_eq!(admin.fire_aircraft.as_deref(), Some("B747"));
        assert_eq!(admin.snow_priority.as_deref(), Some("RWY 15/33"));
        assert_eq!(admin.additional_remarks, ["Douane sur demande."]);
    }
}
