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

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{DesignatedPoint, Frequency, NavaidAssociation, Runway, ServiceType};
use crate::geom::Position;

/// Type of an aerodrome.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum AerodromeType {
    /// Aerodrome, with or without a heliport.
    Ad,
    /// Heliport.
    Hp,
    /// Landing site.
    Ls,
    #[default]
    Other,
}

impl AerodromeType {
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_ascii_uppercase()).as_deref() {
            Some("AD" | "AH") => Self::Ad,
            Some("HP") => Self::Hp,
            Some("LS") => Self::Ls,
            _ => Self::Other,
        }
    }
}

/// Administrative details of an aerodrome.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdminInfo {
    pub operator: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub special_instructions: Option<String>,
    pub restrictions: Option<String>,
    /// Rescue and fire-fighting category.
    pub fire_category: Option<String>,
    /// Largest aircraft the fire service covers.
    pub fire_aircraft: Option<String>,
    pub fire_remarks: Option<String>,
    pub fire_facilities: Option<String>,
    /// Snow removal priorities.
    pub snow_priority: Option<String>,
    pub snow_equipment: Option<String>,
    pub passenger_remarks: Option<String>,
    pub additional_remarks: Vec<String>,
}

/// A service offered at an aerodrome as published.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceDetail {
    /// Service type code (`FUEL`, `CUST`, …).
    pub kind: String,
    pub description: Option<String>,
    pub hours: Option<String>,
}

/// Services offered at an aerodrome.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Services {
    pub fuel: bool,
    pub avgas_100ll: bool,
    pub jet_a1: bool,
    pub maintenance: bool,
    pub customs: bool,
    pub handling: bool,
    pub hangar: bool,
    pub parking: bool,
    pub de_icing: bool,
    pub security: bool,
    pub medical: bool,
    pub fire: bool,
    pub details: Vec<ServiceDetail>,
}

impl Services {
    /// Adds a published service and raises the flags it implies.
    pub fn add(&mut self, detail: ServiceDetail) {
        let description = detail
            .description
            .as_deref()
            .unwrap_or_default()
            .to_ascii_uppercase();

        match detail.kind.trim().to_ascii_uppercase().as_str() {
            "FUEL" => {
                self.fuel = true;
                self.avgas_100ll |= description.contains("100LL");
                self.jet_a1 |= description.contains("JET A1") || description.contains("JET-A1");
            }
            "REPAIR" | "MAINT" => self.maintenance = true,
            "CUST" => self.customs = true,
            "HAND" => self.handling = true,
            "HANGAR" => {
                self.hangar = true;
                self.parking |= description.contains("PARKING");
            }
            "DEICE" => self.de_icing = true,
            "SECUR" => self.security = true,
            "SAN" => self.medical = true,
            "FIRE" => self.fire = true,
            _ => {}
        }

        self.details.push(detail);
    }
}

/// Facts about an aerodrome that neither publication carries.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Supplement {
    /// Traffic circuit altitude in feet.
    pub circuit_altitude: Option<f64>,
    /// Circuit integration altitude in feet.
    pub integration_altitude: Option<f64>,
    pub circuit_remarks: Option<String>,
}

/// An aerodrome with everything that was published for it.
///
/// Vertical distances are in feet.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome {
    pub code: String,
    pub name: Option<String>,
    pub icao: Option<String>,
    pub iata: Option<String>,
    pub city: Option<String>,
    pub kind: AerodromeType,
    pub position: Position,
    pub elevation: Option<f64>,
    /// Magnetic variation in degrees, west negative.
    pub mag_var: Option<f64>,
    pub mag_var_date: Option<String>,
    /// Annual change of the magnetic variation in degrees.
    pub mag_var_change: Option<f64>,
    pub transition_altitude: Option<f64>,
    /// Where the reference point lies on the aerodrome.
    pub reference_point: Option<String>,
    /// Administrative authority as published with the aerodrome.
    pub administration: Option<String>,
    pub remarks: Option<String>,
    pub runways: Vec<Runway>,
    pub frequencies: BTreeMap<ServiceType, Vec<Frequency>>,
    /// Navaids nearby ordered by distance.
    pub navaids: Vec<NavaidAssociation>,
    pub designated_points: Vec<DesignatedPoint>,
    pub admin: Option<AdminInfo>,
    pub services: Services,
    pub supplement: Option<Supplement>,
}

impl Aerodrome {
    pub fn new(code: impl Into<String>, position: Position) -> Self {
        Self {
            code: code.into(),
            name: None,
            icao: None,
            iata: None,
            city: None,
            kind: AerodromeType::default(),
            position,
            elevation: None,
            mag_var: None,
            mag_var_date: None,
            mag_var_change: None,
            transition_altitude: None,
            reference_point: None,
            administration: None,
            remarks: None,
            runways: Vec::new(),
            frequencies: BTreeMap::new(),
            navaids: Vec::new(),
            designated_points: Vec::new(),
            admin: None,
            services: Services::default(),
            supplement: None,
        }
    }

    /// Returns the runway with the `designation`.
    pub fn runway(&self, designation: &str) -> Option<&Runway> {
        self.runways.iter().find(|r| r.designation == designation)
    }

    /// Returns the frequencies of a service.
    pub fn frequencies(&self, service: ServiceType) -> &[Frequency] {
        self.frequencies
            .get(&service)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Adds a frequency unless the service already has it.
    ///
    /// Details missing on the known frequency are taken from the duplicate.
    pub fn add_frequency(&mut self, frequency: Frequency) {
        let list = self.frequencies.entry(frequency.service).or_default();
        match list.iter_mut().find(|f| f.same_channel(&frequency)) {
            Some(known) => known.complete_from(frequency),
            None => list.push(frequency),
        }
    }

    /// Returns whether the `query` is part of the code, name or city,
    /// ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [Some(&self.code), self.name.as_ref(), self.city.as_ref()]
            .into_iter()
            .flatten()
            .any(|s| s.to_lowercase().contains(&query))
    }
}
