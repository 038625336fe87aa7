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

use super::fields;
use crate::error::{Entity, Error};
use crate::geom::Position;
use crate::measurements::{convert_altitude, convert_length, convert_vertical_distance};
use crate::nd::builder::AirspaceDraft;
use crate::nd::*;

/// Converts a value with its unit to feet.
fn feet(value: Option<f64>, uom: Option<&String>) -> Option<f64> {
    value.map(|v| convert_vertical_distance(v, uom.map(String::as_str)))
}

/// Converts a value with its unit to meters.
fn meters(value: Option<f64>, uom: Option<&String>) -> Option<f64> {
    value.map(|v| convert_length(v, uom.map(String::as_str)))
}

impl TryFrom<&aixm::AirportHeliport> for Aerodrome {
    type Error = Error;

    fn try_from(ahp: &aixm::AirportHeliport) -> Result<Self, Self::Error> {
        let code = ahp.code.clone().unwrap_or_default();
        let position = fields::required_position(
            Entity::Aerodrome,
            &code,
            ahp.latitude.as_deref(),
            ahp.longitude.as_deref(),
        )?;

        let mut ad = Aerodrome::new(code, position);
        ad.name = ahp.name.clone();
        ad.icao = ahp.icao.clone();
        ad.iata = ahp.iata.clone();
        ad.city = ahp.city.clone();
        ad.kind = AerodromeType::from_code(ahp.kind.as_deref());
        ad.elevation = feet(ahp.elevation, ahp.elevation_uom.as_ref());
        ad.mag_var = ahp.mag_var;
        ad.mag_var_date = ahp.mag_var_date.clone();
        ad.mag_var_change = ahp.mag_var_change;
        ad.transition_altitude = ahp.transition_altitude.map(|v| {
            convert_altitude(v, ahp.transition_altitude_uom.as_deref())
        });
        ad.reference_point = ahp.reference_point.clone();
        ad.administration = ahp.administration.clone();
        ad.remarks = ahp.remarks.clone();

        Ok(ad)
    }
}

impl From<&aixm::Runway> for Runway {
    fn from(rwy: &aixm::Runway) -> Self {
        let designation = rwy
            .key
            .as_ref()
            .map(|k| k.designator.clone())
            .unwrap_or_default();

        Self {
            designation,
            length: meters(rwy.length, rwy.dimension_uom.as_ref()),
            width: meters(rwy.width, rwy.dimension_uom.as_ref()),
            surface: rwy.composition.clone(),
            strength: rwy.strength.clone(),
            strip_length: meters(rwy.strip_length, rwy.strip_uom.as_ref()),
            strip_width: meters(rwy.strip_width, rwy.strip_uom.as_ref()),
            directions: Vec::new(),
        }
    }
}

impl From<&aixm::RunwayDirection> for RunwayDirection {
    fn from(rdn: &aixm::RunwayDirection) -> Self {
        let designator = rdn
            .key
            .as_ref()
            .map(|k| k.designator.clone())
            .unwrap_or_default();

        Self {
            designator,
            true_bearing: rdn.true_bearing,
            magnetic_bearing: rdn.magnetic_bearing,
            threshold: Position::decode(rdn.latitude.as_deref(), rdn.longitude.as_deref()),
            tdz_elevation: feet(rdn.tdz_elevation, rdn.tdz_elevation_uom.as_ref()),
            vasis: rdn.vasis.clone(),
            slope_angle: rdn.slope_angle,
            meht: feet(rdn.meht, rdn.meht_uom.as_ref()),
            declared_distances: DeclaredDistances::default(),
            ils: None,
        }
    }
}

impl From<&aixm::Ils> for Ils {
    fn from(ils: &aixm::Ils) -> Self {
        Self {
            category: ils.category.clone(),
            localizer_ident: ils.localizer_ident.clone(),
            localizer_frequency: ils.localizer_frequency,
            glide_path_frequency: ils.glide_path_frequency,
            glide_path_slope: ils.glide_path_slope,
            rdh: feet(ils.glide_path_rdh, ils.rdh_uom.as_ref()),
        }
    }
}

impl TryFrom<&aixm::Navaid> for Navaid {
    type Error = Error;

    fn try_from(nav: &aixm::Navaid) -> Result<Self, Self::Error> {
        let ident = nav.ident.clone().unwrap_or_default();
        let position = fields::required_position(
            Entity::Navaid,
            &ident,
            nav.latitude.as_deref(),
            nav.longitude.as_deref(),
        )?;

        Ok(Self {
            ident,
            name: nav.name.clone(),
            kind: nav.kind.into(),
            position,
            elevation: feet(nav.elevation, nav.elevation_uom.as_ref()),
            frequency: nav.frequency,
            frequency_uom: nav.frequency_uom.clone(),
            channel: nav.channel.clone(),
            range: nav.range,
            mag_var: nav.mag_var,
            hours: nav.hours.clone(),
        })
    }
}

impl TryFrom<&aixm::DesignatedPoint> for DesignatedPoint {
    type Error = Error;

    fn try_from(dpn: &aixm::DesignatedPoint) -> Result<Self, Self::Error> {
        let ident = dpn.ident.clone().unwrap_or_default();
        let position = fields::required_position(
            Entity::DesignatedPoint,
            &ident,
            dpn.latitude.as_deref(),
            dpn.longitude.as_deref(),
        )?;

        Ok(Self {
            ident,
            name: dpn.name.clone(),
            kind: PointType::from_code(dpn.kind.as_deref()),
            position,
            mandatory: is_mandatory(dpn.kind.as_deref()),
            aerodrome: dpn.aerodrome.clone(),
            remarks: dpn.remarks.clone(),
        })
    }
}

/// Converts an obstacle, `None` if its position is unknown.
pub fn obstacle(obs: &aixm::Obstacle) -> Option<Obstacle> {
    let position = Position::decode(obs.latitude.as_deref(), obs.longitude.as_deref())?;
    let elevation = feet(obs.elevation, obs.uom.as_ref());
    let height = feet(obs.height, obs.uom.as_ref());

    Some(Obstacle {
        name: obs.name.clone(),
        kind: obs.kind.clone(),
        position,
        lighted: fields::flag(obs.lighting.as_deref()),
        marking: obs.marking.clone(),
        elevation,
        height,
        total_height: Obstacle::derive_total_height(elevation, height),
    })
}

/// Converts an airspace whose borders may still be completed.
pub fn airspace(ase: &aixm::Airspace, key: &aixm::AirspaceKey) -> AirspaceDraft {
    AirspaceDraft {
        key: Some(key.clone()),
        ident: key.ident.clone(),
        kind: key.kind.clone(),
        name: ase.name.clone(),
        class: AirspaceClass::from_code(ase.class.as_deref()),
        special: SpecialType::from_code(key.kind.as_deref()),
        activity: ase.activity.clone(),
        upper: fields::vertical_limit(&ase.upper),
        lower: fields::vertical_limit(&ase.lower),
        schedule: ase.schedule.clone(),
        remarks: ase.remarks.clone(),
        rings: ase
            .borders
            .iter()
            .map(|ring| fields::ring(ring, &key.ident))
            .collect(),
    }
}
