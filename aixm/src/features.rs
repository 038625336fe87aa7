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

//! Public AIXM 4.5 feature types yielded by the [`Features`](crate::Features)
//! iterator.
//!
//! Each struct is a flat representation of one AIXM 4.5 element with its
//! owner chain already resolved into a key (see [`uid`](crate::uid)). Numeric
//! values are parsed to `f64` and are `None` when absent or unparseable.
//!
//! Positions are kept as the raw packed DMS tokens (`"483218.00N"`). Decoding
//! them is left to the caller, which also decides whether a missing position
//! is acceptable for the feature at hand.

use crate::uid::{AirspaceKey, DirectionKey, RunwayKey};

/// A parsed AIXM 4.5 element yielded by [`Features`](crate::Features).
///
/// # Examples
///
/// ```no_run
/// # let data = vec![];
/// for result in aixm::Features::new(&data) {
///     match result {
///         Ok(aixm::Feature::AirportHeliport(ahp)) => {
///             println!("{:?}: {:?}", ahp.code, ahp.name);
///         }
///         Ok(_) => {}
///         Err(e) if e.is_fatal() => break,
///         Err(e) => eprintln!("skipping: {e}"),
///     }
/// }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Feature {
    /// An aerodrome or heliport (`Ahp`).
    AirportHeliport(AirportHeliport),
    /// A physical runway (`Rwy`).
    Runway(Runway),
    /// One end of a runway (`Rdn`).
    RunwayDirection(RunwayDirection),
    /// A declared distance of a runway direction (`Rdd`).
    DeclaredDistance(DeclaredDistance),
    /// An instrument landing system serving a runway direction (`Ils`).
    Ils(Ils),
    /// A radio navigation aid (`Vor`, `Dme`, `Ndb` or `Tcn`).
    Navaid(Navaid),
    /// A named point (`Dpn`).
    DesignatedPoint(DesignatedPoint),
    /// An airspace with its nested borders (`Ase`).
    Airspace(Airspace),
    /// An airspace border published outside of its airspace (`Abd`).
    AirspaceBorder(AirspaceBorder),
    /// A vertical obstacle (`Obs`).
    Obstacle(Obstacle),
    /// A service frequency (`Fqy`).
    Frequency(Frequency),
    /// A service available at an aerodrome (`Ahs`).
    AirportService(AirportService),
}

/// An aerodrome parsed from an `Ahp` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AirportHeliport {
    /// Aerodrome code from `<AhpUid><codeId>`.
    pub code: Option<String>,
    pub name: Option<String>,
    pub icao: Option<String>,
    pub iata: Option<String>,
    /// Type code (`AD`, `HP`, `AH`, `LS`).
    pub kind: Option<String>,
    /// Served city (`txtNameCitySer`).
    pub city: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub elevation: Option<f64>,
    pub elevation_uom: Option<String>,
    /// Magnetic variation in degrees, west negative.
    pub mag_var: Option<f64>,
    pub mag_var_date: Option<String>,
    pub mag_var_change: Option<f64>,
    pub transition_altitude: Option<f64>,
    pub transition_altitude_uom: Option<String>,
    pub reference_point: Option<String>,
    pub administration: Option<String>,
    pub remarks: Option<String>,
}

/// A physical runway parsed from an `Rwy` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Runway {
    pub key: Option<RunwayKey>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    /// Unit of length and width.
    pub dimension_uom: Option<String>,
    /// Surface composition (`codeComposition`, `codeSfc` in older exports).
    pub composition: Option<String>,
    /// Pavement strength (`txtPcnNote` or `codeStrength`).
    pub strength: Option<String>,
    pub strip_length: Option<f64>,
    pub strip_width: Option<f64>,
    pub strip_uom: Option<String>,
}

/// One end of a runway parsed from an `Rdn` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct RunwayDirection {
    pub key: Option<DirectionKey>,
    /// Threshold position.
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub true_bearing: Option<f64>,
    pub magnetic_bearing: Option<f64>,
    /// Touchdown zone elevation.
    pub tdz_elevation: Option<f64>,
    pub tdz_elevation_uom: Option<String>,
    /// Visual approach slope indicator type (e.g. `PAPI`).
    pub vasis: Option<String>,
    pub slope_angle: Option<f64>,
    /// Minimum eye height over threshold.
    pub meht: Option<f64>,
    pub meht_uom: Option<String>,
}

/// A declared distance parsed from an `Rdd` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DeclaredDistance {
    pub direction: Option<DirectionKey>,
    /// `TORA`, `TODA`, `ASDA` or `LDA`; other codes are passed through.
    pub kind: Option<String>,
    pub distance: Option<f64>,
    pub uom: Option<String>,
}

/// An ILS parsed from an `Ils` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Ils {
    pub direction: Option<DirectionKey>,
    /// Category (`I`, `II`, `IIIA`, …).
    pub category: Option<String>,
    pub localizer_ident: Option<String>,
    pub localizer_frequency: Option<f64>,
    pub glide_path_frequency: Option<f64>,
    pub glide_path_slope: Option<f64>,
    pub glide_path_rdh: Option<f64>,
    pub rdh_uom: Option<String>,
}

/// The element a [`Navaid`] was read from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NavaidKind {
    Vor,
    Dme,
    Ndb,
    Tacan,
}

/// A radio navigation aid parsed from a `Vor`, `Dme`, `Ndb` or `Tcn`
/// element.
///
/// The position is taken from the `…Uid` element first and from the body of
/// the element if the identifier doesn't carry it.
#[derive(Clone, PartialEq, Debug)]
pub struct Navaid {
    pub kind: NavaidKind,
    pub ident: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub elevation: Option<f64>,
    pub elevation_uom: Option<String>,
    pub frequency: Option<f64>,
    pub frequency_uom: Option<String>,
    /// DME or TACAN channel (e.g. `"113X"`).
    pub channel: Option<String>,
    /// Coverage radius in nautical miles.
    pub range: Option<f64>,
    pub mag_var: Option<f64>,
    /// Operating hours code.
    pub hours: Option<String>,
}

/// A designated point parsed from a `Dpn` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DesignatedPoint {
    pub ident: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Type code (`VFR-RP`, `COMPULSORY-REP`, `ICAO`, …).
    pub kind: Option<String>,
    /// Code of the aerodrome the point is associated with.
    pub aerodrome: Option<String>,
    pub remarks: Option<String>,
}

/// A vertical limit of an airspace as published.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct VerticalLimit {
    /// Datum code (`ALT`, `HEI`, `STD`, …).
    pub reference: Option<String>,
    /// Value as written, which may be a number or a word such as `GND`.
    pub value: Option<String>,
    pub uom: Option<String>,
}

/// A vertex of an airspace border.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Vertex {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// An airspace parsed from an `Ase` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Airspace {
    pub key: Option<AirspaceKey>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub activity: Option<String>,
    pub upper: VerticalLimit,
    pub lower: VerticalLimit,
    /// Operating hours (`txtRmkWorkHr`).
    pub schedule: Option<String>,
    pub remarks: Option<String>,
    /// Vertex rings of the nested `Abd` elements in document order.
    pub borders: Vec<Vec<Vertex>>,
}

/// A border published as a top-level `Abd` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AirspaceBorder {
    pub airspace: Option<AirspaceKey>,
    pub vertices: Vec<Vertex>,
}

/// An obstacle parsed from an `Obs` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Obstacle {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    /// Lighting code (`Y`/`N`).
    pub lighting: Option<String>,
    pub marking: Option<String>,
    /// Elevation of the top above mean sea level.
    pub elevation: Option<f64>,
    /// Height above ground.
    pub height: Option<f64>,
    pub uom: Option<String>,
}

/// A service frequency parsed from an `Fqy` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Frequency {
    /// Aerodrome code leading the unit name.
    pub aerodrome: Option<String>,
    /// Service code (`TWR`, `APP`, `ATIS`, …).
    pub service: Option<String>,
    /// Transmit frequency as written.
    pub value: Option<String>,
    pub uom: Option<String>,
    pub call_sign: Option<String>,
    pub hours: Option<String>,
}

/// An aerodrome service parsed from an `Ahs` element.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AirportService {
    pub aerodrome: Option<String>,
    /// Service type (`FUEL`, `CUST`, `HANGAR`, …).
    pub kind: Option<String>,
    pub description: Option<String>,
    pub hours: Option<String>,
}
