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

//! Serde-deserializable structs that mirror the AIXM 4.5 and SIA XML
//! elements.
//!
//! These are internal types used by the parsers. Every field is optional so
//! that a sparse element still maps and the caller decides what is required.
//! Elements not listed here are ignored.

use serde::Deserialize;

use crate::uid::*;

// ---------------------------------------------------------------------------
// Aerodromes and runways
// ---------------------------------------------------------------------------

/// Free-text children are lists as some publishers repeat them.
#[derive(Debug, Deserialize)]
pub(crate) struct AhpXml {
    #[serde(rename = "AhpUid", default)]
    pub uid: Option<AhpUid>,
    #[serde(rename = "txtName", default)]
    pub name: Vec<String>,
    #[serde(rename = "codeIcao", default)]
    pub icao: Option<String>,
    #[serde(rename = "codeIata", default)]
    pub iata: Option<String>,
    #[serde(rename = "codeType", default)]
    pub kind: Option<String>,
    #[serde(rename = "txtNameCitySer", default)]
    pub city: Vec<String>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
    #[serde(rename = "valElev", default)]
    pub elevation: Option<String>,
    #[serde(rename = "uomDistVer", default)]
    pub elevation_uom: Option<String>,
    #[serde(rename = "valMagVar", default)]
    pub mag_var: Option<String>,
    #[serde(rename = "dateMagVar", default)]
    pub mag_var_date: Option<String>,
    #[serde(rename = "valMagVarChg", default)]
    pub mag_var_change: Option<String>,
    #[serde(rename = "valTransitionAlt", default)]
    pub transition_altitude: Option<String>,
    #[serde(rename = "uomTransitionAlt", default)]
    pub transition_altitude_uom: Option<String>,
    #[serde(rename = "txtDescrRefPt", default)]
    pub reference_point: Vec<String>,
    #[serde(rename = "txtNameAdmin", default)]
    pub administration: Vec<String>,
    #[serde(rename = "txtRmk", default)]
    pub remarks: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RwyXml {
    #[serde(rename = "RwyUid", default)]
    pub uid: Option<RwyUid>,
    #[serde(rename = "valLen", default)]
    pub length: Option<String>,
    #[serde(rename = "valWid", default)]
    pub width: Option<String>,
    #[serde(rename = "uomDimRwy", default)]
    pub dimension_uom: Option<String>,
    #[serde(rename = "codeComposition", default)]
    pub composition: Option<String>,
    #[serde(rename = "codeSfc", default)]
    pub surface: Option<String>,
    #[serde(rename = "txtPcnNote", default)]
    pub pcn_note: Option<String>,
    #[serde(rename = "codeStrength", default)]
    pub strength: Option<String>,
    #[serde(rename = "valLenStrip", default)]
    pub strip_length: Option<String>,
    #[serde(rename = "valWidStrip", default)]
    pub strip_width: Option<String>,
    #[serde(rename = "uomDimStrip", default)]
    pub strip_uom: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnXml {
    #[serde(rename = "RdnUid", default)]
    pub uid: Option<RdnUid>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
    #[serde(rename = "valTrueBrg", default)]
    pub true_bearing: Option<String>,
    #[serde(rename = "valMagBrg", default)]
    pub magnetic_bearing: Option<String>,
    #[serde(rename = "valElevTdz", default)]
    pub tdz_elevation: Option<String>,
    #[serde(rename = "uomElevTdz", default)]
    pub tdz_elevation_uom: Option<String>,
    #[serde(rename = "codeTypeVasis", default)]
    pub vasis: Option<String>,
    #[serde(rename = "valSlopeAngleGpVasis", default)]
    pub slope_angle: Option<String>,
    #[serde(rename = "valMeht", default)]
    pub meht: Option<String>,
    #[serde(rename = "uomMeht", default)]
    pub meht_uom: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RddXml {
    #[serde(rename = "RddUid", default)]
    pub uid: Option<RddUid>,
    #[serde(rename = "valDist", default)]
    pub distance: Option<String>,
    #[serde(rename = "uomDist", default)]
    pub uom: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IlsXml {
    #[serde(rename = "IlsUid", default)]
    pub uid: Option<IlsUid>,
    /// Some exports reference the direction without the `IlsUid` wrapper.
    #[serde(rename = "RdnUid", default)]
    pub rdn_uid: Option<RdnUid>,
    #[serde(rename = "codeCat", default)]
    pub category: Option<String>,
    #[serde(rename = "Ilz", default)]
    pub localizer: Option<IlzXml>,
    #[serde(rename = "Igp", default)]
    pub glide_path: Option<IgpXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IlzXml {
    #[serde(rename = "codeId", default)]
    pub ident: Option<String>,
    #[serde(rename = "valFreq", default)]
    pub frequency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IgpXml {
    #[serde(rename = "valFreq", default)]
    pub frequency: Option<String>,
    #[serde(rename = "valSlope", default)]
    pub slope: Option<String>,
    #[serde(rename = "valRdh", default)]
    pub rdh: Option<String>,
    #[serde(rename = "uomRdh", default)]
    pub rdh_uom: Option<String>,
}

// ---------------------------------------------------------------------------
// Navaids and points
// ---------------------------------------------------------------------------

/// Shared mirror of `Vor`, `Dme`, `Ndb` and `Tcn`.
///
/// A `Dme` may reference its co-located VOR through a `VorUid`, so each
/// identifier element gets its own field.
#[derive(Debug, Deserialize)]
pub(crate) struct NavaidXml {
    #[serde(rename = "VorUid", default)]
    pub vor_uid: Option<PointUid>,
    #[serde(rename = "DmeUid", default)]
    pub dme_uid: Option<PointUid>,
    #[serde(rename = "NdbUid", default)]
    pub ndb_uid: Option<PointUid>,
    #[serde(rename = "TcnUid", default)]
    pub tcn_uid: Option<PointUid>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
    #[serde(rename = "valElev", default)]
    pub elevation: Option<String>,
    #[serde(rename = "uomDistVer", default)]
    pub elevation_uom: Option<String>,
    #[serde(rename = "valFreq", default)]
    pub frequency: Option<String>,
    #[serde(rename = "uomFreq", default)]
    pub frequency_uom: Option<String>,
    #[serde(rename = "codeChannel", default)]
    pub channel: Option<String>,
    #[serde(rename = "valCoverageRadius", default)]
    pub range: Option<String>,
    #[serde(rename = "valMagVar", default)]
    pub mag_var: Option<String>,
    #[serde(rename = "codeWorkHr", default)]
    pub hours: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DpnXml {
    #[serde(rename = "DpnUid", default)]
    pub uid: Option<PointUid>,
    #[serde(rename = "AhpUidAssoc", default)]
    pub aerodrome: Option<AhpUid>,
    #[serde(rename = "codeType", default)]
    pub kind: Option<String>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "txtRmk", default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObsXml {
    #[serde(rename = "ObsUid", default)]
    pub uid: Option<PointUid>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "codeType", default)]
    pub kind: Option<String>,
    #[serde(rename = "codeLgt", default)]
    pub lighting: Option<String>,
    #[serde(rename = "codeMarking", default)]
    pub marking: Option<String>,
    #[serde(rename = "valElev", default)]
    pub elevation: Option<String>,
    #[serde(rename = "valHgt", default)]
    pub height: Option<String>,
    #[serde(rename = "uomDistVer", default)]
    pub uom: Option<String>,
}

// ---------------------------------------------------------------------------
// Airspaces
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AseXml {
    #[serde(rename = "AseUid", default)]
    pub uid: Option<AseUid>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "codeClass", default)]
    pub class: Option<String>,
    #[serde(rename = "codeActivity", default)]
    pub activity: Option<String>,
    #[serde(rename = "codeDistVerUpper", default)]
    pub upper_reference: Option<String>,
    #[serde(rename = "valDistVerUpper", default)]
    pub upper_value: Option<String>,
    #[serde(rename = "uomDistVerUpper", default)]
    pub upper_uom: Option<String>,
    #[serde(rename = "codeDistVerLower", default)]
    pub lower_reference: Option<String>,
    #[serde(rename = "valDistVerLower", default)]
    pub lower_value: Option<String>,
    #[serde(rename = "uomDistVerLower", default)]
    pub lower_uom: Option<String>,
    #[serde(rename = "txtRmkWorkHr", default)]
    pub schedule: Option<String>,
    #[serde(rename = "txtRmk", default)]
    pub remarks: Option<String>,
    #[serde(rename = "Abd", default)]
    pub borders: Vec<AbdXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbdXml {
    #[serde(rename = "AbdUid", default)]
    pub uid: Option<AbdUid>,
    #[serde(rename = "Avx", default)]
    pub vertices: Vec<AvxXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvxXml {
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct FqyXml {
    #[serde(rename = "FqyUid", default)]
    pub uid: Option<FqyUid>,
    #[serde(rename = "valFreqTrans", default)]
    pub frequency: Option<String>,
    #[serde(rename = "uomFreq", default)]
    pub uom: Option<String>,
    #[serde(rename = "codeWorkHr", default)]
    pub hours: Option<String>,
    #[serde(rename = "Cdl", default)]
    pub call_signs: Vec<CdlXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FqyUid {
    #[serde(rename = "SerUid", default)]
    pub ser_uid: Option<SerUid>,
    #[serde(rename = "valFreqTrans", default)]
    pub frequency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CdlXml {
    #[serde(rename = "txtCallSign", default)]
    pub call_sign: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AhsXml {
    #[serde(rename = "AhsUid", default)]
    pub uid: Option<AhsUid>,
    #[serde(rename = "txtDescrFac", default)]
    pub description: Option<String>,
    #[serde(rename = "codeWorkHr", default)]
    pub hours: Option<String>,
}

// ---------------------------------------------------------------------------
// SIA export
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AdXml {
    /// Bracketed owner path, e.g. `[LF][ST]`.
    #[serde(rename = "@lk", default)]
    pub lk: Option<String>,
    #[serde(rename = "AdCode", default)]
    pub code: Option<String>,
    #[serde(rename = "AdNomComplet", default)]
    pub name: Option<String>,
    #[serde(rename = "AdGestion", default)]
    pub operator: Option<String>,
    #[serde(rename = "AdAdresse", default)]
    pub address: Option<String>,
    #[serde(rename = "AdTel", default)]
    pub phone: Option<String>,
    #[serde(rename = "AdFax", default)]
    pub fax: Option<String>,
    #[serde(rename = "AdRem", default)]
    pub remarks: Option<String>,
    #[serde(rename = "AdOpr", default)]
    pub restrictions: Option<String>,
    #[serde(rename = "SsliaCat", default)]
    pub fire_category: Option<String>,
    #[serde(rename = "SsliaAcft", default)]
    pub fire_aircraft: Option<String>,
    #[serde(rename = "SsliaRem", default)]
    pub fire_remarks: Option<String>,
    #[serde(rename = "SsliaFac", default)]
    pub fire_facilities: Option<String>,
    #[serde(rename = "NeigePriorite", default)]
    pub snow_priority: Option<String>,
    #[serde(rename = "NeigeEqpt", default)]
    pub snow_equipment: Option<String>,
    #[serde(rename = "SvcPaxRem", default)]
    pub passenger_remarks: Option<String>,
    #[serde(rename = "Remarque", default)]
    pub additional_remarks: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FrequenceXml {
    #[serde(rename = "Service", default)]
    pub service: Option<ServiceRefXml>,
    #[serde(rename = "Frequence", default)]
    pub value: Option<String>,
    #[serde(rename = "HorCode", default)]
    pub schedule: Option<String>,
    #[serde(rename = "Remarque", default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceRefXml {
    /// Bracketed service path, e.g. `[LF][ST][TWR STRASBOURG Tour]`.
    #[serde(rename = "@lk", default)]
    pub lk: Option<String>,
}
