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

use std::marker::PhantomData;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::features::*;
use crate::uid::non_empty;
use crate::xml;

/// An element kind that [`Fragments`] cuts out of a document.
pub(crate) trait Element: Copy {
    /// Returns the kind of an element with the local name, if it's selected.
    fn select(local: &[u8]) -> Option<Self>;

    /// The element name used in error reports.
    fn tag(self) -> &'static str;
}

/// Streams the subtrees of selected elements out of an XML document.
///
/// Each selected element is returned as a standalone UTF-8 XML fragment
/// together with its kind. Elements nested inside a selected element are
/// part of its fragment and aren't selected again. The text is decoded with
/// the encoding named by the XML declaration. A fragment that can't be
/// decoded is reported as [`Error::Malformed`] and the stream goes on.
///
/// After an error in the document itself the stream ends.
pub(crate) struct Fragments<'a, K> {
    reader: Reader<&'a [u8]>,
    data: &'a [u8],
    buf: Vec<u8>,
    kind: PhantomData<K>,
    done: bool,
}

impl<'a, K: Element> Fragments<'a, K> {
    pub fn new(data: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(data);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            data,
            buf: Vec::new(),
            kind: PhantomData,
            done: false,
        }
    }

    /// Reads the rest of the element opened by `start` and decodes it.
    fn cut(&mut self, kind: K, start: BytesStart<'static>) -> Result<String, Error> {
        let end = start.to_end().into_owned();
        let span = match self.reader.read_to_end(end.name()) {
            Ok(span) => span,
            Err(e) => {
                self.done = true;
                return Err(e.into());
            }
        };

        let decoder = self.reader.decoder();
        let decode = |bytes: &[u8]| {
            decoder
                .decode(bytes)
                .map(|text| text.into_owned())
                .map_err(|e| Error::Malformed {
                    feature: kind.tag(),
                    reason: e.to_string(),
                })
        };

        let tag = decode(start.as_ref())?;
        let content = decode(&self.data[span.start as usize..span.end as usize])?;
        let end_tag = decode(end.name().as_ref())?;
        Ok(format!("<{tag}>{content}</{end_tag}>"))
    }
}

impl<K: Element> Iterator for Fragments<'_, K> {
    type Item = Result<(K, String), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => {
                    let Some(kind) = K::select(local_name(e.name().as_ref())) else {
                        continue;
                    };
                    let start = e.into_owned();
                    return Some(self.cut(kind, start).map(|fragment| (kind, fragment)));
                }
                Ok(Event::Eof) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                _ => continue,
            }
        }
    }
}

/// Maps a fragment onto its mirror struct.
pub(crate) fn deserialize<T: DeserializeOwned>(
    feature: &'static str,
    fragment: &str,
) -> Result<T, Error> {
    quick_xml::de::from_str(fragment).map_err(|e| Error::Malformed {
        feature,
        reason: e.to_string(),
    })
}

/// Streaming iterator over the features of an AIXM 4.5 snapshot.
///
/// Yields one [`Feature`] per supported element in document order.
/// Unsupported elements are silently skipped. An element that doesn't map
/// onto its structure yields a non-fatal [`Error::Malformed`] and the
/// iteration continues. A document that isn't well-formed yields a fatal
/// [`Error::Xml`] after which the iterator is exhausted.
///
/// # Examples
///
/// ```
/// use aixm::{Feature, Features};
///
/// let xml = br#"
///   <AIXM-Snapshot version="4.5">
///     <Ahp>
///       <AhpUid><codeId>LFST</codeId></AhpUid>
///       <txtName>STRASBOURG ENTZHEIM</txtName>
///       <geoLat>483218.00N</geoLat>
///       <geoLong>0073742.00E</geoLong>
///     </Ahp>
///   </AIXM-Snapshot>"#;
///
/// let features: Vec<_> = Features::new(&xml[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(features.len(), 1);
/// assert!(matches!(&features[0], Feature::AirportHeliport(ahp) if ahp.code.as_deref() == Some("LFST")));
/// ```
pub struct Features<'a> {
    fragments: Fragments<'a, FeatureKind>,
}

impl<'a> Features<'a> {
    /// Creates a new `Features` iterator from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            fragments: Fragments::new(data),
        }
    }
}

impl Iterator for Features<'_> {
    type Item = Result<Feature, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.fragments.next()?;
        Some(result.and_then(|(kind, fragment)| deserialize_feature(kind, &fragment)))
    }
}

/// Which kind of feature we're deserializing.
#[derive(Copy, Clone)]
enum FeatureKind {
    AirportHeliport,
    Runway,
    RunwayDirection,
    DeclaredDistance,
    Ils,
    Navaid(NavaidKind),
    DesignatedPoint,
    Airspace,
    AirspaceBorder,
    Obstacle,
    Frequency,
    AirportService,
}

impl Element for FeatureKind {
    fn select(local: &[u8]) -> Option<Self> {
        let kind = match local {
            b"Ahp" => Self::AirportHeliport,
            b"Rwy" => Self::Runway,
            b"Rdn" => Self::RunwayDirection,
            b"Rdd" => Self::DeclaredDistance,
            b"Ils" => Self::Ils,
            b"Vor" => Self::Navaid(NavaidKind::Vor),
            b"Dme" => Self::Navaid(NavaidKind::Dme),
            b"Ndb" => Self::Navaid(NavaidKind::Ndb),
            b"Tcn" => Self::Navaid(NavaidKind::Tacan),
            b"Dpn" => Self::DesignatedPoint,
            b"Ase" => Self::Airspace,
            b"Abd" => Self::AirspaceBorder,
            b"Obs" => Self::Obstacle,
            b"Fqy" => Self::Frequency,
            b"Ahs" => Self::AirportService,
            _ => return None,
        };
        Some(kind)
    }

    fn tag(self) -> &'static str {
        match self {
            Self::AirportHeliport => "Ahp",
            Self::Runway => "Rwy",
            Self::RunwayDirection => "Rdn",
            Self::DeclaredDistance => "Rdd",
            Self::Ils => "Ils",
            Self::Navaid(kind) => kind.tag(),
            Self::DesignatedPoint => "Dpn",
            Self::Airspace => "Ase",
            Self::AirspaceBorder => "Abd",
            Self::Obstacle => "Obs",
            Self::Frequency => "Fqy",
            Self::AirportService => "Ahs",
        }
    }
}

/// Deserializes a feature XML fragment into the public [`Feature`] type.
fn deserialize_feature(kind: FeatureKind, fragment: &str) -> Result<Feature, Error> {
    let tag = kind.tag();
    let feature = match kind {
        FeatureKind::AirportHeliport => {
            Feature::AirportHeliport(deserialize::<xml::AhpXml>(tag, fragment)?.into())
        }
        FeatureKind::Runway => Feature::Runway(deserialize::<xml::RwyXml>(tag, fragment)?.into()),
        FeatureKind::RunwayDirection => {
            Feature::RunwayDirection(deserialize::<xml::RdnXml>(tag, fragment)?.into())
        }
        FeatureKind::DeclaredDistance => {
            Feature::DeclaredDistance(deserialize::<xml::RddXml>(tag, fragment)?.into())
        }
        FeatureKind::Ils => Feature::Ils(deserialize::<xml::IlsXml>(tag, fragment)?.into()),
        FeatureKind::Navaid(nav_kind) => {
            let x: xml::NavaidXml = deserialize(tag, fragment)?;
            Feature::Navaid(Navaid::from_xml(nav_kind, x))
        }
        FeatureKind::DesignatedPoint => {
            Feature::DesignatedPoint(deserialize::<xml::DpnXml>(tag, fragment)?.into())
        }
        FeatureKind::Airspace => {
            Feature::Airspace(deserialize::<xml::AseXml>(tag, fragment)?.into())
        }
        FeatureKind::AirspaceBorder => {
            Feature::AirspaceBorder(deserialize::<xml::AbdXml>(tag, fragment)?.into())
        }
        FeatureKind::Obstacle => {
            Feature::Obstacle(deserialize::<xml::ObsXml>(tag, fragment)?.into())
        }
        FeatureKind::Frequency => {
            Feature::Frequency(deserialize::<xml::FqyXml>(tag, fragment)?.into())
        }
        FeatureKind::AirportService => {
            Feature::AirportService(deserialize::<xml::AhsXml>(tag, fragment)?.into())
        }
    };

    Ok(feature)
}

/// Returns the local name of an XML element, stripping any namespace prefix.
pub(crate) fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .position(|&b| b == b':')
        .map_or(name, |pos| &name[pos + 1..])
}

fn number(text: Option<String>) -> Option<f64> {
    text.as_deref()?.trim().parse().ok()
}

fn text(text: Option<String>) -> Option<String> {
    non_empty(text.as_deref())
}

fn first(texts: Vec<String>) -> Option<String> {
    texts.iter().find_map(|t| non_empty(Some(t.as_str())))
}

/// Joins repeated text elements line by line.
fn joined(texts: Vec<String>) -> Option<String> {
    let lines: Vec<_> = texts.iter().filter_map(|t| non_empty(Some(t.as_str()))).collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

impl NavaidKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Vor => "Vor",
            Self::Dme => "Dme",
            Self::Ndb => "Ndb",
            Self::Tacan => "Tcn",
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to public feature types
// ---------------------------------------------------------------------------

impl From<xml::AhpXml> for AirportHeliport {
    fn from(x: xml::AhpXml) -> Self {
        AirportHeliport {
            code: x.uid.and_then(|uid| uid.resolve()),
            name: first(x.name),
            icao: text(x.icao),
            iata: text(x.iata),
            kind: text(x.kind),
            city: first(x.city),
            latitude: text(x.geo_lat),
            longitude: text(x.geo_long),
            elevation: number(x.elevation),
            elevation_uom: text(x.elevation_uom),
            mag_var: number(x.mag_var),
            mag_var_date: text(x.mag_var_date),
            mag_var_change: number(x.mag_var_change),
            transition_altitude: number(x.transition_altitude),
            transition_altitude_uom: text(x.transition_altitude_uom),
            reference_point: first(x.reference_point),
            administration: first(x.administration),
            remarks: joined(x.remarks),
        }
    }
}

impl From<xml::RwyXml> for Runway {
    fn from(x: xml::RwyXml) -> Self {
        Runway {
            key: x.uid.and_then(|uid| uid.resolve()),
            length: number(x.length),
            width: number(x.width),
            dimension_uom: text(x.dimension_uom),
            composition: text(x.composition).or_else(|| text(x.surface)),
            strength: text(x.pcn_note).or_else(|| text(x.strength)),
            strip_length: number(x.strip_length),
            strip_width: number(x.strip_width),
            strip_uom: text(x.strip_uom),
        }
    }
}

impl From<xml::RdnXml> for RunwayDirection {
    fn from(x: xml::RdnXml) -> Self {
        RunwayDirection {
            key: x.uid.and_then(|uid| uid.resolve()),
            latitude: text(x.geo_lat),
            longitude: text(x.geo_long),
            true_bearing: number(x.true_bearing),
            magnetic_bearing: number(x.magnetic_bearing),
            tdz_elevation: number(x.tdz_elevation),
            tdz_elevation_uom: text(x.tdz_elevation_uom),
            vasis: text(x.vasis),
            slope_angle: number(x.slope_angle),
            meht: number(x.meht),
            meht_uom: text(x.meht_uom),
        }
    }
}

impl From<xml::RddXml> for DeclaredDistance {
    fn from(x: xml::RddXml) -> Self {
        let (direction, kind) = x.uid.and_then(|uid| uid.resolve()).unzip();

        DeclaredDistance {
            direction,
            kind,
            distance: number(x.distance),
            uom: text(x.uom),
        }
    }
}

impl From<xml::IlsXml> for Ils {
    fn from(x: xml::IlsXml) -> Self {
        let direction = x
            .uid
            .and_then(|uid| uid.resolve())
            .or_else(|| x.rdn_uid.and_then(|rdn| rdn.resolve()));
        let (localizer_ident, localizer_frequency) = x
            .localizer
            .map_or((None, None), |ilz| (text(ilz.ident), number(ilz.frequency)));

        let mut ils = Ils {
            direction,
            category: text(x.category),
            localizer_ident,
            localizer_frequency,
            ..Default::default()
        };

        if let Some(igp) = x.glide_path {
            ils.glide_path_frequency = number(igp.frequency);
            ils.glide_path_slope = number(igp.slope);
            ils.glide_path_rdh = number(igp.rdh);
            ils.rdh_uom = text(igp.rdh_uom);
        }

        ils
    }
}

impl Navaid {
    fn from_xml(kind: NavaidKind, x: xml::NavaidXml) -> Self {
        let uid = match kind {
            NavaidKind::Vor => x.vor_uid,
            NavaidKind::Dme => x.dme_uid,
            NavaidKind::Ndb => x.ndb_uid,
            NavaidKind::Tacan => x.tcn_uid,
        }
        .unwrap_or_default();

        Navaid {
            kind,
            ident: uid.resolve(),
            name: text(x.name),
            latitude: text(uid.geo_lat).or_else(|| text(x.geo_lat)),
            longitude: text(uid.geo_long).or_else(|| text(x.geo_long)),
            elevation: number(x.elevation),
            elevation_uom: text(x.elevation_uom),
            frequency: number(x.frequency),
            frequency_uom: text(x.frequency_uom),
            channel: text(x.channel),
            range: number(x.range),
            mag_var: number(x.mag_var),
            hours: text(x.hours),
        }
    }
}

impl From<xml::DpnXml> for DesignatedPoint {
    fn from(x: xml::DpnXml) -> Self {
        let uid = x.uid.unwrap_or_default();
        DesignatedPoint {
            ident: uid.resolve(),
            name: text(x.name),
            latitude: text(uid.geo_lat),
            longitude: text(uid.geo_long),
            kind: text(x.kind),
            aerodrome: x.aerodrome.and_then(|ahp| ahp.resolve()),
            remarks: text(x.remarks),
        }
    }
}

impl From<xml::AvxXml> for Vertex {
    fn from(x: xml::AvxXml) -> Self {
        Vertex {
            latitude: text(x.geo_lat),
            longitude: text(x.geo_long),
        }
    }
}

impl From<xml::AseXml> for Airspace {
    fn from(x: xml::AseXml) -> Self {
        Airspace {
            key: x.uid.and_then(|uid| uid.resolve()),
            name: text(x.name),
            class: text(x.class),
            activity: text(x.activity),
            upper: VerticalLimit {
                reference: text(x.upper_reference),
                value: text(x.upper_value),
                uom: text(x.upper_uom),
            },
            lower: VerticalLimit {
                reference: text(x.lower_reference),
                value: text(x.lower_value),
                uom: text(x.lower_uom),
            },
            schedule: text(x.schedule),
            remarks: text(x.remarks),
            borders: x
                .borders
                .into_iter()
                .map(|abd| abd.vertices.into_iter().map(Vertex::from).collect())
                .collect(),
        }
    }
}

impl From<xml::AbdXml> for AirspaceBorder {
    fn from(x: xml::AbdXml) -> Self {
        AirspaceBorder {
            airspace: x.uid.and_then(|uid| uid.resolve()),
            vertices: x.vertices.into_iter().map(Vertex::from).collect(),
        }
    }
}

impl From<xml::ObsXml> for Obstacle {
    fn from(x: xml::ObsXml) -> Self {
        let uid = x.uid.unwrap_or_default();
        Obstacle {
            latitude: text(uid.geo_lat),
            longitude: text(uid.geo_long),
            name: text(x.name),
            kind: text(x.kind),
            lighting: text(x.lighting),
            marking: text(x.marking),
            elevation: number(x.elevation),
            height: number(x.height),
            uom: text(x.uom),
        }
    }
}

impl From<xml::FqyXml> for Frequency {
    fn from(x: xml::FqyXml) -> Self {
        let uid = x.uid.unwrap_or_default();
        let (aerodrome, service) = match uid.ser_uid {
            Some(ser) => (ser.resolve(), text(ser.code_type)),
            None => (None, None),
        };

        Frequency {
            aerodrome,
            service,
            value: text(uid.frequency).or_else(|| text(x.frequency)),
            uom: text(x.uom),
            call_sign: x.call_signs.into_iter().find_map(|cdl| text(cdl.call_sign)),
            hours: text(x.hours),
        }
    }
}

impl From<xml::AhsXml> for AirportService {
    fn from(x: xml::AhsXml) -> Self {
        let (aerodrome, kind) = match x.uid {
            Some(uid) => (uid.resolve(), text(uid.code_type)),
            None => (None, None),
        };

        AirportService {
            aerodrome,
            kind,
            description: text(x.description),
            hours: text(x.hours),
        }
    }
}
