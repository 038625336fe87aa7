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

//! Reader for the SIA aerodrome export.
//!
//! The export references owners through bracketed paths in `lk` attributes:
//! an aerodrome is `[LF][ST]` and one of its services is
//! `[LF][ST][TWR STRASBOURG Tour]`. The aerodrome code is the concatenation
//! of the first two segments.

use crate::error::Error;
use crate::parser::{deserialize, Element, Fragments};
use crate::uid::non_empty;
use crate::xml;

/// A record of the SIA export.
#[derive(Clone, PartialEq, Debug)]
pub enum Record {
    /// Administrative details of an aerodrome (`Ad`).
    Aerodrome(AerodromeRecord),
    /// A frequency of an aerodrome service (`Frequence`).
    Frequency(FrequencyRecord),
}

/// Administrative details of an aerodrome.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AerodromeRecord {
    pub code: Option<String>,
    pub name: Option<String>,
    pub operator: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    /// Free-text remarks which may contain e-mail and web addresses.
    pub remarks: Option<String>,
    /// Operational restrictions (`AdOpr`).
    pub restrictions: Option<String>,
    /// Rescue and fire-fighting category (`SsliaCat`).
    pub fire_category: Option<String>,
    /// Aircraft the fire service is sized for (`SsliaAcft`).
    pub fire_aircraft: Option<String>,
    pub fire_remarks: Option<String>,
    pub fire_facilities: Option<String>,
    /// Snow removal priority (`NeigePriorite`).
    pub snow_priority: Option<String>,
    pub snow_equipment: Option<String>,
    /// Remarks on passenger services (`SvcPaxRem`).
    pub passenger_remarks: Option<String>,
    /// Every non-empty `Remarque` in document order.
    pub additional_remarks: Vec<String>,
}

/// A frequency of an aerodrome service.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FrequencyRecord {
    pub aerodrome: Option<String>,
    /// The service label as published (`TWR STRASBOURG Tour`).
    pub service: Option<String>,
    pub value: Option<String>,
    pub schedule: Option<String>,
    pub remarks: Option<String>,
}

/// Streaming iterator over the records of an SIA export.
///
/// # Examples
///
/// ```
/// use aixm::sia::{Record, Records};
///
/// let xml = br#"
///   <SiaExport>
///     <Situation>
///       <FrequenceS>
///         <Frequence lk="[LF][ST][TWR STRASBOURG Tour]">
///           <Service lk="[LF][ST][TWR STRASBOURG Tour]"/>
///           <Frequence>119.250</Frequence>
///         </Frequence>
///       </FrequenceS>
///     </Situation>
///   </SiaExport>"#;
///
/// let records: Vec<_> = Records::new(&xml[..]).collect::<Result<_, _>>().unwrap();
/// let Record::Frequency(frequency) = &records[0] else { panic!() };
///
/// assert_eq!(frequency.aerodrome.as_deref(), Some("LFST"));
/// assert_eq!(frequency.service.as_deref(), Some("TWR STRASBOURG Tour"));
/// assert_eq!(frequency.value.as_deref(), Some("119.250"));
/// ```
pub struct Records<'a> {
    fragments: Fragments<'a, RecordKind>,
}

impl<'a> Records<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            fragments: Fragments::new(data),
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, fragment) = match self.fragments.next()? {
            Ok(next) => next,
            Err(e) => return Some(Err(e)),
        };

        let record = match kind {
            RecordKind::Aerodrome => deserialize::<xml::AdXml>(kind.tag(), &fragment)
                .map(|x| Record::Aerodrome(x.into())),
            RecordKind::Frequency => deserialize::<xml::FrequenceXml>(kind.tag(), &fragment)
                .map(|x| Record::Frequency(x.into())),
        };

        Some(record)
    }
}

#[derive(Copy, Clone)]
enum RecordKind {
    Aerodrome,
    Frequency,
}

impl Element for RecordKind {
    fn select(local: &[u8]) -> Option<Self> {
        match local {
            b"Ad" => Some(Self::Aerodrome),
            b"Frequence" => Some(Self::Frequency),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Aerodrome => "Ad",
            Self::Frequency => "Frequence",
        }
    }
}

/// Splits a bracketed path into its segments.
///
/// Returns an error if the text isn't a sequence of `[…]` groups.
///
/// ```
/// let segments = aixm::sia::segments("[LF][ST][TWR STRASBOURG Tour]").unwrap();
/// assert_eq!(segments, ["LF", "ST", "TWR STRASBOURG Tour"]);
/// ```
pub fn segments(path: &str) -> Result<Vec<&str>, Error> {
    let invalid = || Error::InvalidValue {
        field: "lk",
        value: path.to_string(),
    };

    let mut rest = path.trim();
    let mut segments = Vec::new();

    while !rest.is_empty() {
        let inner = rest.strip_prefix('[').ok_or_else(invalid)?;
        let end = inner.find(']').ok_or_else(invalid)?;
        segments.push(&inner[..end]);
        rest = &inner[end + 1..];
    }

    Ok(segments)
}

/// Returns the aerodrome code of a bracketed path.
fn aerodrome_code(segments: &[&str]) -> Option<String> {
    match segments {
        [country, location, ..] if country.len() == 2 && location.len() == 2 => {
            Some(format!("{country}{location}"))
        }
        _ => None,
    }
}

impl From<xml::AdXml> for AerodromeRecord {
    fn from(x: xml::AdXml) -> Self {
        let from_path = x
            .lk
            .as_deref()
            .and_then(|lk| segments(lk).ok())
            .and_then(|segments| aerodrome_code(&segments));
        let code = from_path.or_else(|| {
            non_empty(x.code.as_deref())
                .filter(|code| code.len() == 4)
                .map(|code| code.to_uppercase())
        });

        AerodromeRecord {
            code,
            name: non_empty(x.name.as_deref()),
            operator: non_empty(x.operator.as_deref()),
            address: non_empty(x.address.as_deref()),
            phone: non_empty(x.phone.as_deref()),
            fax: non_empty(x.fax.as_deref()),
            remarks: non_empty(x.remarks.as_deref()),
            restrictions: non_empty(x.restrictions.as_deref()),
            fire_category: non_empty(x.fire_category.as_deref()),
            fire_aircraft: non_empty(x.fire_aircraft.as_deref()),
            fire_remarks: non_empty(x.fire_remarks.as_deref()),
            fire_facilities: non_empty(x.fire_facilities.as_deref()),
            snow_priority: non_empty(x.snow_priority.as_deref()),
            snow_equipment: non_empty(x.snow_equipment.as_deref()),
            passenger_remarks: non_empty(x.passenger_remarks.as_deref()),
            additional_remarks: x
                .additional_remarks
                .iter()
                .filter_map(|remark| non_empty(Some(remark.as_str())))
                .collect(),
        }
    }
}

impl From<xml::FrequenceXml> for FrequencyRecord {
    fn from(x: xml::FrequenceXml) -> Self {
        let lk = x.service.and_then(|service| service.lk).unwrap_or_default();
        let path = segments(&lk).unwrap_or_default();

        FrequencyRecord {
            aerodrome: aerodrome_code(&path),
            service: non_empty(path.get(2).copied()),
            value: non_empty(x.value.as_deref()),
            schedule: non_empty(x.schedule.as_deref()),
            remarks: non_empty(x.remarks.as_deref()),
        }
    }
}
