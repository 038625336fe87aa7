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

use crate::codec::{decode_dms, Axis};
use crate::error::{Entity, Error};
use crate::geom::{Coordinate, Position};
use crate::measurements::{convert_altitude, map_altitude_reference, AltitudeReference};
use crate::nd::VerticalLimit;

/// Decodes the position of a record that can't do without one.
pub fn required_position(
    entity: Entity,
    ident: &str,
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<Position, Error> {
    let missing = |field| Error::MissingRequired {
        entity,
        ident: ident.to_string(),
        field,
    };

    if latitude.and_then(|t| decode_dms(t, Axis::Latitude)).is_none() {
        return Err(missing("latitude"));
    }

    if longitude.and_then(|t| decode_dms(t, Axis::Longitude)).is_none() {
        return Err(missing("longitude"));
    }

    Position::decode(latitude, longitude).ok_or_else(|| missing("position"))
}

/// Decodes a vertex ring, dropping vertices that can't be decoded.
pub fn ring(vertices: &[aixm::Vertex], airspace: &str) -> Vec<Coordinate> {
    vertices
        .iter()
        .filter_map(|v| {
            let c = Coordinate::from_dms(v.latitude.as_deref(), v.longitude.as_deref());
            if c.is_none() {
                log::warn!("skipping invalid vertex of airspace {airspace}");
            }
            c
        })
        .collect()
}

/// Converts a published vertical limit to feet.
///
/// Limits given as a word (`GND`, `SFC`, `UNL`) have no value and take their
/// reference from the word if the datum isn't published.
pub fn vertical_limit(limit: &aixm::VerticalLimit) -> VerticalLimit {
    let word = limit.value.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let uom = limit.uom.as_deref();
    let mut reference = map_altitude_reference(limit.reference.as_deref());

    let Some(word) = word else {
        return VerticalLimit {
            value: None,
            reference,
            raw: None,
        };
    };

    let Ok(number) = word.parse::<f64>() else {
        if reference == AltitudeReference::Undefined {
            reference = map_altitude_reference(Some(word));
        }

        return VerticalLimit {
            value: None,
            reference,
            raw: Some(word.to_string()),
        };
    };

    let raw = match (uom, limit.reference.as_deref()) {
        (Some(u), _) if u.eq_ignore_ascii_case("FL") => format!("FL {word}"),
        (Some(u), Some(r)) => format!("{word} {u} {r}"),
        (Some(u), None) => format!("{word} {u}"),
        (None, Some(r)) => format!("{word} {r}"),
        (None, None) => word.to_string(),
    };

    VerticalLimit {
        value: Some(convert_altitude(number, uom)),
        reference,
        raw: Some(raw),
    }
}

/// Maps a `Y`/`N` code to a flag.
pub fn flag(code: Option<&str>) -> Option<bool> {
    match code.map(|c| c.trim().to_ascii_uppercase()).as_deref() {
        Some("Y" | "YES") => Some(true),
        Some("N" | "NO") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(value: Option<&str>, uom: Option<&str>, reference: Option<&str>) -> aixm::VerticalLimit {
        aixm::VerticalLimit {
            reference: reference.map(str::to_string),
            value: value.map(str::to_string),
            uom: uom.map(str::to_string),
        }
    }

    #[test]
    fn flight_level_limit() {
        let l = vertical_limit(&limit(Some("115"), Some("FL"), Some("STD")));
        assert_eq!(l.value, Some(11500.0));
        assert_eq!(l.reference, AltitudeReference::Std);
        assert_eq!(l.raw.as_deref(), Some("FL 115"));
    }

    #[test]
    fn metric_limit() {
        let l = vertical_limit(&limit(Some("300"), Some("M"), Some("HEI")));
        assert_eq!(l.value, Some(984.0));
        assert_eq!(l.reference, AltitudeReference::Agl);
    }

    #[test]
    fn word_limit() {
        let l = vertical_limit(&limit(Some("GND"), None, None));
        assert_eq!(l.value, None);
        assert_eq!(l.reference, AltitudeReference::Gnd);
        assert_eq!(l.raw.as_deref(), Some("GND"));
    }

    #[test]
    fn missing_coordinate_names_the_field() {
        let err = required_position(Entity::Navaid, "STR", Some("483218.00N"), None).unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequired {
                entity: Entity::Navaid,
                ident: "STR".to_string(),
                field: "longitude",
            }
        );
    }
}
