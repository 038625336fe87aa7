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

//! GeoJSON output.
//!
//! Each entity family is written as one `FeatureCollection`. The properties
//! of a feature are the serialized record without its geometry and the
//! collection carries the cycle date as the foreign member `airac`.
//! Coordinates are rounded to six decimals.

use geo::{BoundingRect, Coord, MapCoords, Rect};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

use crate::geom::{Coordinate, Position};
use crate::nd::{AeronauticalData, AirspaceGeometry};

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

fn rounded(c: Coord<f64>) -> Coord<f64> {
    Coord {
        x: round6(c.x),
        y: round6(c.y),
    }
}

fn rect_to_bbox(rect: Rect<f64>) -> Vec<f64> {
    let (min, max) = (rect.min(), rect.max());
    vec![min.x, min.y, max.x, max.y]
}

fn point(coordinate: Coordinate) -> Geometry {
    let point: geo::Point<f64> = rounded(coordinate.into()).into();
    Geometry::new(Value::from(&point))
}

/// Serializes the record into properties without the `omit` members.
fn properties<T: Serialize>(record: &T, omit: &[&str]) -> Option<JsonObject> {
    match serde_json::to_value(record) {
        Ok(JsonValue::Object(mut object)) => {
            for key in omit {
                object.remove(*key);
            }
            Some(object)
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("failed to serialize properties: {e}");
            None
        }
    }
}

/// Properties of a record located at a [`Position`], which is replaced by
/// its display notation.
fn located<T: Serialize>(record: &T, position: &Position, omit: &[&str]) -> Option<JsonObject> {
    let mut object = properties(record, omit)?;
    object.insert("latitude".into(), position.latitude_dms.clone().into());
    object.insert("longitude".into(), position.longitude_dms.clone().into());
    Some(object)
}

fn collection(data: &AeronauticalData, features: Vec<Feature>) -> FeatureCollection {
    let foreign_members = data.cycle().map(|cycle| {
        let mut members = JsonObject::new();
        members.insert("airac".into(), cycle.format("%Y-%m-%d").to_string().into());
        members
    });

    FeatureCollection {
        bbox: None,
        features,
        foreign_members,
    }
}

fn feature(id: &str, geometry: Option<Geometry>, properties: Option<JsonObject>) -> Feature {
    Feature {
        bbox: None,
        geometry,
        id: Some(Id::String(id.to_string())),
        properties,
        foreign_members: None,
    }
}

/// Returns the aerodromes as points.
///
/// Runways are left to [`runways`], the other collections are part of the
/// properties.
pub fn aerodromes(data: &AeronauticalData) -> FeatureCollection {
    let features = data
        .aerodromes()
        .iter()
        .map(|ad| {
            feature(
                &ad.code,
                Some(point(ad.position.coordinate)),
                located(ad, &ad.position, &["position", "runways"]),
            )
        })
        .collect();

    collection(data, features)
}

/// Returns the runways as lines between the thresholds of their ends.
///
/// Runways without both thresholds have no geometry.
pub fn runways(data: &AeronauticalData) -> FeatureCollection {
    let mut features = Vec::new();

    for ad in data.aerodromes() {
        for rwy in &ad.runways {
            let thresholds: Vec<Coord<f64>> = rwy
                .directions
                .iter()
                .filter_map(|d| d.threshold.as_ref())
                .map(|t| rounded(t.coordinate.into()))
                .take(2)
                .collect();

            let geometry = (thresholds.len() == 2).then(|| {
                let line = geo::LineString::from(thresholds);
                Geometry::new(Value::from(&line))
            });

            let mut props = properties(rwy, &[]);
            if let Some(props) = props.as_mut() {
                props.insert("aerodrome".into(), ad.code.clone().into());
            }

            features.push(feature(
                &format!("{} {}", ad.code, rwy.designation),
                geometry,
                props,
            ));
        }
    }

    collection(data, features)
}

pub fn navaids(data: &AeronauticalData) -> FeatureCollection {
    let features = data
        .navaids()
        .iter()
        .map(|nav| {
            feature(
                &nav.ident,
                Some(point(nav.position.coordinate)),
                located(nav, &nav.position, &["position"]),
            )
        })
        .collect();

    collection(data, features)
}

pub fn designated_points(data: &AeronauticalData) -> FeatureCollection {
    let features = data
        .designated_points()
        .iter()
        .map(|dp| {
            let id = match &dp.aerodrome {
                Some(code) => format!("{code} {}", dp.ident),
                None => dp.ident.clone(),
            };
            feature(
                &id,
                Some(point(dp.position.coordinate)),
                located(dp, &dp.position, &["position"]),
            )
        })
        .collect();

    collection(data, features)
}

/// Returns the airspaces as polygons or multipolygons.
pub fn airspaces(data: &AeronauticalData) -> FeatureCollection {
    let features = data
        .airspaces()
        .iter()
        .map(|airspace| {
            let (value, bbox) = match &airspace.geometry {
                AirspaceGeometry::Polygon(polygon) => {
                    let polygon = polygon.map_coords(rounded);
                    (Value::from(&polygon), polygon.bounding_rect())
                }
                AirspaceGeometry::MultiPolygon(mp) => {
                    let mp = mp.map_coords(rounded);
                    (Value::from(&mp), mp.bounding_rect())
                }
            };

            Feature {
                bbox: bbox.map(rect_to_bbox),
                geometry: Some(Geometry::new(value)),
                id: Some(Id::String(airspace.ident.clone())),
                properties: properties(airspace, &["geometry"]),
                foreign_members: None,
            }
        })
        .collect();

    collection(data, features)
}

pub fn obstacles(data: &AeronauticalData) -> FeatureCollection {
    let features = data
        .obstacles()
        .iter()
        .map(|obs| Feature {
            bbox: None,
            geometry: Some(point(obs.position.coordinate)),
            id: None,
            properties: located(obs, &obs.position, &["position"]),
            foreign_members: None,
        })
        .collect();

    collection(data, features)
}
