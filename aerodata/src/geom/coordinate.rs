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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Bearing, Distance, Haversine};

use crate::codec::{decode_dms, format_dms, Axis};
use crate::measurements::constants::NAUTICAL_MILE_IN_METER;

/// Coordinate value in decimal degrees.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Decodes a coordinate from packed DMS tokens.
    ///
    /// Returns `None` if either token is absent or can't be decoded.
    pub fn from_dms(latitude: Option<&str>, longitude: Option<&str>) -> Option<Self> {
        Some(Self {
            latitude: decode_dms(latitude?, Axis::Latitude)?,
            longitude: decode_dms(longitude?, Axis::Longitude)?,
        })
    }

    /// Returns the initial bearing from this point to the `other` in degrees
    /// from true north, in the range `[0, 360)`.
    ///
    /// Uses great-circle calculation on a sphere.
    pub fn bearing(&self, other: &Coordinate) -> f64 {
        Haversine
            .bearing((*self).into(), (*other).into())
            .rem_euclid(360.0)
    }

    /// Returns the great-circle distance from this point to the `other` in
    /// nautical miles.
    pub fn dist_nm(&self, other: &Coordinate) -> f64 {
        Haversine.distance(geo::Point::from(*self), geo::Point::from(*other))
            / NAUTICAL_MILE_IN_METER
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

/// A published position.
///
/// Keeps the display notation of the source next to the decoded value so
/// that charts can show the position the way it was published.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coordinate: Coordinate,
    /// Latitude as `DD°MM'SS"H`.
    pub latitude_dms: String,
    /// Longitude as `DDD°MM'SS"H`.
    pub longitude_dms: String,
}

impl Position {
    /// Decodes a position from packed DMS tokens.
    ///
    /// ```
    /// use aerodata::geom::Position;
    ///
    /// let pos = Position::decode(Some("483218.00N"), Some("0073742.00E")).unwrap();
    /// assert_eq!(pos.latitude_dms, "48°32'18\"N");
    /// assert!(Position::decode(None, Some("0073742.00E")).is_none());
    /// ```
    pub fn decode(latitude: Option<&str>, longitude: Option<&str>) -> Option<Self> {
        let coordinate = Coordinate::from_dms(latitude, longitude)?;

        Some(Self {
            coordinate,
            latitude_dms: format_dms(latitude?, Axis::Latitude),
            longitude_dms: format_dms(longitude?, Axis::Longitude),
        })
    }
}
