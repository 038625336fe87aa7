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

//! Associates aerodromes with the navaids around them.

use super::{Navaid, NavaidAssociation};
use crate::geom::Coordinate;

/// Default radius around an aerodrome in which navaids are associated.
pub const DEFAULT_RADIUS_NM: f64 = 30.0;

/// Returns the navaids within `radius_nm` of the `origin`, nearest first.
///
/// Distances are rounded to a tenth of a nautical mile and bearings to whole
/// degrees. Navaids with the same distance are ordered by identifier.
///
/// ```
/// use aerodata::geom::Coordinate;
/// use aerodata::nd::crossref::nearby_navaids;
///
/// let lfst = Coordinate::new(48.538333, 7.628333);
/// assert!(nearby_navaids(&lfst, &[], 30.0).is_empty());
/// ```
pub fn nearby_navaids(
    origin: &Coordinate,
    navaids: &[Navaid],
    radius_nm: f64,
) -> Vec<NavaidAssociation> {
    let mut nearby: Vec<NavaidAssociation> = navaids
        .iter()
        .filter_map(|navaid| {
            let target = &navaid.position.coordinate;
            let distance = origin.dist_nm(target);
            if distance > radius_nm {
                return None;
            }

            Some(NavaidAssociation {
                ident: navaid.ident.clone(),
                kind: navaid.kind,
                frequency: navaid.frequency,
                distance: (distance * 10.0).round() / 10.0,
                bearing: origin.bearing(target).round() % 360.0,
            })
        })
        .collect();

    nearby.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.ident.cmp(&b.ident))
    });

    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Position;
    use crate::nd::NavaidType;

    fn navaid(ident: &str, latitude: f64, longitude: f64) -> Navaid {
        Navaid {
            ident: ident.to_string(),
            name: None,
            kind: NavaidType::Vor,
            position: Position {
                coordinate: Coordinate::new(latitude, longitude),
                ..Default::default()
            },
            elevation: None,
            frequency: Some(115.6),
            frequency_uom: None,
            channel: None,
            range: None,
            mag_var: None,
            hours: None,
        }
    }

    #[test]
    fn keeps_navaids_within_radius() {
        let origin = Coordinate::new(48.0, 7.0);
        let navaids = [
            navaid("FAR", 49.0, 7.0),    // ~60 NM north
            navaid("EAST", 48.0, 7.5),   // ~20 NM east
            navaid("NORTH", 48.25, 7.0), // ~15 NM north
        ];

        let nearby = nearby_navaids(&origin, &navaids, DEFAULT_RADIUS_NM);
        let idents: Vec<_> = nearby.iter().map(|n| n.ident.as_str()).collect();

        assert_eq!(idents, vec!["NORTH", "EAST"]);
        assert_eq!(nearby[0].bearing, 0.0);
        assert_eq!(nearby[1].bearing, 90.0);
        assert!((nearby[0].distance - 15.0).abs() < 0.1);
    }

    #[test]
    fn distance_is_rounded_to_a_tenth() {
        let origin = Coordinate::new(48.0, 7.0);
        let nearby = nearby_navaids(&origin, &[navaid("X", 48.1234, 7.0)], 30.0);

        let d = nearby[0].distance;
        assert_eq!(d, (d * 10.0).round() / 10.0);
    }
}
