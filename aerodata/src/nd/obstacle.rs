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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Position;

/// A vertical obstacle.
///
/// Heights are in feet.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    pub name: Option<String>,
    /// Type of the obstacle (`ANTENNA`, `CHIMNEY`, `WINDTURBINE`, …).
    pub kind: Option<String>,
    pub position: Position,
    /// Whether the obstacle is lit, if published.
    pub lighted: Option<bool>,
    pub marking: Option<String>,
    /// Ground elevation above mean sea level.
    pub elevation: Option<f64>,
    /// Height above ground.
    pub height: Option<f64>,
    /// Top of the obstacle above mean sea level.
    pub total_height: Option<f64>,
}

impl Obstacle {
    /// Returns the sum of elevation and height if both are known.
    pub fn derive_total_height(elevation: Option<f64>, height: Option<f64>) -> Option<f64> {
        Some(elevation? + height?)
    }
}
