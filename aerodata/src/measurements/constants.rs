// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

pub const FEET_IN_METER: f64 = 0.3048;
pub const METER_IN_FEET: f64 = 3.28084;
pub const FEET_PER_FLIGHT_LEVEL: f64 = 100.0;
pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
/// Mean earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;
