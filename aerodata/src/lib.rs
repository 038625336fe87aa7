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

//! Merges the French AIXM 4.5 snapshot and the SIA export of one cycle into
//! a single aeronautical data model.
//!
//! The AIXM snapshot publishes aerodromes, runways, navaids, designated
//! points, airspaces and obstacles. The SIA export of the same cycle adds
//! administrative details and service frequencies. Both are read with the
//! [`aixm`] crate, normalized to feet for vertical distances and meters for
//! runway dimensions, and combined per aerodrome by the
//! [`AeronauticalDataBuilder`](nd::AeronauticalDataBuilder).
//!
//! The [`pipeline`] fetches both documents concurrently and caches the
//! result, and the [`geojson`] module writes one feature collection per
//! entity family.
//!
//! # Feature Flags
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the data model and
//!   reads supplements from JSON.
//! - `geojson`: GeoJSON output.

pub mod codec;
pub mod config;
mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod geom;
pub mod measurements;
pub mod nd;
pub mod pipeline;

pub use error::{Entity, Error};
