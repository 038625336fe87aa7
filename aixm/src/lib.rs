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

//! AIXM 4.5 snapshot and SIA export reader.
//!
//! This crate streams the elements of an AIXM 4.5 snapshot (as published by
//! the French SIA) and of the companion SIA aerodrome export. Each supported
//! element is mapped onto a flat record with its owner chain already resolved
//! into a key. Units and coordinates are left as published.
//!
//! ```no_run
//! # let data: Vec<u8> = vec![];
//! use aixm::{Feature, Features};
//!
//! let aerodromes = Features::new(&data)
//!     .filter_map(Result::ok)
//!     .filter(|feature| matches!(feature, Feature::AirportHeliport(_)))
//!     .count();
//! ```

mod error;
mod features;
mod parser;
pub mod sia;
pub mod uid;
mod xml;

pub use error::Error;
pub use features::*;
pub use parser::Features;
pub use uid::{AirspaceKey, DirectionKey, RunwayKey};
