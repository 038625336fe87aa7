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

use std::fmt;

/// The kind of record that is missing a required fact.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Entity {
    Aerodrome,
    Navaid,
    DesignatedPoint,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aerodrome => write!(f, "aerodrome"),
            Self::Navaid => write!(f, "navaid"),
            Self::DesignatedPoint => write!(f, "designated point"),
        }
    }
}

/// Errors that abort the merge.
///
/// Everything else (malformed elements, unknown owners, unparseable optional
/// values) is logged and skipped while reading.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A source document is not well-formed.
    InvalidXml { source: &'static str, reason: String },
    /// A record lacks a fact that can't be defaulted.
    MissingRequired {
        entity: Entity,
        ident: String,
        field: &'static str,
    },
    /// A document couldn't be fetched from its location.
    Fetch { location: String, reason: String },
    /// No input document matches the expected file name.
    MissingInput { dir: String, pattern: &'static str },
    /// The supplementary facts couldn't be read.
    Supplement(String),
    /// The configuration can't be used to run the pipeline.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidXml { source, reason } => {
                write!(f, "invalid {source} document: {reason}")
            }
            Self::MissingRequired {
                entity,
                ident,
                field,
            } => write!(f, "{entity} {ident} is missing its {field}"),
            Self::Fetch { location, reason } => {
                write!(f, "failed to fetch {location}: {reason}")
            }
            Self::MissingInput { dir, pattern } => {
                write!(f, "no file matching {pattern} in {dir}")
            }
            Self::Supplement(reason) => write!(f, "invalid supplementary data: {reason}"),
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
