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

use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The document itself is not well-formed XML. Reading stops here.
    Xml(String),
    /// A single feature could not be mapped onto its expected structure.
    ///
    /// The surrounding document is still readable and the iterator continues
    /// with the next feature.
    Malformed { feature: &'static str, reason: String },
    /// A value could not be parsed (e.g. a number or a bracketed identifier).
    InvalidValue { field: &'static str, value: String },
}

impl Error {
    /// Returns `true` if the error leaves the document unreadable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Xml(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::Malformed { feature, reason } => {
                write!(f, "malformed {feature} element: {reason}")
            }
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}
