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

//! Resolution of published service labels.
//!
//! Labels look like `TWR STRASBOURG Tour`: a service code, the location and
//! the call sign suffix. The suffix is checked first since several services
//! are published under one code, e.g. the ground frequency of a tower that
//! is labelled `TWR STRASBOURG Sol`.

use crate::nd::ServiceType;

/// Call sign suffixes and the service they imply, checked in order.
const SUFFIX_RULES: &[(&str, ServiceType)] = &[
    ("sol", ServiceType::Gnd),
    ("ground", ServiceType::Gnd),
    ("tour", ServiceType::Twr),
    ("tower", ServiceType::Twr),
    ("approche", ServiceType::App),
    ("approach", ServiceType::App),
    ("départ", ServiceType::Dep),
    ("depart", ServiceType::Dep),
    ("departure", ServiceType::Dep),
    ("prévol", ServiceType::Del),
    ("prevol", ServiceType::Del),
    ("delivery", ServiceType::Del),
];

/// Resolves the service of a label.
///
/// Returns `None` if neither the suffix nor the leading code is known.
pub fn resolve(label: &str) -> Option<ServiceType> {
    let mut words = label.split_whitespace();
    let code = words.next()?;

    // a single word is a code, not a call sign
    if let Some(suffix) = words.next_back() {
        let suffix = suffix.to_lowercase();
        if let Some((_, service)) = SUFFIX_RULES.iter().find(|(s, _)| *s == suffix) {
            return Some(*service);
        }
    }

    ServiceType::from_code(code)
}

/// Returns the label without its leading service code.
pub fn call_sign(label: &str) -> Option<String> {
    let (_, rest) = label.trim().split_once(char::is_whitespace)?;
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_overrides_code() {
        assert_eq!(resolve("TWR STRASBOURG Sol"), Some(ServiceType::Gnd));
        assert_eq!(resolve("APP STRASBOURG Départ"), Some(ServiceType::Dep));
        assert_eq!(resolve("TWR STRASBOURG Tour"), Some(ServiceType::Twr));
    }

    #[test]
    fn falls_back_to_code() {
        assert_eq!(resolve("ATIS STRASBOURG"), Some(ServiceType::Atis));
        assert_eq!(resolve("AFIS COLMAR Information"), Some(ServiceType::Afis));
        assert_eq!(resolve("APP"), Some(ServiceType::App));
    }

    #[test]
    fn unknown_labels_are_not_defaulted() {
        assert_eq!(resolve("VDF STRASBOURG Gonio"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn call_sign_drops_code() {
        assert_eq!(call_sign("TWR STRASBOURG Tour").as_deref(), Some("STRASBOURG Tour"));
        assert_eq!(call_sign("ATIS"), None);
    }
}
