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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Air traffic service a frequency belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ServiceType {
    /// Tower.
    Twr,
    /// Approach.
    App,
    /// Ground.
    Gnd,
    Atis,
    /// Flight information service.
    Fis,
    /// Aerodrome information given by a non-ATC operator.
    Info,
    /// Aerodrome flight information service.
    Afis,
    /// Delivery.
    Del,
    /// Common traffic advisory frequency.
    Ctaf,
    /// Departure.
    Dep,
}

impl ServiceType {
    /// Matches a published service code against the known vocabulary.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "TWR" => Some(Self::Twr),
            "APP" => Some(Self::App),
            "GND" => Some(Self::Gnd),
            "ATIS" => Some(Self::Atis),
            "FIS" => Some(Self::Fis),
            "INFO" => Some(Self::Info),
            "AFIS" => Some(Self::Afis),
            "DEL" => Some(Self::Del),
            "CTAF" => Some(Self::Ctaf),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Twr => "TWR",
            Self::App => "APP",
            Self::Gnd => "GND",
            Self::Atis => "ATIS",
            Self::Fis => "FIS",
            Self::Info => "INFO",
            Self::Afis => "AFIS",
            Self::Del => "DEL",
            Self::Ctaf => "CTAF",
            Self::Dep => "DEP",
        };
        f.write_str(s)
    }
}

/// A frequency of an aerodrome service.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frequency {
    pub service: ServiceType,
    /// Frequency as published (`"119.250"`).
    pub value: String,
    /// Unit of the value, MHz if absent.
    pub uom: Option<String>,
    pub call_sign: Option<String>,
    pub schedule: Option<String>,
    pub remarks: Option<String>,
}

impl Frequency {
    /// Returns whether both frequencies describe the same channel of the
    /// same service.
    ///
    /// Values are compared numerically when both can be parsed, so that
    /// `"119.25"` and `"119.250"` are the same.
    pub fn same_channel(&self, other: &Frequency) -> bool {
        if self.service != other.service {
            return false;
        }

        match (
            self.value.trim().parse::<f64>(),
            other.value.trim().parse::<f64>(),
        ) {
            (Ok(a), Ok(b)) => (a - b).abs() < 1e-6,
            _ => self.value.trim() == other.value.trim(),
        }
    }

    /// Fills absent details from a duplicate of this frequency.
    pub(crate) fn complete_from(&mut self, other: Frequency) {
        self.uom = self.uom.take().or(other.uom);
        self.call_sign = self.call_sign.take().or(other.call_sign);
        self.schedule = self.schedule.take().or(other.schedule);
        self.remarks = self.remarks.take().or(other.remarks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency(service: ServiceType, value: &str) -> Frequency {
        Frequency {
            service,
            value: value.to_string(),
            uom: None,
            call_sign: None,
            schedule: None,
            remarks: None,
        }
    }

    #[test]
    fn same_channel_compares_numerically() {
        let a = frequency(ServiceType::Twr, "119.25");
        assert!(a.same_channel(&frequency(ServiceType::Twr, "119.250")));
        assert!(!a.same_channel(&frequency(ServiceType::Gnd, "119.250")));
        assert!(!a.same_channel(&frequency(ServiceType::Twr, "121.8")));
    }

    #[test]
    fn service_vocabulary() {
        assert_eq!(ServiceType::from_code("atis"), Some(ServiceType::Atis));
        assert_eq!(ServiceType::from_code("TWR"), Some(ServiceType::Twr));
        assert_eq!(ServiceType::from_code("DEP"), None);
        assert_eq!(ServiceType::from_code("VDF"), None);
    }
}
