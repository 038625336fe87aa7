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

//! Reads the SIA aerodrome export.

use aixm::sia::{AerodromeRecord, FrequencyRecord, Record, Records};
use once_cell::sync::Lazy;
use regex::Regex;

use super::service;
use crate::error::Error;
use crate::nd::{AdminInfo, AeronauticalDataBuilder, Frequency};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid e-mail pattern")
});

static WEBSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:www\.|https?://)[^\s#]+").expect("valid web site pattern")
});

impl AeronauticalDataBuilder {
    /// Reads an SIA export.
    ///
    /// Frequencies whose service can't be resolved are skipped, as are
    /// records of aerodromes that are unknown when the data is built.
    pub fn read_sia(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut count = 0;

        for record in Records::new(data) {
            match record {
                Ok(Record::Aerodrome(ad)) => self.add_sia_aerodrome(ad),
                Ok(Record::Frequency(frequency)) => self.add_sia_frequency(frequency),
                Err(e) if e.is_fatal() => {
                    return Err(Error::InvalidXml {
                        source: "SIA",
                        reason: e.to_string(),
                    })
                }
                Err(e) => {
                    log::warn!("skipping SIA record: {e}");
                    continue;
                }
            }
            count += 1;
        }

        log::info!("read {count} SIA records");
        Ok(())
    }

    fn add_sia_aerodrome(&mut self, ad: AerodromeRecord) {
        let Some(code) = ad.code else {
            log::warn!("skipping SIA aerodrome without code");
            return;
        };

        let remarks = ad.remarks.as_deref().unwrap_or_default();

        self.add_admin(
            code,
            AdminInfo {
                operator: ad.operator,
                address: ad.address,
                phone: ad.phone,
                fax: ad.fax,
                email: EMAIL.find(remarks).map(|m| m.as_str().to_string()),
                website: WEBSITE.find(remarks).map(|m| m.as_str().to_string()),
                special_instructions: ad.remarks.clone(),
                restrictions: ad.restrictions,
                fire_category: ad.fire_category,
                fire_aircraft: ad.fire_aircraft,
                fire_remarks: ad.fire_remarks,
                fire_facilities: ad.fire_facilities,
                snow_priority: ad.snow_priority,
                snow_equipment: ad.snow_equipment,
                passenger_remarks: ad.passenger_remarks,
                additional_remarks: ad.additional_remarks,
            },
        );
    }

    fn add_sia_frequency(&mut self, record: FrequencyRecord) {
        let (Some(code), Some(label), Some(value)) = (record.aerodrome, record.service, record.value)
        else {
            log::warn!("skipping incomplete SIA frequency");
            return;
        };

        let Some(service) = service::resolve(&label) else {
            log::debug!("skipping frequency {value} of {code} with unknown service {label:?}");
            return;
        };

        self.add_frequency(
            code,
            Frequency {
                service,
                value,
                uom: None,
                call_sign: service::call_sign(&label),
                schedule: record.schedule,
                remarks: record.remarks,
            },
        );
    }
}
