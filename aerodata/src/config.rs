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

//! Pipeline configuration.

use std::path::Path;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;
use crate::nd::crossref::DEFAULT_RADIUS_NM;

const AIXM_PATTERN: &str = "AIXM4.5_*YYYY-MM-DD*.xml";
const SIA_PATTERN: &str = "XML_SIA_*.xml";

static AIXM_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^AIXM4\.5_.*?(\d{4}-\d{2}-\d{2}).*\.xml$").expect("valid AIXM file pattern")
});

static SIA_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^XML_SIA_(?:.*?(\d{4}-\d{2}-\d{2}))?.*\.xml$").expect("valid SIA file pattern")
});

/// Where the pipeline reads its documents from and how it merges them.
#[derive(Clone, PartialEq, Debug)]
pub struct PipelineConfig {
    /// Location of the AIXM 4.5 snapshot.
    pub aixm: String,
    /// Location of the SIA export, if any.
    pub sia: Option<String>,
    /// Radius around aerodromes in which navaids are associated.
    pub radius_nm: f64,
    /// Only aerodromes with a code starting with the prefix are kept.
    pub prefix: Option<String>,
    /// Effective date of the cycle.
    pub cycle: Option<NaiveDate>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            aixm: String::new(),
            sia: None,
            radius_nm: DEFAULT_RADIUS_NM,
            prefix: None,
            cycle: None,
        }
    }
}

impl PipelineConfig {
    pub fn new(aixm: impl Into<String>) -> Self {
        Self {
            aixm: aixm.into(),
            ..Default::default()
        }
    }

    /// Locates the inputs in a directory.
    ///
    /// Picks the AIXM snapshot with the latest date in its file name and
    /// takes the cycle from that date. The SIA export of the same date is
    /// preferred over the latest one. Files are matched by name only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] if there is no AIXM snapshot and
    /// [`Error::InvalidConfig`] if the directory can't be read.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", dir.display())))?;

        let mut aixm: Option<(NaiveDate, String)> = None;
        let mut sia: Vec<(Option<NaiveDate>, String)> = Vec::new();

        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();

            if let Some(date) = cycle_from_filename(&name) {
                if aixm.as_ref().map_or(true, |(latest, _)| date > *latest) {
                    aixm = Some((date, name));
                }
            } else if let Some(caps) = SIA_FILE.captures(&name) {
                let date = caps
                    .get(1)
                    .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok());
                sia.push((date, name));
            }
        }

        let Some((cycle, aixm)) = aixm else {
            return Err(Error::MissingInput {
                dir: dir.display().to_string(),
                pattern: AIXM_PATTERN,
            });
        };

        sia.sort();
        let sia = sia
            .iter()
            .find(|(date, _)| *date == Some(cycle))
            .or(sia.last())
            .map(|(_, name)| name);

        if sia.is_none() {
            log::info!("no file matching {SIA_PATTERN} in {}", dir.display());
        }

        Ok(Self {
            aixm: dir.join(aixm).to_string_lossy().into_owned(),
            sia: sia.map(|name| dir.join(name).to_string_lossy().into_owned()),
            cycle: Some(cycle),
            ..Default::default()
        })
    }

    pub fn with_sia(mut self, sia: impl Into<String>) -> Self {
        self.sia = Some(sia.into());
        self
    }

    pub fn with_radius(mut self, radius_nm: f64) -> Self {
        self.radius_nm = radius_nm;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_cycle(mut self, cycle: NaiveDate) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Checks that the pipeline can run with this configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.aixm.trim().is_empty() {
            return Err(Error::InvalidConfig("no AIXM location".to_string()));
        }

        if !(self.radius_nm.is_finite() && self.radius_nm >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "invalid navaid radius {}",
                self.radius_nm
            )));
        }

        Ok(())
    }
}

/// Returns the cycle date of an AIXM 4.5 snapshot file name.
///
/// ```
/// use aerodata::config::cycle_from_filename;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     cycle_from_filename("AIXM4.5_all_FR_OM_2025-09-04.xml"),
///     NaiveDate::from_ymd_opt(2025, 9, 4)
/// );
/// assert_eq!(cycle_from_filename("XML_SIA_2025-09-04.xml"), None);
/// ```
pub fn cycle_from_filename(name: &str) -> Option<NaiveDate> {
    let caps = AIXM_FILE.captures(name)?;
    NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()
}
