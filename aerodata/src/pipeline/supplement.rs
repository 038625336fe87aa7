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
use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::path::Path;

use futures::future::BoxFuture;

use crate::error::Error;
use crate::nd::Supplement;

/// Provides facts about aerodromes that aren't published in the sources.
pub trait SupplementProvider: Send + Sync {
    /// Returns the supplement of the aerodrome with the `code`, `None` if
    /// there is nothing to add.
    fn supplement(&self, code: &str) -> BoxFuture<'_, Result<Option<Supplement>, Error>>;
}

/// Supplements read from a JSON object keyed by aerodrome code.
///
/// ```
/// use aerodata::pipeline::JsonSupplements;
///
/// let supplements = JsonSupplements::from_json(r#"{
///     "LFST": { "circuit_altitude": 1500.0, "circuit_remarks": "Left hand" }
/// }"#).unwrap();
///
/// assert_eq!(supplements.len(), 1);
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Default)]
pub struct JsonSupplements {
    supplements: HashMap<String, Supplement>,
}

#[cfg(feature = "serde")]
impl JsonSupplements {
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let supplements: HashMap<String, Supplement> =
            serde_json::from_str(s).map_err(|e| Error::Supplement(e.to_string()))?;

        Ok(Self {
            supplements: supplements
                .into_iter()
                .map(|(code, s)| (code.trim().to_ascii_uppercase(), s))
                .collect(),
        })
    }

    /// Reads the supplements from a JSON file.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Supplement(format!("{}: {e}", path.display())))?;

        Self::from_json(&s)
    }

    pub fn len(&self) -> usize {
        self.supplements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty()
    }
}

#[cfg(feature = "serde")]
impl SupplementProvider for JsonSupplements {
    fn supplement(&self, code: &str) -> BoxFuture<'_, Result<Option<Supplement>, Error>> {
        let supplement = self.supplements.get(code).cloned();
        Box::pin(async move { Ok(supplement) })
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn looks_up_by_code() {
        let supplements = JsonSupplements::from_json(
            r#"{ "lfst": { "circuit_altitude": 1500.0, "integration_altitude": 2000.0 } }"#,
        )
        .unwrap();

        let lfst = supplements.supplement("LFST").await.unwrap().unwrap();
        assert_eq!(lfst.circuit_altitude, Some(1500.0));
        assert_eq!(lfst.integration_altitude, Some(2000.0));
        assert_eq!(lfst.circuit_remarks, None);

        assert_eq!(supplements.supplement("LFGA").await.unwrap(), None);
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            JsonSupplements::from_json("[1, 2]"),
            Err(Error::Supplement(_))
        ));
    }
}
