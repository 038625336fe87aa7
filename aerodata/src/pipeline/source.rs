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

use futures::future::BoxFuture;

use crate::error::Error;

/// Fetches source documents by location.
pub trait DocumentSource: Send + Sync {
    /// Returns the raw bytes of the document at the `location`.
    fn fetch(&self, location: &str) -> BoxFuture<'_, Result<Vec<u8>, Error>>;
}

/// Reads documents from the local file system, the location being a path.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileSource;

impl DocumentSource for FileSource {
    fn fetch(&self, location: &str) -> BoxFuture<'_, Result<Vec<u8>, Error>> {
        let location = location.to_string();
        Box::pin(async move {
            log::debug!("reading {location}");
            tokio::fs::read(&location)
                .await
                .map_err(|e| Error::Fetch {
                    location,
                    reason: e.to_string(),
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.xml");
        tokio::fs::write(&path, b"<doc/>").await.unwrap();

        let data = FileSource.fetch(&path.to_string_lossy()).await.unwrap();
        assert_eq!(data, b"<doc/>");
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_error() {
        let err = FileSource.fetch("/nonexistent/doc.xml").await.unwrap_err();
        assert!(matches!(err, Error::Fetch { location, .. } if location == "/nonexistent/doc.xml"));
    }
}
