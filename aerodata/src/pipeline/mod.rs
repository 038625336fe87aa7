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

//! Loads, merges and caches the aeronautical data of one cycle.
//!
//! A [`Pipeline`] runs through the states
//! `Idle → Loading → Parsing → Combining → Enriching → Ready`. Callers that
//! ask for the data while a run is in flight share that run, so each source
//! document is fetched once. A failed run ends in `Failed` and leaves
//! nothing cached, which makes the next call start over.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::config::PipelineConfig;
use crate::error::Error;
use crate::nd::{Aerodrome, AeronauticalData, AeronauticalDataBuilder};

mod source;
mod supplement;

pub use source::*;
pub use supplement::*;

/// Stage of a pipeline run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PipelineState {
    Idle,
    /// Fetching the source documents.
    Loading,
    /// Reading the documents.
    Parsing,
    /// Merging the records and resolving their owners.
    Combining,
    /// Adding supplements.
    Enriching,
    Ready,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Parsing => "parsing",
            Self::Combining => "combining",
            Self::Enriching => "enriching",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

type Load = Shared<BoxFuture<'static, Result<Arc<AeronauticalData>, Error>>>;

struct Cache {
    state: PipelineState,
    result: Option<Arc<AeronauticalData>>,
    in_flight: Option<Load>,
    /// Incremented on reload so that a discarded run can't overwrite the
    /// cache.
    generation: u64,
}

fn lock(cache: &Mutex<Cache>) -> MutexGuard<'_, Cache> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}

fn set_state(cache: &Mutex<Cache>, generation: u64, state: PipelineState) {
    let mut cache = lock(cache);
    if cache.generation == generation {
        log::info!("pipeline {} → {}", cache.state, state);
        cache.state = state;
    }
}

/// Aeronautical data pipeline.
///
/// # Examples
///
/// ```no_run
/// use aerodata::config::PipelineConfig;
/// use aerodata::pipeline::{FileSource, Pipeline};
///
/// # async fn run() -> Result<(), aerodata::Error> {
/// let config = PipelineConfig::from_dir("data")?;
/// let pipeline = Pipeline::new(config, FileSource);
///
/// let data = pipeline.load_and_parse().await?;
/// println!("{} aerodromes", data.aerodromes().len());
///
/// if let Some(lfst) = pipeline.aerodrome("LFST").await? {
///     println!("{} runways", lfst.runways.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    config: PipelineConfig,
    source: Arc<dyn DocumentSource>,
    supplements: Option<Arc<dyn SupplementProvider>>,
    cache: Arc<Mutex<Cache>>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, source: impl DocumentSource + 'static) -> Self {
        Self {
            config,
            source: Arc::new(source),
            supplements: None,
            cache: Arc::new(Mutex::new(Cache {
                state: PipelineState::Idle,
                result: None,
                in_flight: None,
                generation: 0,
            })),
        }
    }

    /// Adds supplements to the aerodromes after merging.
    pub fn with_supplements(mut self, provider: impl SupplementProvider + 'static) -> Self {
        self.supplements = Some(Arc::new(provider));
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn state(&self) -> PipelineState {
        lock(&self.cache).state
    }

    /// Returns the merged data, running the pipeline if nothing is cached.
    ///
    /// Calls made while a run is in flight wait for that run.
    pub async fn load_and_parse(&self) -> Result<Arc<AeronauticalData>, Error> {
        let load = {
            let mut cache = lock(&self.cache);

            if let Some(result) = &cache.result {
                return Ok(Arc::clone(result));
            }

            match &cache.in_flight {
                Some(load) => load.clone(),
                None => {
                    let load = self.run(cache.generation).shared();
                    cache.in_flight = Some(load.clone());
                    cache.state = PipelineState::Loading;
                    load
                }
            }
        };

        load.await
    }

    /// Discards the cache and runs the pipeline from scratch.
    pub async fn reload(&self) -> Result<Arc<AeronauticalData>, Error> {
        {
            let mut cache = lock(&self.cache);
            cache.generation += 1;
            cache.result = None;
            cache.in_flight = None;
            cache.state = PipelineState::Idle;
        }

        self.load_and_parse().await
    }

    /// Returns the aerodrome with the `code`, loading the data if needed.
    pub async fn aerodrome(&self, code: &str) -> Result<Option<Aerodrome>, Error> {
        let data = self.load_and_parse().await?;
        Ok(data.aerodrome(code).cloned())
    }

    fn run(&self, generation: u64) -> BoxFuture<'static, Result<Arc<AeronauticalData>, Error>> {
        let config = self.config.clone();
        let source = Arc::clone(&self.source);
        let supplements = self.supplements.clone();
        let cache = Arc::clone(&self.cache);

        Box::pin(async move {
            let result = load(
                &config,
                source.as_ref(),
                supplements.as_deref(),
                &cache,
                generation,
            )
            .await;

            let mut c = lock(&cache);
            if c.generation == generation {
                c.in_flight = None;
                match &result {
                    Ok(data) => {
                        c.result = Some(Arc::clone(data));
                        c.state = PipelineState::Ready;
                    }
                    Err(e) => {
                        log::error!("pipeline failed: {e}");
                        c.result = None;
                        c.state = PipelineState::Failed;
                    }
                }
            }

            result
        })
    }
}

async fn load(
    config: &PipelineConfig,
    source: &dyn DocumentSource,
    supplements: Option<&dyn SupplementProvider>,
    cache: &Mutex<Cache>,
    generation: u64,
) -> Result<Arc<AeronauticalData>, Error> {
    config.validate()?;

    let aixm = source.fetch(&config.aixm);
    let sia = async {
        match &config.sia {
            Some(location) => source.fetch(location).await.map(Some),
            None => Ok(None),
        }
    };
    let (aixm, sia) = futures::try_join!(aixm, sia)?;

    set_state(cache, generation, PipelineState::Parsing);
    let mut builder = AeronauticalDataBuilder::new().with_radius(config.radius_nm);
    if let Some(prefix) = &config.prefix {
        builder = builder.with_prefix(prefix.as_str());
    }
    if let Some(cycle) = config.cycle {
        builder = builder.with_cycle(cycle);
    }

    builder.read_aixm(&aixm)?;
    if let Some(sia) = &sia {
        builder.read_sia(sia)?;
    }

    set_state(cache, generation, PipelineState::Combining);
    let mut data = builder.build()?;

    set_state(cache, generation, PipelineState::Enriching);
    if let Some(provider) = supplements {
        enrich(&mut data, provider).await;
    }

    Ok(Arc::new(data))
}

/// Adds the supplements to the aerodromes. Failures are logged only.
async fn enrich(data: &mut AeronauticalData, provider: &dyn SupplementProvider) {
    let mut count = 0;

    for ad in data.aerodromes_mut() {
        match provider.supplement(&ad.code).await {
            Ok(Some(supplement)) => {
                ad.supplement = Some(supplement);
                count += 1;
            }
            Ok(None) => {}
            Err(e) => log::warn!("skipping supplement of {}: {e}", ad.code),
        }
    }

    log::info!("added {count} supplements");
}
