/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */


use std::path::PathBuf;
use async_trait::async_trait;
use odin_common::geo::BoundingBox;
use tracing::debug;

use crate::aircraft::FeedSnapshot;
use crate::opensky::parse_states_response;
use crate::errors::{Result,feed_unavailable};

/// the source of aircraft state snapshots. Implementations map all failures to `FeedUnavailable`
#[async_trait]
pub trait StateFeed: Send + Sync {
    async fn fetch (&self, bbox: &BoundingBox)->Result<FeedSnapshot>;

    fn name (&self)->&str;
}

#[async_trait]
impl <T> StateFeed for Box<T> where T: StateFeed + ?Sized {
    async fn fetch (&self, bbox: &BoundingBox)->Result<FeedSnapshot> { self.as_ref().fetch(bbox).await }

    fn name (&self)->&str { self.as_ref().name() }
}

/// a feed that reads a recorded OpenSky `states/all` response from disk each time it is fetched.
/// Aircraft with positions outside the requested bounding box are filtered out, aircraft without
/// positions are passed through so that they show up as dropped
pub struct ReplayFeed {
    path: PathBuf
}

impl ReplayFeed {
    pub fn new (path: impl Into<PathBuf>)->Self { ReplayFeed { path: path.into() } }
}

#[async_trait]
impl StateFeed for ReplayFeed {
    async fn fetch (&self, bbox: &BoundingBox)->Result<FeedSnapshot> {
        let text = tokio::fs::read_to_string( &self.path).await
            .map_err( |e| feed_unavailable!("cannot read replay file {:?}: {}", self.path, e))?;

        let mut snapshot = parse_states_response( &text)?;
        snapshot.states.retain( |s| match (s.longitude, s.latitude) {
            (Some(lon), Some(lat)) if s.has_valid_position() => bbox.contains_degrees( lon, lat),
            _ => true
        });

        debug!("replayed {} states from {:?}", snapshot.states.len(), self.path);
        Ok(snapshot)
    }

    fn name (&self)->&str { "replay" }
}
