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


//! the OpenSky network `states/all` REST feed. See https://openskynetwork.github.io/opensky-api/rest.html
//! State vectors are delivered as positional JSON arrays:
//!   0: icao24, 1: callsign, 2: origin_country, 3: time_position, 4: last_contact, 5: longitude, 6: latitude,
//!   7: baro_altitude, 8: on_ground, 9: velocity, 10: true_track, 11: vertical_rate, ...

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use odin_common::{datetime::EpochMillis, geo::BoundingBox, net::{self,BasicAuth}};
use tracing::{debug,info};

use crate::{aircraft::{AircraftState,FeedSnapshot}, feed::StateFeed};
use crate::errors::{Result,feed_unavailable,parse_error};

const N_STATE_FIELDS: usize = 12;

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OpenSkyConfig {
    pub url: String, // e.g. "https://opensky-network.org/api"

    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl OpenSkyConfig {
    pub fn states_url (&self)->String {
        format!("{}/states/all", self.url.trim_end_matches('/'))
    }

    fn basic_auth (&self)->Option<BasicAuth> {
        self.user.as_ref().map( |user| BasicAuth{ user: user.clone(), password: self.password.clone() })
    }
}

/// the raw response structure. `states` is null if there are no aircraft in the requested area
#[derive(Deserialize,Debug)]
struct StatesResponse {
    time: i64,
    states: Option<Vec<Value>>
}

pub struct OpenSkyFeed {
    config: OpenSkyConfig,
    client: Client
}

impl OpenSkyFeed {
    pub fn new (config: OpenSkyConfig)->Self {
        info!("using OpenSky feed {}", config.url);
        OpenSkyFeed { config, client: Client::new() }
    }
}

#[async_trait]
impl StateFeed for OpenSkyFeed {
    async fn fetch (&self, bbox: &BoundingBox)->Result<FeedSnapshot> {
        let url = self.config.states_url();
        let query = [
            ("lamin", bbox.lat_min().to_string()),
            ("lomin", bbox.lon_min().to_string()),
            ("lamax", bbox.lat_max().to_string()),
            ("lomax", bbox.lon_max().to_string()),
        ];
        let auth = self.config.basic_auth();

        let response: StatesResponse = net::get_json( &self.client, &url, &query, auth.as_ref()).await
            .map_err( |e| feed_unavailable!("{url}: {e}"))?;

        Ok( snapshot_from_response( response) )
    }

    fn name (&self)->&str { "opensky" }
}

/// parse a complete `states/all` response body. A body we can't parse means the feed is unavailable,
/// single broken state rows are skipped
pub fn parse_states_response (text: &str)->Result<FeedSnapshot> {
    let response: StatesResponse = net::from_json( text).map_err( |e| feed_unavailable!("invalid states response: {e}"))?;
    Ok( snapshot_from_response( response) )
}

fn snapshot_from_response (response: StatesResponse)->FeedSnapshot {
    let time = EpochMillis::from_secs( response.time);
    let rows = response.states.unwrap_or_default();
    let n_rows = rows.len();

    let states: Vec<AircraftState> = rows.iter().filter_map( |row| {
        match parse_state_row( row) {
            Ok(state) => Some(state),
            Err(e) => { debug!("skipping state row: {e}"); None }
        }
    }).collect();

    if states.len() < n_rows { debug!("skipped {} of {} state rows", n_rows - states.len(), n_rows) }
    FeedSnapshot::new( time, states)
}

/// parse one positional state vector. Only `icao24` is mandatory, all other fields degrade to None/empty
pub fn parse_state_row (row: &Value)->Result<AircraftState> {
    let fields = row.as_array().ok_or_else( || parse_error!("state row is not an array"))?;
    if fields.len() < N_STATE_FIELDS { return Err( parse_error!("state row has only {} fields", fields.len())) }

    let icao24 = fields[0].as_str().map( |s| s.trim()).filter( |s| !s.is_empty())
        .ok_or_else( || parse_error!("state row without icao24"))?;

    Ok( AircraftState {
        icao24: icao24.to_string(),
        callsign: str_field( &fields[1]),
        origin_country: str_field( &fields[2]),
        longitude: fields[5].as_f64(),
        latitude: fields[6].as_f64(),
        baro_altitude: fields[7].as_f64(),
        on_ground: fields[8].as_bool().unwrap_or(false),
        velocity: fields[9].as_f64(),
        track: fields[10].as_f64(),
        vertical_rate: fields[11].as_f64(),
    })
}

fn str_field (v: &Value)->String {
    v.as_str().map( |s| s.trim().to_string()).unwrap_or_default()
}
