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


//! Airspace occupancy classification and sector capacity monitoring.
//!
//! Each refresh takes one snapshot of aircraft state vectors from a [`feed::StateFeed`] and turns it
//! into an immutable [`pipeline::AirspaceSnapshot`]:
//!   - [`classify`] labels each aircraft with a [`aircraft::FlightType`]
//!   - [`sector`] computes per-sector occupancy, utilization and alert levels
//!   - [`overflight`] aggregates the overflight subset by country, altitude band and heading
//!   - [`advisory`] derives advisories from the sector and overflight results
//!
//! [`actor::AirspaceActor`] drives this periodically (or on demand) and publishes the resulting
//! [`actor::AirspaceState`]

use std::time::Duration;
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::{meter,foot,kilometer}};
use odin_common::{geo::BoundingBox, datetime::{de_duration_from_fractional_secs, ser_duration_as_fractional_secs}};
use odin_common::define_load_config;
use tracing::warn;

pub mod errors;
use errors::{Result,config_error};

pub mod aircraft;
pub use aircraft::*;

pub mod reference;
pub use reference::*;

pub mod classify;
pub mod sector;
pub mod overflight;
pub mod advisory;
pub mod pipeline;

pub mod feed;
pub mod opensky;
pub mod actor;

define_load_config!{}

pub const DEFAULT_CONFIG: &'static str = "airspace.ron";

/* #region engine config *****************************************************************************/

/// the unit in which altitude thresholds and sector altitude bounds are given. Feed altitudes are
/// always meters and get converted into this unit before comparing
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum AltitudeUnit {
    #[default] Meters,
    Feet
}

impl AltitudeUnit {
    pub fn from_meters (&self, m: f64)->f64 {
        match self {
            AltitudeUnit::Meters => m,
            AltitudeUnit::Feet => Length::new::<meter>(m).get::<foot>()
        }
    }
}

/// classification and alert thresholds
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub altitude_unit: AltitudeUnit,
    pub near_airport_radius_km: f64,
    pub overflight_min_altitude: f64,
    pub arrival_departure_max_altitude: f64,
    pub domestic_max_altitude: f64,
    pub sector_half_width_deg: f64,
    pub high_utilization: f64,   // percent
    pub medium_utilization: f64, // percent
    pub flow_control_threshold: usize
}

impl Default for EngineConfig {
    fn default()->Self {
        EngineConfig {
            altitude_unit: AltitudeUnit::Meters,
            near_airport_radius_km: 50.0,
            overflight_min_altitude: 20000.0,
            arrival_departure_max_altitude: 10000.0,
            domestic_max_altitude: 20000.0,
            sector_half_width_deg: 1.5,
            high_utilization: 85.0,
            medium_utilization: 70.0,
            flow_control_threshold: 30
        }
    }
}

impl EngineConfig {
    pub fn near_airport_radius (&self)->Length { Length::new::<kilometer>( self.near_airport_radius_km) }

    /// altitude thresholds of 15000 and above read like feet. If they are interpreted as meters
    /// overflights are practically never detected, which is something we want to see in the logs
    pub fn check_altitude_unit (&self)->bool {
        if self.altitude_unit == AltitudeUnit::Meters && self.overflight_min_altitude >= 15000.0 {
            warn!("altitude thresholds (overflight > {}) are interpreted as meters", self.overflight_min_altitude);
            false
        } else {
            true
        }
    }

    /// check the threshold invariants. Violations are fatal since they would silently break alert levels
    pub fn validate (&self)->Result<()> {
        let thresholds = [
            self.near_airport_radius_km, self.overflight_min_altitude, self.arrival_departure_max_altitude,
            self.domestic_max_altitude, self.sector_half_width_deg, self.high_utilization, self.medium_utilization
        ];
        if !thresholds.iter().all( |v| v.is_finite()) {
            return Err( config_error!("engine thresholds have to be finite numbers"))
        }
        if !(self.near_airport_radius_km > 0.0) {
            return Err( config_error!("near_airport_radius_km has to be positive: {}", self.near_airport_radius_km))
        }
        if !(self.sector_half_width_deg > 0.0) {
            return Err( config_error!("sector_half_width_deg has to be positive: {}", self.sector_half_width_deg))
        }
        if !(0.0 <= self.medium_utilization && self.medium_utilization <= self.high_utilization) {
            return Err( config_error!("utilization thresholds out of order: medium {} high {}", self.medium_utilization, self.high_utilization))
        }
        if self.arrival_departure_max_altitude > self.domestic_max_altitude {
            return Err( config_error!("arrival_departure_max_altitude {} above domestic_max_altitude {}",
                                      self.arrival_departure_max_altitude, self.domestic_max_altitude))
        }
        Ok(())
    }
}

/* #endregion engine config */

/// the static configuration of a monitored airspace
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct AirspaceConfig {
    pub region: String,
    pub bbox: BoundingBox,
    pub feed: opensky::OpenSkyConfig,

    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub update_interval: Duration,

    #[serde(serialize_with="ser_duration_as_fractional_secs", deserialize_with="de_duration_from_fractional_secs")]
    pub fetch_timeout: Duration,

    #[serde(default)]
    pub engine: EngineConfig,

    pub airports: Vec<Airport>,
    pub sectors: Vec<Sector>,

    #[serde(default)]
    pub routes: Vec<Route>
}

impl AirspaceConfig {
    /// validate and index the static airport, sector and route tables
    pub fn reference_tables (&self)->Result<ReferenceTables> {
        if !self.bbox.is_valid() { return Err( config_error!("invalid bounding box {}", self.bbox)) }
        if self.update_interval.is_zero() { return Err( config_error!("update_interval must not be zero")) }
        if self.fetch_timeout.is_zero() { return Err( config_error!("fetch_timeout must not be zero")) }
        self.engine.validate()?;

        ReferenceTables::new( self.airports.clone(), self.sectors.clone(), self.routes.clone())
    }
}

/// load an explicit config file if we got a path, otherwise look up the default config
pub fn load_airspace_config (path: Option<&str>)->Result<AirspaceConfig> {
    let config = match path {
        Some(path) => odin_common::config::load_config_path( path)?,
        None => load_config( DEFAULT_CONFIG)?
    };
    Ok(config)
}
