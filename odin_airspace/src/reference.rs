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


//! the static airport, sector and route tables. These are loaded once at startup, validated
//! and indexed by [`ReferenceTables::new`] and are immutable afterwards

use std::{collections::{HashMap,HashSet}, num::NonZeroU32};
use serde::{Serialize,Deserialize};
use strum::{Display,AsRefStr};
use odin_common::geo::{GeoPoint, is_valid_lon_lat};

use crate::errors::{Result,config_error};

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,Display,AsRefStr)]
pub enum AirportCategory {
    Hub,
    International,
    Domestic,
    Regional
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Airport {
    pub icao_code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub hourly_capacity: u32,
    pub category: AirportCategory
}

impl Airport {
    pub fn position (&self)->GeoPoint { GeoPoint::from_lon_lat_degrees( self.longitude, self.latitude) }
}

/// a monitored airspace volume. Sectors are squares of +- `EngineConfig::sector_half_width_deg` around their center
/// and altitude bounds in `EngineConfig::altitude_unit`. Sectors may overlap
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Sector {
    pub id: String,
    pub name: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub area: String,
    pub capacity: NonZeroU32, // max simultaneous aircraft
    pub altitude_min: f64,
    pub altitude_max: f64
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Route {
    pub id: String,
    pub from: String, // airport icao code
    pub to: String,
}

#[derive(Debug,Clone)]
pub struct ReferenceTables {
    airports: Vec<Airport>,
    sectors: Vec<Sector>,
    routes: Vec<Route>,

    airport_index: HashMap<String,usize>,
    sector_index: HashMap<String,usize>,
}

impl ReferenceTables {
    pub fn new (airports: Vec<Airport>, sectors: Vec<Sector>, routes: Vec<Route>)->Result<Self> {
        let mut airport_index = HashMap::with_capacity( airports.len());
        for (i,a) in airports.iter().enumerate() {
            if a.icao_code.trim().is_empty() { return Err( config_error!("airport {} without icao code", a.name)) }
            if !is_valid_lon_lat( a.longitude, a.latitude) { return Err( config_error!("airport {} has invalid position", a.icao_code)) }
            if airport_index.insert( a.icao_code.clone(), i).is_some() { return Err( config_error!("duplicate airport {}", a.icao_code)) }
        }

        let mut sector_index = HashMap::with_capacity( sectors.len());
        for (i,s) in sectors.iter().enumerate() {
            if s.id.trim().is_empty() { return Err( config_error!("sector {} without id", s.name)) }
            if !is_valid_lon_lat( s.center_longitude, s.center_latitude) { return Err( config_error!("sector {} has invalid center", s.id)) }
            if !(s.altitude_min <= s.altitude_max) { return Err( config_error!("sector {} altitude_min > altitude_max", s.id)) }
            if sector_index.insert( s.id.clone(), i).is_some() { return Err( config_error!("duplicate sector {}", s.id)) }
        }

        let mut route_ids = HashSet::with_capacity( routes.len());
        for r in &routes {
            if !route_ids.insert( r.id.as_str()) { return Err( config_error!("duplicate route {}", r.id)) }
            for code in [&r.from, &r.to] {
                if !airport_index.contains_key( code) { return Err( config_error!("route {} references unknown airport {}", r.id, code)) }
            }
        }

        Ok( ReferenceTables { airports, sectors, routes, airport_index, sector_index } )
    }

    pub fn airports (&self)->&[Airport] { self.airports.as_slice() }
    pub fn sectors (&self)->&[Sector] { self.sectors.as_slice() }
    pub fn routes (&self)->&[Route] { self.routes.as_slice() }

    pub fn airport (&self, icao_code: &str)->Option<&Airport> {
        self.airport_index.get( icao_code).map( |i| &self.airports[*i])
    }

    pub fn sector (&self, id: &str)->Option<&Sector> {
        self.sector_index.get( id).map( |i| &self.sectors[*i])
    }

    /// the (from,to) airports of a route
    pub fn route_endpoints (&self, route: &Route)->Option<(&Airport,&Airport)> {
        Some( (self.airport( &route.from)?, self.airport( &route.to)?) )
    }
}
