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


use std::fmt;
use serde::{Serialize,Deserialize};
use strum::{Display,EnumIter,AsRefStr};
use odin_common::{angle::Angle360, datetime::EpochMillis, geo::GeoPoint};

/// one observation of one aircraft at snapshot time, as we get it from the feed.
/// Altitudes are in meters, velocities in m/s, track in degrees
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct AircraftState {
    pub icao24: String,
    pub callsign: String,
    pub origin_country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub track: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub on_ground: bool,
}

impl AircraftState {
    /// a position is only valid if both lat and lon are present, finite, in range and not zero.
    /// Feeds report unknown positions as 0.0 so we can't tell those apart from real ones
    pub fn has_valid_position (&self)->bool {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                lat.is_finite() && lon.is_finite() && lat != 0.0 && lon != 0.0
                    && lat.abs() <= 90.0 && lon.abs() <= 180.0
            }
            _ => false
        }
    }

    pub fn position (&self)->Option<GeoPoint> {
        if self.has_valid_position() {
            Some( GeoPoint::from_lon_lat_degrees( self.longitude?, self.latitude?))
        } else {
            None
        }
    }

    pub fn heading (&self)->Option<Angle360> {
        self.track.filter(|t| t.is_finite()).map( Angle360::from_degrees)
    }

    pub fn altitude (&self)->Option<f64> {
        self.baro_altitude.filter(|a| a.is_finite())
    }

    /// the callsign if we have one, the icao24 otherwise
    pub fn display_name (&self)->&str {
        if self.callsign.is_empty() { self.icao24.as_str() } else { self.callsign.as_str() }
    }
}

/// the (mutually exclusive) operational category of an aircraft
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Display,EnumIter,AsRefStr)]
pub enum FlightType {
    Ground,
    Overflight,
    ArrivalDeparture,
    Domestic,
    Transit,
    Unknown
}

/// an aircraft state together with its classification. Instances are never mutated, they get
/// replaced wholesale by the next snapshot
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct ClassifiedAircraft {
    #[serde(flatten)]
    state: AircraftState,
    flight_type: FlightType
}

impl ClassifiedAircraft {
    pub fn new (state: AircraftState, flight_type: FlightType)->Self {
        ClassifiedAircraft { state, flight_type }
    }

    #[inline] pub fn state (&self)->&AircraftState { &self.state }
    #[inline] pub fn flight_type (&self)->FlightType { self.flight_type }

    #[inline] pub fn icao24 (&self)->&str { self.state.icao24.as_str() }
    #[inline] pub fn display_name (&self)->&str { self.state.display_name() }
    #[inline] pub fn origin_country (&self)->&str { self.state.origin_country.as_str() }
    #[inline] pub fn altitude (&self)->Option<f64> { self.state.altitude() }
    #[inline] pub fn heading (&self)->Option<Angle360> { self.state.heading() }
    #[inline] pub fn is_on_ground (&self)->bool { self.state.on_ground }

    /// lat/lon in degrees. Classified aircraft always have valid positions
    #[inline] pub fn lat_lon (&self)->(f64,f64) {
        ( self.state.latitude.unwrap_or_default(), self.state.longitude.unwrap_or_default() )
    }
}

impl fmt::Display for ClassifiedAircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat,lon) = self.lat_lon();
        write!( f, "{:8} {:6} {:16} {:9.4} {:9.4}", self.display_name(), self.icao24(), self.flight_type.as_ref(), lat, lon)?;
        match self.altitude() {
            Some(alt) => write!( f, " {:7.0}m", alt),
            None => write!( f, "       -")
        }
    }
}

/// one raw snapshot as delivered by a StateFeed
#[derive(Debug,Clone,PartialEq)]
pub struct FeedSnapshot {
    pub time: EpochMillis,
    pub states: Vec<AircraftState>
}

impl FeedSnapshot {
    pub fn new (time: EpochMillis, states: Vec<AircraftState>)->Self { FeedSnapshot{ time, states } }

    pub fn empty (time: EpochMillis)->Self { FeedSnapshot{ time, states: Vec::new() } }
}
