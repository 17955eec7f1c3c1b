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


use odin_common::geo::GeoPoint;
use uom::si::f64::Length;
use tracing::debug;

use crate::{EngineConfig, aircraft::{AircraftState,ClassifiedAircraft,FlightType}, reference::Airport};

/// is the position within `radius` (geodesic, inclusive) of any airport. Stops at the first match
pub fn is_near_airport (pos: &GeoPoint, airports: &[Airport], radius: Length)->bool {
    airports.iter().any( |a| pos.is_within_distance( &a.position(), radius))
}

/// classify a single aircraft state. The first matching rule wins:
///   1. on ground                                       -> Ground
///   2. above overflight altitude and not near airport  -> Overflight
///   3. near airport and below arrival/departure alt    -> ArrivalDeparture
///   4. below domestic altitude                         -> Domestic
///   5. everything else (including no altitude)         -> Transit
/// States without a valid position are `Unknown`
pub fn classify (state: &AircraftState, airports: &[Airport], config: &EngineConfig)->FlightType {
    if state.on_ground { return FlightType::Ground }

    let Some(pos) = state.position() else { return FlightType::Unknown };
    let near_airport = is_near_airport( &pos, airports, config.near_airport_radius());
    let alt = state.altitude().map( |a| config.altitude_unit.from_meters(a));

    match alt {
        Some(alt) if alt > config.overflight_min_altitude && !near_airport => FlightType::Overflight,
        Some(alt) if near_airport && alt < config.arrival_departure_max_altitude => FlightType::ArrivalDeparture,
        Some(alt) if alt < config.domestic_max_altitude => FlightType::Domestic,
        _ => FlightType::Transit
    }
}

/// classify all states with valid positions, preserving input order. Returns the classified aircraft and the
/// number of dropped (invalid position) states
pub fn classify_all (states: &[AircraftState], airports: &[Airport], config: &EngineConfig)->(Vec<ClassifiedAircraft>,usize) {
    let mut n_dropped = 0;
    let mut list = Vec::with_capacity( states.len());

    for state in states {
        if state.has_valid_position() {
            let flight_type = classify( state, airports, config);
            list.push( ClassifiedAircraft::new( state.clone(), flight_type));
        } else {
            n_dropped += 1;
        }
    }

    if n_dropped > 0 { debug!("dropped {} states without valid position", n_dropped) }
    (list, n_dropped)
}
