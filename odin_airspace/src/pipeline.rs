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


use std::{collections::BTreeMap, fmt};
use serde::Serialize;
use strum::IntoEnumIterator;
use odin_common::datetime::EpochMillis;
use tracing::debug;

use crate::{EngineConfig, ReferenceTables};
use crate::aircraft::{ClassifiedAircraft,FeedSnapshot,FlightType};
use crate::{classify::classify_all, sector::{occupancy,SectorOccupancy}, overflight::{analyze,OverflightAnalysis}, advisory::{advise,Advisory}};
use crate::errors::Result;

/// everything we derive from one feed snapshot
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct AirspaceSnapshot {
    pub timestamp: EpochMillis,
    pub aircraft: Vec<ClassifiedAircraft>,
    pub sectors: SectorOccupancy,
    pub overflights: OverflightAnalysis,
    pub advisories: Vec<Advisory>,
    pub n_dropped: usize
}

impl AirspaceSnapshot {
    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string( self)? )
    }

    pub fn n_airborne (&self)->usize {
        self.aircraft.iter().filter( |ac| !ac.is_on_ground()).count()
    }

    /// counts for all flight types, including the ones we didn't see
    pub fn count_by_type (&self)->BTreeMap<FlightType,usize> {
        let mut map: BTreeMap<FlightType,usize> = FlightType::iter().map( |t| (t,0)).collect();
        for ac in &self.aircraft {
            *map.entry( ac.flight_type()).or_insert(0) += 1;
        }
        map
    }

    pub fn is_nominal (&self)->bool { self.advisories.is_empty() }
}

impl fmt::Display for AirspaceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!( f, "snapshot {}: {} aircraft ({} airborne, {} dropped)", self.timestamp, self.aircraft.len(), self.n_airborne(), self.n_dropped)?;
        for (t,n) in self.count_by_type() {
            if n > 0 { writeln!( f, "  {:16} {}", t.as_ref(), n)? }
        }

        writeln!( f, "\nsectors:")?;
        for s in self.sectors.iter() {
            writeln!( f, "  {s}")?;
        }

        writeln!( f, "\noverflights: {}", self.overflights.total_overflights)?;
        for (country,n) in self.overflights.countries_by_count() {
            writeln!( f, "  {:24} {}", country, n)?;
        }
        for (band,n) in &self.overflights.altitude_band_counts {
            writeln!( f, "  {:24} {}", band.to_string(), n)?;
        }
        for (octant,n) in &self.overflights.heading_octant_counts {
            writeln!( f, "  {:24} {}", octant.to_string(), n)?;
        }

        writeln!( f, "\nadvisories:")?;
        if self.advisories.is_empty() {
            writeln!( f, "  all sectors nominal")
        } else {
            for a in &self.advisories { writeln!( f, "  {a}")? }
            Ok(())
        }
    }
}

/// run the complete derivation for one feed snapshot
pub fn process (feed_snapshot: FeedSnapshot, tables: &ReferenceTables, config: &EngineConfig)->AirspaceSnapshot {
    let (aircraft, n_dropped) = classify_all( &feed_snapshot.states, tables.airports(), config);
    let sectors = occupancy( &aircraft, tables.sectors(), config);
    let overflights = analyze( &aircraft);
    let advisories = advise( &sectors, &overflights, config);

    debug!("processed snapshot {}: {} aircraft, {} overflights, {} advisories", feed_snapshot.time, aircraft.len(), overflights.total_overflights, advisories.len());

    AirspaceSnapshot { timestamp: feed_snapshot.time, aircraft, sectors, overflights, advisories, n_dropped }
}
