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


use std::{fmt, num::NonZeroU32};
use serde::{Serialize,Deserialize};
use strum::{Display,AsRefStr};

use crate::{EngineConfig, aircraft::ClassifiedAircraft, reference::Sector};

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Display,AsRefStr)]
pub enum AlertLevel {
    Low,
    Medium,
    High
}

/// the occupancy of one sector in one snapshot
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct SectorSnapshot {
    pub sector_id: String,
    pub sector_name: String,
    pub capacity: u32,
    pub traffic_count: usize,
    pub utilization: f64, // percent
    pub alert_level: AlertLevel,
    pub member_callsigns: Vec<String>, // in scan order
}

impl fmt::Display for SectorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{:8} {:24} {:4}/{:<4} {:6.1}% {}", self.sector_id, self.sector_name,
                self.traffic_count, self.capacity, self.utilization, self.alert_level)
    }
}

/// all sector snapshots in sector table order
#[derive(Serialize,Debug,Clone,PartialEq,Default)]
#[serde(transparent)]
pub struct SectorOccupancy {
    sectors: Vec<SectorSnapshot>
}

impl SectorOccupancy {
    pub fn iter (&self)->impl Iterator<Item=&SectorSnapshot> { self.sectors.iter() }

    pub fn as_slice (&self)->&[SectorSnapshot] { self.sectors.as_slice() }

    pub fn get (&self, sector_id: &str)->Option<&SectorSnapshot> {
        self.sectors.iter().find( |s| s.sector_id == sector_id)
    }

    pub fn len (&self)->usize { self.sectors.len() }
    pub fn is_empty (&self)->bool { self.sectors.is_empty() }

    pub fn count_alert_level (&self, level: AlertLevel)->usize {
        self.sectors.iter().filter( |s| s.alert_level == level).count()
    }
}

/// traffic count in percent of capacity
pub fn utilization (traffic_count: usize, capacity: NonZeroU32)->f64 {
    (traffic_count as f64 * 100.0) / capacity.get() as f64
}

pub fn alert_level (utilization: f64, config: &EngineConfig)->AlertLevel {
    if utilization >= config.high_utilization { AlertLevel::High }
    else if utilization >= config.medium_utilization { AlertLevel::Medium }
    else { AlertLevel::Low }
}

/// does this aircraft count towards the sector occupancy. Bounds are inclusive, aircraft without altitude never count
pub fn is_in_sector (ac: &ClassifiedAircraft, sector: &Sector, config: &EngineConfig)->bool {
    if ac.is_on_ground() { return false }

    let w = config.sector_half_width_deg;
    let (lat,lon) = ac.lat_lon();

    let Some(alt) = ac.altitude().map( |a| config.altitude_unit.from_meters(a)) else { return false };

    lat >= sector.center_latitude - w && lat <= sector.center_latitude + w
        && lon >= sector.center_longitude - w && lon <= sector.center_longitude + w
        && alt >= sector.altitude_min && alt <= sector.altitude_max
}

/// compute the occupancy of each sector independently (an aircraft can count in several overlapping sectors)
pub fn occupancy (aircraft: &[ClassifiedAircraft], sectors: &[Sector], config: &EngineConfig)->SectorOccupancy {
    let sectors = sectors.iter().map( |sector| {
        let member_callsigns: Vec<String> = aircraft.iter()
            .filter( |ac| is_in_sector( ac, sector, config))
            .map( |ac| ac.display_name().to_string())
            .collect();

        let traffic_count = member_callsigns.len();
        let utilization = utilization( traffic_count, sector.capacity);

        SectorSnapshot {
            sector_id: sector.id.clone(),
            sector_name: sector.name.clone(),
            capacity: sector.capacity.get(),
            traffic_count,
            utilization,
            alert_level: alert_level( utilization, config),
            member_callsigns
        }
    }).collect();

    SectorOccupancy { sectors }
}
