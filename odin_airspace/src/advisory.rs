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
use serde::{Serialize,Serializer};

use crate::{EngineConfig, overflight::OverflightAnalysis, sector::{AlertLevel,SectorOccupancy,SectorSnapshot}};

#[derive(Debug,Clone,PartialEq)]
pub enum Advisory {
    Reroute { sector_id: String, sector_name: String, utilization: f64 },
    Monitor { sector_id: String, sector_name: String, utilization: f64 },
    FlowControl { total_overflights: usize, threshold: usize }
}

impl Advisory {
    fn for_sector (s: &SectorSnapshot)->Option<Advisory> {
        let sector_id = s.sector_id.clone();
        let sector_name = s.sector_name.clone();
        let utilization = s.utilization;

        match s.alert_level {
            AlertLevel::High => Some( Advisory::Reroute { sector_id, sector_name, utilization }),
            AlertLevel::Medium => Some( Advisory::Monitor { sector_id, sector_name, utilization }),
            AlertLevel::Low => None
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Reroute { sector_id, sector_name, utilization } =>
                write!( f, "REROUTE: {sector_name} ({sector_id}) at {utilization:.1}% capacity, divert traffic to adjacent sectors"),
            Advisory::Monitor { sector_id, sector_name, utilization } =>
                write!( f, "MONITOR: {sector_name} ({sector_id}) at {utilization:.1}% capacity"),
            Advisory::FlowControl { total_overflights, threshold } =>
                write!( f, "FLOW CONTROL: {total_overflights} overflights exceed the threshold of {threshold}, consider miles-in-trail restrictions")
        }
    }
}

// presentation only gets the message
impl Serialize for Advisory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_str(self)
    }
}

/// sector advisories in sector table order, followed by a flow control advisory if there are too many overflights.
/// An empty result means all nominal
pub fn advise (sectors: &SectorOccupancy, overflights: &OverflightAnalysis, config: &EngineConfig)->Vec<Advisory> {
    let mut advisories: Vec<Advisory> = sectors.iter().filter_map( Advisory::for_sector).collect();

    if overflights.total_overflights > config.flow_control_threshold {
        advisories.push( Advisory::FlowControl {
            total_overflights: overflights.total_overflights,
            threshold: config.flow_control_threshold
        });
    }

    advisories
}
