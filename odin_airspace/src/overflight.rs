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


//! flow analysis of the aircraft that are classified as overflights

use std::collections::BTreeMap;
use serde::{Serialize,Deserialize};
use strum::{Display,EnumIter,IntoEnumIterator};
use itertools::Itertools;
use odin_common::angle::Angle360;

use crate::aircraft::{ClassifiedAircraft,FlightType};

/// flight level bands of overflights. Band limits are meters (FL200 = 6096m)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Display,EnumIter)]
pub enum AltitudeBand {
    #[serde(rename="FL200-FL300")] #[strum(serialize="FL200-FL300")]
    Fl200To300,
    #[serde(rename="FL300-FL400")] #[strum(serialize="FL300-FL400")]
    Fl300To400,
    #[serde(rename="FL400+")] #[strum(serialize="FL400+")]
    Fl400Plus
}

impl AltitudeBand {
    /// the band for a (meters) altitude, None below FL200
    pub fn from_meters (alt: f64)->Option<AltitudeBand> {
        if alt >= 12192.0 { Some(AltitudeBand::Fl400Plus) }
        else if alt >= 9144.0 { Some(AltitudeBand::Fl300To400) }
        else if alt >= 6096.0 { Some(AltitudeBand::Fl200To300) }
        else { None }
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Display,EnumIter)]
pub enum HeadingOctant {
    Northbound,
    Eastbound,
    Southbound,
    Westbound
}

impl HeadingOctant {
    pub fn from_heading (hdg: Angle360)->HeadingOctant {
        if hdg.is_within( 45.0, 135.0) { HeadingOctant::Eastbound }
        else if hdg.is_within( 135.0, 225.0) { HeadingOctant::Southbound }
        else if hdg.is_within( 225.0, 315.0) { HeadingOctant::Westbound }
        else { HeadingOctant::Northbound }
    }
}

#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct OverflightAnalysis {
    pub total_overflights: usize,
    pub count_by_country: BTreeMap<String,usize>,
    pub altitude_band_counts: BTreeMap<AltitudeBand,usize>,   // all bands, zero initialized
    pub heading_octant_counts: BTreeMap<HeadingOctant,usize>, // all octants, zero initialized
}

impl Default for OverflightAnalysis {
    fn default()->Self {
        OverflightAnalysis {
            total_overflights: 0,
            count_by_country: BTreeMap::new(),
            altitude_band_counts: AltitudeBand::iter().map( |b| (b,0)).collect(),
            heading_octant_counts: HeadingOctant::iter().map( |h| (h,0)).collect(),
        }
    }
}

impl OverflightAnalysis {
    /// countries by descending count, ties in name order
    pub fn countries_by_count (&self)->Vec<(&str,usize)> {
        self.count_by_country.iter()
            .map( |(k,v)| (k.as_str(),*v))
            .sorted_by( |a,b| b.1.cmp(&a.1)) // stable, so ties keep name order
            .collect()
    }

    pub fn band_count (&self, band: AltitudeBand)->usize {
        self.altitude_band_counts.get(&band).copied().unwrap_or(0)
    }

    pub fn octant_count (&self, octant: HeadingOctant)->usize {
        self.heading_octant_counts.get(&octant).copied().unwrap_or(0)
    }
}

pub fn analyze (aircraft: &[ClassifiedAircraft])->OverflightAnalysis {
    let mut ofa = OverflightAnalysis::default();

    for ac in aircraft.iter().filter( |ac| ac.flight_type() == FlightType::Overflight) {
        ofa.total_overflights += 1;
        *ofa.count_by_country.entry( ac.origin_country().to_string()).or_insert(0) += 1;

        if let Some(band) = ac.altitude().and_then( AltitudeBand::from_meters) {
            *ofa.altitude_band_counts.entry(band).or_insert(0) += 1;
        }
        if let Some(hdg) = ac.heading() {
            *ofa.heading_octant_counts.entry( HeadingOctant::from_heading(hdg)).or_insert(0) += 1;
        }
    }

    ofa
}
