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

//! normalized angle types. We only keep the value range semantics here - trigonometry is done
//! by the respective `geo` algorithms

use std::fmt;
use serde::{Serialize,Deserialize,Serializer,Deserializer};

#[inline]
pub fn normalize_90 (d: f64)->f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64)->f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// map into [0,360). Note that 360.0 maps to 0.0
#[inline]
pub fn normalize_360 (d: f64)->f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// a compass angle (heading, track, bearing) in [0,360) degrees
#[derive(Clone,Copy,PartialEq,PartialOrd)]
pub struct Angle360(f64);

impl Angle360 {
    #[inline] pub fn from_degrees (deg: f64)->Self { Angle360( normalize_360(deg)) }
    #[inline] pub fn degrees (&self)->f64 { self.0 }

    /// is this angle within the clockwise sector that starts at `start` (inclusive) and ends at `end` (exclusive)?
    /// Sectors can wrap around north, e.g. `is_within(315.0, 45.0)`
    pub fn is_within (&self, start: f64, end: f64)->bool {
        let start = normalize_360(start);
        let end = normalize_360(end);

        if start <= end {
            self.0 >= start && self.0 < end
        } else {
            self.0 >= start || self.0 < end
        }
    }
}

impl fmt::Display for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.0) }
}

impl fmt::Debug for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Angle360({})", self.0) }
}

impl From<Angle360> for f64 {
    fn from (a: Angle360)->Self { a.0 }
}

// serialized as plain degrees
impl Serialize for Angle360 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64( self.0)
    }
}

impl<'de> Deserialize<'de> for Angle360 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize(deserializer)?;
        Ok( Angle360::from_degrees(deg))
    }
}
