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

//! geometries on the WGS84 ellipsoid surface. Following the general ODIN approach we use the
//! [geo](https://docs.rs/geo/latest/geo/index.html) crate for the algorithms and wrap its types with
//! new types that add units of measure ([uom](https://docs.rs/uom/latest/uom/)) and normalized
//! longitude/latitude semantics

use std::fmt;
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use geo::{Distance, Geodesic, Point};
use uom::si::f64::Length;
use uom::si::length::meter;

use crate::angle::{normalize_90, normalize_180};

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x: longitude, y: latitude)
#[derive(Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64)->Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }

    /// shortest distance on the WGS84 ellipsoid (Karney)
    pub fn geodesic_distance_to (&self, other: &GeoPoint)->Length {
        Length::new::<meter>( Geodesic.distance( self.0, other.0))
    }

    /// is `other` within (inclusive) the given distance from us
    pub fn is_within_distance (&self, other: &GeoPoint, dist: Length)->bool {
        self.geodesic_distance_to(other) <= dist
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(), self.0.y())
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint(lon: {}, lat: {})", self.0.x(), self.0.y())
    }
}

#[derive(Serialize,Deserialize)]
struct LonLat {
    #[serde(alias="longitude", alias="x")] lon: f64,
    #[serde(alias="latitude", alias="y")] lat: f64
}

impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        LonLat{ lon: self.longitude_degrees(), lat: self.latitude_degrees() }.serialize(serializer)
    }
}

// we accept "lon"|"longitude"|"x" and "lat"|"latitude"|"y" so that we can read what `geo` types write
impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let p = LonLat::deserialize(deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( p.lon, p.lat))
    }
}

/* #endregion GeoPoint */

/* #region BoundingBox ********************************************************************************************/

/// a geographic bounding box in degrees. We do not support boxes that cross the antimeridian
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64
}

impl BoundingBox {
    pub fn new (west: f64, south: f64, east: f64, north: f64)->Self {
        BoundingBox{ west, south, east, north }
    }

    /// the (lat_min, lon_min, lat_max, lon_max) order used by many web APIs
    pub fn from_lat_lon_min_max (lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64)->Self {
        BoundingBox{ west: lon_min, south: lat_min, east: lon_max, north: lat_max }
    }

    /// a box of +- half_width degrees around a center
    pub fn around (lon: f64, lat: f64, half_width: f64)->Self {
        BoundingBox{ west: lon - half_width, south: lat - half_width, east: lon + half_width, north: lat + half_width }
    }

    #[inline] pub fn lat_min (&self)->f64 { self.south }
    #[inline] pub fn lat_max (&self)->f64 { self.north }
    #[inline] pub fn lon_min (&self)->f64 { self.west }
    #[inline] pub fn lon_max (&self)->f64 { self.east }

    /// inclusive on all sides
    pub fn contains_degrees (&self, lon: f64, lat: f64)->bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    pub fn contains (&self, p: &GeoPoint)->bool {
        self.contains_degrees( p.longitude_degrees(), p.latitude_degrees())
    }

    pub fn is_valid (&self)->bool {
        self.west < self.east && self.south < self.north
            && self.south >= -90.0 && self.north <= 90.0
            && self.west >= -180.0 && self.east <= 180.0
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{} .. {},{}]", self.west, self.south, self.east, self.north)
    }
}

/* #endregion BoundingBox */

/// is this a valid WGS84 position in degrees
#[inline]
pub fn is_valid_lon_lat (lon: f64, lat: f64)->bool {
    lon.is_finite() && lat.is_finite() && lon >= -180.0 && lon <= 180.0 && lat >= -90.0 && lat <= 90.0
}
