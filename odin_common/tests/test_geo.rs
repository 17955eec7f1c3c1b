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
#![allow(unused)]

use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};
use odin_common::geo::*;

// run with "cargo test test_geopoint_serde -- --nocapture"

#[test]
fn test_geopoint_serde() {
    let input = r#"{ "longitude": -122.0, "latitude": 37.0 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("deserialized GeoPoint: {p:?}");
    assert_eq!( p.longitude_degrees(), -122.0);
    assert_eq!( p.latitude_degrees(), 37.0);

    // alternative deserialization formats
    let p1: GeoPoint = serde_json::from_str( r#"{ "lon": -122.0, "lat": 37.0 }"#).unwrap();
    let p2: GeoPoint = serde_json::from_str( r#"{ "x": -122.0, "y": 37.0 }"#).unwrap();
    assert!( p == p1 && p == p2);

    let s = serde_json::to_string(&p).unwrap();
    println!("serialized GeoPoint: '{s}'");
    assert_eq!( s, r#"{"lon":-122.0,"lat":37.0}"#);
}

#[test]
fn test_geodesic_distance() {
    let p1 = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let p2 = GeoPoint::from_lon_lat_degrees( 1.0, 0.0);

    // one degree of longitude on the WGS84 equator is 111.319 km
    let d = p1.geodesic_distance_to(&p2);
    println!("geodesic distance: {}km", d.get::<kilometer>());
    assert!( (d.get::<kilometer>() - 111.319).abs() < 0.01);

    assert!( p1.is_within_distance( &p2, Length::new::<kilometer>(112.0)));
    assert!( !p1.is_within_distance( &p2, Length::new::<kilometer>(111.0)));
    assert_eq!( p1.geodesic_distance_to(&p1).get::<meter>(), 0.0);
}

#[test]
fn test_bounding_box() {
    let bbox = BoundingBox::from_lat_lon_min_max( 6.0, 68.0, 37.0, 97.0);
    assert_eq!( (bbox.west, bbox.south, bbox.east, bbox.north), (68.0, 6.0, 97.0, 37.0));
    assert!( bbox.is_valid());

    assert!( bbox.contains_degrees( 77.1, 28.5));
    assert!( bbox.contains_degrees( 68.0, 6.0)); // inclusive
    assert!( !bbox.contains_degrees( 67.9, 28.5));
    assert!( bbox.contains( &GeoPoint::from_lon_lat_degrees( 80.0, 13.0)));

    let b = BoundingBox::around( 77.0, 28.5, 1.5);
    assert_eq!( (b.lon_min(), b.lat_min(), b.lon_max(), b.lat_max()), (75.5, 27.0, 78.5, 30.0));

    assert!( !BoundingBox::new( 10.0, 0.0, 5.0, 1.0).is_valid());
}

#[test]
fn test_valid_lon_lat() {
    assert!( is_valid_lon_lat( 77.0, 28.0));
    assert!( !is_valid_lon_lat( 181.0, 28.0));
    assert!( !is_valid_lon_lat( 77.0, f64::NAN));
}
