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

use odin_common::angle::*;
use odin_common::datetime::*;

#[test]
fn test_normalize() {
    assert_eq!( normalize_360( -90.0), 270.0);
    assert_eq!( normalize_360( 360.0), 0.0);
    assert_eq!( normalize_360( 725.0), 5.0);
    assert_eq!( normalize_180( 200.0), -160.0);
    assert_eq!( normalize_90( 100.0), 80.0);
}

#[test]
fn test_angle360_sectors() {
    let a = Angle360::from_degrees( 370.0);
    assert_eq!( a.degrees(), 10.0);

    assert!( a.is_within( 315.0, 45.0)); // wraps around north
    assert!( Angle360::from_degrees( 315.0).is_within( 315.0, 45.0));
    assert!( !Angle360::from_degrees( 45.0).is_within( 315.0, 45.0));
    assert!( Angle360::from_degrees( 45.0).is_within( 45.0, 135.0));
    assert!( !Angle360::from_degrees( 135.0).is_within( 45.0, 135.0));

    let a: Angle360 = serde_json::from_str("-90.0").unwrap();
    assert_eq!( a.degrees(), 270.0);
}

#[test]
fn test_epoch_millis() {
    let t = EpochMillis::from_secs( 1_700_000_000);
    assert_eq!( t.millis(), 1_700_000_000_000);
    assert_eq!( t.to_string(), "2023-11-14T22:13:20.000Z");

    let later = EpochMillis::new( t.millis() + 1500);
    assert_eq!( later.duration_since(t), millis(1500));
    assert_eq!( t.duration_since(later), secs(0));
}
