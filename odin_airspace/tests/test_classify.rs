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


use odin_airspace::{AltitudeUnit, EngineConfig, Airport, AirportCategory, aircraft::{AircraftState,FlightType}};
use odin_airspace::classify::{classify,classify_all,is_near_airport};
use odin_common::geo::GeoPoint;
use uom::si::{f64::Length, length::kilometer};

fn vidp ()->Airport {
    Airport {
        icao_code: "VIDP".to_string(), name: "Indira Gandhi International".to_string(),
        latitude: 28.5665, longitude: 77.1031, hourly_capacity: 80, category: AirportCategory::Hub
    }
}

fn state (icao24: &str, lon: f64, lat: f64, alt: Option<f64>, on_ground: bool)->AircraftState {
    AircraftState {
        icao24: icao24.to_string(),
        callsign: icao24.to_uppercase(),
        origin_country: "India".to_string(),
        latitude: Some(lat),
        longitude: Some(lon),
        baro_altitude: alt,
        velocity: Some(200.0),
        track: Some(90.0),
        vertical_rate: None,
        on_ground
    }
}

const NEAR: (f64,f64) = (77.15, 28.60); // ~6km from VIDP
const FAR: (f64,f64) = (80.0, 21.0);

#[test]
fn test_ground_always_wins() {
    let airports = vec![vidp()];
    let config = EngineConfig::default();

    for (lon,lat) in [NEAR,FAR] {
        for alt in [None, Some(0.0), Some(5000.0), Some(30000.0)] {
            assert_eq!( classify( &state("a1", lon, lat, alt, true), &airports, &config), FlightType::Ground);
        }
    }
}

#[test]
fn test_decision_order() {
    let airports = vec![vidp()];
    let config = EngineConfig::default();

    let cases = [
        (FAR,  Some(25000.0), FlightType::Overflight),
        (NEAR, Some(25000.0), FlightType::Transit),   // high but near an airport
        (NEAR, Some(5000.0),  FlightType::ArrivalDeparture),
        (NEAR, Some(15000.0), FlightType::Domestic),  // near but above arrival/departure altitude
        (FAR,  Some(15000.0), FlightType::Domestic),
        (FAR,  Some(20000.0), FlightType::Transit),   // neither above overflight nor below domestic
        (FAR,  None,          FlightType::Transit),
        (NEAR, None,          FlightType::Transit),
    ];

    for ((lon,lat), alt, expected) in cases {
        let s = state("a1", lon, lat, alt, false);
        let ft = classify( &s, &airports, &config);
        println!("{lon},{lat} {alt:?} -> {ft}");
        assert_eq!( ft, expected);
        assert_eq!( classify( &s, &airports, &config), ft); // deterministic
    }
}

#[test]
fn test_invalid_position_is_unknown() {
    let airports = vec![vidp()];
    let config = EngineConfig::default();

    let mut s = state("a1", 0.0, 28.0, Some(5000.0), false);
    assert_eq!( classify( &s, &airports, &config), FlightType::Unknown);

    s.longitude = None;
    assert_eq!( classify( &s, &airports, &config), FlightType::Unknown);

    s.longitude = Some(f64::NAN);
    assert_eq!( classify( &s, &airports, &config), FlightType::Unknown);
}

#[test]
fn test_altitude_units() {
    let airports = vec![vidp()];
    let meters = EngineConfig::default();
    let feet = EngineConfig { altitude_unit: AltitudeUnit::Feet, ..EngineConfig::default() };

    // 7000m is ~22966ft
    let s = state("a1", FAR.0, FAR.1, Some(7000.0), false);
    assert_eq!( classify( &s, &airports, &meters), FlightType::Domestic);
    assert_eq!( classify( &s, &airports, &feet), FlightType::Overflight);

    // 2500m is ~8202ft
    let s = state("a2", NEAR.0, NEAR.1, Some(2500.0), false);
    assert_eq!( classify( &s, &airports, &feet), FlightType::ArrivalDeparture);

    assert!( !meters.check_altitude_unit());
    assert!( feet.check_altitude_unit());
}

#[test]
fn test_near_airport_radius() {
    let airports = vec![vidp()];
    let pos = GeoPoint::from_lon_lat_degrees( NEAR.0, NEAR.1);

    assert!( is_near_airport( &pos, &airports, Length::new::<kilometer>(50.0)));
    assert!( !is_near_airport( &pos, &airports, Length::new::<kilometer>(3.0)));
    assert!( !is_near_airport( &pos, &[], Length::new::<kilometer>(50.0)));
}

#[test]
fn test_classify_all() {
    let airports = vec![vidp()];
    let config = EngineConfig::default();

    let mut no_pos = state("b2", 0.0, 0.0, Some(9000.0), false);
    no_pos.latitude = None;

    let states = vec![
        state("a1", NEAR.0, NEAR.1, Some(1000.0), false),
        no_pos,
        state("c3", 0.0, 0.0, Some(9000.0), false),
        state("d4", FAR.0, FAR.1, Some(25000.0), false),
        state("e5", NEAR.0, NEAR.1, None, true),
    ];
    let input = states.clone();

    let (aircraft, n_dropped) = classify_all( &states, &airports, &config);
    assert_eq!( states, input); // input is not touched
    assert_eq!( n_dropped, 2);

    let result: Vec<(&str,FlightType)> = aircraft.iter().map( |ac| (ac.icao24(), ac.flight_type())).collect();
    assert_eq!( result, vec![
        ("a1", FlightType::ArrivalDeparture),
        ("d4", FlightType::Overflight),
        ("e5", FlightType::Ground)
    ]);
    assert!( aircraft.iter().all( |ac| ac.flight_type() != FlightType::Unknown));
}
