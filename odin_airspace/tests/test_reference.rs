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


use std::{num::NonZeroU32, time::Duration};
use odin_airspace::{Airport, AirportCategory, Sector, Route, ReferenceTables, AirspaceConfig, AltitudeUnit, EngineConfig, load_config};
use odin_airspace::errors::OdinAirspaceError;

fn airport (code: &str, lon: f64, lat: f64)->Airport {
    Airport { icao_code: code.to_string(), name: format!("{code} airport"), latitude: lat, longitude: lon, hourly_capacity: 30, category: AirportCategory::International }
}

fn sector (id: &str, alt_min: f64, alt_max: f64)->Sector {
    Sector {
        id: id.to_string(), name: format!("sector {id}"), center_latitude: 20.0, center_longitude: 78.0, area: "Central".to_string(),
        capacity: NonZeroU32::new(10).unwrap(), altitude_min: alt_min, altitude_max: alt_max
    }
}

fn route (id: &str, from: &str, to: &str)->Route {
    Route { id: id.to_string(), from: from.to_string(), to: to.to_string() }
}

fn is_config_error<T> (res: Result<T,OdinAirspaceError>)->bool {
    match res {
        Err(OdinAirspaceError::ConfigError(msg)) => { println!("config error: {msg}"); true }
        _ => false
    }
}

#[test]
fn test_valid_tables() {
    let tables = ReferenceTables::new(
        vec![ airport("VIDP", 77.1, 28.6), airport("VABB", 72.9, 19.1) ],
        vec![ sector("NAG", 6000.0, 13000.0), sector("HYD", 1000.0, 1000.0) ],
        vec![ route("DEL-BOM", "VIDP", "VABB") ]
    ).unwrap();

    assert_eq!( tables.airports().len(), 2);
    assert_eq!( tables.airport("VABB").unwrap().longitude, 72.9);
    assert!( tables.airport("XXXX").is_none());
    assert_eq!( tables.sector("HYD").unwrap().altitude_min, 1000.0);

    let (from,to) = tables.route_endpoints( &tables.routes()[0]).unwrap();
    assert_eq!( (from.icao_code.as_str(), to.icao_code.as_str()), ("VIDP", "VABB"));
}

#[test]
fn test_invalid_tables() {
    let airports = || vec![ airport("VIDP", 77.1, 28.6), airport("VABB", 72.9, 19.1) ];

    assert!( is_config_error( ReferenceTables::new( vec![ airport("VIDP", 77.1, 28.6), airport("VIDP", 72.9, 19.1)], vec![], vec![])));
    assert!( is_config_error( ReferenceTables::new( vec![ airport(" ", 77.1, 28.6)], vec![], vec![])));
    assert!( is_config_error( ReferenceTables::new( vec![ airport("VIDP", 777.1, 28.6)], vec![], vec![])));
    assert!( is_config_error( ReferenceTables::new( airports(), vec![ sector("NAG", 13000.0, 6000.0)], vec![])));
    assert!( is_config_error( ReferenceTables::new( airports(), vec![ sector("NAG", 0.0, 1.0), sector("NAG", 0.0, 1.0)], vec![])));
    assert!( is_config_error( ReferenceTables::new( airports(), vec![], vec![ route("DEL-XXX", "VIDP", "XXXX")])));
    assert!( is_config_error( ReferenceTables::new( airports(), vec![], vec![ route("R", "VIDP", "VABB"), route("R", "VABB", "VIDP")])));
}

#[test]
fn test_zero_capacity_fails_to_load() {
    let input = r#"( id: "NAG", name: "Nagpur", center_latitude: 21.1, center_longitude: 79.0, area: "Central", capacity: 0, altitude_min: 0.0, altitude_max: 1.0 )"#;
    let res: Result<Sector,_> = ron::from_str( input);
    assert!( res.is_err());

    let res: Result<Sector,_> = ron::from_str( &input.replace("capacity: 0", "capacity: 5"));
    assert_eq!( res.unwrap().capacity.get(), 5);
}

#[test]
fn test_default_config() {
    let config: AirspaceConfig = load_config( "airspace.ron").unwrap();
    println!("region: {}, bbox: {}", config.region, config.bbox);

    assert_eq!( config.engine.altitude_unit, AltitudeUnit::Meters);
    assert_eq!( config.engine.flow_control_threshold, 30);
    assert_eq!( config.update_interval.as_secs(), 60);

    let tables = config.reference_tables().unwrap();
    assert!( tables.airport("VIDP").is_some());
    assert!( tables.sector("NAG").is_some());
    assert_eq!( tables.routes().len(), config.routes.len());
}

#[test]
fn test_invalid_engine_config() {
    let engine = EngineConfig::default();
    assert!( engine.validate().is_ok());

    assert!( is_config_error( EngineConfig { high_utilization: f64::NAN, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { domestic_max_altitude: f64::INFINITY, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { medium_utilization: 90.0, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { medium_utilization: -1.0, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { sector_half_width_deg: -1.5, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { sector_half_width_deg: 0.0, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { near_airport_radius_km: -50.0, ..engine.clone() }.validate()));
    assert!( is_config_error( EngineConfig { arrival_departure_max_altitude: 25000.0, ..engine.clone() }.validate()));

    // equal thresholds are still ordered
    assert!( EngineConfig { medium_utilization: 85.0, ..engine.clone() }.validate().is_ok());

    // engine and timing violations are fatal when the config gets loaded
    let mut config: AirspaceConfig = load_config( "airspace.ron").unwrap();
    config.engine.high_utilization = f64::NAN;
    assert!( is_config_error( config.reference_tables()));

    let mut config: AirspaceConfig = load_config( "airspace.ron").unwrap();
    config.fetch_timeout = Duration::ZERO;
    assert!( is_config_error( config.reference_tables()));
}
