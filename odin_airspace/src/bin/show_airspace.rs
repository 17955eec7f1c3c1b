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


use anyhow::{anyhow,Result};
use tokio::time::timeout;
use tracing_subscriber::EnvFilter;
use odin_common::define_cli;
use odin_airspace::{load_airspace_config, feed::{StateFeed,ReplayFeed}, opensky::OpenSkyFeed, pipeline::process};

define_cli! { ARGS [about="show sector occupancy, overflight flow and advisories of a monitored airspace"] =
    json: bool [help="print the snapshot as JSON", long],
    replay: Option<String> [help="read states from a recorded OpenSky response file instead of the live feed", long],
    config: Option<String> [help="airspace config file (default is to look up airspace.ron)", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let config = load_airspace_config( ARGS.config.as_deref())?;
    config.engine.check_altitude_unit();
    let tables = config.reference_tables()?;

    let feed: Box<dyn StateFeed> = match &ARGS.replay {
        Some(path) => Box::new( ReplayFeed::new( path)),
        None => Box::new( OpenSkyFeed::new( config.feed.clone()))
    };

    let feed_snapshot = timeout( config.fetch_timeout, feed.fetch( &config.bbox)).await
        .map_err( |_| anyhow!("{} feed timed out after {:?}", feed.name(), config.fetch_timeout))??;
    let snapshot = process( feed_snapshot, &tables, &config.engine);

    if ARGS.json {
        println!("{}", snapshot.to_json()?);
    } else {
        println!("airspace {} {}", config.region, config.bbox);
        print!("{snapshot}");
    }

    Ok(())
}
