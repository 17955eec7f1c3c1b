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


use anyhow::Result;
use tokio::io::{AsyncBufReadExt,BufReader};
use tracing_subscriber::EnvFilter;
use odin_common::define_cli;
use odin_airspace::{
    load_airspace_config, feed::{StateFeed,ReplayFeed}, opensky::OpenSkyFeed,
    actor::{spawn_airspace_actor,AirspaceState}, sector::AlertLevel
};

define_cli! { ARGS [about="monitor airspace occupancy. Each line entered on stdin triggers a manual refresh"] =
    replay: Option<String> [help="read states from a recorded OpenSky response file instead of the live feed", long],
    config: Option<String> [help="airspace config file (default is to look up airspace.ron)", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let config = load_airspace_config( ARGS.config.as_deref())?;
    config.engine.check_altitude_unit();

    let feed: Box<dyn StateFeed> = match &ARGS.replay {
        Some(path) => Box::new( ReplayFeed::new( path)),
        None => Box::new( OpenSkyFeed::new( config.feed.clone()))
    };

    let (handle, jh) = spawn_airspace_actor( config, feed, print_summary)?;
    let mut lines = BufReader::new( tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line {
                Ok(Some(_)) => match handle.refresh().await {
                    Ok(outcome) => println!("manual refresh: {outcome:?}"),
                    Err(e) => { eprintln!("refresh failed: {e}"); break }
                }
                _ => break // EOF or broken stdin
            }
        }
    }

    let _ = handle.terminate().await; // actor might already be gone
    jh.await?;
    Ok(())
}

fn print_summary (state: &AirspaceState) {
    print!("[{}] {} ", state.last_attempt.map( |t| t.to_string()).unwrap_or_default(), state.status);

    if let Some(snapshot) = &state.snapshot {
        println!("{} aircraft, {} overflights, {} high / {} medium sectors",
            snapshot.aircraft.len(), snapshot.overflights.total_overflights,
            snapshot.sectors.count_alert_level( AlertLevel::High), snapshot.sectors.count_alert_level( AlertLevel::Medium));

        for a in &snapshot.advisories { println!("    {a}") }
    } else {
        println!("no data");
    }

    if let Some(err) = &state.last_error { println!("    last error: {err}") }
}
