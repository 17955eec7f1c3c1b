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

//! RON based configuration lookup. Configs are looked up in
//!   1. `$ODIN_ROOT/configs/<crate>/<filename>`
//!   2. `<crate-manifest-dir>/configs/<filename>`
//! Crates that define configs expand `define_load_config!()` at their top level and then
//! call the generated `load_config(filename)`

use std::{env, fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;

use crate::define_error;

pub const CONFIGS: &'static str = "configs";

define_error!{ pub OdinConfigError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::error::SpannedError) : "RON error: {0}",
    NotFoundError(String) : "config not found: {0}"
}

pub type Result<T> = std::result::Result<T, OdinConfigError>;

/// find the first existing config file for the given crate. `manifest_dir` is the compile time
/// CARGO_MANIFEST_DIR of the crate that owns the config
pub fn find_config_file (resource_crate: &str, manifest_dir: &str, filename: &str)->Option<PathBuf> {
    if let Ok(root) = env::var("ODIN_ROOT") {
        let path = Path::new(&root).join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new(manifest_dir).join(CONFIGS).join(filename);
    if path.is_file() { Some(path) } else { None }
}

pub fn load_config_path<C,P> (path: P)->Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// this is the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            /// load config using the `odin_common::config` lookup mechanism
            pub fn load_config<C> (filename: &str)->odin_common::config::Result<C> where C: serde::de::DeserializeOwned {
                let resource_crate = env!("CARGO_PKG_NAME");
                let manifest_dir = env!("CARGO_MANIFEST_DIR");

                match odin_common::config::find_config_file( resource_crate, manifest_dir, filename) {
                    Some(path) => odin_common::config::load_config_path( &path),
                    None => Err( odin_common::config::OdinConfigError::NotFoundError( filename.to_string()))
                }
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}
