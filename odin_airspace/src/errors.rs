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


use thiserror::Error;
use odin_common;
use serde_json;
use ron;

pub type Result<T> = std::result::Result<T,OdinAirspaceError>;

#[derive(Error,Debug)]
pub enum OdinAirspaceError {
    #[error("feed unavailable {0}")]
    FeedUnavailable(String),

    #[error("parse error {0}")]
    ParseError(String),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config load error {0}")]
    ConfigLoadError( #[from] odin_common::config::OdinConfigError),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

impl OdinAirspaceError {
    /// does this mean we just didn't get data (as opposed to a broken setup)
    pub fn is_feed_unavailable (&self)->bool {
        matches!( self, OdinAirspaceError::FeedUnavailable(_))
    }
}

macro_rules! feed_unavailable {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinAirspaceError::FeedUnavailable( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use feed_unavailable;

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinAirspaceError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinAirspaceError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinAirspaceError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
