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

//! common utility functions for network operations

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::define_error;

define_error!{ pub OdinNetError =
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}",
    ParseError(String) : "parse error: {0}"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// basic auth credentials for requests that need them
#[derive(Debug,Clone)]
pub struct BasicAuth {
    pub user: String,
    pub password: Option<String>
}

/// HTTP GET a JSON resource with the given query parameters. Anything but a 200 status is an error,
/// as is a body we can't deserialize into `T`
pub async fn get_json<T> (client: &Client, url: &str, query: &[(&str,String)], auth: Option<&BasicAuth>)->Result<T> where T: DeserializeOwned {
    let mut req = client.get(url).query(query);
    if let Some(auth) = auth {
        req = req.basic_auth( &auth.user, auth.password.as_ref());
    }

    let response = req.send().await?;

    match response.status() {
        StatusCode::OK => {
            let text = response.text().await?;
            from_json( &text)
        }
        StatusCode::NOT_FOUND => {
            Err( OdinNetError::NotFoundError(url.to_string()))
        }
        other => {
            Err( OdinNetError::OpFailed(format!("response status {other:?}")))
        }
    }
}

pub fn from_json<T> (text: &str)->Result<T> where T: DeserializeOwned {
    serde_json::from_str(text).map_err(|e| OdinNetError::ParseError(e.to_string()))
}
