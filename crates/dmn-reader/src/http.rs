//! Reading JSON from HTTP(S) endpoints
//!
//! Requests are plain unauthenticated GETs through reqwest's blocking
//! client with its default settings. The response status is not
//! interpreted: a non-success response still has its body decoded, so an
//! error page typically surfaces as a decode error.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::decode;
use crate::error::{ReaderError, ReaderResult};

/// GET `url` and decode the response body as JSON
///
/// The response (and its connection) is released before returning,
/// whether decoding succeeded or not.
pub fn read_json_from_url<T>(url: &str) -> ReaderResult<T>
where
    T: DeserializeOwned,
{
    debug!(url, "Fetching JSON");

    let response = reqwest::blocking::get(url).map_err(|source| ReaderError::Network {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, status = %status, "Non-success response, decoding body anyway");
    }

    decode::read_json(response)
}
