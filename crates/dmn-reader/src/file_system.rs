//! Reading JSON from local files

use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::decode;
use crate::error::{ReaderError, ReaderResult};

/// Open `path` and decode its JSON content
///
/// The file handle is dropped before returning, whether decoding
/// succeeded or not.
pub fn read_json_from_file<T, P>(path: P) -> ReaderResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading JSON file");

    let file = File::open(path).map_err(|source| ReaderError::File {
        path: path.to_path_buf(),
        source,
    })?;

    decode::read_json(file)
}
