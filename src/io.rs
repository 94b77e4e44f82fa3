use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads and parses a required JSON input. With `strip_bom` a leading UTF-8
/// byte-order mark is skipped, otherwise it is left for the parser to reject.
pub fn read_json<T: DeserializeOwned>(path: &Path, strip_bom: bool) -> Result<T> {
    log::debug!("reading {}", path.display());
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = match bytes.strip_prefix(BOM) {
        Some(rest) if strip_bom => rest,
        _ => &bytes[..],
    };
    let parse_error = |source: serde_json::Error| Error::Parse {
        path: path.to_path_buf(),
        source,
    };
    // Design trees nest far past serde_json's default limit of 128; grow the
    // stack on demand instead of rejecting them.
    let mut de = serde_json::Deserializer::from_slice(data);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(parse_error)?;
    de.end().map_err(parse_error)?;
    Ok(value)
}

/// Like [`read_json`] without BOM handling, but any failure just means "absent".
pub fn read_optional(path: &Path) -> Option<Value> {
    match read_json(path, false) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("ignoring optional input: {err}");
            None
        }
    }
}

/// Pretty-prints `value` (two-space indent, non-ASCII kept as is) over `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    log::debug!("writing {} ({} bytes)", path.display(), data.len());
    fs::write(path, data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
