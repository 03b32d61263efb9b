//! Built-in data-source readers.
//!
//! Each reader module exposes:
//!
//! - a registry-shaped entry point taking named JSON arguments (what the
//!   [`crate::registry::Registry`] dispatches to), and
//! - typed lower-level functions for direct callers.
//!
//! Readers infer cell types from the source; there is no user-supplied
//! schema. Argument handling is closed per reader: a missing required
//! argument, or an argument name the reader does not accept, is a
//! [`crate::error::ReadError`] naming the parameter.

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod json;
pub mod parquet;

use crate::error::{ReadError, ReadResult};
use crate::manifest::ArgMap;

/// Reject any argument name not in `accepted`.
pub(crate) fn check_accepted(args: &ArgMap, accepted: &[&str]) -> ReadResult<()> {
    for key in args.keys() {
        if !accepted.contains(&key.as_str()) {
            return Err(ReadError::UnknownArgument { name: key.clone() });
        }
    }
    Ok(())
}

/// Fetch a required string argument.
pub(crate) fn require_str<'a>(args: &'a ArgMap, name: &'static str) -> ReadResult<&'a str> {
    match args.get(name) {
        None => Err(ReadError::MissingArgument { name }),
        Some(v) => as_str(v, name),
    }
}

/// Fetch an optional string argument.
pub(crate) fn opt_str<'a>(args: &'a ArgMap, name: &'static str) -> ReadResult<Option<&'a str>> {
    args.get(name).map(|v| as_str(v, name)).transpose()
}

/// Fetch an optional bool argument.
pub(crate) fn opt_bool(args: &ArgMap, name: &'static str) -> ReadResult<Option<bool>> {
    args.get(name)
        .map(|v| {
            v.as_bool().ok_or_else(|| ReadError::BadArgument {
                name: name.to_string(),
                message: format!("expected a boolean, got {v}"),
            })
        })
        .transpose()
}

/// Fetch an optional single-character argument (e.g. a CSV delimiter).
pub(crate) fn opt_char(args: &ArgMap, name: &'static str) -> ReadResult<Option<u8>> {
    let Some(s) = opt_str(args, name)? else {
        return Ok(None);
    };
    let mut bytes = s.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) => Ok(Some(b)),
        _ => Err(ReadError::BadArgument {
            name: name.to_string(),
            message: format!("expected a single ASCII character, got '{s}'"),
        }),
    }
}

fn as_str<'a>(v: &'a serde_json::Value, name: &'static str) -> ReadResult<&'a str> {
    v.as_str().ok_or_else(|| ReadError::BadArgument {
        name: name.to_string(),
        message: format!("expected a string, got {v}"),
    })
}
