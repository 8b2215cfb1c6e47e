//! JSON persistence for room and world records

use crate::io::configuration::JSON_INDENT;
use crate::io::error::{ExtractionError, Result, WithPath};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a value as pretty-printed JSON with four-space indentation
///
/// # Errors
///
/// Returns an error if the file cannot be created or the value fails to serialize
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let file = File::create(path).with_path(path, "create file")?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|source| ExtractionError::JsonExport {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().with_path(path, "write file")
}
