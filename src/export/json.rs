use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{ExportError, ExportSummary};

/// Writes `summary` as pretty-printed JSON to `path`.
pub fn write_summary(summary: &ExportSummary, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(summary)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
