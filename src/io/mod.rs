//! Input/output collaborators around the analysis core.

pub mod output;

use crate::errors::ModmapResult;
use std::path::Path;

/// Read a source file into memory. The core itself never touches the
/// filesystem; this is the only place input is acquired.
pub fn read_source(path: &Path) -> ModmapResult<String> {
    Ok(std::fs::read_to_string(path)?)
}
