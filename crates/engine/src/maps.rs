//! Map loading.
//!
//! Two on-disk formats are accepted:
//! - `.json`: a JSON array of row strings, e.g. `["###", "# #", "###"]`
//! - anything else: plain text, one row per line, `#` wall and space empty

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Grid;

/// Where the active map came from, for logging and the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for MapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapSource::Builtin => write!(f, "built-in map"),
            MapSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the map at `path`, or the built-in map when `path` is None.
pub fn load_grid(path: Option<&Path>) -> Result<(Grid, MapSource)> {
    let Some(path) = path else {
        return Ok((Grid::builtin(), MapSource::Builtin));
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read map {}", path.display()))?;
    let grid = parse_grid(path, &text)
        .with_context(|| format!("invalid map {}", path.display()))?;

    log::debug!(
        "loaded {}x{} map from {}",
        grid.side(),
        grid.side(),
        path.display()
    );
    Ok((grid, MapSource::File(path.to_path_buf())))
}

fn parse_grid(path: &Path, text: &str) -> Result<Grid> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(text.parse()?)
    }
}
