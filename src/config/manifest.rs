use indexmap::IndexMap;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Optional TOML overrides for a batch.
///
/// ```toml
/// color = "#D4B96A"
/// size = 96
/// command = "rsvg-convert"
///
/// [icons]
/// dot = '''<svg ...><circle stroke="{{color}}" .../></svg>'''
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub color: Option<String>,
    pub size: Option<u32>,
    pub command: Option<String>,
    #[serde(default)]
    pub icons: IndexMap<String, String>,
}

pub(crate) fn parse_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest_str(&content)
}

pub(crate) fn parse_manifest_str(content: &str) -> Result<Manifest> {
    Ok(toml::from_str(content)?)
}
