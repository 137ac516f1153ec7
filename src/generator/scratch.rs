use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Writes `markup` to `<dir>/<name>-XXXXXX.svg`. The file is removed when
/// the handle drops.
pub(crate) fn stage_svg(dir: &Path, name: &str, markup: &str) -> Result<NamedTempFile> {
    let scratch_err = |source| Error::Scratch {
        name: name.to_string(),
        source,
    };

    let mut file = tempfile::Builder::new()
        .prefix(&format!("{name}-"))
        .suffix(".svg")
        .tempfile_in(dir)
        .map_err(scratch_err)?;

    file.write_all(markup.as_bytes()).map_err(scratch_err)?;
    file.flush().map_err(scratch_err)?;

    log::debug!("staged {name} at {}", file.path().display());
    Ok(file)
}
