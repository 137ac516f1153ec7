use std::path::{Path, PathBuf};

pub(crate) fn png_path(output_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    output_dir.as_ref().join(format!("{name}.png"))
}
