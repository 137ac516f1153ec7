use std::fs;

use resvg::tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

use super::{Job, Rasterizer};
use crate::error::{Error, Result};

/// Renders with `resvg`, no external program needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    /// Renders `markup` onto a `size`×`size` canvas and encodes it as PNG.
    pub fn render_png(&self, name: &str, markup: &str, size: u32) -> Result<Vec<u8>> {
        let failed = |reason: String| Error::Rasterize {
            name: name.to_string(),
            strategy: self.name().to_string(),
            reason,
        };

        let tree = Tree::from_str(markup, &Options::default())
            .map_err(|e| failed(format!("invalid svg: {e}")))?;

        let mut pixmap = Pixmap::new(size, size)
            .ok_or_else(|| failed(format!("cannot allocate a {size}x{size} canvas")))?;

        let svg_size = tree.size();
        let transform = Transform::from_scale(
            size as f32 / svg_size.width(),
            size as f32 / svg_size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| failed(format!("png encoding failed: {e}")))
    }
}

impl Rasterizer for ResvgRasterizer {
    fn name(&self) -> &str {
        "resvg"
    }

    fn rasterize(&self, job: &Job<'_>) -> Result<()> {
        let png = self.render_png(job.name, job.markup, job.size)?;

        fs::write(job.output, png).map_err(|source| Error::Write {
            path: job.output.to_path_buf(),
            source,
        })
    }
}
