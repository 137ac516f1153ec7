use std::path::Path;

use crate::error::Result;

/// One icon ready to be rasterized.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub name: &'a str,
    pub markup: &'a str,
    /// The markup staged on disk, for tools that read from a file.
    pub source: &'a Path,
    pub output: &'a Path,
    /// Width and height of the PNG, in pixels.
    pub size: u32,
}

/// A way of turning a [`Job`] into `job.output`.
///
/// Returning [`Error::ToolNotFound`](crate::Error::ToolNotFound) hands the
/// job to the next rasterizer in line; any other error is final.
pub trait Rasterizer {
    fn name(&self) -> &str;

    fn rasterize(&self, job: &Job<'_>) -> Result<()>;
}
