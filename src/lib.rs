mod config;
mod error;
mod generator;
mod model;
mod utils;

pub use config::{BUILTIN_ICONS, Manifest};
pub use error::{Error, Result};
pub use generator::{CommandRasterizer, DEFAULT_COMMAND, Job, Rasterizer, ResvgRasterizer};
pub use model::{
    DEFAULT_COLOR, DEFAULT_SIZE, Failed, IconDefinition, IconSet, OnError, Rendered, Report, Style,
};

use crate::config::parse_manifest;
use crate::generator::Batch;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Batch rasterizer for a set of SVG icons.
///
/// ```no_run
/// let report = icon_raster::IconRaster::builder("public/icons")
///     .set_size(96)
///     .build()?;
/// assert!(report.is_success());
/// # Ok::<(), icon_raster::Error>(())
/// ```
pub struct IconRaster {
    output_dir: PathBuf,
    manifest: Option<PathBuf>,
    scratch_dir: Option<PathBuf>,

    color: Option<String>,
    size: Option<u32>,
    command: Option<String>,
    rasterizers: Option<Vec<Box<dyn Rasterizer>>>,
    icons: Vec<(String, String)>,
    on_error: OnError,
}

impl IconRaster {
    pub fn builder(output_dir: impl AsRef<Path>) -> IconRaster {
        IconRaster {
            output_dir: output_dir.as_ref().to_path_buf(),
            manifest: None,
            scratch_dir: None,
            color: None,
            size: None,
            command: None,
            rasterizers: None,
            icons: Vec::new(),
            on_error: OnError::default(),
        }
    }

    /// Loads color, size, command and icons from a TOML file at build time.
    /// Values set on the builder take precedence.
    pub fn set_manifest(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.manifest = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn set_scratch_dir(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        self.scratch_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn set_size(&mut self, size: u32) -> &mut Self {
        self.size = Some(size);
        self
    }

    pub fn set_command(&mut self, program: impl Into<String>) -> &mut Self {
        self.command = Some(program.into());
        self
    }

    /// Replaces the default `[command, resvg]` ranking.
    pub fn set_rasterizers(&mut self, rasterizers: Vec<Box<dyn Rasterizer>>) -> &mut Self {
        self.rasterizers = Some(rasterizers);
        self
    }

    pub fn set_on_error(&mut self, on_error: OnError) -> &mut Self {
        self.on_error = on_error;
        self
    }

    /// Adds an icon template. Once any icon is added, the built-in set and
    /// manifest icons are ignored.
    pub fn add_icon(&mut self, name: impl Into<String>, template: impl Into<String>) -> &mut Self {
        self.icons.push((name.into(), template.into()));
        self
    }

    pub fn build(&mut self) -> Result<Report> {
        let manifest = match &self.manifest {
            Some(path) => parse_manifest(path)?,
            None => Manifest::default(),
        };

        let icons = self.icon_set(&manifest)?;
        log::debug!(
            "rendering {} icons at {}px into {}",
            icons.len(),
            icons.style().size(),
            self.output_dir.display()
        );

        let rasterizers = match self.rasterizers.take() {
            Some(rasterizers) => rasterizers,
            None => {
                let program = self
                    .command
                    .clone()
                    .or(manifest.command)
                    .unwrap_or_else(|| DEFAULT_COMMAND.to_string());
                default_rasterizers(program)
            }
        };

        let scratch_dir = self.scratch_dir.clone().unwrap_or_else(env::temp_dir);
        let batch = Batch {
            rasterizers: &rasterizers,
            scratch_dir: &scratch_dir,
            on_error: self.on_error,
        };

        let report = generator::render_all(&batch, &icons, &self.output_dir);
        self.rasterizers = Some(rasterizers);
        report
    }

    fn icon_set(&self, manifest: &Manifest) -> Result<IconSet> {
        let color = self
            .color
            .as_deref()
            .or(manifest.color.as_deref())
            .unwrap_or(DEFAULT_COLOR);
        let size = self.size.or(manifest.size).unwrap_or(DEFAULT_SIZE);
        let style = Style::new(color, size)?;

        if !self.icons.is_empty() {
            IconSet::expand(style, self.icons.iter().map(|(n, t)| (n, t)))
        } else if !manifest.icons.is_empty() {
            IconSet::expand(style, &manifest.icons)
        } else {
            IconSet::expand(style, BUILTIN_ICONS)
        }
    }
}

fn default_rasterizers(program: String) -> Vec<Box<dyn Rasterizer>> {
    vec![
        Box::new(CommandRasterizer::new(program)),
        Box::new(ResvgRasterizer),
    ]
}

/// Renders every icon of `icons` into `<output_dir>/<name>.png` with the
/// default rasterizers, stopping at the first failure.
pub fn render_all(icons: &IconSet, output_dir: impl AsRef<Path>) -> Result<Report> {
    let rasterizers = default_rasterizers(DEFAULT_COMMAND.to_string());
    let scratch_dir = env::temp_dir();
    let batch = Batch {
        rasterizers: &rasterizers,
        scratch_dir: &scratch_dir,
        on_error: OnError::Abort,
    };
    generator::render_all(&batch, icons, output_dir.as_ref())
}

pub fn render_one(icon: &IconDefinition, size: u32, output: impl AsRef<Path>) -> Result<Rendered> {
    let rasterizers = default_rasterizers(DEFAULT_COMMAND.to_string());
    let scratch_dir = env::temp_dir();
    let batch = Batch {
        rasterizers: &rasterizers,
        scratch_dir: &scratch_dir,
        on_error: OnError::Abort,
    };
    generator::render_one(&batch, icon, size, output.as_ref())
}
