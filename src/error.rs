use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The program behind a command rasterizer is not installed.
    #[error("rasterizer '{program}' was not found")]
    ToolNotFound { program: String },

    #[error("failed to rasterize '{name}' with {strategy}: {reason}")]
    Rasterize {
        name: String,
        strategy: String,
        reason: String,
    },

    #[error("no rasterizer available for '{0}'")]
    NoRasterizer(String),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stage svg for '{name}': {source}")]
    Scratch {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read manifest '{}': {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("failed to expand markup for '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("icon '{0}' is defined more than once")]
    DuplicateIcon(String),

    #[error("icon name '{0}' must be non-empty and use only [A-Za-z0-9_-]")]
    InvalidName(String),

    #[error("stroke color '{0}' must be a hex color like #RGB or #RRGGBB")]
    InvalidColor(String),

    #[error("canvas size must be greater than zero")]
    InvalidSize,
}
