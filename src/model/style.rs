use crate::error::{Error, Result};
use crate::utils::hex_color;

pub const DEFAULT_COLOR: &str = "#D4B96A";
pub const DEFAULT_SIZE: u32 = 96;

/// Stroke color and square canvas size shared by every icon in a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    color: String,
    size: u32,
}

impl Style {
    pub fn new(color: &str, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }

        Ok(Style {
            color: hex_color(color)?,
            size,
        })
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            color: DEFAULT_COLOR.to_string(),
            size: DEFAULT_SIZE,
        }
    }
}
