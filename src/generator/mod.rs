mod command;
mod in_process;
mod rasterizer;
mod render;
mod scratch;

pub use command::{CommandRasterizer, DEFAULT_COMMAND};
pub use in_process::ResvgRasterizer;
pub use rasterizer::{Job, Rasterizer};
pub(crate) use render::{Batch, render_all, render_one};
