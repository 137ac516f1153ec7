pub mod hash;
pub mod paths;
pub mod strings;

pub(crate) use hash::digest;
pub(crate) use paths::png_path;
pub(crate) use strings::{hex_color, icon_name};
