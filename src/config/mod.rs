mod builtin;
mod manifest;
mod template;

pub use builtin::BUILTIN_ICONS;
pub use manifest::Manifest;
pub(crate) use manifest::parse_manifest;
pub(crate) use template::expand_markup;
