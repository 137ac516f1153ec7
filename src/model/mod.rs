mod definition;
mod icon_set;
mod report;
mod style;

pub use definition::IconDefinition;
pub use icon_set::IconSet;
pub use report::{Failed, OnError, Rendered, Report};
pub use style::{DEFAULT_COLOR, DEFAULT_SIZE, Style};
