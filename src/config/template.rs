use handlebars::Handlebars;
use serde_json::json;

use crate::error::{Error, Result};
use crate::model::Style;

/// Substitutes `{{color}}` and `{{size}}` in an icon template.
pub(crate) fn expand_markup(name: &str, template: &str, style: &Style) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);

    let data = json!({
        "color": style.color(),
        "size": style.size(),
    });

    handlebars
        .render_template(template, &data)
        .map_err(|source| Error::Template {
            name: name.to_string(),
            source: Box::new(source),
        })
}
