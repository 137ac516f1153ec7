use indexmap::IndexMap;

use super::{IconDefinition, Style};
use crate::config::expand_markup;
use crate::error::{Error, Result};
use crate::utils::icon_name;

/// Ordered, immutable mapping from icon name to definition. Every markup
/// was expanded with the same [`Style`].
#[derive(Debug, Clone)]
pub struct IconSet {
    style: Style,
    icons: IndexMap<String, IconDefinition>,
}

impl IconSet {
    pub fn expand<N, T>(style: Style, templates: impl IntoIterator<Item = (N, T)>) -> Result<Self>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        let mut icons = IndexMap::new();

        for (name, template) in templates {
            let name = icon_name(name.as_ref())?;
            if icons.contains_key(&name) {
                return Err(Error::DuplicateIcon(name));
            }

            let markup = expand_markup(&name, template.as_ref(), &style)?;
            icons.insert(name.clone(), IconDefinition { name, markup });
        }

        Ok(IconSet { style, icons })
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn get(&self, name: &str) -> Option<&IconDefinition> {
        self.icons.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconDefinition> {
        self.icons.values()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
