use crate::diff::DEFAULT_CONTEXT;
use crate::render::Role;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_context")]
    pub context: usize,
    #[serde(default = "default_css")]
    pub css: bool,
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default)]
    pub classes: ClassNames,
    /// Path to a Tera template replacing the builtin stylesheet.
    pub stylesheet: Option<PathBuf>,
    /// Contents of `stylesheet`, filled in by the loader.
    #[serde(skip)]
    pub stylesheet_template: Option<String>,
}

fn default_context() -> usize {
    DEFAULT_CONTEXT
}

fn default_css() -> bool {
    true
}

fn default_container() -> String {
    "diff".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: default_context(),
            css: default_css(),
            container: default_container(),
            classes: ClassNames::default(),
            stylesheet: None,
            stylesheet_template: None,
        }
    }
}

/// CSS class emitted for each line role. Unset entries fall back to the
/// role's own name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassNames {
    pub control: String,
    pub insert: String,
    pub delete: String,
    pub highlight: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            control: Role::Control.name().to_string(),
            insert: Role::Insert.name().to_string(),
            delete: Role::Delete.name().to_string(),
            highlight: Role::Highlight.name().to_string(),
        }
    }
}

impl ClassNames {
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Control => &self.control,
            Role::Insert => &self.insert,
            Role::Delete => &self.delete,
            Role::Highlight => &self.highlight,
        }
    }
}

/// Class names end up both in attributes and in stylesheet selectors, so
/// each must be a plain CSS identifier: ASCII letters, digits, `_` and `-`,
/// not starting with a digit.
pub fn validate_config(config: &Config) -> Vec<String> {
    let mut errors = Vec::new();

    let named = Role::ALL
        .iter()
        .map(|role| (role.name(), config.classes.get(*role)))
        .chain(std::iter::once(("container", config.container.as_str())));
    for (key, class) in named {
        if class.is_empty() {
            errors.push(format!("class for '{key}' must not be empty"));
        } else if let Some(bad) = class
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
        {
            errors.push(format!(
                "class for '{key}': '{class}' contains invalid character {bad:?}"
            ));
        } else if class.starts_with(|c: char| c.is_ascii_digit()) {
            errors.push(format!(
                "class for '{key}': '{class}' must not start with a digit"
            ));
        }
    }

    // Line roles must stay distinguishable; highlight only ever nests inside them.
    let line_roles = [Role::Control, Role::Insert, Role::Delete];
    for (i, a) in line_roles.iter().enumerate() {
        for b in &line_roles[i + 1..] {
            let class = config.classes.get(*a);
            if !class.is_empty() && class == config.classes.get(*b) {
                errors.push(format!(
                    "roles '{}' and '{}' share the class '{class}'",
                    a.name(),
                    b.name()
                ));
            }
        }
    }

    errors
}
