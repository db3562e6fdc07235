//! # Themed Template Rendering
//!
//! Output is produced by minijinja templates. Templates name styles rather
//! than colors (`{{ title | style("title") }}`); a [`Theme`] maps those names
//! to `console::Style`s. There is a light and a dark theme, and
//! [`ThemeMode::Auto`] asks the system which one to use.
//!
//! When colors are off (piped output, `--no-color`) the `style` filter
//! passes text through unchanged. Unknown style names are prefixed with
//! [`MISSING_STYLE_INDICATOR`] either way, to catch typos in templates.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use snipz::config::ThemeMode;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles used by the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. If a style with the same name exists, it is replaced.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

/// The light and dark variants of the snipz look.
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeSet {
    pub fn resolve(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
            ThemeMode::Auto => match detect_system_mode() {
                ThemeMode::Light => &self.light,
                _ => &self.dark,
            },
        }
    }
}

/// Dark unless the system reports a light preference.
pub fn detect_system_mode() -> ThemeMode {
    match dark_light::detect() {
        dark_light::Mode::Light => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders `template` with `data`, styling through `theme` when `use_color`.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, theme.clone(), use_color);

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
}
