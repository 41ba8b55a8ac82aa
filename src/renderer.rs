//! Renders aggregated groups into Go source using tera templates.
use std::collections::HashMap;

use tera::{Tera, Value};

use crate::{Result, config::OutputMode, types::TemplateContext};

pub mod templates;

/// Template driven renderer for a single output mode.
pub struct Renderer {
    tera: Tera,
    mode: OutputMode,
}

impl Renderer {
    /// Create a renderer using the built-in templates.
    pub fn new(mode: OutputMode) -> Result<Self> {
        Self::build(
            mode,
            templates::DEFAULT_GROUPS_TEMPLATE,
            templates::DEFAULT_STANDALONE_TEMPLATE,
        )
    }

    /// Create a renderer whose template for `mode` is replaced by `template`.
    /// The built-in `groups` template stays available for `include`.
    pub fn with_template(mode: OutputMode, template: &str) -> Result<Self> {
        match mode {
            OutputMode::Standalone => Self::build(
                mode,
                templates::DEFAULT_GROUPS_TEMPLATE,
                template,
            ),
            OutputMode::Append => Self::build(
                mode,
                template,
                templates::DEFAULT_STANDALONE_TEMPLATE,
            ),
        }
    }

    fn build(mode: OutputMode, groups: &str, standalone: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("go_quote", go_quote);
        tera.add_raw_templates(vec![
            (templates::GROUPS, groups),
            (templates::STANDALONE, standalone),
        ])?;

        Ok(Self { tera, mode })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let context = tera::Context::from_serialize(context)?;

        let name = match self.mode {
            OutputMode::Standalone => templates::STANDALONE,
            OutputMode::Append => templates::GROUPS,
        };

        Ok(self.tera.render(name, &context)?)
    }
}

/// Tera filter producing the contents of a Go interpreted string literal.
fn go_quote(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = tera::try_get_value!("go_quote", "value", String, value);
    Ok(Value::String(escape_go_string(&raw)))
}

/// Escape text for embedding between double quotes in Go source.
pub fn escape_go_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str(r"\n"),
            '\r' => escaped.push_str(r"\r"),
            '\t' => escaped.push_str(r"\t"),
            c if c.is_ascii_control() => {
                escaped.push_str(&format!("\\x{:02x}", c as u32))
            }
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
