//! Configuration types for Young diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderConfig`] - Glyphs used by the text renderer.
//!
//! # Example
//!
//! ```
//! # use young::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().cell(), "■");
//! assert!(config.render().validate().is_ok());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Glyphs used when drawing a diagram as text.
///
/// Fields that are not set fall back to their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Glyph for a cell of the diagram.
    cell: String,

    /// Glyph marking an addable cell.
    addable: String,

    /// Glyph marking a removable cell.
    removable: String,

    /// Glyph for grid positions outside the diagram.
    blank: String,

    /// Text placed between adjacent glyphs in a row.
    separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell: "■".to_string(),
            addable: "+".to_string(),
            removable: "□".to_string(),
            blank: " ".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl RenderConfig {
    /// Returns a copy with the cell glyph replaced.
    pub fn with_cell(mut self, cell: impl Into<String>) -> Self {
        self.cell = cell.into();
        self
    }

    /// Returns a copy with the addable glyph replaced.
    pub fn with_addable(mut self, addable: impl Into<String>) -> Self {
        self.addable = addable.into();
        self
    }

    /// Returns a copy with the removable glyph replaced.
    pub fn with_removable(mut self, removable: impl Into<String>) -> Self {
        self.removable = removable.into();
        self
    }

    /// Returns a copy with the separator replaced.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn cell(&self) -> &str {
        &self.cell
    }

    pub fn addable(&self) -> &str {
        &self.addable
    }

    pub fn removable(&self) -> &str {
        &self.removable
    }

    pub fn blank(&self) -> &str {
        &self.blank
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Checks that every glyph is non-empty.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first empty glyph.
    pub fn validate(&self) -> Result<(), String> {
        let glyphs = [
            ("cell", &self.cell),
            ("addable", &self.addable),
            ("removable", &self.removable),
            ("blank", &self.blank),
        ];

        match glyphs.iter().find(|(_, glyph)| glyph.is_empty()) {
            Some((name, _)) => Err(format!("render.{name} must not be empty")),
            None => Ok(()),
        }
    }
}
