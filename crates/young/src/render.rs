//! Plain-text rendering of Young diagrams.
//!
//! Diagrams are drawn top row first, one line per row, using the glyphs from
//! [`RenderConfig`]. The renderer only reads the diagram's public queries:
//! its partition, addable and removable cells, and hook lengths.

use std::{fmt, str::FromStr};

use young_core::YoungDiagram;

use crate::config::RenderConfig;

/// Which cells, if any, to highlight when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Marks {
    /// Draw the diagram's cells only.
    #[default]
    None,

    /// Mark every addable cell, with room for the new column and row.
    Addable,

    /// Mark every removable cell.
    Removable,
}

impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marks::None => write!(f, "none"),
            Marks::Addable => write!(f, "addable"),
            Marks::Removable => write!(f, "removable"),
        }
    }
}

impl FromStr for Marks {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Marks::None),
            "addable" => Ok(Marks::Addable),
            "removable" => Ok(Marks::Removable),
            other => Err(format!(
                "unknown marks `{other}`, expected one of: none, addable, removable"
            )),
        }
    }
}

/// Draws diagrams as text grids.
pub(crate) struct TextRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> TextRenderer<'a> {
    pub(crate) fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Renders the diagram's cells, highlighting the cells selected by `marks`.
    pub(crate) fn render(&self, diagram: &YoungDiagram, marks: Marks) -> String {
        let (height, width, marked, glyph) = match marks {
            Marks::None => (diagram.rows(), diagram.width(), Vec::new(), ""),
            Marks::Addable => (
                diagram.rows() + 1,
                diagram.width() + 1,
                diagram.addable_cells(),
                self.config.addable(),
            ),
            Marks::Removable => (
                diagram.rows(),
                diagram.width(),
                diagram.removable_cells(),
                self.config.removable(),
            ),
        };

        let mut grid = vec![vec![self.config.blank(); width]; height];
        for (row, &length) in grid.iter_mut().zip(diagram.partition()) {
            row[..length].fill(self.config.cell());
        }
        for cell in marked {
            grid[cell.y()][cell.x()] = glyph;
        }

        self.join_rows(grid.iter().map(|row| row.join(self.config.separator())))
    }

    /// Renders the hook length of every cell, right-aligned to a common width.
    pub(crate) fn render_hooks(&self, diagram: &YoungDiagram) -> String {
        let hooks = diagram.hook_lengths();
        let digits = hooks
            .iter()
            .flatten()
            .max()
            .map_or(1, |widest| widest.to_string().len());

        self.join_rows(hooks.iter().map(|row| {
            row.iter()
                .map(|hook| format!("{hook:>digits$}"))
                .collect::<Vec<_>>()
                .join(self.config.separator())
        }))
    }

    fn join_rows(&self, rows: impl Iterator<Item = String>) -> String {
        rows.map(|row| row.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
