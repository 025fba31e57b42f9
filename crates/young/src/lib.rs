//! Young - Young diagrams from partition text to rendered grids.
//!
//! Parsing of partition text, text rendering, and configuration on top of
//! the combinatorial core in [`young_core`].

pub mod config;
pub mod render;

mod error;
mod parse;

pub use young_core::{BigUint, Cell, DiagramError, YoungDiagram, lattice};

pub use error::YoungError;
pub use render::Marks;

use log::{debug, info, trace};

use config::AppConfig;
use render::TextRenderer;

/// Builder for parsing and rendering Young diagrams.
///
/// # Examples
///
/// ```rust
/// use young::{DiagramBuilder, Marks, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let diagram = builder.parse("3, 2").expect("Failed to parse");
/// assert_eq!(diagram.size(), 5);
///
/// let text = builder.render(&diagram, Marks::Addable);
/// assert_eq!(text, "■ ■ ■ +\n■ ■ +\n+");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse partition text into a diagram.
    ///
    /// Row lengths may be separated by commas or whitespace and optionally
    /// wrapped in brackets, e.g. `5,5,2,1` or `[5, 5, 2, 1]`. Blank input is
    /// the empty diagram.
    ///
    /// # Errors
    ///
    /// Returns [`YoungError::Parse`] for malformed text and
    /// [`YoungError::Diagram`] if the row lengths do not form a partition.
    pub fn parse(&self, source: &str) -> Result<YoungDiagram, YoungError> {
        info!(source; "Parsing partition");

        let partition = parse::parse_partition(source)?;
        trace!(partition:?; "Parsed row lengths");

        let diagram = YoungDiagram::new(partition)?;
        debug!(size = diagram.size(), rows = diagram.rows(); "Diagram parsed successfully");

        Ok(diagram)
    }

    /// Render a diagram as a text grid, highlighting the cells selected by
    /// `marks`.
    pub fn render(&self, diagram: &YoungDiagram, marks: Marks) -> String {
        debug!(diagram:%, marks:%; "Rendering diagram");
        TextRenderer::new(self.config.render()).render(diagram, marks)
    }

    /// Render the hook length of every cell of a diagram.
    pub fn render_hooks(&self, diagram: &YoungDiagram) -> String {
        debug!(diagram:%; "Rendering hook lengths");
        TextRenderer::new(self.config.render()).render_hooks(diagram)
    }
}
