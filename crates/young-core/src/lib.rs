//! Young Core Types and Operations
//!
//! This crate provides the combinatorial core for working with Young
//! diagrams. It includes:
//!
//! - **Cells**: Grid coordinates with diagonal content ([`cell::Cell`])
//! - **Diagrams**: Partitions materialized as rows of cells ([`diagram::YoungDiagram`])
//! - **Errors**: The failure modes of diagram operations ([`error::DiagramError`])
//! - **Lattice**: Containment, covering and ranks of Young's lattice ([`lattice`] module)
//!
//! # Example
//!
//! ```
//! use young_core::{BigUint, Cell, YoungDiagram};
//!
//! let diagram = YoungDiagram::new(vec![3, 2]).unwrap();
//! assert_eq!(diagram.size(), 5);
//! assert_eq!(
//!     diagram.addable_cells(),
//!     vec![Cell::new(3, 0), Cell::new(2, 1), Cell::new(0, 2)]
//! );
//! assert_eq!(diagram.number_of_standard_tableaux(), BigUint::from(5u32));
//! ```

pub mod cell;
pub mod diagram;
pub mod error;
pub mod lattice;

pub use num_bigint::BigUint;

pub use cell::Cell;
pub use diagram::YoungDiagram;
pub use error::DiagramError;
