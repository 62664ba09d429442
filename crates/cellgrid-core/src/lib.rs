//! # cellgrid-core
//!
//! Core data structures for the cellgrid cell engine.
//!
//! This crate provides the fundamental types used throughout cellgrid:
//! - [`Address`] - Cell coordinates and A1-style notation
//! - [`CellValue`] - Displayed values (text or numbers)
//! - [`Grid`] - The owning, bounds-checked cell container
//!
//! The formula language and its evaluator live in `cellgrid-formula`; the
//! gated editing surface lives in the `cellgrid` facade crate.
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{Address, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set_raw(Address::parse("A0").unwrap(), "hello").unwrap();
//!
//! // Or using row/column indices (0-based)
//! grid.set_raw(Address::new(0, 1), "world").unwrap();
//!
//! assert_eq!(grid.raw_text(Address::new(0, 0)), "hello");
//! ```

pub mod address;
pub mod error;
pub mod grid;
pub mod value;

// Re-exports for convenience
pub use address::Address;
pub use error::{Error, Result};
pub use grid::{Cell, Grid, GridDims};
pub use value::CellValue;

/// Default number of columns: one per letter of the display alphabet
pub const DEFAULT_COLUMNS: u16 = 26;

/// Default number of rows
pub const DEFAULT_ROWS: u32 = 100;
