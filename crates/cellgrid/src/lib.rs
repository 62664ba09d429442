//! # cellgrid
//!
//! A spreadsheet-style cell engine: a fixed-size grid of addressable cells
//! whose content is either literal text or a formula over other cells,
//! with derived values recomputed on demand.
//!
//! ## Features
//!
//! - Total formula parsing: every input becomes a term, bad formula text
//!   displays as `INVALID` instead of failing
//! - Single references (`=A1`) and numeric folds (`=SUM(...)`,
//!   `=PRODUCT(...)`) with identity-element coercion for non-numeric
//!   arguments
//! - Pre-commit cycle detection: an edit that would make a cell depend on
//!   itself is rejected and the grid is left untouched
//! - Pull-based evaluation: values are pure functions of raw text, nothing
//!   is cached or invalidated
//!
//! ## Example
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! let a1 = Address::parse("A1").unwrap();
//! let b1 = Address::parse("B1").unwrap();
//!
//! sheet.propose_edit(a1, "3").unwrap();
//! sheet.propose_edit(b1, "=SUM(A1,4)").unwrap();
//! assert_eq!(sheet.read_value(b1).to_string(), "7");
//!
//! // A cycle is rejected and the grid is left unchanged
//! assert!(sheet.propose_edit(a1, "=B1").is_err());
//! assert_eq!(sheet.read_value(b1).to_string(), "7");
//! ```

pub mod prelude;
pub mod sheet;

pub use sheet::Sheet;

// Re-export core types
pub use cellgrid_core::{
    Address, Cell, CellValue, Error, Grid, GridDims, Result, DEFAULT_COLUMNS, DEFAULT_ROWS,
};

// Re-export the formula language
pub use cellgrid_formula::{
    dependencies, evaluate, parse, would_create_cycle, EvalContext, FoldOp, Formula, NumericArg,
    INVALID_MARKER,
};
