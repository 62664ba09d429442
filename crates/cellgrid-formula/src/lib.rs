//! # cellgrid-formula
//!
//! The formula language for cellgrid.
//!
//! This crate provides:
//! - Total parsing (raw text → formula term, for every possible input)
//! - Dependency extraction (the addresses a term reads)
//! - Pre-commit cycle detection over the committed grid
//! - Pull-based recursive evaluation (term → displayed value)
//!
//! ## Example
//!
//! ```rust
//! use cellgrid_core::{Address, Grid};
//! use cellgrid_formula::{parse, EvalContext, Formula};
//!
//! let mut grid = Grid::new();
//! grid.set_raw(Address::parse("A1").unwrap(), "=SUM(2,3)").unwrap();
//!
//! assert!(matches!(parse("=SUM(2,3)"), Formula::Fold { .. }));
//!
//! let ctx = EvalContext::new(&grid);
//! let value = ctx.cell_value(Address::parse("A1").unwrap());
//! assert_eq!(value.to_string(), "5");
//! ```

pub mod ast;
pub mod dependency;
pub mod evaluator;
pub mod parser;

pub use ast::{FoldOp, Formula, NumericArg};
pub use dependency::{dependencies, would_create_cycle};
pub use evaluator::{evaluate, EvalContext, INVALID_MARKER};
pub use parser::parse;
