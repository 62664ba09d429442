//! Prelude module - common imports for cellgrid users
//!
//! ```rust
//! use cellgrid::prelude::*;
//! ```

pub use crate::{
    Address, CellValue, Error, FoldOp, Formula, GridDims, NumericArg, Result, Sheet,
};
