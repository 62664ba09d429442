//! Recursive, pull-based formula evaluation
//!
//! Nothing is cached: a cell's value is recomputed from raw text on every
//! read, transitively through its references. Recursion terminates because
//! the mutation gate keeps the committed reference graph acyclic.

use cellgrid_core::{Address, CellValue, Grid};

use crate::ast::{FoldOp, Formula, NumericArg};
use crate::parser;

/// Display sentinel for unparseable formula text
pub const INVALID_MARKER: &str = "INVALID";

/// Evaluation context: read access to the grid being evaluated against
///
/// Cells hold no pointer back to their grid; evaluation borrows the grid
/// through this context instead.
pub struct EvalContext<'a> {
    grid: &'a Grid,
}

impl<'a> EvalContext<'a> {
    /// Create a context reading from `grid`
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// The displayed value of the cell at `addr`
    ///
    /// Absent slots evaluate to empty text, exactly like cells holding
    /// empty raw text.
    pub fn cell_value(&self, addr: Address) -> CellValue {
        match self.grid.get(addr) {
            Some(cell) => evaluate(&parser::parse(cell.raw()), self),
            None => CellValue::empty(),
        }
    }
}

/// Evaluate a formula term to its displayed value
///
/// A reference passes the target cell's value through unchanged; only a
/// genuinely absent slot (or one whose value IS empty text) reads as empty
/// text, so numeric zero and the text "0" display as computed.
pub fn evaluate(formula: &Formula, ctx: &EvalContext) -> CellValue {
    match formula {
        Formula::Literal(text) => CellValue::Text(text.clone()),
        Formula::Invalid => CellValue::Text(INVALID_MARKER.to_string()),
        Formula::Ref(addr) => ctx.cell_value(*addr),
        Formula::Fold { op, args } => {
            let mut acc = op.identity();
            for arg in args {
                acc = op.combine(acc, resolve_numeric(arg, *op, ctx));
            }
            CellValue::Number(acc)
        }
    }
}

/// Resolve one fold argument to a number
///
/// A reference resolves the target's value and coerces it: numbers pass
/// through, numeric text parses, and anything else contributes the fold's
/// identity element instead of failing the computation.
fn resolve_numeric(arg: &NumericArg, op: FoldOp, ctx: &EvalContext) -> f64 {
    match arg {
        NumericArg::Number(n) => *n,
        NumericArg::Ref(addr) => ctx
            .cell_value(*addr)
            .as_number()
            .unwrap_or_else(|| op.identity()),
    }
}
