//! Formula term types

use cellgrid_core::Address;

/// The combining operator of a numeric fold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOp {
    /// Addition, identity 0
    Sum,
    /// Multiplication, identity 1
    Product,
}

impl FoldOp {
    /// The fold's identity element
    pub fn identity(&self) -> f64 {
        match self {
            FoldOp::Sum => 0.0,
            FoldOp::Product => 1.0,
        }
    }

    /// Combine the accumulator with the next resolved argument
    pub fn combine(&self, acc: f64, next: f64) -> f64 {
        match self {
            FoldOp::Sum => acc + next,
            FoldOp::Product => acc * next,
        }
    }

    /// The function name as written in formula text
    pub fn name(&self) -> &'static str {
        match self {
            FoldOp::Sum => "SUM",
            FoldOp::Product => "PRODUCT",
        }
    }
}

/// One argument of a numeric fold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericArg {
    /// A literal number
    Number(f64),
    /// A reference, resolved to the referenced cell's value and coerced
    Ref(Address),
}

/// A parsed cell formula
///
/// Parsing is total: every raw text maps to exactly one term. Text that
/// does not start with the `=` marker is a [`Formula::Literal`]; marked
/// text that fails the grammar is [`Formula::Invalid`].
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// Plain text (including numerals typed directly); displays as itself
    Literal(String),
    /// Marked as a formula but unparseable; displays as the error sentinel
    Invalid,
    /// A single cell reference; displays as the referenced cell's value
    Ref(Address),
    /// `SUM(...)` or `PRODUCT(...)` over numeric arguments
    Fold { op: FoldOp, args: Vec<NumericArg> },
}
