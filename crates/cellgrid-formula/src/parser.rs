//! Raw cell text to formula terms
//!
//! Parsing is total: every input maps to exactly one term, never an error.
//! Unrecognized formula text parses to [`Formula::Invalid`], which displays
//! as a sentinel rather than failing the caller.

use cellgrid_core::Address;

use crate::ast::{FoldOp, Formula, NumericArg};

/// Parse raw cell text into a formula term
///
/// Text whose first non-whitespace character is not `=` is a literal and
/// is preserved byte-for-byte. Marked text is either a single reference
/// (`=A1`), a fold call (`=SUM(...)`, `=PRODUCT(...)`), or invalid.
///
/// # Example
/// ```rust
/// use cellgrid_formula::{parse, Formula};
///
/// assert!(matches!(parse("=A1"), Formula::Ref(_)));
/// assert!(matches!(parse("plain text"), Formula::Literal(_)));
/// assert!(matches!(parse("=BOGUS(1)"), Formula::Invalid));
/// ```
pub fn parse(raw: &str) -> Formula {
    let text = raw.trim();
    if !text.starts_with('=') {
        return Formula::Literal(raw.to_string());
    }
    let body = &text[1..];

    let open = match body.find('(') {
        Some(open) => open,
        // No call syntax: the whole body must be a single reference
        None => {
            return match Address::parse(body) {
                Ok(addr) => Formula::Ref(addr),
                Err(_) => Formula::Invalid,
            }
        }
    };

    let op = match fold_op(&body[..open]) {
        Some(op) => op,
        None => return Formula::Invalid,
    };

    let interior = match body[open + 1..].strip_suffix(')') {
        Some(interior) => interior,
        None => return Formula::Invalid,
    };

    match parse_args(interior) {
        Some(args) => Formula::Fold { op, args },
        None => Formula::Invalid,
    }
}

/// Recognize a fold function by name, case-insensitively
fn fold_op(name: &str) -> Option<FoldOp> {
    if name.eq_ignore_ascii_case("sum") {
        Some(FoldOp::Sum)
    } else if name.eq_ignore_ascii_case("product") {
        Some(FoldOp::Product)
    } else {
        None
    }
}

/// Parse the comma-separated interior of a fold call
///
/// Every piece must parse; one bad argument invalidates the whole call.
/// `split` always yields at least one piece, so an empty interior fails
/// through the empty-argument case and a fold never ends up with zero
/// arguments.
fn parse_args(interior: &str) -> Option<Vec<NumericArg>> {
    let mut args = Vec::new();
    for piece in interior.split(',') {
        args.push(parse_arg(piece.trim())?);
    }
    Some(args)
}

/// Parse one trimmed argument: a cell reference or a numeric literal
fn parse_arg(piece: &str) -> Option<NumericArg> {
    if piece.is_empty() {
        return None;
    }
    if let Ok(addr) = Address::parse(piece) {
        return Some(NumericArg::Ref(addr));
    }
    piece.parse::<f64>().ok().map(NumericArg::Number)
}
