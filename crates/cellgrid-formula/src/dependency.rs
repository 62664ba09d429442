//! Dependency extraction and pre-commit cycle detection
//!
//! A formula's dependencies are the addresses in its `ref` positions,
//! direct references only. The cycle check walks those edges through the
//! already-committed grid before an edit is allowed to land, so the
//! committed reference graph never contains a cycle.

use ahash::AHashSet;
use cellgrid_core::{Address, Grid};

use crate::ast::{Formula, NumericArg};
use crate::parser;

/// The addresses a term reads directly, in argument order
///
/// Duplicates collapse to their first occurrence. Literal and invalid
/// terms read nothing.
pub fn dependencies(formula: &Formula) -> Vec<Address> {
    match formula {
        Formula::Literal(_) | Formula::Invalid => Vec::new(),
        Formula::Ref(addr) => vec![*addr],
        Formula::Fold { args, .. } => {
            let mut deps = Vec::new();
            for arg in args {
                if let NumericArg::Ref(addr) = arg {
                    if !deps.contains(addr) {
                        deps.push(*addr);
                    }
                }
            }
            deps
        }
    }
}

/// Whether committing `candidate` at `target` would create a reference cycle
///
/// The candidate's direct dependencies form the frontier; from there the
/// walk follows committed cells' dependencies depth-first, looking for a
/// path back to `target`. Only the hypothetical new edges come from the
/// candidate; everything else is read from the grid as committed. The
/// visited set keeps diamond-shaped graphs linear and bounds the walk by
/// the number of written cells.
pub fn would_create_cycle(grid: &Grid, target: Address, candidate: &Formula) -> bool {
    let mut visited = AHashSet::new();
    dependencies(candidate)
        .into_iter()
        .any(|dep| reaches(grid, dep, target, &mut visited))
}

/// Whether `target` is reachable from `from` over committed references
fn reaches(grid: &Grid, from: Address, target: Address, visited: &mut AHashSet<Address>) -> bool {
    if from == target {
        return true;
    }
    if !visited.insert(from) {
        return false;
    }
    let cell = match grid.get(from) {
        Some(cell) => cell,
        None => return false,
    };
    dependencies(&parser::parse(cell.raw()))
        .into_iter()
        .any(|dep| reaches(grid, dep, target, visited))
}
