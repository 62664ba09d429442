//! The gated editing surface over a single grid

use cellgrid_core::{Address, CellValue, Error, Grid, GridDims, Result};
use cellgrid_formula::{dependency, parser, EvalContext};
use log::debug;

/// A grid of cells behind the engine's two external operations
///
/// `Sheet` owns its grid exclusively. Reads never mutate; every write
/// passes the cycle gate first, so the committed reference graph stays
/// acyclic and evaluation always terminates.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    grid: Grid,
}

impl Sheet {
    /// Create a sheet with the default dimensions (26 columns, 100 rows)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet with the given dimensions
    pub fn with_dims(columns: u16, rows: u32) -> Self {
        Self {
            grid: Grid::with_dims(GridDims::new(columns, rows)),
        }
    }

    /// The sheet's fixed dimensions
    pub fn dims(&self) -> GridDims {
        self.grid.dims()
    }

    // === Reading ===

    /// The displayed value at an address
    ///
    /// Total: absent, blank, and out-of-range addresses read as empty
    /// text. The value is recomputed from raw text on every call,
    /// transitively through references.
    pub fn read_value(&self, addr: Address) -> CellValue {
        EvalContext::new(&self.grid).cell_value(addr)
    }

    /// The committed raw text at an address ("" when nothing was written)
    ///
    /// This is what an edit box shows when the user opens the cell.
    pub fn raw_text(&self, addr: Address) -> &str {
        self.grid.raw_text(addr)
    }

    /// True when the address holds no content
    pub fn is_empty(&self, addr: Address) -> bool {
        self.grid.is_blank(addr)
    }

    /// Iterate over written cells as (address, raw text), row-major
    pub fn cells(&self) -> impl Iterator<Item = (Address, &str)> {
        self.grid.cells().map(|(addr, cell)| (addr, cell.raw()))
    }

    // === Editing ===

    /// Propose new raw text for a cell
    ///
    /// The candidate is parsed and cycle-checked against the committed
    /// grid before anything changes. On rejection the grid is untouched
    /// and the caller decides what to do with the discarded edit; on
    /// success the text is committed and every later read sees it.
    /// Committing "" clears a cell.
    pub fn propose_edit(&mut self, addr: Address, raw: &str) -> Result<()> {
        self.grid.validate_position(addr)?;

        let candidate = parser::parse(raw);
        if dependency::would_create_cycle(&self.grid, addr, &candidate) {
            debug!("rejected edit at {}: would create a reference cycle", addr);
            return Err(Error::CircularReference(addr));
        }

        self.grid.set_raw(addr, raw)?;
        debug!("committed edit at {}", addr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    #[test]
    fn test_edit_then_read() {
        let mut sheet = Sheet::new();
        sheet.propose_edit(addr("A0"), "hello").unwrap();
        assert_eq!(sheet.read_value(addr("A0")).to_string(), "hello");
        assert_eq!(sheet.raw_text(addr("A0")), "hello");
    }

    #[test]
    fn test_rejected_edit_signals_the_cell() {
        let mut sheet = Sheet::new();
        let err = sheet.propose_edit(addr("A1"), "=A1").unwrap_err();
        assert!(matches!(err, Error::CircularReference(a) if a == addr("A1")));
    }

    #[test]
    fn test_out_of_bounds_edit_rejected() {
        let mut sheet = Sheet::with_dims(2, 2);
        assert!(matches!(
            sheet.propose_edit(Address::new(2, 0), "x"),
            Err(Error::RowOutOfBounds(2, 1))
        ));
        assert!(matches!(
            sheet.propose_edit(Address::new(0, 2), "x"),
            Err(Error::ColumnOutOfBounds(2, 1))
        ));
    }

    #[test]
    fn test_reads_are_total() {
        let sheet = Sheet::with_dims(2, 2);
        // In-range but absent, and far out of range: both read as empty.
        assert!(sheet.read_value(Address::new(1, 1)).is_empty());
        assert!(sheet.read_value(Address::new(5000, 200)).is_empty());
        assert_eq!(sheet.raw_text(Address::new(5000, 200)), "");
    }

    #[test]
    fn test_default_dims() {
        let sheet = Sheet::new();
        assert_eq!(sheet.dims(), GridDims::new(26, 100));
    }

    #[test]
    fn test_cells_lists_raw_text() {
        let mut sheet = Sheet::new();
        sheet.propose_edit(addr("B0"), "=SUM(1,2)").unwrap();
        sheet.propose_edit(addr("A0"), "x").unwrap();

        let cells: Vec<(String, String)> = sheet
            .cells()
            .map(|(a, raw)| (a.to_string(), raw.to_string()))
            .collect();
        assert_eq!(
            cells,
            vec![
                ("A0".to_string(), "x".to_string()),
                ("B0".to_string(), "=SUM(1,2)".to_string()),
            ]
        );
    }

    #[test]
    fn test_clearing_through_the_gate() {
        let mut sheet = Sheet::new();
        sheet.propose_edit(addr("A0"), "42").unwrap();
        sheet.propose_edit(addr("A0"), "").unwrap();
        assert!(sheet.is_empty(addr("A0")));
        assert!(sheet.read_value(addr("A0")).is_empty());
    }
}
