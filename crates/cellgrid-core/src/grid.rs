//! The grid: bounds-checked, sparse cell storage

use std::collections::BTreeMap;

use crate::address::Address;
use crate::error::{Error, Result};
use crate::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Grid dimensions, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    /// Number of columns (one per display-alphabet letter by default)
    pub columns: u16,
    /// Number of rows
    pub rows: u32,
}

impl GridDims {
    /// Create grid dimensions
    pub fn new(columns: u16, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Whether an address lies within these dimensions
    pub fn contains(&self, addr: Address) -> bool {
        addr.row < self.rows && addr.col < self.columns
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// A single cell: the raw text the user entered
///
/// Everything else about a cell (its parsed formula, its displayed value)
/// is derived from `raw` on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    raw: String,
}

impl Cell {
    /// Create a cell holding the given raw text
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw text as entered
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Replace the raw text
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// True when the raw text is empty; readers treat such a cell
    /// exactly like an absent slot
    pub fn is_blank(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Sparse, bounds-checked storage of all cells, indexed by address
///
/// The grid exclusively owns its cells. Slots are materialized lazily on
/// first write; a missing slot and a blank cell read identically.
///
/// `set_raw` does not validate references in the text. Cycle gating lives
/// at the `Sheet` layer in the `cellgrid` crate, which owns the grid and
/// is the validated mutation path.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dims: GridDims,
    rows: BTreeMap<u32, BTreeMap<u16, Cell>>,
}

impl Grid {
    /// Create a grid with the default dimensions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid with the given dimensions
    pub fn with_dims(dims: GridDims) -> Self {
        Self {
            dims,
            rows: BTreeMap::new(),
        }
    }

    /// The grid's fixed dimensions
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    // === Cell Access ===

    /// Get the cell at an address, if one has been written
    pub fn get(&self, addr: Address) -> Option<&Cell> {
        self.rows.get(&addr.row).and_then(|cols| cols.get(&addr.col))
    }

    /// The raw text at an address ("" when the slot is absent)
    pub fn raw_text(&self, addr: Address) -> &str {
        self.get(addr).map_or("", |cell| cell.raw())
    }

    /// True when the slot is absent or its cell holds empty raw text
    pub fn is_blank(&self, addr: Address) -> bool {
        self.get(addr).map_or(true, |cell| cell.is_blank())
    }

    /// Write raw text at an address, creating the cell on first write
    ///
    /// Out-of-bounds addresses are rejected; nothing else is validated.
    pub fn set_raw(&mut self, addr: Address, raw: impl Into<String>) -> Result<()> {
        self.validate_position(addr)?;
        self.rows
            .entry(addr.row)
            .or_default()
            .entry(addr.col)
            .or_default()
            .set_raw(raw);
        Ok(())
    }

    // === Iteration ===

    /// Iterate over written cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Address, &Cell)> {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter().map(move |(&col, cell)| (Address::new(row, col), cell))
        })
    }

    /// Number of written cells (blank ones included)
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check that an address lies within the grid, with a precise error
    pub fn validate_position(&self, addr: Address) -> Result<()> {
        if addr.row >= self.dims.rows {
            return Err(Error::RowOutOfBounds(
                addr.row,
                self.dims.rows.saturating_sub(1),
            ));
        }
        if addr.col >= self.dims.columns {
            return Err(Error::ColumnOutOfBounds(
                addr.col,
                self.dims.columns.saturating_sub(1),
            ));
        }
        Ok(())
    }
}
