use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Kind of a single grid cell, serde-renamed to the map symbols used by
/// scenario inputs: passable, impassable, gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    #[serde(rename = "P")]
    Free,
    #[serde(rename = "I")]
    Wall,
    #[serde(rename = "G")]
    GasStation,
}

/// A 0-indexed grid coordinate. Serializes as a `(row, col)` pair, matching
/// the scenario input format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "(u16, u16)", into = "(u16, u16)")]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl From<(u16, u16)> for Position {
    fn from((row, col): (u16, u16)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (u16, u16) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl Position {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable 2D map of cells. Gas-station coordinates are collected once at
/// construction; nothing mutates after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<CellKind>,
    gas_stations: Vec<Position>,
}

impl Grid {
    /// Build a grid from row-major cell rows. Rejects empty and ragged
    /// input, and input too large for the `u16` coordinate space.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, ModelError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ModelError::EmptyMap);
        }
        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ModelError::RaggedMap { row: i });
            }
        }
        if rows.len() > u16::MAX as usize || width > u16::MAX as usize {
            return Err(ModelError::MapTooLarge { rows: rows.len(), cols: width });
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        let mut gas_stations = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &kind) in row.iter().enumerate() {
                if kind == CellKind::GasStation {
                    gas_stations.push(Position::new(r as u16, c as u16));
                }
                cells.push(kind);
            }
        }

        Ok(Self {
            rows: rows.len() as u16,
            cols: width as u16,
            cells,
            gas_stations,
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Kind of the cell at `pos`, or `OutOfBounds` if it lies outside the map.
    pub fn cell(&self, pos: Position) -> Result<CellKind, ModelError> {
        if !self.in_bounds(pos) {
            return Err(ModelError::OutOfBounds { pos });
        }
        Ok(self.cells[pos.row as usize * self.cols as usize + pos.col as usize])
    }

    /// Gas-station coordinates, precomputed at construction.
    pub fn gas_stations(&self) -> &[Position] {
        &self.gas_stations
    }

    /// In-bounds orthogonal neighbors of `pos`, in the fixed order
    /// row+1, row-1, col+1, col-1. Wall cells are included; movement
    /// legality is the enumerator's concern.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(4);
        if pos.row + 1 < self.rows {
            out.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.row >= 1 {
            out.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col + 1 < self.cols {
            out.push(Position::new(pos.row, pos.col + 1));
        }
        if pos.col >= 1 {
            out.push(Position::new(pos.row, pos.col - 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_cell_kind_symbols_roundtrip() {
        let kinds: Vec<CellKind> = serde_json::from_str(r#"["P", "I", "G"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![CellKind::Free, CellKind::Wall, CellKind::GasStation]
        );
    }
}
