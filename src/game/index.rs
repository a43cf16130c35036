//! Array-backed indices keyed by cells and piece ids.
//!
//! The board is a fixed square and piece ids are dense, so every key maps
//! to a unique slot without hashing: a cell lives at `row * size + column`
//! and a piece id at `id - 1`. Out-of-range and sentinel keys read as absent
//! and writes to them are ignored, so a bad key can never corrupt an index.

use crate::game::{Cell, NO_PIECE_ID, Piece, PieceId};

/// Values with a reserved "absent" sentinel.
pub(crate) trait Sentinel: Copy + PartialEq {
    /// The absent value.
    const NONE: Self;
}

impl Sentinel for Cell {
    const NONE: Self = Cell::NONE;
}

impl Sentinel for Piece {
    const NONE: Self = Piece::NONE;
}

/// Map from piece id to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PieceMap<T> {
    slots: Vec<T>,
}

impl<T: Sentinel> PieceMap<T> {
    /// Create an empty map for ids `1..=len`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![T::NONE; len],
        }
    }

    #[inline]
    fn slot(&self, id: PieceId) -> Option<usize> {
        if id == NO_PIECE_ID {
            return None;
        }
        let idx = usize::try_from(id - 1).ok()?;
        (idx < self.slots.len()).then_some(idx)
    }

    /// Get the value for the id, if there is one.
    #[inline]
    pub(crate) fn get(&self, id: PieceId) -> Option<T> {
        self.slot(id)
            .map(|idx| self.slots[idx])
            .filter(|value| *value != T::NONE)
    }

    /// Set the value for the id.
    #[inline]
    pub(crate) fn set(&mut self, id: PieceId, value: T) {
        if let Some(idx) = self.slot(id) {
            self.slots[idx] = value;
        }
    }

    /// Remove the id's value.
    #[inline]
    pub(crate) fn remove(&mut self, id: PieceId) {
        self.set(id, T::NONE);
    }
}

/// Map from board cell to the id of the piece on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CellMap {
    size: i32,
    cells: Vec<PieceId>,
}

impl CellMap {
    /// Create an empty map for a square board with sides of `size`.
    pub(crate) fn new(size: i32) -> Self {
        let side = usize::try_from(size).unwrap_or(0);
        Self {
            size,
            cells: vec![NO_PIECE_ID; side * side],
        }
    }

    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn slot(&self, cell: Cell) -> Option<usize> {
        // on_board guarantees both coordinates are non-negative.
        cell.on_board(self.size)
            .then(|| (cell.row() * self.size + cell.column()) as usize)
    }

    /// Get the id of the piece on the cell, if any.
    #[inline]
    pub(crate) fn get(&self, cell: Cell) -> Option<PieceId> {
        self.slot(cell)
            .map(|idx| self.cells[idx])
            .filter(|&id| id != NO_PIECE_ID)
    }

    /// Put the piece on the cell.
    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, id: PieceId) {
        if let Some(idx) = self.slot(cell) {
            self.cells[idx] = id;
        }
    }

    /// Empty the cell.
    #[inline]
    pub(crate) fn remove(&mut self, cell: Cell) {
        self.set(cell, NO_PIECE_ID);
    }

    /// Iterate over occupied cells and the ids on them in row-major order.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, id)| **id != NO_PIECE_ID)
            .map(move |(idx, &id)| {
                let idx = idx as i32;
                (Cell::new(idx / size, idx % size), id)
            })
    }
}
