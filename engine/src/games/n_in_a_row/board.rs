use crate::error::{GameError, MoveRejection};
use super::types::{Cell, Player};

/// Square grid stored row-major. Cell `i` sits at row `i / size`, column `i % size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        let cells = size.checked_mul(size).unwrap_or(0);
        if cells == 0 {
            return Err(GameError::InvalidBoardSize { cells });
        }
        Ok(Self {
            cells: vec![Cell::Empty; cells],
            size,
        })
    }

    /// Builds a board from a flat cell list whose length must be a perfect square.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, GameError> {
        let size = side_length(cells.len()).ok_or(GameError::InvalidBoardSize { cells: cells.len() })?;
        Ok(Self { cells, size })
    }

    pub fn with_cell_count(cells: usize) -> Result<Self, GameError> {
        Self::from_cells(vec![Cell::Empty; cells])
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True until the first mark is placed.
    pub fn has_no_marks(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn validate_move(&self, index: usize) -> Result<(), GameError> {
        match self.cells.get(index) {
            None => Err(GameError::InvalidMoveIndex {
                index,
                reason: MoveRejection::OutOfRange { cells: self.cells.len() },
            }),
            Some(cell) if !cell.is_empty() => Err(GameError::InvalidMoveIndex {
                index,
                reason: MoveRejection::Occupied,
            }),
            Some(_) => Ok(()),
        }
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        self.validate_move(index)?;
        self.cells[index] = player.mark();
        Ok(())
    }

    /// Copy of this board with `index` taken by `player`. The caller guarantees
    /// the cell is empty.
    pub(crate) fn with_move(&self, index: usize, player: Player) -> Board {
        let mut child = self.clone();
        child.cells[index] = player.mark();
        child
    }
}

fn side_length(cells: usize) -> Option<usize> {
    if cells == 0 {
        return None;
    }
    let side = cells.isqrt();
    (side * side == cells).then_some(side)
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let cells: Vec<Cell> = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'A' => Cell::PlayerA,
            'B' => Cell::PlayerB,
            _ => Cell::Empty,
        })
        .collect();
    Board::from_cells(cells).unwrap()
}
