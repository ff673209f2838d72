use crate::games::SessionRng;
use super::board::Board;
use super::types::Player;

/// Successor positions of a board, one per empty cell, in shuffled order.
pub struct Moves<'a> {
    board: &'a Board,
    order: std::vec::IntoIter<usize>,
    player: Player,
}

impl Iterator for Moves<'_> {
    type Item = (usize, Board);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.order.by_ref().find(|&i| self.board.cells()[i].is_empty())?;
        Some((index, self.board.with_move(index, self.player)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.order.len()))
    }
}

/// The order is drawn from `rng` up front; children are built lazily, so a
/// search that stops early never copies the remaining boards.
pub fn generate_moves<'a>(board: &'a Board, player: Player, rng: &mut SessionRng) -> Moves<'a> {
    let mut order: Vec<usize> = (0..board.cell_count()).collect();
    rng.shuffle(&mut order);
    Moves {
        board,
        order: order.into_iter(),
        player,
    }
}
