use super::board::Board;
use super::types::{Line, Player};

/// Every row, column and full diagonal of a `size`×`size` board, in scan
/// order: main diagonal, anti-diagonal, then row `j` followed by column `j`
/// for each `j`.
pub fn candidate_lines(size: usize) -> impl Iterator<Item = Vec<usize>> {
    let main_diagonal: Vec<usize> = (0..size).map(|i| i * size + i).collect();
    let anti_diagonal: Vec<usize> = (0..size).map(|i| i * size + (size - 1 - i)).collect();

    let rows_and_columns = (0..size).flat_map(move |j| {
        let row: Vec<usize> = (0..size).map(|i| j * size + i).collect();
        let column: Vec<usize> = (0..size).map(|i| i * size + j).collect();
        [row, column]
    });

    [main_diagonal, anti_diagonal].into_iter().chain(rows_and_columns)
}

/// Lazily yields the completed lines of `board`. Holds no state between calls.
pub fn find_lines(board: &Board) -> impl Iterator<Item = Line> + '_ {
    candidate_lines(board.size()).filter_map(move |indices| {
        let occupant = uniform_occupant(board, &indices)?;
        Some(Line::new(occupant, indices))
    })
}

/// Occupant of the first completed line in scan order.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_lines(board).next().map(|line| line.occupant)
}

pub fn winning_line(board: &Board) -> Option<Line> {
    find_lines(board).next()
}

fn uniform_occupant(board: &Board, indices: &[usize]) -> Option<Player> {
    let (&first, rest) = indices.split_first()?;
    let occupant = board.get(first)?.owner()?;
    rest.iter()
        .all(|&index| board.get(index) == Some(occupant.mark()))
        .then_some(occupant)
}
