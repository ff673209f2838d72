use crate::games::SessionRng;
use super::board::Board;
use super::move_gen::generate_moves;
use super::types::Player;
use super::win_detector::check_winner;

const OWN_WIN_WEIGHT: i32 = 2;
const OPPONENT_WIN_WEIGHT: i32 = -1;

/// Horizon estimate for `player`.
///
/// Each candidate child contributes according to the winner of the board as it
/// stands *before* the child's move, so the value only ever reflects a line that
/// is already complete. The search calls this after its own terminal checks,
/// which means the result is zero in practice; it is a coarse placeholder, not a
/// positional evaluation.
pub fn evaluate(board: &Board, player: Player, rng: &mut SessionRng) -> i32 {
    let weight = match check_winner(board) {
        Some(winner) if winner == player => OWN_WIN_WEIGHT,
        Some(_) => OPPONENT_WIN_WEIGHT,
        None => 0,
    };

    generate_moves(board, player, rng).map(|_| weight).sum()
}
