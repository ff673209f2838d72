//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are from the point of view of the player the search was started
//! for. A win is worth `(depth + 1) * 3`, a loss `-(depth + 1) * 3`, where
//! `depth` is the budget still left when the terminal position is reached, so
//! quicker wins and slower losses are preferred.
//!
//! Pruning uses a single bound per node: each child receives the best score
//! its parent has found so far, and cuts off as soon as its own best can no
//! longer beat that value. This never changes the value returned at the root,
//! only the number of nodes visited.

use crate::games::SessionRng;
use super::board::Board;
use super::evaluator::evaluate;
use super::move_gen::generate_moves;
use super::types::Player;
use super::win_detector::check_winner;

/// Sentinel bound for a node that has not scored any child yet.
pub const SCORE_INFINITY: i32 = i32::MAX;

const OUTCOME_WEIGHT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Top-level cell to play, `None` for terminal and horizon positions.
    pub index: Option<usize>,
    pub score: i32,
    /// Budget left at the position where the line of play was resolved.
    pub depth: i32,
}

impl SearchResult {
    fn leaf(score: i32, depth: i32) -> Self {
        Self {
            index: None,
            score,
            depth,
        }
    }

    /// Number of plies between the searched position and the resolved outcome.
    pub fn plies(&self, depth_budget: i32) -> i32 {
        depth_budget.saturating_sub(self.depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub depth: i32,
    pub pruning: bool,
}

impl SearchSettings {
    pub fn new(depth: i32, pruning: bool) -> Self {
        Self { depth, pruning }
    }
}

/// Number of search invocations, accumulated across a whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCounter(u64);

impl NodeCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Best move for `player` on `board` searched `settings.depth` plies deep.
pub fn find_best_move(
    board: &Board,
    player: Player,
    settings: SearchSettings,
    rng: &mut SessionRng,
    cost: &mut NodeCounter,
) -> SearchResult {
    alpha_beta(board, player, settings.depth, false, SCORE_INFINITY, settings.pruning, rng, cost)
}

// Saturates so huge budgets cannot overflow; the bound sentinels stay out of reach.
fn outcome_score(depth: i32) -> i32 {
    depth
        .saturating_add(1)
        .saturating_mul(OUTCOME_WEIGHT)
        .clamp(-(SCORE_INFINITY - 1), SCORE_INFINITY - 1)
}

pub fn alpha_beta(
    board: &Board,
    player: Player,
    depth: i32,
    minimizing: bool,
    bound: i32,
    pruning: bool,
    rng: &mut SessionRng,
    cost: &mut NodeCounter,
) -> SearchResult {
    cost.increment();

    if let Some(winner) = check_winner(board) {
        let score = outcome_score(depth);
        let score = if winner == player { score } else { -score };
        return SearchResult::leaf(score, depth);
    }
    if board.is_full() {
        return SearchResult::leaf(0, depth);
    }
    if depth <= 0 {
        return SearchResult::leaf(evaluate(board, player, rng), depth);
    }

    let mover = if minimizing { player.opponent() } else { player };
    let mut best: Option<SearchResult> = None;

    for (index, child) in generate_moves(board, mover, rng) {
        let child_bound = match best {
            Some(best) => best.score,
            None if minimizing => SCORE_INFINITY,
            None => -SCORE_INFINITY,
        };

        let result = alpha_beta(&child, player, depth - 1, !minimizing, child_bound, pruning, rng, cost);

        let improves = match best {
            None => true,
            Some(best) if minimizing => result.score < best.score,
            Some(best) => result.score > best.score,
        };
        if improves {
            best = Some(SearchResult {
                index: Some(index),
                score: result.score,
                depth: result.depth,
            });
        }

        if pruning
            && let Some(best) = best
            && ((minimizing && best.score <= bound) || (!minimizing && best.score >= bound))
        {
            break;
        }
    }

    // The board is not full, so at least one child was scored.
    best.unwrap_or(SearchResult::leaf(0, depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::board::board_from_str;

    fn search(board: &Board, player: Player, depth: i32, pruning: bool, seed: u64) -> (SearchResult, u64) {
        let mut rng = SessionRng::new(seed);
        let mut cost = NodeCounter::new();
        let result = find_best_move(board, player, SearchSettings::new(depth, pruning), &mut rng, &mut cost);
        (result, cost.get())
    }

    #[test]
    fn test_won_board_scores_by_remaining_depth() {
        let board = board_from_str("AAA BB. ...");
        let (win, _) = search(&board, Player::A, 4, true, 0);
        assert_eq!(win, SearchResult { index: None, score: 15, depth: 4 });

        let (loss, _) = search(&board, Player::B, 4, true, 0);
        assert_eq!(loss, SearchResult { index: None, score: -15, depth: 4 });
    }

    #[test]
    fn test_huge_depth_budget_does_not_overflow() {
        let won = board_from_str("AAA BB. ...");
        let (win, _) = search(&won, Player::A, i32::MAX, false, 0);
        assert_eq!(win.score, SCORE_INFINITY - 1);
        let (loss, _) = search(&won, Player::B, i32::MAX, false, 0);
        assert_eq!(loss.score, -(SCORE_INFINITY - 1));

        let last_cell = board_from_str("ABA ABB BA.");
        for pruning in [false, true] {
            let (result, cost) = search(&last_cell, Player::A, i32::MAX, pruning, 0);
            assert_eq!(result.index, Some(8));
            assert_eq!(cost, 2);
        }
    }

    #[test]
    fn test_full_board_scores_zero() {
        let board = board_from_str("ABA ABB BAA");
        let (result, cost) = search(&board, Player::A, 9, true, 0);
        assert_eq!(result, SearchResult { index: None, score: 0, depth: 9 });
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_zero_depth_falls_back_to_heuristic() {
        let board = Board::new(3).unwrap();
        let (result, cost) = search(&board, Player::A, 0, true, 0);
        assert_eq!(result, SearchResult { index: None, score: 0, depth: 0 });
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_single_empty_cell_costs_two_visits() {
        let board = board_from_str("ABA ABB BA.");
        let (result, cost) = search(&board, Player::A, 5, false, 0);
        assert_eq!(result.index, Some(8));
        assert_eq!(cost, 2);
    }

    #[test]
    fn test_counter_accumulates_across_searches() {
        let board = board_from_str("ABA ABB BA.");
        let mut rng = SessionRng::new(0);
        let mut cost = NodeCounter::new();
        let settings = SearchSettings::new(5, true);
        find_best_move(&board, Player::A, settings, &mut rng, &mut cost);
        find_best_move(&board, Player::B, settings, &mut rng, &mut cost);
        assert_eq!(cost.get(), 4);
    }

    #[test]
    fn test_depth_one_counts_root_and_each_child() {
        let board = board_from_str("AB. ... ...");
        let (_, cost) = search(&board, Player::A, 1, false, 5);
        assert_eq!(cost, 1 + 7);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_from_str("AA. BB. ...");
        for seed in 0..5 {
            for pruning in [false, true] {
                let (result, _) = search(&board, Player::A, 9, pruning, seed);
                assert_eq!(result.index, Some(2), "seed {} pruning {}", seed, pruning);
                assert_eq!(result.score, 27);
                assert_eq!(result.plies(9), 1);
            }
        }
    }

    #[test]
    fn test_blocks_opponent_win() {
        let board = board_from_str("AA. .B. ...");
        for seed in 0..5 {
            let (result, _) = search(&board, Player::B, 9, true, seed);
            assert_eq!(result.index, Some(2), "seed {}", seed);
        }
    }

    #[test]
    fn test_full_depth_on_empty_board_never_loses() {
        let board = Board::new(3).unwrap();
        let (result, cost) = search(&board, Player::A, 9, false, 42);
        assert!(result.score >= 0);
        assert_eq!(result.score, 0);
        assert!(result.index.is_some());
        assert!(cost > 1);
    }

    #[test]
    fn test_pruning_preserves_score_and_saves_nodes() {
        let board = Board::new(3).unwrap();
        for seed in [7] {
            let (plain, plain_cost) = search(&board, Player::A, 9, false, seed);
            let (pruned, pruned_cost) = search(&board, Player::A, 9, true, seed);
            assert_eq!(plain.score, pruned.score, "seed {}", seed);
            assert!(pruned_cost < plain_cost, "seed {}", seed);
        }
    }

    #[test]
    fn test_pruning_preserves_score_mid_game() {
        let boards = ["A.. .B. ...", "AB. .A. ..B", "A.B ... B.A", "..A .B. ..."];
        for layout in boards {
            let board = board_from_str(layout);
            for player in [Player::A, Player::B] {
                for seed in 0..4 {
                    let (plain, _) = search(&board, player, 9, false, seed);
                    let (pruned, _) = search(&board, player, 9, true, seed);
                    assert_eq!(plain.score, pruned.score, "{} {:?} seed {}", layout, player, seed);
                }
            }
        }
    }

    #[test]
    fn test_shallow_search_reaches_horizon() {
        let board = Board::new(3).unwrap();
        let (result, _) = search(&board, Player::A, 2, true, 9);
        assert_eq!(result.score, 0);
        assert_eq!(result.depth, 0);
        assert_eq!(result.plies(2), 2);
    }
}
