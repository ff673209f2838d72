mod board;
mod evaluator;
mod game_state;
mod move_gen;
mod move_source;
mod search;
mod types;
mod win_detector;

pub use board::Board;
pub use evaluator::evaluate;
pub use game_state::{GameOutcome, GameState, TurnReport};
pub use move_gen::{generate_moves, Moves};
pub use move_source::{EngineMoveSource, MoveChoice, MoveSource, ScriptedMoveSource, TurnContext};
pub use search::{alpha_beta, find_best_move, NodeCounter, SearchResult, SearchSettings, SCORE_INFINITY};
pub use types::{Cell, GameStatus, Line, Player};
pub use win_detector::{candidate_lines, check_winner, find_lines, winning_line};
