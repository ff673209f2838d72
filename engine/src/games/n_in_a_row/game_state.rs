use crate::error::GameError;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::move_source::{MoveSource, TurnContext};
use super::search::{find_best_move, NodeCounter, SearchResult, SearchSettings};
use super::types::{GameStatus, Line, Player};
use super::win_detector::{check_winner, winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub index: usize,
    pub search: Option<SearchResult>,
    /// Search nodes spent choosing this move.
    pub cost: u64,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub total_cost: u64,
    pub moves: Vec<usize>,
}

pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    rng: SessionRng,
    cost: NodeCounter,
    moves: Vec<usize>,
}

impl GameState {
    pub fn new(board_size: usize, starting_player: Player, rng: SessionRng) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(board_size)?, starting_player, rng))
    }

    /// Resumes play from an arbitrary position with `current_player` to move.
    pub fn from_board(board: Board, current_player: Player, rng: SessionRng) -> Self {
        let mut state = Self {
            board,
            current_player,
            status: GameStatus::InProgress,
            rng,
            cost: NodeCounter::new(),
            moves: Vec::new(),
        };
        state.status = state.evaluate_status();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn total_cost(&self) -> u64 {
        self.cost.get()
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    // Win is checked before Draw: a line completed on the last free cell is a win.
    fn evaluate_status(&self) -> GameStatus {
        if let Some(winner) = check_winner(&self.board) {
            GameStatus::won_by(winner)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.place(index, self.current_player)?;
        self.moves.push(index);
        self.current_player = self.current_player.opponent();
        self.status = self.evaluate_status();

        Ok(self.status)
    }

    /// Runs the search for the player to move without applying its choice.
    /// The nodes visited are charged to the game's total cost.
    pub fn suggest_move(&mut self, settings: SearchSettings) -> SearchResult {
        find_best_move(&self.board, self.current_player, settings, &mut self.rng, &mut self.cost)
    }

    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<TurnReport, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let cost_before = self.cost.get();

        let choice = source.select_move(TurnContext {
            board: &self.board,
            player,
            rng: &mut self.rng,
            cost: &mut self.cost,
        })?;
        let status = self.place_mark(choice.index)?;
        let cost = self.cost.get() - cost_before;

        match choice.search {
            Some(result) => log!(
                "Player {:?} picked {} (value={}, cost={})",
                player, choice.index, result.score, cost
            ),
            None => log!("Player {:?} picked {}", player, choice.index),
        }

        Ok(TurnReport {
            player,
            index: choice.index,
            search: choice.search,
            cost,
            status,
        })
    }

    pub fn run(
        &mut self,
        player_a: &mut dyn MoveSource,
        player_b: &mut dyn MoveSource,
    ) -> Result<GameOutcome, GameError> {
        while !self.status.is_over() {
            let source: &mut dyn MoveSource = match self.current_player {
                Player::A => &mut *player_a,
                Player::B => &mut *player_b,
            };
            self.play_turn(source)?;
        }

        log!("Game over: {:?}, total cost {}", self.status, self.cost.get());
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            status: self.status,
            total_cost: self.cost.get(),
            moves: self.moves.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveRejection;
    use super::super::board::board_from_str;
    use super::super::move_source::{EngineMoveSource, MoveChoice, ScriptedMoveSource};
    use super::super::types::Cell;

    struct CountingSource {
        calls: usize,
    }

    impl MoveSource for CountingSource {
        fn select_move(&mut self, context: TurnContext<'_>) -> Result<MoveChoice, GameError> {
            self.calls += 1;
            context.cost.increment();
            let index = context.board.empty_cells().next().ok_or(GameError::NoLegalMoves)?;
            Ok(MoveChoice::manual(index))
        }
    }

    fn engine(depth: i32) -> EngineMoveSource {
        EngineMoveSource::new(SearchSettings::new(depth, true)).unwrap()
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let state = GameState::new(3, Player::A, SessionRng::new(1)).unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.total_cost(), 0);
        assert!(state.board().has_no_marks());
        assert_eq!(state.seed(), 1);
    }

    #[test]
    fn test_invalid_board_size_is_rejected() {
        assert!(matches!(
            GameState::new(0, Player::A, SessionRng::new(1)),
            Err(GameError::InvalidBoardSize { .. })
        ));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw_without_moves() {
        let board = board_from_str("ABA ABB BAA");
        let mut state = GameState::from_board(board, Player::A, SessionRng::new(1));
        let mut player_a = CountingSource { calls: 0 };
        let mut player_b = CountingSource { calls: 0 };

        let outcome = state.run(&mut player_a, &mut player_b).unwrap();

        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.total_cost, 0);
        assert!(outcome.moves.is_empty());
        assert_eq!(player_a.calls + player_b.calls, 0);
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = GameState::new(3, Player::B, SessionRng::new(1)).unwrap();
        state.place_mark(4).unwrap();
        assert_eq!(state.board().get(4), Some(Cell::PlayerB));
        assert_eq!(state.current_player(), Player::A);
        state.place_mark(0).unwrap();
        assert_eq!(state.board().get(0), Some(Cell::PlayerA));
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.moves(), &[4, 0]);
    }

    #[test]
    fn test_invalid_move_leaves_state_untouched() {
        let mut state = GameState::new(3, Player::A, SessionRng::new(1)).unwrap();
        state.place_mark(4).unwrap();

        assert_eq!(
            state.place_mark(4),
            Err(GameError::InvalidMoveIndex { index: 4, reason: MoveRejection::Occupied })
        );
        assert!(matches!(state.place_mark(12), Err(GameError::InvalidMoveIndex { index: 12, .. })));
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.moves(), &[4]);
    }

    #[test]
    fn test_completing_a_line_on_the_last_cell_is_a_win() {
        let board = board_from_str("ABA BAB BA.");
        let mut state = GameState::from_board(board, Player::A, SessionRng::new(1));
        assert_eq!(state.place_mark(8), Ok(GameStatus::PlayerAWin));
        assert_eq!(state.winning_line().unwrap().indices, vec![0, 4, 8]);
    }

    #[test]
    fn test_full_board_with_a_line_is_a_win() {
        let board = board_from_str("ABA BAB BAA");
        let state = GameState::from_board(board, Player::B, SessionRng::new(1));
        assert_eq!(state.status(), GameStatus::PlayerAWin);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let board = board_from_str("AAA BB. ...");
        let mut state = GameState::from_board(board, Player::B, SessionRng::new(1));
        assert_eq!(state.status(), GameStatus::PlayerAWin);
        assert_eq!(state.place_mark(5), Err(GameError::GameOver));
        let mut source = engine(9);
        assert_eq!(state.play_turn(&mut source), Err(GameError::GameOver));
    }

    #[test]
    fn test_engine_turn_reports_search_and_cost() {
        let board = board_from_str("AA. BB. ...");
        let mut state = GameState::from_board(board, Player::A, SessionRng::new(3));
        let report = state.play_turn(&mut engine(9)).unwrap();

        assert_eq!(report.player, Player::A);
        assert_eq!(report.index, 2);
        assert_eq!(report.status, GameStatus::PlayerAWin);
        assert_eq!(report.search.map(|result| result.score), Some(27));
        assert!(report.cost > 0);
        assert_eq!(report.cost, state.total_cost());
    }

    #[test]
    fn test_suggest_move_does_not_apply_it() {
        let board = board_from_str("AA. BB. ...");
        let mut state = GameState::from_board(board.clone(), Player::B, SessionRng::new(4));
        let hint = state.suggest_move(SearchSettings::new(9, true));

        assert_eq!(hint.index, Some(5));
        assert_eq!(state.board(), &board);
        assert_eq!(state.current_player(), Player::B);
        assert!(state.total_cost() > 0);
    }

    #[test]
    fn test_cost_accumulates_over_the_game() {
        let mut state = GameState::new(3, Player::A, SessionRng::new(5)).unwrap();
        let first = state.play_turn(&mut engine(2)).unwrap();
        let second = state.play_turn(&mut engine(2)).unwrap();
        assert_eq!(state.total_cost(), first.cost + second.cost);
    }

    #[test]
    fn test_perfect_engines_draw() {
        let mut state = GameState::new(3, Player::A, SessionRng::new(6)).unwrap();
        let outcome = state.run(&mut engine(10), &mut engine(10)).unwrap();
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.moves.len(), 9);
        assert!(outcome.total_cost > 0);
    }

    #[test]
    fn test_engine_never_loses_to_naive_player() {
        for seed in 0..3 {
            let mut state = GameState::new(3, Player::A, SessionRng::new(seed)).unwrap();
            let mut naive = CountingSource { calls: 0 };
            let outcome = state.run(&mut naive, &mut engine(10)).unwrap();
            assert_ne!(outcome.status, GameStatus::PlayerAWin, "seed {}", seed);
            assert!(outcome.status.is_over());
        }
    }

    #[test]
    fn test_scripted_occupied_cell_is_rejected() {
        let mut state = GameState::new(3, Player::A, SessionRng::new(7)).unwrap();
        let mut player_a = ScriptedMoveSource::new([4, 4]);
        let mut player_b = ScriptedMoveSource::new([0]);
        let result = state.run(&mut player_a, &mut player_b);
        assert_eq!(
            result,
            Err(GameError::InvalidMoveIndex { index: 4, reason: MoveRejection::Occupied })
        );
        assert_eq!(state.moves(), &[4, 0]);
    }

    #[test]
    fn test_scripted_game_reaches_win() {
        let mut state = GameState::new(3, Player::A, SessionRng::new(8)).unwrap();
        let mut player_a = ScriptedMoveSource::new([0, 1, 2]);
        let mut player_b = ScriptedMoveSource::new([3, 4]);
        let outcome = state.run(&mut player_a, &mut player_b).unwrap();
        assert_eq!(outcome.status, GameStatus::PlayerAWin);
        assert_eq!(outcome.moves, vec![0, 3, 1, 4, 2]);
        assert_eq!(outcome.total_cost, 0);
        assert_eq!(player_a.remaining(), 0);
    }
}
