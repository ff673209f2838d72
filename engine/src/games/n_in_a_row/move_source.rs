use std::collections::VecDeque;

use crate::error::GameError;
use crate::games::SessionRng;
use super::board::Board;
use super::search::{find_best_move, NodeCounter, SearchResult, SearchSettings};
use super::types::Player;

/// Everything a move source may look at, or charge to, while picking a cell.
pub struct TurnContext<'a> {
    pub board: &'a Board,
    pub player: Player,
    pub rng: &'a mut SessionRng,
    pub cost: &'a mut NodeCounter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub index: usize,
    pub search: Option<SearchResult>,
}

impl MoveChoice {
    pub fn manual(index: usize) -> Self {
        Self { index, search: None }
    }
}

pub trait MoveSource {
    fn select_move(&mut self, context: TurnContext<'_>) -> Result<MoveChoice, GameError>;
}

/// Plays whatever the alpha-beta search picks.
#[derive(Debug, Clone, Copy)]
pub struct EngineMoveSource {
    settings: SearchSettings,
}

impl EngineMoveSource {
    /// A zero-depth search stops at the horizon without choosing a cell, so
    /// at least one ply is required.
    pub fn new(settings: SearchSettings) -> Result<Self, GameError> {
        if settings.depth < 1 {
            return Err(GameError::InvalidSearchDepth { depth: settings.depth });
        }
        Ok(Self { settings })
    }
}

impl MoveSource for EngineMoveSource {
    fn select_move(&mut self, context: TurnContext<'_>) -> Result<MoveChoice, GameError> {
        let result = find_best_move(context.board, context.player, self.settings, context.rng, context.cost);
        let index = result.index.ok_or(GameError::NoLegalMoves)?;
        Ok(MoveChoice {
            index,
            search: Some(result),
        })
    }
}

/// Replays a fixed list of cells, e.g. a human's moves collected elsewhere.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoveSource {
    moves: VecDeque<usize>,
}

impl ScriptedMoveSource {
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoveSource {
    fn select_move(&mut self, _context: TurnContext<'_>) -> Result<MoveChoice, GameError> {
        self.moves
            .pop_front()
            .map(MoveChoice::manual)
            .ok_or(GameError::Aborted)
    }
}
