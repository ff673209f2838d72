use serde::{Deserialize, Serialize};

/// The two sides of a game. `A` is tag 0 (first mover), `B` is tag 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn mark(&self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Draw,
    PlayerAWin,
    PlayerBWin,
}

impl GameStatus {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::A => GameStatus::PlayerAWin,
            Player::B => GameStatus::PlayerBWin,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::PlayerAWin => Some(Player::A),
            GameStatus::PlayerBWin => Some(Player::B),
            _ => None,
        }
    }
}

/// A completed row, column or diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub occupant: Player,
    pub indices: Vec<usize>,
}

impl Line {
    pub fn new(occupant: Player, indices: Vec<usize>) -> Self {
        Self { occupant, indices }
    }
}
