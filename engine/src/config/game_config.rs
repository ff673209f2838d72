use serde::{Deserialize, Serialize};

use crate::games::n_in_a_row::{Player, SearchSettings};
use super::Validate;

/// Full-depth search is only practical on 3×3. On 4×4 and 5×5 keep `depth`
/// low (around 4 to 6); the default of `DEFAULT_DEPTH` plies there explores
/// most of the game tree and will not finish in reasonable time.
pub const MAX_BOARD_SIZE: usize = 5;
pub const MAX_DEPTH: u32 = 100;
/// Enough plies to search a 3×3 board to the end.
pub const DEFAULT_DEPTH: u32 = 10;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub starting_player: Player,
    /// Seed for move ordering. Absent means a fresh random seed per game.
    pub seed: Option<u64>,
    pub player_a: PlayerConfig,
    pub player_b: PlayerConfig,
}

impl GameConfig {
    pub fn player(&self, player: Player) -> &PlayerConfig {
        match player {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 {
            return Err("board_size must be greater than 0".to_string());
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(format!("board_size must not exceed {}", MAX_BOARD_SIZE));
        }
        self.player_a.validate().map_err(|e| format!("player_a: {}", e))?;
        self.player_b.validate().map_err(|e| format!("player_b: {}", e))?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            starting_player: Player::A,
            seed: None,
            player_a: PlayerConfig {
                controller: Controller::Human,
                show_hint: true,
                ..PlayerConfig::default()
            },
            player_b: PlayerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Engine,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PlayerConfig {
    pub controller: Controller,
    /// Plies searched when the engine moves or gives a hint.
    pub depth: u32,
    pub pruning: bool,
    /// Print the engine's suggestion before a human move.
    pub show_hint: bool,
}

impl PlayerConfig {
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings::new(self.depth as i32, self.pruning)
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.depth > MAX_DEPTH {
            return Err(format!("depth must not exceed {}", MAX_DEPTH));
        }
        if self.depth == 0 && (self.controller == Controller::Engine || self.show_hint) {
            return Err("depth must be at least 1 for engine moves and hints".to_string());
        }
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            controller: Controller::Engine,
            depth: DEFAULT_DEPTH,
            pruning: true,
            show_hint: false,
        }
    }
}
