use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidBoardSize { cells: usize },
    InvalidMoveIndex { index: usize, reason: MoveRejection },
    NoLegalMoves,
    /// The engine was asked to pick a move with no plies to look ahead.
    InvalidSearchDepth { depth: i32 },
    GameOver,
    /// A move source gave up without choosing, e.g. its input was closed.
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfRange { cells: usize },
    Occupied,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidBoardSize { cells } => {
                write!(f, "Invalid board size: {} cells is not a non-empty perfect square", cells)
            }
            GameError::InvalidMoveIndex { index, reason: MoveRejection::OutOfRange { cells } } => {
                write!(f, "Cell {} is out of range (board has {} cells)", index, cells)
            }
            GameError::InvalidMoveIndex { index, reason: MoveRejection::Occupied } => {
                write!(f, "Cell {} is already taken", index)
            }
            GameError::NoLegalMoves => write!(f, "No legal moves left on the board"),
            GameError::InvalidSearchDepth { depth } => {
                write!(f, "Search depth must be at least 1 to pick a move, got {}", depth)
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::Aborted => write!(f, "Game aborted before a move was chosen"),
        }
    }
}

impl std::error::Error for GameError {}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(serde_yaml_ng::Error),
    Deserialize(serde_yaml_ng::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Deserialize(e) => write!(f, "Failed to deserialize config: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Config validation error: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serialize(e) | ConfigError::Deserialize(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
