mod config_content_provider;
mod config_manager;
mod config_serializer;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{Controller, GameConfig, PlayerConfig, DEFAULT_DEPTH, MAX_BOARD_SIZE, MAX_DEPTH};
pub use validate::Validate;
