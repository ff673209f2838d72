mod console;

use clap::Parser;
use engine::config::{ConfigManager, Controller, GameConfig, Validate};
use engine::games::SessionRng;
use engine::games::n_in_a_row::{EngineMoveSource, GameState, GameStatus, MoveSource, Player};
use engine::{log, logger, ConfigError, GameError};

use console::{show_board, ConsoleMoveSource};

const CONFIG_FILE: &str = "n_in_a_row_config.yaml";

#[derive(Parser)]
#[command(name = "n_in_a_row", about = "N-in-a-row against an alpha-beta engine")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Board side length.
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the engine's move ordering.
    #[arg(long)]
    seed: Option<u64>,

    /// Let the engine play both sides.
    #[arg(long)]
    auto: bool,

    /// Disable alpha-beta pruning for both players.
    #[arg(long)]
    no_pruning: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        for player in [&mut config.player_a, &mut config.player_b] {
            if self.auto {
                player.controller = Controller::Engine;
            }
            if self.no_pruning {
                player.pruning = false;
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Game".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager: ConfigManager<_, GameConfig, _> = ConfigManager::from_yaml_file(args.config.as_str());
    let mut config = manager.get_config()?;
    args.apply(&mut config);
    config.validate().map_err(ConfigError::Invalid)?;

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {0}x{0} game, seed {1}", config.board_size, rng.seed());

    let mut state = GameState::new(config.board_size, config.starting_player, rng)?;
    let mut sources = [source_for(&config, Player::A)?, source_for(&config, Player::B)?];

    println!("N-in-a-row");
    println!("X=Player A    @=Player B");
    println!();

    while !state.status().is_over() {
        show_board(state.board());
        println!();

        let player = state.current_player();
        let player_config = config.player(player);
        if player_config.controller == Controller::Human && player_config.show_hint {
            let settings = player_config.search_settings();
            let hint = state.suggest_move(settings);
            if let Some(index) = hint.index {
                println!(
                    "Hint: pick {} (value={}, outcome in {} plies)",
                    index,
                    hint.score,
                    hint.plies(settings.depth)
                );
            }
        }

        match state.play_turn(sources[player.index()].as_mut()) {
            Ok(report) => {
                match report.search {
                    Some(result) => println!(
                        "Player {:?} picks {} (value={}, cost={}, outcome in {} plies)",
                        report.player,
                        report.index,
                        result.score,
                        report.cost,
                        result.plies(player_config.search_settings().depth)
                    ),
                    None => println!("Player {:?} picks {}", report.player, report.index),
                }
            }
            Err(err @ GameError::InvalidMoveIndex { .. }) => println!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }

    show_board(state.board());
    println!();
    match state.status() {
        GameStatus::Draw => println!("Draw"),
        GameStatus::PlayerAWin => println!("Player A wins"),
        GameStatus::PlayerBWin => println!("Player B wins"),
        GameStatus::InProgress => {}
    }
    if let Some(line) = state.winning_line() {
        println!("Winning line: {:?}", line.indices);
    }
    println!("total cost: {}", state.total_cost());

    Ok(())
}

fn source_for(config: &GameConfig, player: Player) -> Result<Box<dyn MoveSource>, GameError> {
    let player_config = config.player(player);
    let source: Box<dyn MoveSource> = match player_config.controller {
        Controller::Human => Box::new(ConsoleMoveSource),
        Controller::Engine => Box::new(EngineMoveSource::new(player_config.search_settings())?),
    };
    Ok(source)
}
