use std::io::{self, BufRead, Write};

use engine::GameError;
use engine::games::n_in_a_row::{Board, Cell, MoveChoice, MoveSource, TurnContext};

pub fn show_board(board: &Board) {
    print!("{}", render_board(board));
}

fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    for (index, cell) in board.cells().iter().enumerate() {
        let name = match cell {
            Cell::PlayerA => " X ".to_string(),
            Cell::PlayerB => " @ ".to_string(),
            Cell::Empty => format!("({})", index),
        };
        out.push_str(&name);
        out.push(if (index + 1) % size == 0 { '\n' } else { '\t' });
    }
    out
}

/// Reads cell numbers from stdin until a legal one is entered.
pub struct ConsoleMoveSource;

impl MoveSource for ConsoleMoveSource {
    fn select_move(&mut self, context: TurnContext<'_>) -> Result<MoveChoice, GameError> {
        let stdin = io::stdin();
        let mut input = String::new();

        loop {
            print!("Enter cell number to fill: ");
            let _ = io::stdout().flush();

            input.clear();
            match stdin.lock().read_line(&mut input) {
                Ok(0) => return Err(GameError::Aborted),
                Ok(_) => {}
                Err(err) => {
                    println!("Failed to read input: {}", err);
                    return Err(GameError::Aborted);
                }
            }

            let Ok(index) = input.trim().parse::<usize>() else {
                println!("Wrong input");
                continue;
            };

            match context.board.validate_move(index) {
                Ok(()) => return Ok(MoveChoice::manual(index)),
                Err(err) => println!("{}", err),
            }
        }
    }
}
