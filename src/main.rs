use anyhow::{anyhow, Result};
use log::{debug, info, trace};

use std::io::{stdin, stdout, Write};

use four_in_a_row::*;

mod config;
use config::*;

mod display;

mod layouts;

/// Logs every candidate the AI is choosing between, with its utility
fn log_candidates(scored: &[(i32, Board)]) {
    for (utility, candidate) in scored {
        debug!(
            "depth: {}, move: {}, cell: {:?}, utility: {}",
            candidate.depth(),
            candidate.sibling_index(),
            candidate.last_move(),
            utility
        );
        trace!("\n{}", candidate);
    }
}

fn main() -> Result<()> {
    let stdin = stdin();
    let mut input = stdin.lock();

    println!("Welcome to Four in a Row\n");

    let config = Config::prompt(&mut input)?;
    env_logger::Builder::new()
        .filter_level(config.verbosity.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .init();
    debug!("{:?}", config);

    let mut board = layouts::starting_board(config.layout)?;
    let engine = SearchEngine::new(config.ai_player);
    let human = config.ai_player.opponent();

    // game loop
    loop {
        display::draw(&board)?;

        match board.classify() {
            Position::Open => {
                // AI player
                if board.mover() == config.ai_player {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    let scored = engine.score_moves(board.legal_successors());
                    if config.verbosity == Verbosity::Diagnostics {
                        log_candidates(&scored);
                    }

                    board = search::pick_best(scored)
                        .ok_or_else(|| anyhow!("no legal move in an open position"))?;
                    if let Some((_, column)) = board.last_move() {
                        info!("AI plays column {}", column + 1);
                    }

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let input_str = read_line(&mut input)?;

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };

                    let result = match column.checked_sub(1) {
                        Some(index) => board.apply_human_move(index, human),
                        None => Err(MoveError::InvalidColumn {
                            column,
                            columns: board.columns(),
                        }),
                    };
                    match result {
                        Ok(()) => {}
                        Err(MoveError::ColumnFull { .. }) => {
                            println!("Invalid move, column {} full", column);
                        }
                        Err(MoveError::InvalidColumn { columns, .. }) => {
                            println!(
                                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                                column, columns
                            );
                        }
                    }
                }
            }

            // end states
            Position::Won(winner) => {
                if winner == config.ai_player {
                    println!("AI wins!");
                } else {
                    println!("You win!");
                }
                break;
            }
            Position::Drawn => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
