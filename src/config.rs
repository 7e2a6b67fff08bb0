use anyhow::{anyhow, Result};
use log::LevelFilter;

use std::io::{stdout, BufRead, Write};

use four_in_a_row::Player;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Verbosity {
    Quiet,
    /// Log every candidate move and its utility before the AI decides
    Diagnostics,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Info,
            Verbosity::Diagnostics => LevelFilter::Debug,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Layout {
    /// The 6x7 mid-game position the game starts from by default
    Preset,
    /// An empty 4x4 board
    Small,
}

#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub verbosity: Verbosity,
    pub layout: Layout,
    pub ai_player: Player,
}

impl Config {
    /// Asks the user for each setting in turn
    pub fn prompt<R: BufRead>(input: &mut R) -> Result<Self> {
        let layout = if ask(input, "Start from the preset 6x7 position? y/n: ")? {
            Layout::Preset
        } else {
            Layout::Small
        };

        let ai_player = if ask(input, "Should the AI move first? y/n: ")? {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        };

        let verbosity = if ask(input, "Show search diagnostics? y/n: ")? {
            Verbosity::Diagnostics
        } else {
            Verbosity::Quiet
        };

        Ok(Self {
            verbosity,
            layout,
            ai_player,
        })
    }
}

/// Reads one line, failing once the input is closed
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

/// Repeats a yes/no question until it gets an answer
fn ask<R: BufRead>(input: &mut R, question: &str) -> Result<bool> {
    loop {
        print!("{}", question);
        stdout().flush()?;
        let buffer = read_line(input)?;
        match parse_answer(&buffer) {
            Some(answer) => return Ok(answer),
            None => println!("Unknown answer given"),
        }
    }
}

fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().chars().next() {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    }
}
