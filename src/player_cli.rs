//! Terminal player: coordinate prompting and parsing.

use crate::board::Board;
use crate::player::Player;
use anyhow::{bail, Context};
use rand::rngs::SmallRng;
use std::io::{self, Write};

/// Human player reading targets from stdin.
pub struct CliPlayer {
    name: String,
}

impl CliPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        CliPlayer { name: name.into() }
    }
}

/// Display label for a coordinate, e.g. `(2, 4)` -> `C5`.
pub fn coord_label(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse a `C5`-style coordinate: column letter, then 1-based row number.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let x = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((x, row - 1))
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        loop {
            print!("Enter target (e.g. C5): ");
            io::stdout().flush().context("failed to flush stdout")?;
            let mut line = String::new();
            let read = io::stdin()
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                bail!("input closed before a target was entered");
            }
            match parse_coord(line.trim()) {
                Some((x, y)) if x < target.size() && y < target.size() => return Ok((x, y)),
                Some(_) => println!("That coordinate is off the board."),
                None => println!("Invalid coordinate, try something like C5."),
            }
        }
    }
}
