use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use four_in_a_row::{Board, Cell};

/// Color of the highlighted last move
fn highlight(cell: Cell) -> Color {
    match cell {
        Cell::PlayerOne => Color::Red,
        _ => Color::Blue,
    }
}

/// Draws the board with a 1-indexed column header, highlighting the last move
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=board.columns()).map(|x| format!("{},", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("---\n{}\n", header))))?;

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let cell = board.cell(row, column);
            let marker = style(cell.marker());
            let marker = if board.last_move() == Some((row, column)) {
                marker.attribute(Attribute::Bold).with(highlight(cell))
            } else {
                marker
            };
            stdout
                .queue(PrintStyledContent(marker))?
                .queue(PrintStyledContent(style(',')))?;
        }
        stdout.queue(PrintStyledContent(style('\n')))?;
    }
    stdout.queue(PrintStyledContent(style("---\n")))?;
    stdout.flush()?;
    Ok(())
}
