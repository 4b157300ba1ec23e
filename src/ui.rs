#![cfg(feature = "std")]
//! Plain-text rendering of player views for the terminal.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::Coord,
    piece::Side,
    rules::Move,
    view::{BoardView, ViewCell},
};

fn side_letter(side: Side) -> char {
    match side {
        Side::Red => 'r',
        Side::Blue => 'b',
    }
}

/// Render a view as a grid. Own and revealed pieces show their rank symbol,
/// hidden opposing pieces show `?`, lakes `~~`.
pub fn render_view(view: &BoardView) -> String {
    let geometry = view.geometry;
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..geometry.cols() {
        let ch = (b'A' + c) as char;
        let _ = write!(out, "  {}", ch);
    }
    out.push('\n');
    for r in 0..geometry.rows() {
        let _ = write!(out, "{:2} ", r as u16 + 1);
        for c in 0..geometry.cols() {
            let cell = match view.cell(Coord::new(r, c)) {
                Some(ViewCell::Lake) => String::from("~~"),
                Some(ViewCell::Piece(p)) => {
                    let rank = p.rank.map_or('?', |rank| rank.symbol());
                    format!("{}{}", side_letter(p.side), rank)
                }
                Some(ViewCell::Empty) | None => String::from(" ."),
            };
            let _ = write!(out, " {}", cell);
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} to move, move {}, {}",
        view.turn, view.move_count, view.status
    );
    for side in Side::BOTH {
        let lost: Vec<String> = view
            .casualties(side)
            .iter()
            .map(|r| r.symbol().to_string())
            .collect();
        let _ = writeln!(out, "{} lost: [{}]", side, lost.join(" "));
    }
    out
}

/// Print `view` to stdout.
pub fn print_view(view: &BoardView) {
    std::print!("{}", render_view(view));
}

/// Parse `"A7 A6"` or `"A7-A6"` into a move for `side`.
pub fn parse_move(side: Side, input: &str) -> Option<Move> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|s| !s.is_empty());
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(side, from, to))
}
