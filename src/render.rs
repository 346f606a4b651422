//! Text rendering of a board for the terminal.
//!
//! Tiles are laid out by axial coordinate as offset rows of hexes, each
//! shown as its terrain letter and number token. The high-probability 6 and
//! 8 are drawn in red when colour is on, or in angle brackets otherwise. A
//! port legend follows the map.

use std::fmt::Write;

use crate::board::{is_red, Board, Tile, ALL_TERRAIN};

const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Characters per half-hex step along a row.
const HALF_CELL: usize = 3;

/// Rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colour escapes.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { color: true }
    }
}

/// Formats one tile as a five-character cell such as `[F 5]` or `<M 8>`.
fn cell(tile: &Tile, options: &RenderOptions) -> String {
    let letter = tile.terrain.letter();
    match tile.number {
        None => format!("[{}  ]", letter),
        Some(n) if is_red(n) && options.color => {
            format!("[{}{}{:>2}{}]", letter, RED, n, RESET)
        }
        Some(n) if is_red(n) => format!("<{}{:>2}>", letter, n),
        Some(n) => format!("[{}{:>2}]", letter, n),
    }
}

/// Renders the hex map only, one line per board row.
pub fn render_map(board: &Board, options: &RenderOptions) -> String {
    let mut tiles: Vec<&Tile> = board.tiles().iter().collect();
    tiles.sort_by_key(|t| {
        let (q, r) = t.id.coord();
        (r, q)
    });

    // Horizontal position in half-hex steps: x = 2q + r.
    let x_of = |t: &Tile| {
        let (q, r) = t.id.coord();
        2 * q as i32 + r as i32
    };
    let min_x = tiles.iter().map(|&t| x_of(t)).min().unwrap_or(0);

    let mut out = String::new();
    let mut i = 0;
    while i < tiles.len() {
        let row = tiles[i].id.coord().1;
        let mut line = String::new();
        let mut col = 0usize;
        while i < tiles.len() && tiles[i].id.coord().1 == row {
            let target = (x_of(tiles[i]) - min_x) as usize * HALF_CELL;
            while col < target {
                line.push(' ');
                col += 1;
            }
            line.push_str(&cell(tiles[i], options));
            col += 5;
            i += 1;
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders the map, a terrain key and the port legend.
pub fn render(board: &Board, options: &RenderOptions) -> String {
    let mut out = render_map(board, options);
    out.push('\n');

    let key: Vec<String> = ALL_TERRAIN
        .iter()
        .map(|t| format!("{}={}", t.letter(), t.name()))
        .collect();
    let _ = writeln!(out, "Key: {}", key.join(" "));

    out.push_str("Ports:\n");
    for port in board.ports() {
        let _ = writeln!(
            out,
            "  tile {:>2} {:<2}  {}",
            port.location.tile.get(),
            port.location.facing.abbr(),
            port.kind
        );
    }
    out
}
