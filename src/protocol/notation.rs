//! Board notation encoding and decoding.
//!
//! Board notation is a compact single-line string for sharing a layout,
//! inspired by chess FEN.
//!
//! Format: `<tiles>/<ports>`
//!
//! - `tiles`: 19 comma-separated entries in path order. Each is a terrain
//!   letter (`F` forest, `P` pasture, `H` fields, `M` mountains, `C` hills,
//!   `D` desert) followed by the number token, which the desert omits.
//! - `ports`: 9 comma-separated letters in coastal order: `?` for a 3:1
//!   port, otherwise the resource letter (`L`, `W`, `G`, `O`, `B`).
//!
//! Parsing checks structure only; call `Board::validate` for the layout
//! invariants.

use crate::board::{Board, PortKind, Terrain, PORT_COUNT, TILE_COUNT};

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 2 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("expected 19 tile entries, got {0}")]
    WrongTileCount(usize),

    #[error("expected 9 port entries, got {0}")]
    WrongPortCount(usize),

    #[error("empty tile entry at position {0}")]
    EmptyTileEntry(usize),

    #[error("invalid terrain character: '{0}'")]
    InvalidTerrain(char),

    #[error("invalid number token: '{0}'")]
    InvalidNumber(String),

    #[error("tile entry '{0}' is missing its number token")]
    MissingNumber(String),

    #[error("desert entry '{0}' must not carry a number token")]
    DesertWithNumber(String),

    #[error("invalid port entry: '{0}'")]
    InvalidPort(String),
}

/// Parses one tile entry such as `F5`, `M12` or `D`.
fn parse_tile(entry: &str, position: usize) -> Result<(Terrain, Option<u8>), NotationError> {
    let mut chars = entry.chars();
    let terrain_char = chars.next().ok_or(NotationError::EmptyTileEntry(position))?;
    let terrain =
        Terrain::from_letter(terrain_char).ok_or(NotationError::InvalidTerrain(terrain_char))?;
    let rest = chars.as_str();

    if terrain.is_desert() {
        if !rest.is_empty() {
            return Err(NotationError::DesertWithNumber(entry.to_string()));
        }
        return Ok((terrain, None));
    }

    if rest.is_empty() {
        return Err(NotationError::MissingNumber(entry.to_string()));
    }
    let number: u8 = rest
        .parse()
        .map_err(|_| NotationError::InvalidNumber(rest.to_string()))?;
    if !(2..=12).contains(&number) || number == 7 {
        return Err(NotationError::InvalidNumber(rest.to_string()));
    }
    Ok((terrain, Some(number)))
}

/// Parses a single port letter.
fn parse_port(entry: &str) -> Result<PortKind, NotationError> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            PortKind::from_letter(c).ok_or_else(|| NotationError::InvalidPort(entry.to_string()))
        }
        _ => Err(NotationError::InvalidPort(entry.to_string())),
    }
}

/// Parses board notation into a `Board`.
pub fn parse_notation(s: &str) -> Result<Board, NotationError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 2 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let tile_entries: Vec<&str> = sections[0].split(',').collect();
    if tile_entries.len() != TILE_COUNT {
        return Err(NotationError::WrongTileCount(tile_entries.len()));
    }
    let port_entries: Vec<&str> = sections[1].split(',').collect();
    if port_entries.len() != PORT_COUNT {
        return Err(NotationError::WrongPortCount(port_entries.len()));
    }

    let mut production = [(Terrain::Desert, None); TILE_COUNT];
    for (i, entry) in tile_entries.iter().enumerate() {
        production[i] = parse_tile(entry, i + 1)?;
    }

    let mut kinds = [PortKind::Generic; PORT_COUNT];
    for (i, entry) in port_entries.iter().enumerate() {
        kinds[i] = parse_port(entry)?;
    }

    Ok(Board::from_parts(production, kinds))
}

/// Encodes a board as a notation string.
pub fn encode_notation(board: &Board) -> String {
    let mut out = String::with_capacity(80);
    for (i, tile) in board.tiles().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push(tile.terrain.letter());
        if let Some(n) = tile.number {
            out.push_str(&n.to_string());
        }
    }
    out.push('/');
    for (i, port) in board.ports().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push(port.kind.letter());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardError, Resource, TileId};

    /// The standard setup with the desert in the centre.
    const STANDARD: &str =
        "F5,F2,F6,F3,P8,P10,P9,P12,H11,H4,H8,H10,M9,M4,M5,C6,C3,C11,D/?,O,G,?,L,B,?,?,W";

    #[test]
    fn parse_standard_layout() {
        let board = parse_notation(STANDARD).unwrap();
        assert_eq!(board.validate(), Ok(()));
        let first = board.tile(TileId::new(1).unwrap());
        assert_eq!(first.terrain, Terrain::Forest);
        assert_eq!(first.number, Some(5));
        assert_eq!(board.desert().unwrap().id, TileId::new(19).unwrap());
        assert_eq!(board.ports()[1].kind, PortKind::Special(Resource::Ore));
    }

    #[test]
    fn encode_matches_input() {
        let board = parse_notation(STANDARD).unwrap();
        assert_eq!(encode_notation(&board), STANDARD);
    }

    #[test]
    fn wrong_section_count() {
        assert_eq!(
            parse_notation("F5,F2"),
            Err(NotationError::WrongSectionCount(1))
        );
        assert_eq!(
            parse_notation("a/b/c"),
            Err(NotationError::WrongSectionCount(3))
        );
    }

    #[test]
    fn wrong_entry_counts() {
        assert_eq!(
            parse_notation("F5,F2/?,O,G,?,L,B,?,?,W"),
            Err(NotationError::WrongTileCount(2))
        );
        let tiles = STANDARD.split('/').next().unwrap();
        assert_eq!(
            parse_notation(&format!("{}/?,O", tiles)),
            Err(NotationError::WrongPortCount(2))
        );
    }

    #[test]
    fn rejects_bad_entries() {
        let swap_first = |entry: &str| STANDARD.replacen("F5", entry, 1);
        assert_eq!(
            parse_notation(&swap_first("X5")),
            Err(NotationError::InvalidTerrain('X'))
        );
        assert_eq!(
            parse_notation(&swap_first("F7")),
            Err(NotationError::InvalidNumber("7".to_string()))
        );
        assert_eq!(
            parse_notation(&swap_first("F13")),
            Err(NotationError::InvalidNumber("13".to_string()))
        );
        assert_eq!(
            parse_notation(&swap_first("F")),
            Err(NotationError::MissingNumber("F".to_string()))
        );
        assert_eq!(
            parse_notation(&swap_first("")),
            Err(NotationError::EmptyTileEntry(1))
        );
        assert_eq!(
            parse_notation(&STANDARD.replace(",D/", ",D4/")),
            Err(NotationError::DesertWithNumber("D4".to_string()))
        );
        assert_eq!(
            parse_notation(&STANDARD.replace(",W", ",Z")),
            Err(NotationError::InvalidPort("Z".to_string()))
        );
    }

    #[test]
    fn structurally_valid_but_unfair_layout_fails_validation() {
        // Move the 8 on tile 5 next to the 6 on tile 3.
        let unfair = STANDARD.replacen("F3,P8", "P8,F3", 1);
        let board = parse_notation(&unfair).unwrap();
        assert!(matches!(
            board.validate(),
            Err(BoardError::AdjacentRedNumbers(_, _))
        ));
    }
}
