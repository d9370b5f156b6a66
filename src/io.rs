//! Text adapters: opening-sequence input and board diagrams.

use crate::board::{Board, Square, Team};
use crate::error::{EngineError, EngineResult};
use std::fmt::{self, Write};

/// Parse `N` followed by `N` whitespace-separated move tokens.
/// Tokens beyond the first `N` are ignored.
pub fn parse_opening(text: &str) -> EngineResult<Vec<String>> {
    let mut tokens = text.split_whitespace();
    let count_tok = tokens.next().ok_or_else(|| EngineError::Input { message: "missing move count".into() })?;
    let count: usize = count_tok
        .parse()
        .map_err(|_| EngineError::Input { message: format!("move count {count_tok:?} is not a number") })?;
    let moves: Vec<String> = tokens.take(count).map(str::to_string).collect();
    if moves.len() < count {
        return Err(EngineError::Input { message: format!("expected {count} moves, found {}", moves.len()) });
    }
    Ok(moves)
}

fn team_letter(team: Team) -> char {
    match team {
        Team::White => 'w',
        Team::Black => 'b',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let occ = self.at(Square::new(row, col));
                if occ.is_empty() {
                    f.write_str(" - ")?;
                } else {
                    write!(f, "{}{} ", occ.kind.letter(), team_letter(occ.team))?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// One line per occupied square: the piece and its cached destinations in
/// internal row/col digits.
pub fn render_move_listing(board: &Board) -> String {
    let mut out = String::new();
    for sq in Square::all() {
        let occ = board.at(sq);
        if occ.is_empty() { continue; }
        let _ = write!(out, "{}{} ", occ.kind.letter(), team_letter(occ.team));
        for dest in &occ.cached_moves {
            let _ = write!(out, "{}{} ", dest.row, dest.col);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_count_and_tokens() {
        let moves = parse_opening("4\ne2e4 g8f6 e4e5 f6d5\n").unwrap();
        assert_eq!(moves, vec!["e2e4", "g8f6", "e4e5", "f6d5"]);
        assert_eq!(parse_opening("0").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn rejects_short_or_missing_input() {
        assert!(matches!(parse_opening(""), Err(EngineError::Input { .. })));
        assert!(matches!(parse_opening("x e2e4"), Err(EngineError::Input { .. })));
        assert!(matches!(parse_opening("3 e2e4 e7e5"), Err(EngineError::Input { .. })));
    }

    #[test]
    fn diagram_shows_back_ranks() {
        let text = Board::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Rb Nb Bb Qb Kb Bb Nb Rb ");
        assert_eq!(lines[3], " -  -  -  -  -  -  -  - ");
        assert_eq!(lines[7], "Rw Nw Bw Qw Kw Bw Nw Rw ");
    }

    #[test]
    fn listing_uses_cached_moves() {
        let mut b = Board::empty();
        b.put(Square::new(7, 0), Team::White, crate::board::PieceKind::Knight);
        b.refresh_all();
        assert_eq!(render_move_listing(&b), "Nw 62 52 \n");
    }
}
