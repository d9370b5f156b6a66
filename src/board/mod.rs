//! 8x8 mailbox board: row 0 is Black's back rank, row 7 is White's, column 0
//! is the a-file.

pub mod apply;
pub mod movegen;
pub mod position;

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn opposite(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Empty => '-',
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Content of one square. `team` carries no meaning when `kind` is `Empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub team: Team,
    pub kind: PieceKind,
    /// Last generated destinations for this occupant; may be stale.
    pub cached_moves: Vec<Square>,
}

impl Occupant {
    pub fn empty() -> Self {
        Self { team: Team::White, kind: PieceKind::Empty, cached_moves: Vec::new() }
    }

    pub fn piece(team: Team, kind: PieceKind) -> Self {
        Self { team, kind, cached_moves: Vec::new() }
    }

    pub fn is_empty(&self) -> bool { self.kind == PieceKind::Empty }

    /// Occupied by a piece of `team`.
    pub fn is_team(&self, team: Team) -> bool { !self.is_empty() && self.team == team }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) off board");
        Self { row, col }
    }

    /// Step by `(dr, dc)`; `None` when the target falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square { row: r as u8, col: c as u8 })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn parse_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() { return None; }
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) { return None; }
        let col = file as u8 - b'a';
        let row = 7 - (rank as u8 - b'1');
        Some(Square { row, col })
    }

    pub fn algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + (7 - self.row)) as char;
        format!("{file}{rank}")
    }
}

/// Internal encoding is the row/col digits of both squares, e.g. `6444`;
/// `Display` gives the algebraic form, e.g. `e2e4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self { Self { from, to } }

    pub fn code(&self) -> String {
        format!("{}{}{}{}", self.from.row, self.from.col, self.to.row, self.to.col)
    }

    pub fn from_code(code: &str) -> EngineResult<Move> {
        let malformed = || EngineError::MalformedMove { token: code.to_string() };
        let digits: Vec<u8> = code
            .chars()
            .map(|c| c.to_digit(10).filter(|&d| d < 8).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(malformed)?;
        if digits.len() != 4 { return Err(malformed()); }
        Ok(Move::new(Square::new(digits[0], digits[1]), Square::new(digits[2], digits[3])))
    }

    pub fn from_uci(token: &str) -> EngineResult<Move> {
        let malformed = || EngineError::MalformedMove { token: token.to_string() };
        if token.len() != 4 || !token.is_ascii() { return Err(malformed()); }
        let from = Square::parse_algebraic(&token[0..2]).ok_or_else(malformed)?;
        let to = Square::parse_algebraic(&token[2..4]).ok_or_else(malformed)?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from.algebraic(), self.to.algebraic())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Occupant; 8]; 8],
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self { cells: std::array::from_fn(|_| std::array::from_fn(|_| Occupant::empty())) }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for col in 0..8u8 {
            let kind = BACK_RANK[col as usize];
            b.set(Square::new(0, col), Occupant::piece(Team::Black, kind));
            b.set(Square::new(1, col), Occupant::piece(Team::Black, PieceKind::Pawn));
            b.set(Square::new(6, col), Occupant::piece(Team::White, PieceKind::Pawn));
            b.set(Square::new(7, col), Occupant::piece(Team::White, kind));
        }
        b
    }

    pub fn at(&self, sq: Square) -> &Occupant { &self.cells[sq.row as usize][sq.col as usize] }

    pub fn at_mut(&mut self, sq: Square) -> &mut Occupant {
        &mut self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn set(&mut self, sq: Square, occ: Occupant) { *self.at_mut(sq) = occ; }

    /// Convenience for tests and setup: put a `kind` of `team` on `sq`.
    pub fn put(&mut self, sq: Square, team: Team, kind: PieceKind) {
        self.set(sq, Occupant::piece(team, kind));
    }

    pub fn clear(&mut self, sq: Square) { self.set(sq, Occupant::empty()); }

    pub fn swap(&mut self, a: Square, b: Square) {
        if a == b { return; }
        let tmp = std::mem::replace(self.at_mut(a), Occupant::empty());
        let other = std::mem::replace(self.at_mut(b), tmp);
        *self.at_mut(a) = other;
    }

    /// Squares holding a piece of `team`, row-major.
    pub fn squares_of(&self, team: Team) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.at(sq).is_team(team))
    }

    pub fn find_king(&self, team: Team) -> Option<Square> {
        Square::all().find(|&sq| {
            let o = self.at(sq);
            o.kind == PieceKind::King && o.team == team
        })
    }

    /// Regenerate and cache the destinations of the occupant on `sq`.
    pub fn refresh_moves(&mut self, sq: Square) -> &[Square] {
        let moves = movegen::generate(self, sq);
        let occ = self.at_mut(sq);
        occ.cached_moves = moves;
        &occ.cached_moves
    }

    pub fn refresh_all(&mut self) {
        for sq in Square::all() {
            if !self.at(sq).is_empty() {
                self.refresh_moves(sq);
            }
        }
    }

    pub fn piece_count(&self) -> usize {
        Square::all().filter(|&sq| !self.at(sq).is_empty()).count()
    }
}
