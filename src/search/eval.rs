use crate::board::{movegen, Board, PieceKind, Square, Team};

// Flat material per kind. Knight above bishop/rook is part of this heuristic.
const PAWN: i32 = 1;
const KNIGHT: i32 = 5;
const BISHOP: i32 = 3;
const ROOK: i32 = 3;
const QUEEN: i32 = 9;
const KING: i32 = 100;

/// Applied once for each king found in check.
pub const CHECK_SCORE: i32 = 60;

// Midgame piece-square tables, indexed [row][col] on the raw grid (row 0 is
// Black's back rank). Not mirrored per side.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 5, 5, -10, -10, 5, 5, 0],
    [0, 10, 10, 0, 0, 10, 10, 0],
    [0, 10, 20, 30, 30, 20, 10, 0],
    [0, 10, 10, 20, 20, 10, 10, 0],
    [0, 10, 10, 20, 20, 10, 10, 0],
    [0, 10, 10, 0, 0, 10, 10, 0],
    [0, 5, 5, -10, -10, 5, 5, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [5, 5, 5, 10, 10, 5, 5, 5],
    [5, 5, 5, 10, 10, 5, 5, 5],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 5, 5, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// Material plus table bonus for `kind` standing on `sq`.
pub fn piece_value(kind: PieceKind, sq: Square) -> i32 {
    let (r, c) = (sq.row as usize, sq.col as usize);
    match kind {
        PieceKind::Empty => 0,
        PieceKind::Pawn => PAWN + PAWN_TABLE[r][c],
        PieceKind::Knight => KNIGHT + KNIGHT_TABLE[r][c],
        PieceKind::Bishop => BISHOP + BISHOP_TABLE[r][c],
        PieceKind::Rook => ROOK + ROOK_TABLE[r][c],
        PieceKind::Queen => QUEEN + QUEEN_TABLE[r][c],
        PieceKind::King => KING + KING_TABLE[r][c],
    }
}

/// Material and placement only, from `perspective`'s point of view.
pub fn material_eval(board: &Board, perspective: Team) -> i32 {
    let mut score = 0;
    for sq in Square::all() {
        let occ = board.at(sq);
        if occ.is_empty() { continue; }
        let v = piece_value(occ.kind, sq);
        if occ.team == perspective { score += v; } else { score -= v; }
    }
    score
}

/// Static score of `board` for `perspective`, including the check terms.
pub fn evaluate(board: &Board, perspective: Team) -> i32 {
    let mut score = material_eval(board, perspective);
    if in_check(board, perspective) { score -= CHECK_SCORE; }
    if in_check(board, perspective.opposite()) { score += CHECK_SCORE; }
    score
}

/// True when some piece of the other side can move onto `team`'s king.
/// A side without a king is never in check.
pub fn in_check(board: &Board, team: Team) -> bool {
    let Some(king) = board.find_king(team) else { return false };
    board
        .squares_of(team.opposite())
        .any(|sq| movegen::generate(board, sq).contains(&king))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_tables_are_not_mirrored() {
        // Raw-coordinate tables: the two sides need not balance, only negate.
        let b = Board::startpos();
        let w = material_eval(&b, Team::White);
        assert_eq!(w, -material_eval(&b, Team::Black));
        assert!(!in_check(&b, Team::White));
        assert_eq!(evaluate(&b, Team::White), w);
    }

    #[test]
    fn check_terms_apply_both_ways() {
        let mut b = Board::empty();
        b.put(Square::new(7, 4), Team::White, PieceKind::King);
        b.put(Square::new(0, 4), Team::Black, PieceKind::King);
        b.put(Square::new(3, 4), Team::Black, PieceKind::Rook);
        assert!(in_check(&b, Team::White));
        assert!(!in_check(&b, Team::Black));
        let base = material_eval(&b, Team::White);
        assert_eq!(evaluate(&b, Team::White), base - CHECK_SCORE);
        assert_eq!(evaluate(&b, Team::Black), -base + CHECK_SCORE);
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut b = Board::empty();
        b.put(Square::new(3, 3), Team::Black, PieceKind::Queen);
        assert!(!in_check(&b, Team::White));
    }
}
