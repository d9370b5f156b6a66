//! Pseudo-legal destination generation. Moves that leave the mover's own king
//! attacked are not filtered, and a king is an ordinary capture target.

use super::{Board, PieceKind, Square, Team};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2), (-1, -2), (1, 2), (1, -2),
    (-2, 1), (-2, -1), (2, 1), (2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (-1, -1), (-1, 1), (1, -1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Destinations for the occupant on `from`, in a fixed order per piece kind.
pub fn generate(board: &Board, from: Square) -> Vec<Square> {
    let occ = board.at(from);
    let team = occ.team;
    let mut out = Vec::with_capacity(16);
    match occ.kind {
        PieceKind::Empty => {}
        PieceKind::Pawn => pawn_moves(board, from, team, &mut out),
        PieceKind::Knight => step_moves(board, from, team, &KNIGHT_OFFSETS, &mut out),
        PieceKind::King => step_moves(board, from, team, &KING_OFFSETS, &mut out),
        PieceKind::Rook => slide_moves(board, from, team, &ORTHOGONAL, &mut out),
        PieceKind::Bishop => slide_moves(board, from, team, &DIAGONAL, &mut out),
        PieceKind::Queen => {
            slide_moves(board, from, team, &DIAGONAL, &mut out);
            slide_moves(board, from, team, &ORTHOGONAL, &mut out);
        }
    }
    out
}

/// Row step a pawn of `team` advances by, and its home row.
fn pawn_direction(team: Team) -> (i8, u8) {
    match team {
        Team::White => (-1, 6),
        Team::Black => (1, 1),
    }
}

fn pawn_moves(board: &Board, from: Square, team: Team, out: &mut Vec<Square>) {
    let (dir, home) = pawn_direction(team);
    if let Some(one) = from.offset(dir, 0) {
        if board.at(one).is_empty() {
            out.push(one);
            if from.row == home {
                if let Some(two) = one.offset(dir, 0) {
                    if board.at(two).is_empty() { out.push(two); }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            if board.at(diag).is_team(team.opposite()) { out.push(diag); }
        }
    }
}

fn step_moves(board: &Board, from: Square, team: Team, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if !board.at(to).is_team(team) { out.push(to); }
        }
    }
}

fn slide_moves(board: &Board, from: Square, team: Team, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            let occ = board.at(to);
            if occ.is_empty() {
                out.push(to);
                cur = to;
                continue;
            }
            // capture-and-stop on an opponent, stop short of our own piece
            if occ.team != team { out.push(to); }
            break;
        }
    }
}

/// Every (origin, destination) pair for `team`, row-major by origin.
pub fn team_moves(board: &Board, team: Team) -> Vec<super::Move> {
    let mut moves = Vec::with_capacity(48);
    for from in board.squares_of(team) {
        moves.extend(generate(board, from).into_iter().map(|to| super::Move::new(from, to)));
    }
    moves
}
