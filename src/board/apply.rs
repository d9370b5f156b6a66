use super::{movegen, Board, Move, Occupant, Square};
use log::trace;

/// Play `from -> to` if the generator currently allows it.
///
/// Returns `false` and leaves the board untouched when `to` is not among the
/// mover's freshly generated destinations (including an empty origin).
/// A capture discards the taken occupant: the destination is reset to an
/// empty square (team flag back to White) and swapped into the origin.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> bool {
    if board.at(from).is_empty() {
        trace!("ignoring move from empty square {}", from.algebraic());
        return false;
    }
    let moves = movegen::generate(board, from);
    if !moves.contains(&to) {
        trace!("ignoring move {}{} not produced by the generator", from.algebraic(), to.algebraic());
        return false;
    }
    board.at_mut(from).cached_moves = moves;
    if !board.at(to).is_empty() {
        board.set(to, Occupant::empty());
    }
    board.swap(from, to);
    true
}

pub fn play(board: &mut Board, mv: Move) -> bool { apply_move(board, mv.from, mv.to) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Team};

    #[test]
    fn quiet_move_swaps_contents() {
        let mut b = Board::startpos();
        assert!(play(&mut b, Move::from_uci("e2e4").unwrap()));
        assert_eq!(b.at(Square::new(4, 4)).kind, PieceKind::Pawn);
        assert!(b.at(Square::new(6, 4)).is_empty());
    }

    #[test]
    fn capture_clears_victim() {
        let mut b = Board::empty();
        b.put(Square::new(4, 4), Team::White, PieceKind::Rook);
        b.put(Square::new(1, 4), Team::Black, PieceKind::Queen);
        assert!(apply_move(&mut b, Square::new(4, 4), Square::new(1, 4)));
        assert_eq!(b.at(Square::new(1, 4)).kind, PieceKind::Rook);
        assert_eq!(b.at(Square::new(1, 4)).team, Team::White);
        let origin = b.at(Square::new(4, 4));
        assert!(origin.is_empty());
        assert_eq!(origin.team, Team::White);
        assert_eq!(b.piece_count(), 1);
    }
}
