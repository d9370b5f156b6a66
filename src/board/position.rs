use super::{apply, Board, Move, Team};
use crate::error::{EngineError, EngineResult};
use log::warn;

/// A board plus the side to move, built by replaying an opening from the
/// standard initial array.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Team,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: Board::startpos(), side_to_move: Team::White }
    }

    pub fn from_board(board: Board, side_to_move: Team) -> Self { Self { board, side_to_move } }

    pub fn board(&self) -> &Board { &self.board }

    pub fn into_board(self) -> Board { self.board }

    pub fn side_to_move(&self) -> Team { self.side_to_move }

    /// Replay one `e2e4`-style token for the side to move.
    ///
    /// An empty origin or an origin owned by the other side is rejected. A
    /// destination the generator does not offer is skipped with a warning,
    /// and the turn still passes.
    pub fn make_move_uci(&mut self, mv_uci: &str) -> EngineResult<()> {
        let mv = Move::from_uci(mv_uci)?;
        let occ = self.board.at(mv.from);
        if occ.is_empty() {
            return Err(EngineError::EmptyOrigin { token: mv_uci.to_string() });
        }
        if occ.team != self.side_to_move {
            return Err(EngineError::WrongSide { token: mv_uci.to_string() });
        }
        if !apply::play(&mut self.board, mv) {
            warn!("opening move {mv_uci} is not playable here; board left unchanged");
        }
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    pub fn from_moves<S: AsRef<str>>(moves: &[S]) -> EngineResult<Self> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m.as_ref())?; }
        Ok(pos)
    }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Square};

    #[test]
    fn replay_alternates_sides() {
        let pos = Position::from_moves(&["e2e4", "e7e5"]).unwrap();
        assert_eq!(pos.side_to_move(), Team::White);
        assert_eq!(pos.board().at(Square::new(3, 4)).kind, PieceKind::Pawn);
        assert_eq!(pos.board().at(Square::new(3, 4)).team, Team::Black);
    }

    #[test]
    fn replay_rejects_wrong_side_and_empty_origin() {
        let err = Position::from_moves(&["e7e5"]).unwrap_err();
        assert!(matches!(err, EngineError::WrongSide { .. }), "{err}");
        let err = Position::from_moves(&["e3e4"]).unwrap_err();
        assert!(matches!(err, EngineError::EmptyOrigin { .. }), "{err}");
        let err = Position::from_moves(&["e2-e4"]).unwrap_err();
        assert!(matches!(err, EngineError::MalformedMove { .. }), "{err}");
    }
}
