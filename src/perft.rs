use crate::board::{apply, movegen, Board, Team};

/// Leaf count of the pseudo-legal move tree, `side` to move first.
/// Copies the board per move, the same way the search does.
pub fn perft(board: &Board, side: Team, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in movegen::team_moves(board, side) {
        let mut child = board.clone();
        apply::play(&mut child, mv);
        nodes += perft(&child, side.opposite(), depth - 1);
    }
    nodes
}

/// Per-root-move leaf counts, root moves in generation order.
pub fn divide(board: &Board, side: Team, depth: u32) -> Vec<(crate::board::Move, u64)> {
    if depth == 0 { return Vec::new(); }
    movegen::team_moves(board, side)
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            apply::play(&mut child, mv);
            (mv, perft(&child, side.opposite(), depth - 1))
        })
        .collect()
}
