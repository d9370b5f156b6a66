use crate::board::{apply, Board, Move, Square, Team};
use crate::search::eval::evaluate;
use crate::search::scheduler::{expand_root, select_best, TaskResult};
use crate::search::{SearchParams, SearchResult};

/// Score bound used for the full window and for nodes without moves.
pub const INF: i32 = i32::MAX;

/// Depth-limited minimax over whole-board copies.
///
/// `maximizer` is the side that chose the root move; every horizon score is
/// taken from its point of view.
#[derive(Debug, Clone)]
pub struct Searcher {
    params: SearchParams,
    maximizer: Team,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default(), Team::White) }
}

impl Searcher {
    pub fn new(params: SearchParams, maximizer: Team) -> Self {
        Self { params, maximizer, nodes: 0 }
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn maximizer(&self) -> Team { self.maximizer }

    /// Search `board` with `side` to move at ply `depth`.
    ///
    /// `carried` is handed back unchanged from horizon nodes; at inner nodes
    /// the returned move is the one reaching the best score. For each origin
    /// square a cutoff abandons that square's remaining moves only; later
    /// squares are still searched.
    pub fn minimax(
        &mut self,
        mut board: Board,
        depth: u32,
        side: Team,
        mut alpha: i32,
        mut beta: i32,
        carried: Option<Move>,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth >= self.params.horizon {
            return (evaluate(&board, self.maximizer), carried);
        }

        let maximizing = side == self.maximizer;
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = carried;
        let origins: Vec<Square> = board.squares_of(side).collect();
        for from in origins {
            let dests = board.refresh_moves(from).to_vec();
            for to in dests {
                let mut child = board.clone();
                apply::apply_move(&mut child, from, to);
                let (score, _) = self.minimax(child, depth + 1, side.opposite(), alpha, beta, best_move);
                if maximizing {
                    if score > best {
                        best = score;
                        best_move = Some(Move::new(from, to));
                    }
                    alpha = alpha.max(best);
                } else {
                    if score < best {
                        best = score;
                        best_move = Some(Move::new(from, to));
                    }
                    beta = beta.min(best);
                }
                if self.params.use_pruning && alpha >= beta { break; }
            }
        }
        (best, best_move)
    }

    /// Score one root task: the position after `root` was played, searched
    /// from depth 1 with the other side to move and a full window.
    pub fn search_task(&mut self, board: &Board, root: Move) -> i32 {
        let (score, _) = self.minimax(board.clone(), 1, self.maximizer.opposite(), -INF, INF, Some(root));
        score
    }

    /// Single-threaded root search for the maximizer. Root moves are tried in
    /// task order and the first strictly better score wins, as in the pool.
    pub fn search_root(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut results = Vec::new();
        for task in expand_root(board, self.maximizer) {
            let score = self.search_task(&task.board, task.root_move);
            results.push(TaskResult { score, root_move: task.root_move, index: task.index });
        }
        match select_best(&results) {
            Some(best) => SearchResult { bestmove: Some(best.root_move), score: best.score, nodes: self.nodes },
            None => SearchResult { bestmove: None, score: -INF, nodes: self.nodes },
        }
    }
}
