//! Root-split parallel search: every root move becomes a task, a fixed pool
//! of workers drains the task queue, and results are merged after the join.

use crate::board::{apply, Board, Move, Team};
use crate::error::{EngineError, EngineResult};
use crate::search::alphabeta::Searcher;
use crate::search::{SearchParams, SearchResult};
use log::{debug, info};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Instant;

/// One root move, already played on its own board.
#[derive(Debug, Clone)]
pub struct Task {
    pub board: Board,
    pub root_move: Move,
    /// Position in root expansion order; breaks score ties.
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResult {
    pub score: i32,
    pub root_move: Move,
    pub index: usize,
}

/// FIFO shared by the workers. Filled once at construction, then only drained.
#[derive(Debug)]
pub struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
}

impl TaskQueue {
    pub fn new(tasks: Vec<Task>) -> Self { Self { tasks: Mutex::new(tasks.into()) } }

    pub fn pop(&self) -> Option<Task> {
        let mut q = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        q.pop_front()
    }

    pub fn len(&self) -> usize { self.tasks.lock().unwrap_or_else(|e| e.into_inner()).len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Build one task per move of `side`, origins row-major, destinations in
/// generation order.
pub fn expand_root(board: &Board, side: Team) -> Vec<Task> {
    let mut root = board.clone();
    root.refresh_all();
    let mut tasks = Vec::new();
    let origins: Vec<_> = root.squares_of(side).collect();
    for from in origins {
        for &to in &root.at(from).cached_moves {
            let mut child = root.clone();
            apply::apply_move(&mut child, from, to);
            tasks.push(Task { board: child, root_move: Move::new(from, to), index: tasks.len() });
        }
    }
    tasks
}

/// First strictly greater score wins, scanning in task order.
pub fn select_best(results: &[TaskResult]) -> Option<TaskResult> {
    let mut best: Option<TaskResult> = None;
    for r in results {
        if best.map_or(true, |b| r.score > b.score) { best = Some(*r); }
    }
    best
}

fn worker_loop(queue: &TaskQueue, params: SearchParams, side: Team) -> (Vec<TaskResult>, u64) {
    let mut local = Vec::new();
    let mut nodes = 0u64;
    while let Some(task) = queue.pop() {
        let mut w = Searcher::new(params, side);
        let score = w.search_task(&task.board, task.root_move);
        nodes += w.nodes();
        local.push(TaskResult { score, root_move: task.root_move, index: task.index });
    }
    (local, nodes)
}

/// Pick the best move for `side` using `params.threads` workers.
///
/// The chosen move and score do not depend on the thread count: results are
/// ordered by task index before selection.
pub fn search_position(board: &Board, side: Team, params: &SearchParams) -> EngineResult<SearchResult> {
    let params = SearchParams { threads: params.threads.max(1), ..*params };
    let tasks = expand_root(board, side);
    if tasks.is_empty() { return Err(EngineError::NoMoves); }
    debug!("expanded {} root tasks for {:?}", tasks.len(), side);

    let queue = TaskQueue::new(tasks);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(params.threads)
        .thread_name(|i| format!("plysplit-worker-{i}"))
        .build()?;

    let t0 = Instant::now();
    // broadcast runs the loop once on every pool thread and returns after all finish
    let per_worker: Vec<(Vec<TaskResult>, u64)> = pool.broadcast(|_| worker_loop(&queue, params, side));
    debug_assert!(queue.is_empty());

    let mut total_nodes = 0u64;
    let mut results: Vec<TaskResult> = Vec::new();
    for (local, nodes) in per_worker {
        total_nodes += nodes;
        results.extend(local);
    }
    results.sort_by_key(|r| r.index);

    let best = select_best(&results).ok_or(EngineError::NoMoves)?;
    info!(
        "searched {} root moves on {} threads: best {} ({}) score {} nodes {} in {:.3}s",
        results.len(),
        params.threads,
        best.root_move,
        best.root_move.code(),
        best.score,
        total_nodes,
        t0.elapsed().as_secs_f64()
    );
    Ok(SearchResult { bestmove: Some(best.root_move), score: best.score, nodes: total_nodes })
}
