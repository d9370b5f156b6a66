use anyhow::Result;
use clap::Parser;
use plysplit::perft::{divide, perft};
use plysplit::Position;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Pseudo-legal move tree counter for PlySplit")]
struct Args {
    /// Depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Opening moves replayed from the initial position, e.g. e2e4 e7e5
    #[arg(value_name = "MOVES")]
    moves: Vec<String>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the leaf count below every root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let pos = Position::from_moves(&args.moves[..])?;
    let side = pos.side_to_move();
    let board = pos.board();

    if args.divide {
        for (mv, n) in divide(board, side, args.depth) {
            println!("{mv}: {n}");
        }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.threads <= 1 || args.depth == 0 {
            perft(board, side, args.depth)
        } else {
            let root_moves = plysplit::board::movegen::team_moves(board, side);
            root_moves.par_iter().map(|&mv| {
                let mut b = board.clone();
                plysplit::board::apply::play(&mut b, mv);
                perft(&b, side.opposite(), args.depth - 1)
            }).sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
