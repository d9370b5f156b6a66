use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use plysplit::board::apply;
use plysplit::io::{parse_opening, render_move_listing};
use plysplit::search::scheduler::search_position;
use plysplit::search::{SearchParams, DEFAULT_HORIZON};
use plysplit::Position;
use std::io::{self, Read};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the best move after an opening sequence read from stdin", long_about = None)]
struct Args {
    /// Number of worker threads
    #[arg(value_name = "THREADS", value_parser = clap::value_parser!(u64).range(1..))]
    threads: u64,

    /// Ply horizon, counting the root move
    #[arg(long, default_value_t = DEFAULT_HORIZON)]
    depth: u32,

    /// Search every move instead of cutting branches with alpha-beta
    #[arg(long)]
    no_prune: bool,

    /// Print the outcome as JSON instead of board diagrams
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct JsonOutcome {
    score: i32,
    bestmove: String,
    code: String,
    nodes: u64,
    threads: usize,
    elapsed_secs: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = SearchParams {
        horizon: args.depth,
        threads: args.threads as usize,
        use_pruning: !args.no_prune,
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("reading opening sequence from stdin")?;
    let moves = parse_opening(&input)?;
    let pos = Position::from_moves(&moves[..]).context("replaying opening sequence")?;
    let side = pos.side_to_move();
    let mut board = pos.into_board();
    board.refresh_all();

    if !args.json {
        print!("{board}");
    }
    debug!("candidate moves:\n{}", render_move_listing(&board));

    let begin = Instant::now();
    let res = search_position(&board, side, &params)?;
    let best = res.bestmove.context("search returned no move")?;
    let elapsed = begin.elapsed().as_secs_f64();

    if args.json {
        let out = JsonOutcome {
            score: res.score,
            bestmove: best.to_string(),
            code: best.code(),
            nodes: res.nodes,
            threads: params.threads,
            elapsed_secs: elapsed,
        };
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!("\n\n\n");
    println!("{}  {}", res.score, best.code());
    println!("{best}");
    apply::play(&mut board, best);
    print!("{board}");
    eprintln!("\n{} Total Threads: {}", params.threads, elapsed);
    Ok(())
}
