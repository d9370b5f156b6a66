// Fixed-depth minimax move finder with root-split parallel search
pub mod board;
pub mod error;
pub mod io;
pub mod perft;
pub mod search;

pub use board::position::Position;
pub use board::{Board, Move, PieceKind, Square, Team};
pub use error::{EngineError, EngineResult};
pub use search::{SearchParams, SearchResult};
