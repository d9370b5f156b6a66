//! Error types shared by position setup, input parsing and the worker pool.

/// Errors surfaced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A move token that is not four characters of `a-h` / `1-8`
    #[error("Malformed move token: {token:?}")]
    MalformedMove { token: String },

    /// Replay referenced a square with nothing on it
    #[error("No piece on origin square of {token}")]
    EmptyOrigin { token: String },

    /// Replay tried to move a piece of the side not on move
    #[error("Piece on origin square of {token} does not belong to the side to move")]
    WrongSide { token: String },

    /// Opening sequence could not be read
    #[error("Invalid input: {message}")]
    Input { message: String },

    /// Worker threads could not be created
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The side to move has no pieces with moves
    #[error("No moves available for the side to move")]
    NoMoves,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
