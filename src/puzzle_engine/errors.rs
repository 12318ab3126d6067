use thiserror::Error;

/// Rejected tunables. Generation itself never fails; only its inputs can.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("A round needs at least one tile")]
    EmptyTileSet,
    #[error("Tile count {count} exceeds the {max} available labels")]
    TooManyTiles { count: usize, max: usize },
    #[error("Big number threshold {threshold} must lie in 2..={max_tile_number}")]
    ThresholdOutOfRange { threshold: u32, max_tile_number: u32 },
    #[error("Equation band {min}..={max} is empty or starts at zero")]
    InvalidEquationBand { min: usize, max: usize },
    #[error("Small number bias {0} is not a probability")]
    BiasOutOfRange(f64),
    #[error("Attempt budget `{0}` must be at least 1")]
    ZeroAttemptBudget(&'static str),
    #[error("Maximum target number {max_target} must lie in 1..={cap}")]
    TargetOutOfRange { max_target: u32, cap: u32 },
    #[error("{tile_count} tiles cannot stay unique with only {available} safe +/- tiles")]
    SafeTileShortage { tile_count: usize, available: usize },
    #[error("Malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A player selection the current round cannot evaluate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Tile index {index} is out of range for {tile_count} tiles")]
    IndexOutOfRange { index: usize, tile_count: usize },
    #[error("Tile index {index} was selected more than once")]
    RepeatedIndex { index: usize },
}
