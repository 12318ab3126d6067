//! Core puzzle engine: tile generation, equation evaluation, and target selection.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: operators, tiles, equations, game state |
//! | `config`     | Tunable caps, bands and attempt budgets; round requests |
//! | `errors`     | Input-boundary errors (config, player selection) |
//! | `evaluator`  | Three-tile arithmetic with positional precedence rules |
//! | `tiles`      | Constrained random tile sets with safe-tile fallback |
//! | `equations`  | Enumerates all 720 ordered triples of a round |
//! | `selector`   | Groups equations by result and picks the target |
//! | `generator`  | Entry points `generate_round()` / `generate_game_state()` with retries |
//! | `selection`  | Checks a player's picked tiles against the round |

pub mod config;
pub mod equations;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod selection;
pub mod selector;
pub mod tiles;

// Re-export the public API surface so callers can use
// `puzzle_engine::generate_round` without reaching into sub-modules.
pub use config::{GameConfig, RoundRequest};
pub use errors::{ConfigError, SelectionError};
pub use evaluator::{calculate_equation, evaluate};
pub use generator::{
    generate_from_source, generate_game_state, generate_game_state_with, generate_round,
    GenerationOutcome, GenerationReport,
};
pub use models::{Equation, EquationResult, GameState, Operator, Tile};
pub use selection::SelectionOutcome;
pub use tiles::{generate_tiles, RandomTiles, TileSource};
