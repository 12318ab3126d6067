//! # equation_pyramid_gen
//!
//! A fully offline, deterministic round generator for the Equation Pyramid
//! number game.
//!
//! Each round deals ten tiles, every one a number with an operator, and picks a
//! target number. Players look for three tiles that, read in order, compute the
//! target. This crate builds the tiles, finds every solution, and chooses a
//! target that is neither too rare nor too common.
//!
//! ## How it works
//!
//! 1. Create a [`RoundRequest`] with an optional RNG seed and a [`GameConfig`]
//!    (defaults match the shipped game).
//! 2. Call [`generate_round`]: the engine samples a constrained tile set,
//!    evaluates all 720 ordered triples, groups the hits by result, and picks
//!    the result whose solution count best fits the configured band. Sparse or
//!    unlucky tile sets are redrawn a bounded number of times.
//! 3. The returned [`GameState`] carries the tiles, the target, and every
//!    solution, ready to display in any UI. Check player picks with
//!    [`GameState::check_selection`].
//!
//! ## Evaluation rules
//!
//! Tiles `a b c` read as `a.number b.op b.number c.op c.number`, with `*` and
//! `/` binding tighter than `+` and `-`. The first tile's operator is never
//! used. Division must come out even, and only positive totals count.
//!
//! ## Quick start
//!
//! ```rust
//! use equation_pyramid_gen::{calculate_equation, generate_round, RoundRequest};
//!
//! let state = generate_round(RoundRequest::seeded(42)).unwrap();
//! println!("Target: {}", state.target_number);
//! for tile in &state.tiles {
//!     print!("{}:{} ", tile.label, tile);
//! }
//!
//! for equation in &state.valid_equations {
//!     let result = calculate_equation(equation.tiles);
//!     assert_eq!(result.value(), Some(state.target_number));
//!     println!("{}: {}", equation.labels(), equation);
//! }
//! ```

pub mod client_adapter;
pub mod puzzle_engine;

// Convenience re-exports so callers can use `equation_pyramid_gen::generate_round`
// directly without reaching into `puzzle_engine::`.
pub use client_adapter::to_client_state;
pub use puzzle_engine::{
    calculate_equation, evaluate, generate_game_state, generate_game_state_with, generate_round,
    ConfigError, Equation, EquationResult, GameConfig, GameState, Operator, RoundRequest,
    SelectionError, SelectionOutcome, Tile,
};
