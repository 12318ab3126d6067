//! Generate a few rounds and print them.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=equation_pyramid_gen=debug` to watch the retry loop.
//!
//! ## What it shows
//!
//! - `RoundRequest::seeded(u64)` makes the round fully deterministic.
//! - A round with a tighter solution band loaded from JSON.
//! - Checking a player's pick with `GameState::check_selection`.
//! - The JSON the frontend receives.

use equation_pyramid_gen::{
    generate_round, to_client_state, GameConfig, GameState, RoundRequest, SelectionOutcome,
};
use tracing_subscriber::EnvFilter;

/// Pretty-print one round: tiles, target, and every solution.
fn print_round(title: &str, state: &GameState) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  Target: {}", title, state.target_number);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let faces: Vec<String> = state.tiles.iter().map(|t| format!("{}:{}", t.label, t)).collect();
    println!("  Tiles: {}", faces.join("  "));
    if state.is_degraded() {
        println!("  No solvable target this round.");
    }
    for equation in &state.valid_equations {
        println!("    {}  {}", equation.labels(), equation);
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for seed in [1u64, 42, 2024] {
        match generate_round(RoundRequest::seeded(seed)) {
            Ok(state) => print_round(&format!("seed {seed}"), &state),
            Err(err) => eprintln!("seed {seed}: {err}"),
        }
    }

    // ── Custom band ────────────────────────────────────────────────────────
    let json = r#"{ "min_valid_equations": 3, "max_valid_equations": 6 }"#;
    let config = match GameConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };
    let state = match generate_round(RoundRequest::seeded(7).with_config(config)) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("seed 7: {err}");
            return;
        }
    };
    print_round("seed 7, band 3..=6", &state);

    // ── Player pick ────────────────────────────────────────────────────────
    for pick in [[0, 1, 2], [2, 1, 0]] {
        match state.check_selection(pick) {
            Ok(SelectionOutcome::Hit { equation }) => println!("  Pick {pick:?}: hit! {equation}"),
            Ok(SelectionOutcome::Miss { result }) => println!("  Pick {pick:?}: miss ({result})"),
            Err(err) => println!("  Pick {pick:?}: {err}"),
        }
    }
    println!();

    // ── Frontend JSON ──────────────────────────────────────────────────────
    match serde_json::to_string_pretty(&to_client_state(&state)) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("serialize: {err}"),
    }
}
