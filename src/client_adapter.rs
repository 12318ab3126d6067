use serde_json::{json, Value};
use crate::puzzle_engine::models::{Equation, GameState, Tile};

/// One tile as the frontend draws it.
fn client_tile(tile: &Tile) -> Value {
    json!({
        "label": tile.label.to_string(),
        "number": tile.number,
        "operator": tile.operator.symbol()
    })
}

/// One solution entry: which tiles, in which order, and what it reads as.
fn client_equation(equation: &Equation) -> Value {
    json!({
        "labels": equation.labels(),
        "expression": equation.expression(),
        "result": equation.result
    })
}

/// Map a `GameState` to the JSON object the game frontend renders.
///
/// Field names match the frontend's store (`targetNumber`, `validEquations`).
/// Equations are flattened to labels so the client can highlight tiles without
/// re-sending tile bodies; `solutionCount` is 0 for a degraded round.
pub fn to_client_state(state: &GameState) -> Value {
    json!({
        "tiles": state.tiles.iter().map(client_tile).collect::<Vec<_>>(),
        "targetNumber": state.target_number,
        "validEquations": state.valid_equations.iter().map(client_equation).collect::<Vec<_>>(),
        "solutionCount": state.valid_equations.len(),
        "degraded": state.is_degraded()
    })
}
