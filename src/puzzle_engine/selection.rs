//! Checking a player's three picked tiles against the round.
//!
//! The caller owns scoring, timers and which equations were already found;
//! this only answers "does this ordered selection hit the target?".

use serde::{Deserialize, Serialize};
use crate::puzzle_engine::{
    errors::SelectionError,
    evaluator::calculate_equation,
    models::{Equation, EquationResult, GameState, Tile},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    Hit { equation: Equation },
    Miss { result: EquationResult },
}

impl SelectionOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, SelectionOutcome::Hit { .. })
    }
}

impl GameState {
    fn selected_tiles(&self, indices: [usize; 3]) -> Result<[Tile; 3], SelectionError> {
        for (pos, &index) in indices.iter().enumerate() {
            if index >= self.tiles.len() {
                return Err(SelectionError::IndexOutOfRange { index, tile_count: self.tiles.len() });
            }
            if indices[..pos].contains(&index) {
                return Err(SelectionError::RepeatedIndex { index });
            }
        }
        Ok(indices.map(|i| self.tiles[i]))
    }

    /// Evaluate the tiles at `indices`, in that order, against the target.
    pub fn check_selection(&self, indices: [usize; 3]) -> Result<SelectionOutcome, SelectionError> {
        let tiles = self.selected_tiles(indices)?;
        let outcome = match calculate_equation(tiles) {
            EquationResult::Valid(result) if result == self.target_number => {
                SelectionOutcome::Hit { equation: Equation { tiles, result } }
            }
            result => SelectionOutcome::Miss { result },
        };
        Ok(outcome)
    }

    /// Whether the ordered selection is one of the listed solutions.
    pub fn is_listed_solution(&self, indices: [usize; 3]) -> bool {
        match self.selected_tiles(indices) {
            Ok(tiles) => self.valid_equations.iter().any(|e| {
                e.tiles.iter().zip(tiles.iter()).all(|(a, b)| a.label == b.label)
            }),
            Err(_) => false,
        }
    }
}
