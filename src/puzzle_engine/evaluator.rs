//! Three-tile equation evaluation.
//!
//! Tiles `a b c` read as `a.number b.op b.number c.op c.number`. The first
//! tile's operator never takes part: it is only a face on the tile. This
//! makes evaluation position-dependent, so `[a, b, c]` and `[b, a, c]` are
//! different equations. Keep it that way; the game's answers depend on it.

use tracing::trace;
use crate::puzzle_engine::models::{EquationResult, Operator, Tile};

/// One binary step. `None` when `/` leaves a remainder or divides by zero.
fn apply(lhs: i64, op: Operator, rhs: i64) -> Option<i64> {
    match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Sub => lhs.checked_sub(rhs),
        Operator::Mul => lhs.checked_mul(rhs),
        Operator::Div => {
            if rhs == 0 || lhs % rhs != 0 {
                None
            } else {
                Some(lhs / rhs)
            }
        }
    }
}

/// Evaluate three tiles in play order with standard precedence.
///
/// Only the `+`/`-` then `*`/`/` shape needs reordering: the trailing term
/// binds first. Every other shape resolves left to right, which is also
/// correct for chained `*`/`/`.
pub fn evaluate(first: &Tile, second: &Tile, third: &Tile) -> EquationResult {
    let a = i64::from(first.number);
    let b = i64::from(second.number);
    let c = i64::from(third.number);

    let value = if !second.operator.is_multiplicative() && third.operator.is_multiplicative() {
        apply(b, third.operator, c).and_then(|term| apply(a, second.operator, term))
    } else {
        apply(a, second.operator, b).and_then(|lhs| apply(lhs, third.operator, c))
    };

    let result = EquationResult::from_value(value);
    trace!(%first, %second, %third, %result, "evaluated");
    result
}

/// Array form used by callers holding a player's three selected tiles.
pub fn calculate_equation(tiles: [Tile; 3]) -> EquationResult {
    let [first, second, third] = tiles;
    evaluate(&first, &second, &third)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::models::Operator::{Add, Div, Mul, Sub};

    fn t(op: Operator, n: u32) -> Tile {
        Tile::new(op, n, 'A')
    }

    fn eval(a: (Operator, u32), b: (Operator, u32), c: (Operator, u32)) -> EquationResult {
        calculate_equation([t(a.0, a.1), t(b.0, b.1), t(c.0, c.1)])
    }

    #[test]
    fn multiplication_first_then_addition() {
        assert_eq!(eval((Add, 3), (Mul, 2), (Add, 1)), EquationResult::Valid(7));
    }

    #[test]
    fn trailing_multiplication_binds_first() {
        assert_eq!(eval((Add, 3), (Add, 1), (Mul, 2)), EquationResult::Valid(5));
    }

    #[test]
    fn uneven_division_is_invalid() {
        assert_eq!(eval((Add, 5), (Div, 2), (Add, 0)), EquationResult::Invalid);
    }

    #[test]
    fn additive_chain_runs_left_to_right() {
        assert_eq!(eval((Sub, 4), (Sub, 4), (Add, 4)), EquationResult::Valid(4));
        // Negative intermediates are fine as long as the total is positive.
        assert_eq!(eval((Add, 2), (Sub, 9), (Add, 8)), EquationResult::Valid(1));
    }

    #[test]
    fn chained_multiplicative_steps() {
        assert_eq!(eval((Add, 12), (Mul, 2), (Div, 3)), EquationResult::Valid(8));
        assert_eq!(eval((Add, 12), (Div, 4), (Div, 3)), EquationResult::Valid(1));
        assert_eq!(eval((Add, 7), (Mul, 2), (Div, 4)), EquationResult::Invalid);
    }

    #[test]
    fn trailing_division_term_must_be_exact() {
        assert_eq!(eval((Add, 1), (Add, 8), (Div, 4)), EquationResult::Valid(3));
        assert_eq!(eval((Add, 1), (Add, 6), (Div, 4)), EquationResult::Invalid);
        assert_eq!(eval((Add, 10), (Sub, 2), (Mul, 3)), EquationResult::Valid(4));
    }

    #[test]
    fn zero_and_negative_totals_are_invalid() {
        assert_eq!(eval((Add, 3), (Sub, 1), (Mul, 3)), EquationResult::Invalid);
        assert_eq!(eval((Add, 2), (Sub, 5), (Add, 1)), EquationResult::Invalid);
    }

    #[test]
    fn division_by_zero_is_invalid() {
        assert_eq!(eval((Add, 4), (Div, 0), (Add, 1)), EquationResult::Invalid);
    }

    #[test]
    fn first_operator_is_ignored() {
        for op in Operator::ALL {
            assert_eq!(eval((op, 9), (Sub, 3), (Div, 3)), EquationResult::Valid(8));
        }
    }
}
