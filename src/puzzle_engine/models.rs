use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tile primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    /// Every operator, in the order tiles sample from.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One playable tile. `label` is display-only (A..J in generation order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub number: u32,
    pub operator: Operator,
    pub label: char,
}

impl Tile {
    pub fn new(operator: Operator, number: u32, label: char) -> Self {
        Tile { number, operator, label }
    }

    /// Identity used for duplicate detection; the label is ignored.
    pub fn key(&self) -> (Operator, u32) {
        (self.operator, self.number)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.number)
    }
}

// ---------------------------------------------------------------------------
// Evaluation results
// ---------------------------------------------------------------------------

/// Outcome of evaluating three tiles.
///
/// `Valid` always carries a positive integer; everything else (a remainder
/// left by `/`, a zero or negative total) collapses into `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquationResult {
    Valid(u32),
    Invalid,
}

impl EquationResult {
    /// Wrap an intermediate computation. `None` means a step already failed.
    pub(crate) fn from_value(value: Option<i64>) -> Self {
        match value {
            Some(v) if v > 0 => u32::try_from(v)
                .map(EquationResult::Valid)
                .unwrap_or(EquationResult::Invalid),
            _ => EquationResult::Invalid,
        }
    }

    pub fn value(self) -> Option<u32> {
        match self {
            EquationResult::Valid(v) => Some(v),
            EquationResult::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, EquationResult::Valid(_))
    }
}

impl fmt::Display for EquationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationResult::Valid(v) => write!(f, "{}", v),
            EquationResult::Invalid => write!(f, "invalid"),
        }
    }
}

// ---------------------------------------------------------------------------
// Round output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub tiles: [Tile; 3],
    pub result: u32,
}

impl Equation {
    /// Labels of the three tiles in play order, e.g. `"ADC"`.
    pub fn labels(&self) -> String {
        self.tiles.iter().map(|t| t.label).collect()
    }

    /// The arithmetic the player sees. The first tile contributes only its number.
    pub fn expression(&self) -> String {
        let [a, b, c] = &self.tiles;
        format!("{} {} {} {} {}", a.number, b.operator, b.number, c.operator, c.number)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// A generated round: immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub tiles: Vec<Tile>,
    pub target_number: u32,
    /// Every ordered triple whose result equals `target_number`.
    /// Empty only for the degraded fallback round.
    pub valid_equations: Vec<Equation>,
}

impl GameState {
    /// True when no in-band target could be found and the round carries no solutions.
    pub fn is_degraded(&self) -> bool {
        self.valid_equations.is_empty()
    }

    /// Look up a tile by its display label.
    pub fn tile(&self, label: char) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.label == label)
    }
}
