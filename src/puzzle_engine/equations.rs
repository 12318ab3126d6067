use crate::puzzle_engine::{
    evaluator::evaluate,
    models::{Equation, Tile},
};

/// Every ordered triple of distinct tiles whose result lands in `1..=max_target`.
///
/// Order matters because evaluation is positional, so ten tiles give 720
/// triples to try. Permutations of the same three tiles are kept as separate
/// equations.
pub fn enumerate_equations(tiles: &[Tile], max_target: u32) -> Vec<Equation> {
    let mut equations = Vec::new();

    for (i, first) in tiles.iter().enumerate() {
        for (j, second) in tiles.iter().enumerate() {
            if j == i {
                continue;
            }
            for (k, third) in tiles.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                if let Some(result) = evaluate(first, second, third).value() {
                    if result <= max_target {
                        equations.push(Equation { tiles: [*first, *second, *third], result });
                    }
                }
            }
        }
    }

    equations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::models::Operator::{Add, Div, Mul, Sub};

    #[test]
    fn permutations_are_independent_entries() {
        let tiles = [
            Tile::new(Add, 3, 'A'),
            Tile::new(Mul, 2, 'B'),
            Tile::new(Add, 1, 'C'),
        ];
        let equations = enumerate_equations(&tiles, 15);
        let found: Vec<(String, u32)> = equations.iter().map(|e| (e.labels(), e.result)).collect();
        // ABC 3*2+1, ACB 3+1*2, BAC 2+3+1, BCA 2+1+3, CAB 1+3*2, CBA 1*2+3
        assert_eq!(
            found,
            vec![
                ("ABC".to_string(), 7),
                ("ACB".to_string(), 5),
                ("BAC".to_string(), 6),
                ("BCA".to_string(), 6),
                ("CAB".to_string(), 7),
                ("CBA".to_string(), 5),
            ]
        );
    }

    #[test]
    fn results_above_max_target_are_dropped() {
        let tiles = [
            Tile::new(Add, 9, 'A'),
            Tile::new(Mul, 4, 'B'),
            Tile::new(Sub, 2, 'C'),
        ];
        let equations = enumerate_equations(&tiles, 15);
        assert!(equations.iter().all(|e| e.result <= 15));
        // 9*4-2 = 34 never makes the list
        assert!(!equations.iter().any(|e| e.labels() == "ABC"));
    }

    #[test]
    fn undividable_set_has_no_equations() {
        let tiles: Vec<Tile> = [11, 13, 17, 19, 23]
            .iter()
            .enumerate()
            .map(|(i, &n)| Tile::new(Div, n, (b'A' + i as u8) as char))
            .collect();
        assert!(enumerate_equations(&tiles, 15).is_empty());
    }

    #[test]
    fn full_round_has_720_candidates_at_most() {
        let tiles: Vec<Tile> = (1..=10)
            .map(|n| Tile::new(Add, n, (b'A' + n as u8 - 1) as char))
            .collect();
        let equations = enumerate_equations(&tiles, u32::MAX);
        assert_eq!(equations.len(), 720);
    }
}
