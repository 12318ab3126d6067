//! Target selection by solution count.
//!
//! Equations are bucketed by result in first-seen order, then the target is
//! the bucket whose size sits inside `[min_valid_equations, max_valid_equations]`.
//! Too few solutions makes a round nearly unfindable; too many makes it trivial.

use crate::puzzle_engine::{config::GameConfig, models::Equation};

/// All equations sharing one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    pub target: u32,
    pub equations: Vec<Equation>,
}

impl TargetGroup {
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    fn in_band(&self, config: &GameConfig) -> bool {
        (config.min_valid_equations..=config.max_valid_equations).contains(&self.len())
    }
}

/// Bucket equations by result, keeping the order results were first produced.
pub fn group_by_result(equations: Vec<Equation>) -> Vec<TargetGroup> {
    let mut groups: Vec<TargetGroup> = Vec::new();
    for equation in equations {
        match groups.iter_mut().find(|g| g.target == equation.result) {
            Some(group) => group.equations.push(equation),
            None => groups.push(TargetGroup { target: equation.result, equations: vec![equation] }),
        }
    }
    groups
}

/// Largest in-band group. Ties go to the group seen first.
pub fn best_target<'a>(groups: &'a [TargetGroup], config: &GameConfig) -> Option<&'a TargetGroup> {
    let mut best: Option<&TargetGroup> = None;
    for group in groups.iter().filter(|g| g.in_band(config)) {
        if best.map_or(true, |b| group.len() > b.len()) {
            best = Some(group);
        }
    }
    best
}

/// First in-band group in first-seen order.
pub fn first_in_band<'a>(
    groups: &'a [TargetGroup],
    config: &GameConfig,
) -> Option<&'a TargetGroup> {
    groups.iter().find(|g| g.in_band(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::models::{Operator, Tile};

    fn eq(result: u32) -> Equation {
        let tile = Tile::new(Operator::Add, result, 'A');
        Equation { tiles: [tile; 3], result }
    }

    fn groups_of(results: &[u32]) -> Vec<TargetGroup> {
        group_by_result(results.iter().map(|&r| eq(r)).collect())
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = groups_of(&[5, 3, 5, 9, 3, 5]);
        let summary: Vec<(u32, usize)> = groups.iter().map(|g| (g.target, g.len())).collect();
        assert_eq!(summary, vec![(5, 3), (3, 2), (9, 1)]);
    }

    #[test]
    fn best_prefers_largest_in_band_count() {
        // 7 has five solutions, above the default band of 2..=4.
        let groups = groups_of(&[2, 7, 7, 7, 7, 7, 4, 4, 6, 6, 6, 1]);
        let best = best_target(&groups, &GameConfig::default()).unwrap();
        assert_eq!(best.target, 6);
        assert_eq!(best.len(), 3);
    }

    #[test]
    fn ties_go_to_first_seen() {
        let groups = groups_of(&[8, 3, 3, 8, 11]);
        let best = best_target(&groups, &GameConfig::default()).unwrap();
        assert_eq!(best.target, 8);
    }

    #[test]
    fn nothing_in_band_selects_nothing() {
        let groups = groups_of(&[1, 2, 2, 2, 2, 2, 3]);
        let config = GameConfig::default();
        assert!(best_target(&groups, &config).is_none());
        assert!(first_in_band(&groups, &config).is_none());
    }

    #[test]
    fn first_in_band_ignores_size() {
        let groups = groups_of(&[4, 4, 9, 9, 9]);
        let first = first_in_band(&groups, &GameConfig::default()).unwrap();
        assert_eq!(first.target, 4);
    }
}
