use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::puzzle_engine::{
    config::{GameConfig, RoundRequest},
    equations::enumerate_equations,
    errors::ConfigError,
    models::{GameState, Tile},
    selector::{best_target, first_in_band, group_by_result, TargetGroup},
    tiles::{RandomTiles, TileSource},
};

/// How a round was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    /// A regular attempt found an in-band target.
    Selected,
    /// Retries ran out; the extra final pass still found one.
    FinalPass,
    /// Nothing in band: target 1, no equations.
    Degraded,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub state: GameState,
    /// Tile sets drawn, final pass included.
    pub attempts: usize,
    pub outcome: GenerationOutcome,
}

/// Core entry point: validate the request, seed the RNG, build one round.
pub fn generate_round(request: RoundRequest) -> Result<GameState, ConfigError> {
    request.config.validate()?;
    let rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    Ok(generate_game_state_with(rng, &request.config))
}

/// One round with the default config and an entropy-seeded RNG.
pub fn generate_game_state() -> GameState {
    generate_game_state_with(StdRng::from_entropy(), &GameConfig::default())
}

/// One round from a caller-supplied RNG.
///
/// `config` must already have passed [`GameConfig::validate`]; only
/// [`generate_round`] checks it for you.
pub fn generate_game_state_with<R: Rng>(rng: R, config: &GameConfig) -> GameState {
    generate_from_source(&mut RandomTiles::new(rng), config).state
}

/// Retry loop over whole rounds.
///
/// Up to `max_generation_attempts` tile sets are tried. A set with fewer than
/// `min_valid_equations` solutions overall is thrown away immediately; otherwise
/// the best in-band target wins. When every attempt fails, one final set is
/// drawn and its first in-band target used, or failing that the round degrades
/// to target 1 with no equations. Never errors, never loops unbounded.
///
/// Like [`generate_game_state_with`], this expects a config that already
/// passed [`GameConfig::validate`].
pub fn generate_from_source<S: TileSource + ?Sized>(
    source: &mut S,
    config: &GameConfig,
) -> GenerationReport {
    let mut attempts = 0;

    while attempts < config.max_generation_attempts {
        attempts += 1;
        let tiles = source.next_tiles(config);
        let equations = enumerate_equations(&tiles, config.max_target_number);

        if equations.len() < config.min_valid_equations {
            debug!(
                attempt = attempts,
                solutions = equations.len(),
                "too few equations, regenerating"
            );
            continue;
        }

        let groups = group_by_result(equations);
        let chosen = best_target(&groups, config).or_else(|| first_in_band(&groups, config));
        if let Some(group) = chosen {
            info!(
                attempt = attempts,
                target = group.target,
                solutions = group.len(),
                "target selected"
            );
            return report(tiles, group, attempts, GenerationOutcome::Selected);
        }
        debug!(attempt = attempts, targets = groups.len(), "no target inside the solution band");
    }

    attempts += 1;
    let tiles = source.next_tiles(config);
    let groups = group_by_result(enumerate_equations(&tiles, config.max_target_number));
    if let Some(group) = first_in_band(&groups, config) {
        info!(
            attempts,
            target = group.target,
            solutions = group.len(),
            "target selected on final pass"
        );
        return report(tiles, group, attempts, GenerationOutcome::FinalPass);
    }

    warn!(attempts, "no solvable target found, returning degraded round");
    GenerationReport {
        state: GameState { tiles, target_number: 1, valid_equations: Vec::new() },
        attempts,
        outcome: GenerationOutcome::Degraded,
    }
}

fn report(
    tiles: Vec<Tile>,
    group: &TargetGroup,
    attempts: usize,
    outcome: GenerationOutcome,
) -> GenerationReport {
    GenerationReport {
        state: GameState {
            tiles,
            target_number: group.target,
            valid_equations: group.equations.clone(),
        },
        attempts,
        outcome,
    }
}
