use std::collections::HashSet;
use rand::Rng;
use tracing::debug;
use crate::puzzle_engine::{
    config::GameConfig,
    models::{Operator, Tile},
};

/// Anything that can hand the generator a fresh tile set for one attempt.
///
/// [`RandomTiles`] is the production source; tests plug in scripted sets to
/// drive the retry logic deterministically.
pub trait TileSource {
    fn next_tiles(&mut self, config: &GameConfig) -> Vec<Tile>;
}

/// Constrained random tiles drawn from an owned RNG.
pub struct RandomTiles<R> {
    rng: R,
}

impl<R: Rng> RandomTiles<R> {
    pub fn new(rng: R) -> Self {
        RandomTiles { rng }
    }
}

impl<R: Rng> TileSource for RandomTiles<R> {
    fn next_tiles(&mut self, config: &GameConfig) -> Vec<Tile> {
        generate_tiles(&mut self.rng, config)
    }
}

/// Label for the tile at `index`: A, B, C, ...
pub fn label_for(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Running tallies for the tile set under construction.
struct TileBag<'a> {
    config: &'a GameConfig,
    tiles: Vec<Tile>,
    used: HashSet<(Operator, u32)>,
    multiply: usize,
    divide: usize,
    big: usize,
}

impl<'a> TileBag<'a> {
    fn new(config: &'a GameConfig) -> Self {
        TileBag {
            config,
            tiles: Vec::with_capacity(config.tile_count),
            used: HashSet::new(),
            multiply: 0,
            divide: 0,
            big: 0,
        }
    }

    fn big_cap_reached(&self) -> bool {
        self.big >= self.config.max_big_number_tiles
    }

    fn is_used(&self, operator: Operator, number: u32) -> bool {
        self.used.contains(&(operator, number))
    }

    /// Caps, identity tiles (`*1`, `/1`) and duplicates are all rejected.
    fn accepts(&self, operator: Operator, number: u32) -> bool {
        let over_multiply =
            operator == Operator::Mul && self.multiply >= self.config.max_multiply_tiles;
        let over_divide =
            operator == Operator::Div && self.divide >= self.config.max_divide_tiles;
        let over_big = number >= self.config.big_number_threshold && self.big_cap_reached();
        let identity = operator.is_multiplicative() && number == 1;
        !(over_multiply || over_divide || over_big || identity || self.is_used(operator, number))
    }

    fn push(&mut self, tile: Tile) {
        match tile.operator {
            Operator::Mul => self.multiply += 1,
            Operator::Div => self.divide += 1,
            _ => {}
        }
        if tile.number >= self.config.big_number_threshold {
            self.big += 1;
        }
        self.used.insert(tile.key());
        self.tiles.push(tile);
    }
}

/// Generate one round's tiles.
///
/// Each slot resamples until a candidate passes every constraint. After
/// `max_tile_attempts` misses the slot gets a safe `+`/`-` tile from the small
/// range instead, so the loop always terminates with a duplicate-free set.
pub fn generate_tiles<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Vec<Tile> {
    let mut bag = TileBag::new(config);

    for index in 0..config.tile_count {
        let label = label_for(index);
        let (operator, number) = match draw_tile(rng, &bag) {
            Some(pair) => pair,
            None => {
                let pair = safe_tile(rng, &bag);
                debug!(
                    %label,
                    operator = %pair.0,
                    number = pair.1,
                    "attempts exhausted, using safe tile"
                );
                pair
            }
        };
        bag.push(Tile::new(operator, number, label));
    }

    bag.tiles
}

fn draw_small<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> u32 {
    rng.gen_range(1..=config.small_range_max())
}

/// Biased toward the small range; forced small once the big-number cap is hit.
fn draw_number<R: Rng + ?Sized>(rng: &mut R, bag: &TileBag<'_>) -> u32 {
    let config = bag.config;
    if bag.big_cap_reached() || rng.gen::<f64>() < config.small_number_bias {
        draw_small(rng, config)
    } else {
        let low = config.big_number_threshold;
        rng.gen_range(low..=config.max_tile_number.max(low))
    }
}

fn draw_tile<R: Rng + ?Sized>(rng: &mut R, bag: &TileBag<'_>) -> Option<(Operator, u32)> {
    for _ in 0..bag.config.max_tile_attempts {
        let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
        let number = draw_number(rng, bag);
        if bag.accepts(operator, number) {
            return Some((operator, number));
        }
    }
    None
}

/// Fallback tile: `+` or `-` with a small number.
///
/// Tries random numbers first, then scans both operators in order for a free
/// pair. A validated config always leaves one; `(op, 1)` is the last resort.
fn safe_tile<R: Rng + ?Sized>(rng: &mut R, bag: &TileBag<'_>) -> (Operator, u32) {
    let config = bag.config;
    let (operator, other) = if rng.gen_bool(0.5) {
        (Operator::Add, Operator::Sub)
    } else {
        (Operator::Sub, Operator::Add)
    };

    for _ in 0..config.max_safe_tile_attempts {
        let number = draw_small(rng, config);
        if !bag.is_used(operator, number) {
            return (operator, number);
        }
    }

    for op in [operator, other] {
        if let Some(number) = (1..=config.small_range_max()).find(|&n| !bag.is_used(op, n)) {
            return (op, number);
        }
    }

    (operator, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn labels_follow_generation_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let tiles = generate_tiles(&mut rng, &GameConfig::default());
        let labels: String = tiles.iter().map(|t| t.label).collect();
        assert_eq!(labels, "ABCDEFGHIJ");
    }

    #[test]
    fn tiles_are_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_tiles(&mut rng, &GameConfig::default())
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn zero_caps_only_yield_additive_small_tiles() {
        let config = GameConfig {
            max_multiply_tiles: 0,
            max_divide_tiles: 0,
            max_big_number_tiles: 0,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tiles = generate_tiles(&mut rng, &config);
            assert_eq!(tiles.len(), 10);
            for tile in &tiles {
                assert!(
                    !tile.operator.is_multiplicative(),
                    "{tile} broke a zero cap (seed={seed})"
                );
                assert!(tile.number < config.big_number_threshold, "{tile} is big (seed={seed})");
            }
        }
    }

    #[test]
    fn tight_supply_forces_safe_tiles_without_duplicates() {
        // Only +1..+5 and -1..-5 fit: exactly the ten slots, so the scan must find
        // every last free pair.
        let config = GameConfig {
            big_number_threshold: 6,
            max_multiply_tiles: 0,
            max_divide_tiles: 0,
            max_big_number_tiles: 0,
            max_tile_attempts: 1,
            max_safe_tile_attempts: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tiles = generate_tiles(&mut rng, &config);
            let keys: HashSet<_> = tiles.iter().map(Tile::key).collect();
            assert_eq!(keys.len(), 10, "duplicate tile for seed={seed}: {tiles:?}");
        }
    }

    #[test]
    fn safe_tile_skips_used_pairs() {
        let config = GameConfig { max_safe_tile_attempts: 0, ..Default::default() };
        let mut bag = TileBag::new(&config);
        for n in 1..=9 {
            bag.push(Tile::new(Operator::Add, n, 'A'));
        }
        let mut rng = StdRng::seed_from_u64(1);
        let (op, number) = safe_tile(&mut rng, &bag);
        assert_eq!(op, Operator::Sub);
        assert_eq!(number, 1);
    }
}
