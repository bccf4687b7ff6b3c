use crate::{Coord, SparseGrid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random soup filling the square `[-half_extent, half_extent)²`.
///
/// `fill_rate` - probability of a cell being alive, clamped to `[0, 1]`
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_soup(half_extent: i64, fill_rate: f64, seed: Option<u64>) -> SparseGrid {
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    let fill_rate = if fill_rate.is_nan() {
        0.
    } else {
        fill_rate.clamp(0., 1.)
    };
    let half_extent = half_extent.max(0);

    let mut cells = Vec::new();
    for y in -half_extent..half_extent {
        for x in -half_extent..half_extent {
            if rng.gen_bool(fill_rate) {
                cells.push(Coord::new(x, y));
            }
        }
    }
    cells.into_iter().collect()
}
