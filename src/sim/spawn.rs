//! Random object spawner
//!
//! Owns its own seeded RNG so a run is reproducible from its seed. The spawner
//! only ever appends to the object list.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;
use crate::settings::GameConfig;

/// Stream offset so the spawner's draws don't alias other seeded consumers
const SPAWN_STREAM: u64 = 0x5EED_0B1E;

/// Creates falling objects at random positions
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ SPAWN_STREAM),
        }
    }

    /// Append one object at the top of the surface. Returns its id.
    pub fn spawn(&mut self, state: &mut GameState, config: &GameConfig) -> u32 {
        let radius = config.object_radius;
        let x = self
            .rng
            .random_range(radius..=config.surface_width - radius);
        let dangerous = self.rng.random_bool(config.dangerous_probability);

        let id = state.push_object(x, radius, dangerous);
        log::trace!("spawned object {id} at x={x:.1} dangerous={dangerous}");
        id
    }
}
