use super::Pokedex;
use crate::errors::{PokedexError, PokedexResult};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::PokemonId;

impl Pokedex {
    /// Mark `count` undiscovered entries with ids in `0..range_bound` as found.
    ///
    /// Ids are drawn uniformly from the range by an RNG seeded with `seed`, so
    /// the same seed on the same catalog discovers the same entries. Draws that
    /// miss the catalog or land on a found entry are redrawn.
    pub fn explore(&mut self, seed: u64, range_bound: PokemonId, count: usize) -> PokedexResult<()> {
        if self.is_empty() {
            return Err(PokedexError::EmptyCollection);
        }

        let available = self
            .entries()
            .filter(|entry| !entry.found && entry.pokemon.id() < range_bound)
            .count();
        if available < count {
            return Err(PokedexError::InsufficientCandidates {
                available,
                requested: count,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut discovered = 0;
        while discovered < count {
            let search_id = rng.random_range(0..range_bound);
            trace!("Exploring for #{:03}", search_id);

            let Some(handle) = self.handle_of(search_id) else {
                continue;
            };
            if let Some(entry) = self.entry_mut(handle) {
                if !entry.found {
                    entry.found = true;
                    discovered += 1;
                    debug!("Discovered #{:03} {}", search_id, entry.pokemon.name());
                }
            }
        }

        Ok(())
    }
}
