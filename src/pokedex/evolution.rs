use super::{Entry, Pokedex};
use crate::errors::{PokedexError, PokedexResult};
use log::debug;
use schema::{Pokemon, PokemonId};
use std::collections::HashSet;

/// One step of an evolution chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainLink<'a> {
    /// A found entry, shown in full
    Known(&'a Pokemon),
    /// An entry that has not been found yet
    Unknown(PokemonId),
}

impl<'a> ChainLink<'a> {
    fn from_entry(entry: &'a Entry) -> Self {
        if entry.found {
            ChainLink::Known(&entry.pokemon)
        } else {
            ChainLink::Unknown(entry.pokemon.id())
        }
    }

    pub fn id(&self) -> PokemonId {
        match self {
            ChainLink::Known(pokemon) => pokemon.id(),
            ChainLink::Unknown(id) => *id,
        }
    }
}

impl Pokedex {
    /// Point the entry `from_id` at the entry `to_id`, replacing any earlier edge.
    pub fn set_evolution(&mut self, from_id: PokemonId, to_id: PokemonId) -> PokedexResult<()> {
        if from_id == to_id {
            return Err(PokedexError::InvalidEvolution(from_id));
        }
        let from = self
            .handle_of(from_id)
            .ok_or(PokedexError::NotFound(from_id))?;
        let to = self.handle_of(to_id).ok_or(PokedexError::NotFound(to_id))?;

        if let Some(entry) = self.entry_mut(from) {
            entry.evolves_to = Some(to);
        }
        debug!("#{:03} now evolves into #{:03}", from_id, to_id);
        Ok(())
    }

    /// Id the selected entry evolves into, or `None` if it does not evolve.
    ///
    /// An edge whose target has since been removed counts as no evolution.
    pub fn next_evolution(&self) -> PokedexResult<Option<PokemonId>> {
        let entry = self
            .selected_entry()
            .ok_or(PokedexError::EmptyCollection)?;
        Ok(entry
            .evolves_to
            .and_then(|target| self.entry(target))
            .map(|target| target.pokemon.id()))
    }

    /// Follow evolution edges from the selected entry.
    ///
    /// The chain ends at the first entry without a live edge, or just before an
    /// entry would be visited a second time. Empty for an empty catalog.
    pub fn evolution_chain(&self) -> Vec<ChainLink<'_>> {
        let mut links = Vec::new();
        let mut visited = HashSet::new();
        let mut next = self.selected_handle();

        while let Some(handle) = next {
            if !visited.insert(handle) {
                debug!("Evolution chain loops back to slot {}", handle.index);
                break;
            }
            let Some(entry) = self.entry(handle) else {
                break;
            };
            links.push(ChainLink::from_entry(entry));
            next = entry.evolves_to;
        }

        links
    }
}
