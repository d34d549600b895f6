//! The catalog: an ordered collection of Pokemon with a single selection cursor.
//!
//! Entries live in a slot arena and are addressed by generational handles.
//! Sequence order is a list of handles, and the selection is a position in that
//! list, so a non-empty catalog always has exactly one selected entry.

mod evolution;
mod exploration;
mod queries;

#[cfg(test)]
pub(crate) mod tests;

pub use evolution::ChainLink;

use crate::errors::{PokedexError, PokedexResult};
use log::debug;
use schema::{Pokemon, PokemonId};

/// Stable reference to an arena slot.
///
/// A slot's generation is bumped when its entry is removed, so a handle kept
/// across a removal no longer resolves even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EntryHandle {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Entry {
    pokemon: Pokemon,
    found: bool,
    evolves_to: Option<EntryHandle>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Read-only view of one catalog entry, as yielded by [`Pokedex::iter`].
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a> {
    pub pokemon: &'a Pokemon,
    pub found: bool,
    pub selected: bool,
    /// Id of the evolution target, if one is set and still in the catalog
    pub evolves_to: Option<PokemonId>,
}

#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    slots: Vec<Slot>,
    free: Vec<usize>,
    order: Vec<EntryHandle>,
    selected: Option<usize>, // position in `order`
}

impl Pokedex {
    /// Create an empty catalog with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog by appending records in the given order.
    pub fn from_roster(records: impl IntoIterator<Item = Pokemon>) -> PokedexResult<Self> {
        let mut pokedex = Self::new();
        for pokemon in records {
            pokedex.insert_append(pokemon)?;
        }
        Ok(pokedex)
    }

    // --- Arena ---

    fn entry(&self, handle: EntryHandle) -> Option<&Entry> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn entry_mut(&mut self, handle: EntryHandle) -> Option<&mut Entry> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    fn allocate(&mut self, entry: Entry) -> EntryHandle {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.entry = Some(entry);
                EntryHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                EntryHandle {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    fn release(&mut self, handle: EntryHandle) -> Option<Entry> {
        let slot = self
            .slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)?;
        let entry = slot.entry.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        entry
    }

    /// Entries in sequence order.
    fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.order.iter().filter_map(move |&handle| self.entry(handle))
    }

    fn position_of(&self, id: PokemonId) -> Option<usize> {
        self.order
            .iter()
            .position(|&handle| self.entry(handle).is_some_and(|e| e.pokemon.id() == id))
    }

    fn handle_of(&self, id: PokemonId) -> Option<EntryHandle> {
        self.position_of(id).map(|position| self.order[position])
    }

    fn selected_handle(&self) -> Option<EntryHandle> {
        self.selected.map(|position| self.order[position])
    }

    fn selected_entry(&self) -> Option<&Entry> {
        self.selected_handle().and_then(|handle| self.entry(handle))
    }

    // --- Insertion ---

    /// Append a record at the end of the catalog.
    ///
    /// The new entry starts undiscovered with no evolution. It becomes the
    /// selection only if the catalog was empty.
    pub fn insert_append(&mut self, pokemon: Pokemon) -> PokedexResult<()> {
        if self.contains_id(pokemon.id()) {
            return Err(PokedexError::DuplicateId(pokemon.id()));
        }
        self.push_back(pokemon, false);
        Ok(())
    }

    /// Insert a record keeping ascending id order. The new entry is marked found.
    ///
    /// Inserting at the front moves the selection onto the new entry; otherwise
    /// the selected entry stays selected.
    pub fn insert_sorted_by_id(&mut self, pokemon: Pokemon) -> PokedexResult<()> {
        if self.contains_id(pokemon.id()) {
            return Err(PokedexError::DuplicateId(pokemon.id()));
        }
        self.place_sorted(pokemon);
        Ok(())
    }

    fn push_back(&mut self, pokemon: Pokemon, found: bool) {
        debug!("Adding #{:03} {} to Pokedex", pokemon.id(), pokemon.name());
        let handle = self.allocate(Entry {
            pokemon,
            found,
            evolves_to: None,
        });
        self.order.push(handle);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    fn place_sorted(&mut self, pokemon: Pokemon) {
        let id = pokemon.id();
        let position = self
            .order
            .iter()
            .position(|&handle| self.entry(handle).is_some_and(|e| e.pokemon.id() > id))
            .unwrap_or(self.order.len());

        debug!("Adding #{:03} {} at position {}", id, pokemon.name(), position);
        let handle = self.allocate(Entry {
            pokemon,
            found: true,
            evolves_to: None,
        });
        self.order.insert(position, handle);

        self.selected = match self.selected {
            _ if position == 0 => Some(0),
            Some(selected) if position <= selected => Some(selected + 1),
            other => other,
        };
    }

    // --- Selection ---

    /// Move the selection to the next entry. Stays put at the end.
    pub fn advance(&mut self) {
        if let Some(selected) = self.selected {
            if selected + 1 < self.order.len() {
                self.selected = Some(selected + 1);
            }
        }
    }

    /// Move the selection to the previous entry. Stays put at the start.
    pub fn retreat(&mut self) {
        if let Some(selected) = self.selected {
            if selected > 0 {
                self.selected = Some(selected - 1);
            }
        }
    }

    /// Select the entry with this id. Unknown ids leave the selection alone.
    pub fn select_by_id(&mut self, id: PokemonId) {
        match self.position_of(id) {
            Some(position) => self.selected = Some(position),
            None => debug!("No Pokemon #{:03} to select", id),
        }
    }

    /// The selected record.
    pub fn current(&self) -> PokedexResult<&Pokemon> {
        self.selected_entry()
            .map(|entry| &entry.pokemon)
            .ok_or(PokedexError::EmptyCollection)
    }

    /// The selected entry with its state.
    pub fn current_entry(&self) -> PokedexResult<EntryView<'_>> {
        self.selected_handle()
            .and_then(|handle| self.view(handle, true))
            .ok_or(PokedexError::EmptyCollection)
    }

    /// Mark the selected entry as found. No-op on an empty catalog.
    pub fn mark_current_found(&mut self) {
        if let Some(handle) = self.selected_handle() {
            if let Some(entry) = self.entry_mut(handle) {
                entry.found = true;
            }
        }
    }

    // --- Removal ---

    /// Remove the selected entry and return its record.
    ///
    /// The entry that followed it becomes selected, or the new last entry when
    /// the removed one was last. Evolution edges that pointed at the removed
    /// entry stop resolving. Returns `None` on an empty catalog.
    pub fn remove_current(&mut self) -> Option<Pokemon> {
        let position = self.selected?;
        let handle = self.order.remove(position);
        let removed = self.release(handle);

        self.selected = if self.order.is_empty() {
            None
        } else {
            Some(position.min(self.order.len() - 1))
        };

        removed.map(|entry| {
            debug!(
                "Removed #{:03} {} from Pokedex",
                entry.pokemon.id(),
                entry.pokemon.name()
            );
            entry.pokemon
        })
    }

    // --- Counting and lookup ---

    pub fn count_found(&self) -> usize {
        self.entries().filter(|entry| entry.found).count()
    }

    pub fn count_total(&self) -> usize {
        self.order.len()
    }

    pub fn len(&self) -> usize {
        self.count_total()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_id(&self, id: PokemonId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn get(&self, id: PokemonId) -> Option<&Pokemon> {
        self.handle_of(id)
            .and_then(|handle| self.entry(handle))
            .map(|entry| &entry.pokemon)
    }

    /// Whether the entry with this id has been found, or `None` if absent.
    pub fn is_found(&self, id: PokemonId) -> Option<bool> {
        self.handle_of(id)
            .and_then(|handle| self.entry(handle))
            .map(|entry| entry.found)
    }

    /// Entries in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = EntryView<'_>> + '_ {
        self.order
            .iter()
            .enumerate()
            .filter_map(move |(position, &handle)| {
                self.view(handle, self.selected == Some(position))
            })
    }

    fn view(&self, handle: EntryHandle, selected: bool) -> Option<EntryView<'_>> {
        self.entry(handle).map(|entry| EntryView {
            pokemon: &entry.pokemon,
            found: entry.found,
            selected,
            evolves_to: entry
                .evolves_to
                .and_then(|target| self.entry(target))
                .map(|target| target.pokemon.id()),
        })
    }
}
