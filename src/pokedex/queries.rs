use super::Pokedex;
use crate::errors::{PokedexError, PokedexResult};
use schema::PokemonType;
use std::str::FromStr;

// Derived catalogs own fresh clones of the source records. Every entry in them
// is found and none has an evolution edge. The source is never modified.
impl Pokedex {
    /// Found entries having `pokemon_type` as either type, in source order.
    pub fn by_type(&self, pokemon_type: PokemonType) -> PokedexResult<Pokedex> {
        let mut derived = Pokedex::new();
        if self.is_empty() {
            return Ok(derived);
        }
        if !pokemon_type.is_real() {
            return Err(PokedexError::InvalidType(pokemon_type.to_string()));
        }

        for entry in self
            .entries()
            .filter(|entry| entry.found && entry.pokemon.has_type(pokemon_type))
        {
            derived.push_back(entry.pokemon.clone(), true);
        }
        Ok(derived)
    }

    /// Same as [`Pokedex::by_type`], with the type given by name. Errors echo
    /// the name as given.
    pub fn by_type_name(&self, type_name: &str) -> PokedexResult<Pokedex> {
        if self.is_empty() {
            return Ok(Pokedex::new());
        }
        match PokemonType::from_str(type_name.trim()) {
            Ok(pokemon_type) if pokemon_type.is_real() => self.by_type(pokemon_type),
            _ => Err(PokedexError::InvalidType(type_name.to_string())),
        }
    }

    /// All found entries, ordered by ascending id.
    pub fn all_found(&self) -> Pokedex {
        let mut derived = Pokedex::new();
        for entry in self.entries().filter(|entry| entry.found) {
            derived.place_sorted(entry.pokemon.clone());
        }
        derived
    }

    /// Found entries whose name contains `text`, ignoring ASCII case, in
    /// source order. Empty search text matches nothing.
    pub fn by_name_substring(&self, text: &str) -> Pokedex {
        let mut derived = Pokedex::new();
        let needle = text.to_ascii_lowercase();
        if needle.is_empty() {
            return derived;
        }

        for entry in self.entries().filter(|entry| {
            entry.found && entry.pokemon.name().to_ascii_lowercase().contains(&needle)
        }) {
            derived.push_back(entry.pokemon.clone(), true);
        }
        derived
    }
}
