use crate::pokedex::Pokedex;
use schema::{Pokemon, PokemonId, PokemonType};

/// Builds a record, panicking on invalid test data.
pub fn create_pokemon(
    id: PokemonId,
    name: &str,
    height: f64,
    weight: f64,
    first_type: PokemonType,
    second_type: Option<PokemonType>,
) -> Pokemon {
    match Pokemon::new(id, name, height, weight, first_type, second_type) {
        Ok(pokemon) => pokemon,
        Err(err) => panic!("Invalid test Pokemon #{:03} {}: {}", id, name, err),
    }
}

pub fn create_bulbasaur() -> Pokemon {
    create_pokemon(1, "Bulbasaur", 0.7, 6.9, PokemonType::Grass, Some(PokemonType::Poison))
}

pub fn create_ivysaur() -> Pokemon {
    create_pokemon(2, "Ivysaur", 1.0, 13.0, PokemonType::Grass, Some(PokemonType::Poison))
}

pub fn create_venusaur() -> Pokemon {
    create_pokemon(3, "Venusaur", 2.0, 100.0, PokemonType::Poison, Some(PokemonType::Grass))
}

pub fn create_rattata() -> Pokemon {
    create_pokemon(19, "Rattata", 0.3, 3.5, PokemonType::Normal, None)
}

pub fn create_raticate() -> Pokemon {
    create_pokemon(20, "Raticate", 0.7, 18.5, PokemonType::Normal, None)
}

pub fn create_ekans() -> Pokemon {
    create_pokemon(23, "Ekans", 2.0, 6.9, PokemonType::Poison, None)
}

pub fn create_arbok() -> Pokemon {
    create_pokemon(24, "Arbok", 3.5, 65.0, PokemonType::Poison, None)
}

pub fn create_koffing() -> Pokemon {
    create_pokemon(109, "Koffing", 0.6, 1.0, PokemonType::Poison, None)
}

pub fn create_weezing() -> Pokemon {
    create_pokemon(110, "Weezing", 1.2, 9.5, PokemonType::Poison, None)
}

/// All nine test Pokemon in ascending id order.
pub fn create_all() -> Vec<Pokemon> {
    vec![
        create_bulbasaur(),
        create_ivysaur(),
        create_venusaur(),
        create_rattata(),
        create_raticate(),
        create_ekans(),
        create_arbok(),
        create_koffing(),
        create_weezing(),
    ]
}

/// A Pokedex built by appending the given records in order.
pub fn create_test_pokedex(records: Vec<Pokemon>) -> Pokedex {
    match Pokedex::from_roster(records) {
        Ok(pokedex) => pokedex,
        Err(err) => panic!("Failed to build test Pokedex: {}", err),
    }
}

/// Ids in sequence order.
pub fn ids(pokedex: &Pokedex) -> Vec<PokemonId> {
    pokedex.iter().map(|entry| entry.pokemon.id()).collect()
}

/// Id of the selected entry, if any.
pub fn selected_id(pokedex: &Pokedex) -> Option<PokemonId> {
    pokedex.current().ok().map(|pokemon| pokemon.id())
}

/// Asserts the exactly-one-selected invariant from the outside.
pub fn assert_single_selection(pokedex: &Pokedex) {
    let selected = pokedex.iter().filter(|entry| entry.selected).count();
    let expected = if pokedex.is_empty() { 0 } else { 1 };
    assert_eq!(
        selected, expected,
        "Expected {} selected entries, found {}",
        expected, selected
    );
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
