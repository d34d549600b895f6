use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elemental type tag of a Pokemon.
///
/// `Typeless` is the "no type" sentinel: it never appears on a valid record and
/// is rejected anywhere a real type is required.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Fighting,
    Water,
    Flying,
    Grass,
    Poison,
    Electric,
    Ground,
    Psychic,
    Rock,
    Ice,
    Bug,
    Dragon,
    Ghost,
    Dark,
    Steel,
    Fairy,
    #[strum(to_string = "Typeless", serialize = "None")]
    Typeless,
}

impl PokemonType {
    /// True for every tag except the `Typeless` sentinel.
    pub fn is_real(self) -> bool {
        self != PokemonType::Typeless
    }
}
