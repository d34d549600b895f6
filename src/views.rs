//! Text rendering of catalog state.
//!
//! Undiscovered entries never reveal more than their id: names are replaced
//! by one `*` per character and the remaining fields by placeholders.

use crate::errors::PokedexResult;
use crate::pokedex::{ChainLink, EntryView, Pokedex};
use schema::Pokemon;
use std::fmt;

const SELECTED_MARKER: &str = "--> ";
const UNSELECTED_MARKER: &str = "    ";
const CHAIN_SEPARATOR: &str = " --> ";

fn mask(name: &str) -> String {
    "*".repeat(name.chars().count())
}

fn type_names(pokemon: &Pokemon, separator: &str) -> String {
    pokemon
        .types()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Full details of the selected entry.
#[derive(Debug, Clone, Copy)]
pub struct DetailView<'a> {
    entry: EntryView<'a>,
}

/// One line per entry, with the selected entry marked.
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a> {
    pokedex: &'a Pokedex,
}

/// The selected entry followed by each entry it evolves into.
#[derive(Debug, Clone)]
pub struct EvolutionChainView<'a> {
    links: Vec<ChainLink<'a>>,
}

impl Pokedex {
    pub fn detail_view(&self) -> PokedexResult<DetailView<'_>> {
        self.current_entry().map(|entry| DetailView { entry })
    }

    pub fn list_view(&self) -> ListView<'_> {
        ListView { pokedex: self }
    }

    pub fn evolution_chain_view(&self) -> EvolutionChainView<'_> {
        EvolutionChainView {
            links: self.evolution_chain(),
        }
    }

    pub fn render_detail(&self) -> PokedexResult<String> {
        self.detail_view().map(|view| view.to_string())
    }

    pub fn render_list(&self) -> String {
        self.list_view().to_string()
    }

    pub fn render_evolution_chain(&self) -> String {
        self.evolution_chain_view().to_string()
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pokemon = self.entry.pokemon;
        writeln!(f, "Id: {:03}", pokemon.id())?;

        if self.entry.found {
            writeln!(f, "Name: {}", pokemon.name())?;
            writeln!(f, "Height: {:.1}m", pokemon.height())?;
            writeln!(f, "Weight: {:.1}kg", pokemon.weight())?;
            write!(f, "Type: {}", type_names(pokemon, " "))
        } else {
            writeln!(f, "Name: {}", mask(pokemon.name()))?;
            writeln!(f, "Height: --")?;
            writeln!(f, "Weight: --")?;
            write!(f, "Type: --")
        }
    }
}

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.pokedex.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let marker = if entry.selected {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            let name = if entry.found {
                entry.pokemon.name().to_string()
            } else {
                mask(entry.pokemon.name())
            };
            write!(f, "{}#{:03}: {}", marker, entry.pokemon.id(), name)?;
        }
        Ok(())
    }
}

impl EvolutionChainView<'_> {
    pub fn links(&self) -> &[ChainLink<'_>] {
        &self.links
    }
}

impl fmt::Display for EvolutionChainView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", CHAIN_SEPARATOR)?;
            }
            match link {
                ChainLink::Known(pokemon) => write!(
                    f,
                    "#{:03} {} [{}]",
                    pokemon.id(),
                    pokemon.name(),
                    type_names(pokemon, ", ")
                )?,
                ChainLink::Unknown(id) => write!(f, "#{:03} ???? [????]", id)?,
            }
        }
        Ok(())
    }
}
