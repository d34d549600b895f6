// In: src/lib.rs

//! Pokedex Catalog
//!
//! An in-memory catalog of Pokemon records with a single selection cursor,
//! per-entry discovery flags, evolution edges, seeded exploration and derived
//! catalogs filtered by type, discovery or name.

// --- MODULE DECLARATIONS ---
pub mod commands;
pub mod config;
pub mod errors;
pub mod pokedex;
pub mod roster;
pub mod views;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// The record type and its type tags.
pub use schema::{Pokemon, PokemonId, PokemonType, RecordError};

// --- From this crate's modules (`src/`) ---

// The catalog and its read-only views.
pub use pokedex::{ChainLink, EntryView, Pokedex};
pub use views::{DetailView, EvolutionChainView, ListView};

// Loading records and driving the catalog from text.
pub use commands::{Command, Output, Session};
pub use config::AppConfig;
pub use roster::{load_roster, parse_roster, starter_roster};

// Crate-specific error and result types.
pub use errors::{
    CommandError, CommandResult, PokedexError, PokedexResult, RosterError, RosterResult,
};
