// Pokedex Schema - Shared record definitions
// This crate holds the record type being catalogued and its type tags. The
// catalog crate treats these as plain values: it only looks records up by id,
// reads their names for display and search, and clones them.

// Re-export the main types
pub use pokemon::*;
pub use pokemon_types::*;

pub mod pokemon;
pub mod pokemon_types;
