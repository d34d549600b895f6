//! Loading records from RON roster files.

use crate::errors::{RosterError, RosterResult};
use log::info;
use schema::{Pokemon, PokemonId, PokemonType};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const STARTER_ROSTER: &str = include_str!("../data/starter_roster.ron");

/// One record as written in a roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRecord {
    pub id: PokemonId,
    pub name: String,
    pub height: f64,
    pub weight: f64,
    pub first_type: PokemonType,
    #[serde(default)]
    pub second_type: Option<PokemonType>,
}

impl RosterRecord {
    pub fn into_pokemon(self) -> RosterResult<Pokemon> {
        let id = self.id;
        Pokemon::new(
            self.id,
            self.name,
            self.height,
            self.weight,
            self.first_type,
            self.second_type,
        )
        .map_err(|source| RosterError::InvalidRecord { id, source })
    }
}

/// Parse a roster from RON text, validating every record.
pub fn parse_roster(text: &str) -> RosterResult<Vec<Pokemon>> {
    let records: Vec<RosterRecord> = ron::from_str(text)?;
    records.into_iter().map(RosterRecord::into_pokemon).collect()
}

/// Read and parse a roster file.
pub fn load_roster(path: &Path) -> RosterResult<Vec<Pokemon>> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&text)?;
    info!("Loaded {} Pokemon from {}", roster.len(), path.display());
    Ok(roster)
}

/// The built-in roster used when no roster file is given.
pub fn starter_roster() -> RosterResult<Vec<Pokemon>> {
    parse_roster(STARTER_ROSTER)
}
