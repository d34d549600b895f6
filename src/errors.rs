use schema::{PokemonId, RecordError};
use std::fmt;
use std::path::PathBuf;

/// Errors reported by catalog operations.
///
/// A failed operation leaves the catalog exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    /// A record with this id is already in the catalog
    DuplicateId(PokemonId),
    /// No entry has this id
    NotFound(PokemonId),
    /// The operation needs at least one entry
    EmptyCollection,
    /// An entry cannot evolve into itself
    InvalidEvolution(PokemonId),
    /// The type tag is the none sentinel or unrecognized text
    InvalidType(String),
    /// Fewer undiscovered entries in range than were asked for
    InsufficientCandidates { available: usize, requested: usize },
}

/// Errors raised while loading a roster of records.
#[derive(Debug)]
pub enum RosterError {
    /// The roster file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The roster text is not valid RON for a list of records
    Parse(ron::error::SpannedError),
    /// A record in the roster failed validation
    InvalidRecord { id: PokemonId, source: RecordError },
    /// A record could not be added to the catalog
    Pokedex(PokedexError),
}

/// Errors raised by the command interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The command letter is not recognized
    UnknownCommand(String),
    /// A required argument was not supplied
    MissingArgument(&'static str),
    /// An argument could not be parsed
    InvalidArgument { name: &'static str, value: String },
    /// More arguments than the command takes
    UnexpectedArgument(String),
    /// The record described by an add command is invalid
    InvalidRecord(RecordError),
    /// The catalog rejected the operation
    Pokedex(PokedexError),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::DuplicateId(id) => write!(f, "Pokemon #{:03} already in Pokedex", id),
            PokedexError::NotFound(id) => write!(f, "Cannot find Pokemon #{:03} in Pokedex", id),
            PokedexError::EmptyCollection => write!(f, "Pokedex is empty"),
            PokedexError::InvalidEvolution(id) => {
                write!(f, "Pokemon #{:03} cannot evolve into itself", id)
            }
            PokedexError::InvalidType(name) => write!(f, "Invalid type name: {}", name),
            PokedexError::InsufficientCandidates {
                available,
                requested,
            } => write!(
                f,
                "Only {} undiscovered Pokemon in range, {} requested",
                available, requested
            ),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Io { path, source } => {
                write!(f, "Failed to read roster {}: {}", path.display(), source)
            }
            RosterError::Parse(err) => write!(f, "Malformed roster: {}", err),
            RosterError::InvalidRecord { id, source } => {
                write!(f, "Invalid roster record #{:03}: {}", id, source)
            }
            RosterError::Pokedex(err) => write!(f, "Roster rejected: {}", err),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(command) => write!(f, "Unknown command: {}", command),
            CommandError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            CommandError::InvalidArgument { name, value } => {
                write!(f, "Invalid {}: {}", name, value)
            }
            CommandError::UnexpectedArgument(arg) => write!(f, "Unexpected argument: {}", arg),
            CommandError::InvalidRecord(err) => write!(f, "Invalid Pokemon: {}", err),
            CommandError::Pokedex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PokedexError {}
impl std::error::Error for CommandError {}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io { source, .. } => Some(source),
            RosterError::Parse(err) => Some(err),
            RosterError::InvalidRecord { source, .. } => Some(source),
            RosterError::Pokedex(err) => Some(err),
        }
    }
}

impl From<PokedexError> for CommandError {
    fn from(err: PokedexError) -> Self {
        CommandError::Pokedex(err)
    }
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        CommandError::InvalidRecord(err)
    }
}

impl From<PokedexError> for RosterError {
    fn from(err: PokedexError) -> Self {
        RosterError::Pokedex(err)
    }
}

impl From<ron::error::SpannedError> for RosterError {
    fn from(err: ron::error::SpannedError) -> Self {
        RosterError::Parse(err)
    }
}

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Type alias for Results using CommandError
pub type CommandResult<T> = Result<T, CommandError>;
