use crate::PokemonType;
use serde::Serialize;
use std::fmt;

/// National Pokedex number. Unique within a catalog.
pub type PokemonId = u32;

/// An immutable Pokemon record.
///
/// Records are plain values: cloning one produces an independent copy with the
/// same field values. The catalog never mutates a record after insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    id: PokemonId,
    name: String,
    height: f64, // meters
    weight: f64, // kilograms
    first_type: PokemonType,
    second_type: Option<PokemonType>,
}

/// Reasons a record fails construction.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    EmptyName,
    /// Height was zero, negative or not finite
    NonPositiveHeight(f64),
    /// Weight was zero, negative or not finite
    NonPositiveWeight(f64),
    /// First type was the `Typeless` sentinel
    MissingFirstType,
    /// Second type was given explicitly as `Typeless`
    TypelessSecondType,
    DuplicateType(PokemonType),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::EmptyName => write!(f, "Pokemon name cannot be empty"),
            RecordError::NonPositiveHeight(h) => write!(f, "Height must be a positive number, got {}", h),
            RecordError::NonPositiveWeight(w) => write!(f, "Weight must be a positive number, got {}", w),
            RecordError::MissingFirstType => write!(f, "Type 1 cannot be none type"),
            RecordError::TypelessSecondType => {
                write!(f, "Type 2 must be omitted rather than set to none type")
            }
            RecordError::DuplicateType(t) => write!(f, "Type 1 is the same as type 2 ({})", t),
        }
    }
}

impl std::error::Error for RecordError {}

impl Pokemon {
    /// Create a validated record.
    pub fn new(
        id: PokemonId,
        name: impl Into<String>,
        height: f64,
        weight: f64,
        first_type: PokemonType,
        second_type: Option<PokemonType>,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(RecordError::NonPositiveHeight(height));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RecordError::NonPositiveWeight(weight));
        }
        if !first_type.is_real() {
            return Err(RecordError::MissingFirstType);
        }
        match second_type {
            Some(PokemonType::Typeless) => return Err(RecordError::TypelessSecondType),
            Some(second) if second == first_type => {
                return Err(RecordError::DuplicateType(second))
            }
            _ => {}
        }

        Ok(Pokemon {
            id,
            name,
            height,
            weight,
            first_type,
            second_type,
        })
    }

    pub fn id(&self) -> PokemonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn first_type(&self) -> PokemonType {
        self.first_type
    }

    pub fn second_type(&self) -> Option<PokemonType> {
        self.second_type
    }

    /// One or two types, first type first.
    pub fn types(&self) -> Vec<PokemonType> {
        std::iter::once(self.first_type)
            .chain(self.second_type)
            .collect()
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.first_type == pokemon_type || self.second_type == Some(pokemon_type)
    }
}
