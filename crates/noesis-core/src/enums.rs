//! Category and type-tag enums for Noesis.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the backend's tag values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The fixed set of intelligence categories a definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HumanIntelligence,
    ArtificialIntelligence,
    MachineIntelligence,
    PlantIntelligence,
    AlienIntelligence,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::HumanIntelligence,
        Self::ArtificialIntelligence,
        Self::MachineIntelligence,
        Self::PlantIntelligence,
        Self::AlienIntelligence,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HumanIntelligence => "human_intelligence",
            Self::ArtificialIntelligence => "artificial_intelligence",
            Self::MachineIntelligence => "machine_intelligence",
            Self::PlantIntelligence => "plant_intelligence",
            Self::AlienIntelligence => "alien_intelligence",
        }
    }

    /// English label shown in view code.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HumanIntelligence => "Human Intelligence",
            Self::ArtificialIntelligence => "Artificial Intelligence",
            Self::MachineIntelligence => "Machine Intelligence",
            Self::PlantIntelligence => "Plant Intelligence",
            Self::AlienIntelligence => "Alien Intelligence",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuthorType
// ---------------------------------------------------------------------------

/// Type tag selecting between person and organization authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthorType {
    Person,
    Organization,
}

impl AuthorType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Type tag selecting the bibliographic shape of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Book,
    Journal,
    Web,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Journal => "journal",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
