//! Academic department selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The academic department a study session is scoped to.
///
/// Exactly one department is selected at a time; `General` is the
/// designated default used before the user makes an explicit choice.
/// Serialized in kebab-case to match the backend wire format
/// (`"computer-science"`, etc).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Department {
    Engineering,
    ComputerScience,
    Medicine,
    Business,
    Law,
    Arts,
    Science,
    #[default]
    General,
}

impl Department {
    /// Human-readable label for transcript messages ("Computer Science").
    pub fn label(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::ComputerScience => "Computer Science",
            Department::Medicine => "Medicine",
            Department::Business => "Business",
            Department::Law => "Law",
            Department::Arts => "Arts",
            Department::Science => "Science",
            Department::General => "General",
        }
    }
}
