//! Race entry data model

use crate::{Error, PreciseTime, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceEntry {
    pub id: u32,
    pub given_name: String,
    pub family_name: String,
    pub finish: PreciseTime,
}

impl RaceEntry {
    /// Create a new race entry
    pub fn new(
        id: u32,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        finish: PreciseTime,
    ) -> Self {
        Self {
            id,
            given_name: given_name.into(),
            family_name: family_name.into(),
            finish,
        }
    }

    /// Validate the entry data
    pub fn validate(&self) -> Result<()> {
        Self::validate_names(&self.given_name, &self.family_name)
    }

    /// Both names must be present and a single word each, so that a
    /// listing line splits back into its fields.
    pub fn validate_names(given_name: &str, family_name: &str) -> Result<()> {
        for (label, name) in [("Given name", given_name), ("Family name", family_name)] {
            if name.trim().is_empty() {
                return Err(Error::Validation(format!("{} cannot be empty", label)));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(Error::Validation(format!(
                    "{} must be a single word: '{}'",
                    label, name
                )));
            }
        }

        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

impl fmt::Display for RaceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id, self.given_name, self.family_name, self.finish
        )
    }
}
