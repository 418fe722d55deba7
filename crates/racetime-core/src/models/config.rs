//! Application configuration

use super::RaceEntry;
use crate::{Error, PreciseTime, Result};
use serde::{Deserialize, Serialize};

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: String,
    pub color: bool,
    pub log_level: String,
    pub seed_sample_data: bool,
    pub seed_entries: Vec<SeedEntry>,
}

/// A racer registered at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedEntry {
    pub given_name: String,
    pub family_name: String,
    pub finish: PreciseTime,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Validation(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        for seed in &self.seed_entries {
            seed.validate()?;
        }

        Ok(())
    }

    /// Entries to register at startup, empty when seeding is off.
    pub fn seeds(&self) -> &[SeedEntry] {
        if self.seed_sample_data {
            &self.seed_entries
        } else {
            &[]
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            color: true,
            log_level: "info".to_string(),
            seed_sample_data: true,
            seed_entries: SeedEntry::samples(),
        }
    }
}

impl SeedEntry {
    fn sample(given_name: &str, family_name: &str, finish_ms: u64) -> Self {
        Self {
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            finish: PreciseTime::from_units(finish_ms),
        }
    }

    pub fn validate(&self) -> Result<()> {
        RaceEntry::validate_names(&self.given_name, &self.family_name)
    }

    /// The demo field the console starts with.
    pub fn samples() -> Vec<Self> {
        vec![
            Self::sample("Adam", "Grażynowicz", 9_296_345), // 2:34:56:345
            Self::sample("Robert", "Adamowicz", 4_965_111), // 1:22:45:111
            Self::sample("Tomek", "Robertowicz", 3_388_234), // 0:56:28:234
            Self::sample("Agata", "Tomkowska", 9_922_526), // 2:45:22:526
            Self::sample("Joanna", "Agacka", 3_671_264), // 1:01:11:264
            Self::sample("Grażyna", "Joan", 2_133_253), // 0:35:33:253
        ]
    }
}
