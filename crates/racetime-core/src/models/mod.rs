pub mod config;
pub mod entry;

pub use config::{Config, SeedEntry};
pub use entry::RaceEntry;
