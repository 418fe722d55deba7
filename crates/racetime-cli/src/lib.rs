//! RaceTime console library
//!
//! The read loop, command parsing and race registry behind the `racetime`
//! binary, exposed as a library for testing.

pub mod command;
pub mod console;
pub mod printer;
pub mod registry;

pub use command::{Command, CommandError};
pub use console::Console;
pub use printer::{Printer, Tone};
pub use registry::{Comparison, Outcome, RaceRegistry, RegistryError};
