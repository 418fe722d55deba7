//! Interactive read loop

use racetime_core::models::SeedEntry;
use std::io::{self, BufRead, Write};

use crate::command::{Command, USAGE};
use crate::printer::{Printer, Tone};
use crate::registry::{Comparison, Outcome, RaceRegistry, RegistryError};

pub struct Console<R: BufRead, W: Write> {
    input: R,
    printer: Printer<W>,
    registry: RaceRegistry,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            printer: Printer::new(output, color),
            registry: RaceRegistry::new(),
        }
    }

    pub fn registry(&self) -> &RaceRegistry {
        &self.registry
    }

    /// Register starting entries before the loop runs.
    pub fn seed(&mut self, seeds: &[SeedEntry]) -> io::Result<()> {
        if let Err(e) = self.registry.seed(seeds) {
            tracing::warn!("Failed to seed sample data: {}", e);
            self.printer
                .line(Tone::Error, &format!("Could not load sample data: {}", e))?;
        }
        Ok(())
    }

    /// Run until `CLS` or end of input. Command failures are reported and
    /// never end the loop; only output errors do.
    pub fn run(&mut self) -> io::Result<()> {
        self.banner()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("Input closed");
                break;
            }

            // Undecodable bytes become U+FFFD and fail as an unknown command
            let line = String::from_utf8_lossy(&buf);
            if !self.execute(line.trim_end())? {
                break;
            }
        }

        self.printer.line(Tone::Banner, "Quitting...")?;
        self.printer.blank()
    }

    /// Handle one line; returns false once the loop should stop.
    pub fn execute(&mut self, line: &str) -> io::Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                tracing::warn!("Rejected instruction '{}': {}", line, e);
                self.printer.line(Tone::Error, &e.to_string())?;
                return Ok(true);
            }
        };

        tracing::debug!("Executing {}", command.keyword());
        match command {
            Command::Add {
                given_name,
                family_name,
                finish,
            } => {
                if let Err(e) = self.registry.add_parsed(&given_name, &family_name, &finish) {
                    self.report(e)?;
                }
            }
            Command::Del(id) => {
                if let Err(e) = self.registry.remove(id) {
                    self.report(e)?;
                }
            }
            Command::Cmp(first, second) => match self.registry.compare(first, second) {
                Ok(comparison) => self.print_comparison(&comparison)?,
                Err(e) => self.report(e)?,
            },
            Command::Lst => {
                for entry in self.registry.entries() {
                    self.printer.line(Tone::Listing, &entry.to_string())?;
                }
            }
            Command::Hlp => self.printer.lines(Tone::Help, USAGE)?,
            Command::Cls => return Ok(false),
        }

        Ok(true)
    }

    fn banner(&mut self) -> io::Result<()> {
        self.printer.lines(
            Tone::Banner,
            [
                "Welcome!",
                "In this app you can add Marathon members and compare their times.",
                "To do so, you can use the following commands:",
            ],
        )?;
        self.printer.blank()?;
        self.printer.lines(Tone::Help, USAGE)?;
        self.printer.blank()
    }

    fn report(&mut self, error: RegistryError) -> io::Result<()> {
        tracing::warn!("Command failed: {}", error);
        let message = match &error {
            RegistryError::NotFound(_) => "ID was not found".to_string(),
            RegistryError::Invalid(e) if e.is_time_error() => {
                format!("Invalid finish time: {}", e)
            }
            RegistryError::Invalid(e) => e.to_string(),
        };
        self.printer.line(Tone::Error, &message)
    }

    fn print_comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        let first = comparison.first.full_name();
        let second = comparison.second.full_name();
        let gap = &comparison.gap;

        let (relation, adjective) = match comparison.outcome {
            Outcome::Same => {
                return self.printer.line(
                    Tone::Comparison,
                    &format!(
                        "{}'s finish time was indifferent from {}'s",
                        first, second
                    ),
                );
            }
            Outcome::Faster => ("before", "faster"),
            Outcome::Slower => ("after", "slower"),
        };

        self.printer.line(
            Tone::Comparison,
            &format!("{} finished {} {}", first, relation, second),
        )?;
        self.printer.line(
            Tone::Comparison,
            &format!(
                "They were {} by {} hour(s), {} minute(s), {} second(s) and {} millisecond(s)",
                adjective,
                gap.hour(),
                gap.minute(),
                gap.second(),
                gap.millisecond()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console<&'static [u8], Vec<u8>> {
        Console::new(&b""[..], Vec::new(), false)
    }

    fn output(console: Console<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(console.printer.into_inner()).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let mut console = console();
        assert!(console.execute("ADD Ola Nowak 3:00:00:001").unwrap());
        assert!(console.execute("lst").unwrap());

        assert_eq!(console.registry().len(), 1);
        assert_eq!(output(console), "1 Ola Nowak 03:00:00:001\n");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let input: &'static [u8] = b"\xff\xfe bad\nADD Ola Nowak 1:00:00:000\nCLS\n";
        let mut console = Console::new(input, Vec::new(), false);
        console.run().unwrap();

        assert_eq!(console.registry().len(), 1);
        let text = output(console);
        assert!(text.contains("The following instruction was not recognized"));
        assert!(text.contains("Quitting..."));
    }

    #[test]
    fn test_cls_stops() {
        let mut console = console();
        assert!(!console.execute("CLS").unwrap());
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut console = console();
        assert!(console.execute("").unwrap());
        assert_eq!(output(console), "");
    }

    #[test]
    fn test_invalid_time_is_reported() {
        let mut console = console();
        console.execute("ADD Ola Nowak 24:00:00:000").unwrap();
        console.execute("ADD Ola Nowak 12:30").unwrap();

        assert!(console.registry().is_empty());
        let text = output(console);
        assert!(text.contains("Invalid finish time: Value out of range: hour = 24"));
        assert!(text.contains("Invalid finish time: Invalid format '12:30'"));
    }

    #[test]
    fn test_delete_missing_id() {
        let mut console = console();
        console.seed(&[]).unwrap();
        console.execute("DEL 1").unwrap();
        assert_eq!(output(console), "ID was not found\n");
    }

    #[test]
    fn test_compare_messages() {
        let mut console = console();
        console.seed(&SeedEntry::samples()).unwrap();
        console.execute("CMP 3 2").unwrap();

        let text = output(console);
        assert!(text.contains("Tomek Robertowicz finished before Robert Adamowicz"));
        assert!(text.contains(
            "They were faster by 0 hour(s), 26 minute(s), 16 second(s) and 877 millisecond(s)"
        ));
    }

    #[test]
    fn test_compare_same_entry() {
        let mut console = console();
        console.seed(&SeedEntry::samples()).unwrap();
        console.execute("CMP 1 1").unwrap();

        assert_eq!(
            output(console),
            "Adam Grażynowicz's finish time was indifferent from Adam Grażynowicz's\n"
        );
    }
}
