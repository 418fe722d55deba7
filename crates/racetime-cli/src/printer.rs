//! Colored line output

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// What a line is for; picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Help,
    Comparison,
    Listing,
    Error,
}

impl Tone {
    pub fn color(&self) -> Color {
        match self {
            Tone::Banner => Color::DarkCyan,
            Tone::Help => Color::Cyan,
            Tone::Comparison => Color::Magenta,
            Tone::Listing => Color::Green,
            Tone::Error => Color::Red,
        }
    }
}

pub struct Printer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if self.color {
            queue!(
                self.out,
                SetForegroundColor(tone.color()),
                Print(text),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()
    }

    pub fn lines<'a>(
        &mut self,
        tone: Tone,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> io::Result<()> {
        for line in lines {
            self.line(tone, line)?;
        }
        Ok(())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut printer = Printer::new(Vec::new(), false);
        printer.line(Tone::Listing, "1 Adam Nowak 01:00:00:000").unwrap();
        printer.blank().unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(output, "1 Adam Nowak 01:00:00:000\n\n");
    }

    #[test]
    fn test_colored_output() {
        let mut printer = Printer::new(Vec::new(), true);
        printer.line(Tone::Error, "ID was not found").unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert!(output.starts_with('\u{1b}'));
        assert!(output.contains("ID was not found"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(Tone::Error.color(), Color::Red);
        assert_eq!(Tone::Comparison.color(), Color::Magenta);
    }
}
