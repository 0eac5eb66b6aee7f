//! Output sinks for the text reports emitted by hosts and capabilities.

use colored::Colorize;

use crate::config::OutputConfig;

/// Write-only destination for report lines.
pub trait Sink {
    fn emit(&mut self, line: &str);
}

// ============================================================================
// Console
// ============================================================================

/// Prints each line to stdout with a fixed indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Console {
    indent: usize,
    color: bool,
}

impl Console {
    pub fn new(indent: usize, color: bool) -> Self {
        Self { indent, color }
    }

    /// Prints an empty line, used to separate report groups.
    pub fn blank(&mut self) {
        println!();
    }

    /// Prints a highlighted header or footer line.
    pub fn banner(&mut self, text: &str) {
        let pad = " ".repeat(self.indent);
        if self.color {
            println!("{pad}{}", text.bold());
        } else {
            println!("{pad}{text}");
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(2, true)
    }
}

impl From<&OutputConfig> for Console {
    fn from(config: &OutputConfig) -> Self {
        Self::new(config.indent, config.color)
    }
}

impl Sink for Console {
    fn emit(&mut self, line: &str) {
        let pad = " ".repeat(self.indent);
        if self.color {
            println!("{pad}{}", line.cyan());
        } else {
            println!("{pad}{line}");
        }
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// Collects lines in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Sink for Transcript {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_keeps_emission_order() {
        let mut transcript = Transcript::new();
        transcript.emit("one");
        transcript.emit("two");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines(), ["one", "two"]);
        assert!(transcript.contains("tw"));
        assert!(!transcript.contains("three"));
    }

    #[test]
    fn console_takes_output_settings() {
        let config = OutputConfig {
            indent: 4,
            color: false,
            banner: true,
        };
        assert_eq!(Console::from(&config), Console::new(4, false));
        assert_eq!(Console::default(), Console::new(2, true));
    }
}
