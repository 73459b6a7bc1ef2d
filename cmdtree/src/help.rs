//! Contextual help rendering
//!
//! Help is one level deep. A router lists its direct sub-commands; a leaf
//! shows its dynamic parameter and options.
//!
//! ```text
//! git:
//!   status	Show the working tree status
//!   checkout	Switch branches
//! ```

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;

use crate::Command;

/// Moves the cursor to the start of the line and erases it
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// Deepest indent a style may request
pub const MAX_INDENT: usize = 16;

/// Errors loading a [`HelpStyle`]
#[derive(Debug, Error)]
pub enum HelpStyleError {
    /// The document is not valid YAML for a style
    #[error("Failed to parse help style: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// The requested indent is deeper than [`MAX_INDENT`]
    #[error("Help style indent {indent} exceeds maximum of {max}")]
    IndentTooLarge { indent: usize, max: usize },
}

/// Presentation settings for help output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpStyle {
    /// Emit [`CLEAR_LINE`] first so help overwrites an in-progress prompt
    pub clear_line: bool,
    /// Spaces before each entry; options are indented twice as deep
    pub indent: usize,
    /// Placed between an entry's name and its description
    pub separator: String,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            clear_line: true,
            indent: 2,
            separator: "\t".to_string(),
        }
    }
}

impl HelpStyle {
    /// Parse a style from YAML, filling unset fields from the defaults
    ///
    /// Rejects an indent above [`MAX_INDENT`].
    pub fn from_yaml(content: &str) -> Result<Self, HelpStyleError> {
        let style: Self = serde_yaml_ng::from_str(content)?;
        if style.indent > MAX_INDENT {
            return Err(HelpStyleError::IndentTooLarge {
                indent: style.indent,
                max: MAX_INDENT,
            });
        }
        Ok(style)
    }
}

impl Command {
    /// Print help for this command to stdout
    pub fn help(&self) {
        let stdout = io::stdout();
        self.print_help(&mut stdout.lock());
    }

    /// Write and flush help, logging instead of failing
    fn print_help(&self, out: &mut dyn Write) {
        if let Err(e) = self.write_help(out).and_then(|_| out.flush()) {
            tracing::warn!(command = %self.name(), "failed to write help: {}", e);
        }
    }

    /// Render help with the default style
    pub fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        self.write_help_with(out, &HelpStyle::default())
    }

    /// Render help with an explicit style
    pub fn write_help_with(&self, out: &mut dyn Write, style: &HelpStyle) -> io::Result<()> {
        // Styles built in code skip from_yaml's bound
        let pad = " ".repeat(style.indent.min(MAX_INDENT));
        let sep = &style.separator;

        if style.clear_line {
            write!(out, "{CLEAR_LINE}")?;
        }
        writeln!(out, "{}:", self.name())?;

        if !self.is_leaf() {
            for command in self.commands() {
                writeln!(out, "{pad}{}{sep}{}", command.name(), command.description())?;
            }
            return Ok(());
        }

        if let Some(param) = self.dynamic_param() {
            writeln!(out, "{pad}({}){sep}{}", param.flag(), param.description())?;
        }
        if !self.options().is_empty() {
            writeln!(out, "{pad}options:")?;
            for option in self.options() {
                writeln!(out, "{pad}{pad}{}{sep}{}", option.name(), option.description())?;
            }
        }
        Ok(())
    }
}
