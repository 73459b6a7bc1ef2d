//! Execution context handed to run actions
//!
//! The dispatcher that parses user input owns how an [`ExecContext`] gets
//! filled in. This crate only needs the resolved command and somewhere to
//! write output.

use std::fmt;
use std::io::Write;

use crate::Command;

/// Context passed to a command's run action
pub struct ExecContext<'a> {
    /// The command the dispatcher resolved user input to
    command: &'a Command,

    /// Positional arguments left over after resolution
    args: Vec<String>,

    /// Destination for anything the action prints
    output: &'a mut dyn Write,
}

impl<'a> ExecContext<'a> {
    pub fn new(command: &'a Command, output: &'a mut dyn Write) -> Self {
        Self {
            command,
            args: Vec::new(),
            output,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn command(&self) -> &'a Command {
        self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}

impl fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecContext")
            .field("command", &self.command.name())
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
