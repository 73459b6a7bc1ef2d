//! Error types for command tree validation
//!
//! Every error here is raised by a `check` pass over a caller-built tree.
//! Validation stops at the first one found.

use thiserror::Error;

/// Result type alias for command tree operations
pub type Result<T> = std::result::Result<T, CommandError>;

/// Structural errors found while validating a command tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// An option was declared without a name
    #[error("option name required")]
    MissingOptionName,

    /// An option was declared without a description
    #[error("option description required: {option}")]
    MissingOptionDescription { option: String },

    /// A dynamic parameter has no flag label
    #[error("dynamic param flag required")]
    MissingParamFlag,

    /// A dynamic parameter has no description
    #[error("dynamic param description required: ({flag})")]
    MissingParamDescription { flag: String },

    /// A dynamic parameter has no completion function
    #[error("dynamic param completion function required: ({flag})")]
    MissingCompletion { flag: String },

    /// A command was declared without a name
    #[error("command name required")]
    MissingCommandName,

    /// A command was declared without a description
    #[error("command description required: {command}")]
    MissingCommandDescription { command: String },

    /// A leaf command has neither a run action nor sub-commands
    #[error("command run function required: {command} has no sub-commands to fall back on")]
    MissingRun { command: String },
}
