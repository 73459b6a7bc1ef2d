//! # cmdtree
//!
//! Declarative command trees for interactive command-line tools.
//!
//! Callers assemble a hierarchy of [`Command`]s. Each command owns its
//! sub-commands, static [`CommandOption`]s and at most one
//! [`DynamicParam`] whose values are completed at runtime. A single call to
//! [`Command::check`] on the root validates the whole tree and turns every
//! router without an action into a self-describing menu.
//!
//! ## Modules
//!
//! - [`command`] - Tree nodes, assembly, validation and dispatch
//! - [`option`] - Static flags
//! - [`dynamic_param`] - Runtime-completed argument slots
//! - [`help`] - One-level help rendering and its style settings
//! - [`context`] - Context handed to run actions
//! - [`error`] - Validation errors
//! - [`logging`] - YAML formatting for tracing output
//!
//! ## Example
//!
//! ```
//! use cmdtree::{Command, CommandOption, DynamicParam, ExecContext};
//!
//! let mut root = Command::new("git", "Version control");
//! root.add_command([
//!     Command::new("status", "Show the working tree status")
//!         .with_option(CommandOption::new("-s", "Short format"))
//!         .with_run(|_ctx| Ok(())),
//!     Command::new("checkout", "Switch branches")
//!         .with_dynamic_param(
//!             DynamicParam::new("branch", "Branch to switch to")
//!                 .with_completion(|input: &str| -> Vec<String> {
//!                     ["main", "develop"]
//!                         .iter()
//!                         .filter(|b| b.starts_with(input))
//!                         .map(|b| b.to_string())
//!                         .collect()
//!                 }),
//!         )
//!         .with_run(|_ctx| Ok(())),
//! ]);
//!
//! root.check()?;
//!
//! // The root has no action of its own, so running it prints its help.
//! let mut out = Vec::new();
//! let mut ctx = ExecContext::new(&root, &mut out);
//! root.run(&mut ctx)?;
//! assert!(String::from_utf8(out)?.contains("checkout"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod command;
pub mod context;
pub mod dynamic_param;
pub mod error;
pub mod help;
pub mod logging;
pub mod option;

pub use command::{Command, RunState};
pub use context::ExecContext;
pub use dynamic_param::{Complete, DynamicParam};
pub use error::{CommandError, Result};
pub use help::{HelpStyle, HelpStyleError, CLEAR_LINE, MAX_INDENT};
pub use logging::Pretty;
pub use option::CommandOption;
