//! Command tree nodes, assembly, validation and dispatch
//!
//! A [`Command`] either routes to sub-commands or is an executable leaf.
//! Callers assemble the tree top-down, call [`Command::check`] once on the
//! root, and then treat the tree as read-only configuration.
//!
//! ```text
//! git                      # router: run defaults to help
//! ├── status               # leaf with an explicit run action
//! └── checkout (branch)    # leaf with a dynamic param
//!     options:
//!       -b                 # static option
//! ```

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::logging::Pretty;
use crate::{CommandError, CommandOption, DynamicParam, ExecContext, Result};

/// Action executed when the dispatcher resolves input to a command
pub(crate) type RunFn = Arc<dyn Fn(&mut ExecContext<'_>) -> anyhow::Result<()> + Send + Sync>;

/// How a command behaves when run
#[derive(Clone, Default)]
enum RunAction {
    /// Nothing assigned yet
    #[default]
    Unset,
    /// Caller-supplied action
    Explicit(RunFn),
    /// Print help for the command, assigned by `check` to routers
    Help,
}

/// Observable run state of a command, without the action itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Unset,
    Explicit,
    Help,
}

impl RunAction {
    fn state(&self) -> RunState {
        match self {
            RunAction::Unset => RunState::Unset,
            RunAction::Explicit(_) => RunState::Explicit,
            RunAction::Help => RunState::Help,
        }
    }
}

impl fmt::Debug for RunAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.state(), f)
    }
}

/// A node in the command tree
#[derive(Debug, Clone, Default)]
pub struct Command {
    name: String,
    description: String,
    commands: Vec<Command>,
    options: Vec<CommandOption>,
    dynamic_param: Option<DynamicParam>,
    run: RunAction,
}

impl Command {
    /// Create a command with no children, options or action
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Append sub-commands in the order given
    ///
    /// Nothing is validated here and duplicate names are kept; see
    /// [`Command::check`].
    pub fn add_command<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        self.commands.extend(commands);
    }

    /// Builder form of [`Command::add_command`] for a single child
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn add_option(&mut self, option: CommandOption) {
        self.options.push(option);
    }

    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_dynamic_param(mut self, param: DynamicParam) -> Self {
        self.dynamic_param = Some(param);
        self
    }

    /// Set the action executed when this command is dispatched
    pub fn set_run<F>(&mut self, run: F)
    where
        F: Fn(&mut ExecContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.run = RunAction::Explicit(Arc::new(run));
    }

    pub fn with_run<F>(mut self, run: F) -> Self
    where
        F: Fn(&mut ExecContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.set_run(run);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    pub fn dynamic_param(&self) -> Option<&DynamicParam> {
        self.dynamic_param.as_ref()
    }

    pub fn run_state(&self) -> RunState {
        self.run.state()
    }

    /// A leaf has no sub-commands and must carry its own action
    pub fn is_leaf(&self) -> bool {
        self.commands.is_empty()
    }

    /// First direct child with the given name
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Validate the whole tree rooted at this command
    ///
    /// The walk is depth-first and pre-order and stops at the first error.
    /// Routers without an action get help as their run action; that is the
    /// only change made to the tree.
    pub fn check(&mut self) -> Result<()> {
        self.check_node()?;
        tracing::trace!("validated command tree: {}", Pretty(&*self));
        Ok(())
    }

    fn check_node(&mut self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CommandError::MissingCommandName);
        }
        if self.description.is_empty() {
            return Err(CommandError::MissingCommandDescription {
                command: self.name.clone(),
            });
        }
        tracing::debug!(
            command = %self.name,
            children = self.commands.len(),
            options = self.options.len(),
            "checking command"
        );

        if let RunAction::Unset = self.run {
            if self.commands.is_empty() {
                return Err(CommandError::MissingRun {
                    command: self.name.clone(),
                });
            }
            self.run = RunAction::Help;
        }

        if let Some(param) = &self.dynamic_param {
            param.check()?;
        }
        for option in &self.options {
            option.check()?;
        }

        self.warn_duplicate_children();
        for command in &mut self.commands {
            command.check_node()?;
        }
        Ok(())
    }

    fn warn_duplicate_children(&self) {
        let mut seen = HashSet::new();
        for command in &self.commands {
            if !seen.insert(command.name.as_str()) {
                tracing::warn!(
                    parent = %self.name,
                    command = %command.name,
                    "duplicate sub-command name; lookups resolve to the first one"
                );
            }
        }
    }

    /// Execute this command's action
    ///
    /// Routers without an explicit action print help for the context's
    /// command. A leaf without an action fails with
    /// [`CommandError::MissingRun`].
    pub fn run(&self, ctx: &mut ExecContext<'_>) -> anyhow::Result<()> {
        match &self.run {
            RunAction::Explicit(run) => run(ctx),
            RunAction::Help => Self::run_help(ctx),
            RunAction::Unset if !self.commands.is_empty() => Self::run_help(ctx),
            RunAction::Unset => Err(CommandError::MissingRun {
                command: self.name.clone(),
            }
            .into()),
        }
    }

    fn run_help(ctx: &mut ExecContext<'_>) -> anyhow::Result<()> {
        let command = ctx.command();
        command.write_help(ctx.output())?;
        Ok(())
    }
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

#[derive(Serialize)]
struct CommandSnapshot<'a> {
    name: &'a str,
    description: &'a str,
    run: RunState,
    #[serde(skip_serializing_if = "Option::is_none")]
    dynamic_param: Option<&'a DynamicParam>,
    #[serde(skip_serializing_if = "is_empty")]
    options: &'a [CommandOption],
    #[serde(skip_serializing_if = "is_empty")]
    commands: &'a [Command],
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        CommandSnapshot {
            name: &self.name,
            description: &self.description,
            run: self.run.state(),
            dynamic_param: self.dynamic_param.as_ref(),
            options: &self.options,
            commands: &self.commands,
        }
        .serialize(serializer)
    }
}
