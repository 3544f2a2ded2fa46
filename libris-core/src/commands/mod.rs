//! Library commands
//!
//! Every command goes through two phases: its argument string is validated
//! once when the command is constructed, then the command is executed
//! against a [`Catalogue`]. A constructed command is always valid, so
//! `execute` never re-checks its own arguments.
//!
//! Output is written to an injected sink rather than to stdout directly.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::catalogue::Catalogue;
use crate::error::{LibraryError, Result};
use crate::loader::LineSource;

pub mod add;
pub mod group;
pub mod list;
pub mod remove;
pub mod search;

pub use add::AddCmd;
pub use group::{Bucket, GroupCmd, GroupMode};
pub use list::{ListCmd, ListMode};
pub use remove::{RemoveCmd, RemoveMode};
pub use search::SearchCmd;

/// Printed whenever a command needs entries and the catalogue has none
pub const EMPTY_CATALOGUE_MESSAGE: &str = "The library has no book entries.";

/// Names of the available commands, as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Add,
    List,
    Search,
    Remove,
    Group,
}

impl CommandType {
    pub const ALL: [CommandType; 5] = [
        CommandType::Add,
        CommandType::List,
        CommandType::Search,
        CommandType::Remove,
        CommandType::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Add => "ADD",
            CommandType::List => "LIST",
            CommandType::Search => "SEARCH",
            CommandType::Remove => "REMOVE",
            CommandType::Group => "GROUP",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandType {
    type Err = LibraryError;

    /// Exact, case-sensitive match on the command name
    fn from_str(s: &str) -> Result<Self> {
        CommandType::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| LibraryError::UnknownCommand(s.to_string()))
    }
}

/// Two-phase contract shared by all commands
pub trait LibraryCommand: Default {
    /// Which command this is
    fn command_type(&self) -> CommandType;

    /// Validate `argument` and keep whatever `execute` needs from it.
    ///
    /// Returns `Ok(false)` for a present but unacceptable value and
    /// [`LibraryError::MissingArgument`] when no argument was supplied.
    fn parse_arguments(&mut self, argument: Option<&str>) -> Result<bool>;

    /// Run the command. Only called on instances whose arguments parsed.
    fn execute<S: LineSource>(
        &self,
        catalogue: &mut Catalogue<S>,
        out: &mut dyn Write,
    ) -> Result<()>;
}

/// Build a command and validate its argument in one step
pub(crate) fn construct<C: LibraryCommand>(argument: Option<&str>) -> Result<C> {
    let mut command = C::default();
    if command.parse_arguments(argument)? {
        debug!(command = %command.command_type(), ?argument, "Arguments accepted");
        Ok(command)
    } else {
        warn!(command = %command.command_type(), ?argument, "Arguments rejected");
        Err(LibraryError::InvalidCommandArgument {
            command: command.command_type(),
            argument: argument.unwrap_or_default().to_string(),
        })
    }
}

/// Unwrap a raw argument or fail with a null-reference error
pub(crate) fn require_argument<'a>(argument: Option<&'a str>, what: &'static str) -> Result<&'a str> {
    argument.ok_or(LibraryError::MissingArgument { what })
}

/// A validated command ready to run
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCmd),
    List(ListCmd),
    Search(SearchCmd),
    Remove(RemoveCmd),
    Group(GroupCmd),
}

impl Command {
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add(cmd) => cmd.command_type(),
            Command::List(cmd) => cmd.command_type(),
            Command::Search(cmd) => cmd.command_type(),
            Command::Remove(cmd) => cmd.command_type(),
            Command::Group(cmd) => cmd.command_type(),
        }
    }

    pub fn execute<S: LineSource>(
        &self,
        catalogue: &mut Catalogue<S>,
        out: &mut dyn Write,
    ) -> Result<()> {
        debug!(command = %self.command_type(), entries = catalogue.len(), "Executing");
        match self {
            Command::Add(cmd) => cmd.execute(catalogue, out),
            Command::List(cmd) => cmd.execute(catalogue, out),
            Command::Search(cmd) => cmd.execute(catalogue, out),
            Command::Remove(cmd) => cmd.execute(catalogue, out),
            Command::Group(cmd) => cmd.execute(catalogue, out),
        }
    }
}
